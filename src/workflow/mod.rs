//! Transaction workflow
//!
//! The state machine at the heart of the client: network guard, fee fetch,
//! pre-flight simulation, submission, confirmation wait and store resync,
//! in that order. Stateless between invocations; nothing is retried, every
//! failure is surfaced and requires a new user-initiated attempt.

use crate::chain;
use crate::config::{RegistryConfig, TOKEN_SYMBOL};
use crate::error::RegistryError;
use crate::gateway::{RegisterForm, RegistryClient, TxHandle};
use crate::store::ArtworkStore;
use crate::wallet::WalletSession;
use alloy::primitives::utils::format_ether;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Sink for human-readable status and error strings
///
/// Consumed by an external presentation layer; the default implementation
/// forwards to the `log` macros.
pub trait StatusReporter: Send + Sync {
    fn report(&self, status: &str);

    fn report_error(&self, error: &RegistryError) {
        self.report(&format!("Error: {error}"));
    }
}

/// StatusReporter backed by the `log` macros
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl StatusReporter for LogReporter {
    fn report(&self, status: &str) {
        log::info!("{status}");
    }

    fn report_error(&self, error: &RegistryError) {
        log::error!("{error}");
    }
}

/// Observable workflow state
///
/// `Failed` is reachable from every state between `Validating` and
/// `Syncing`; the machine always returns to `Idle` afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Validating,
    FeeFetch,
    Simulate,
    Submit,
    Confirm,
    Syncing,
    Failed(RegistryError),
}

/// Orchestrates register and like transactions
///
/// No mutual exclusion: concurrent invocations proceed independently and
/// both trigger a resync; the last resync to complete wins.
pub struct TransactionWorkflow {
    client: Arc<dyn RegistryClient>,
    store: Arc<ArtworkStore>,
    reporter: Arc<dyn StatusReporter>,
    state: watch::Sender<WorkflowState>,
    required_chain_id: u64,
    confirm_timeout: Option<Duration>,
}

impl TransactionWorkflow {
    pub fn new(
        client: Arc<dyn RegistryClient>,
        store: Arc<ArtworkStore>,
        reporter: Arc<dyn StatusReporter>,
        config: &RegistryConfig,
    ) -> Self {
        let (state, _) = watch::channel(WorkflowState::Idle);
        Self {
            client,
            store,
            reporter,
            state,
            required_chain_id: config.chain_id,
            confirm_timeout: config.confirm_timeout(),
        }
    }

    /// Observe state transitions
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    /// Register a new artwork
    pub async fn register(
        &self,
        session: Option<&WalletSession>,
        form: &RegisterForm,
    ) -> Result<(), RegistryError> {
        let outcome = self.run_register(session, form).await;
        self.finish(outcome)
    }

    /// Like the artwork with the given id
    pub async fn like(
        &self,
        session: Option<&WalletSession>,
        id: u64,
    ) -> Result<(), RegistryError> {
        let outcome = self.run_like(session, id).await;
        self.finish(outcome)
    }

    async fn run_register(
        &self,
        session: Option<&WalletSession>,
        form: &RegisterForm,
    ) -> Result<(), RegistryError> {
        self.validate(session)?;
        form.validate()?;

        self.enter(WorkflowState::FeeFetch);
        let fee = self.client.registration_fee().await?;
        self.reporter
            .report(&format!("Registration fee: {} {TOKEN_SYMBOL}", format_ether(fee)));

        self.enter(WorkflowState::Simulate);
        self.client.simulate_register(form, fee).await?;

        self.enter(WorkflowState::Submit);
        let tx = self.client.submit_register(form, fee).await?;

        self.enter(WorkflowState::Confirm);
        self.confirm(tx).await?;
        self.reporter.report("Artwork registered successfully");

        self.resync().await;
        Ok(())
    }

    async fn run_like(
        &self,
        session: Option<&WalletSession>,
        id: u64,
    ) -> Result<(), RegistryError> {
        self.validate(session)?;

        self.enter(WorkflowState::FeeFetch);
        let fee = self.client.like_fee().await?;

        self.enter(WorkflowState::Simulate);
        self.client.simulate_like(id, fee).await?;

        self.enter(WorkflowState::Submit);
        let tx = self.client.submit_like(id, fee).await?;

        self.enter(WorkflowState::Confirm);
        self.confirm(tx).await?;
        self.reporter.report("Artwork liked successfully");

        self.resync().await;
        Ok(())
    }

    /// Session and network checks; no network call happens before these pass
    fn validate(&self, session: Option<&WalletSession>) -> Result<(), RegistryError> {
        self.enter(WorkflowState::Validating);
        let session = session.ok_or(RegistryError::NotConnected)?;
        chain::require_network(session.connected_chain_id, self.required_chain_id)
    }

    async fn confirm(&self, tx: TxHandle) -> Result<(), RegistryError> {
        match self.confirm_timeout {
            None => self.client.confirm(tx).await,
            Some(limit) => match tokio::time::timeout(limit, self.client.confirm(tx)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(RegistryError::ConfirmationTimeout {
                    secs: limit.as_secs(),
                }),
            },
        }
    }

    /// Refresh the local view after a confirmed write
    ///
    /// A failure here is reported but does not roll back the write; the
    /// on-chain state already changed, only the local view is stale.
    async fn resync(&self) {
        self.enter(WorkflowState::Syncing);
        if let Err(err) = self.store.sync(self.client.as_ref()).await {
            self.reporter.report_error(&err);
            self.enter(WorkflowState::Failed(err));
        }
    }

    fn finish(&self, outcome: Result<(), RegistryError>) -> Result<(), RegistryError> {
        if let Err(err) = &outcome {
            self.reporter.report_error(err);
            self.enter(WorkflowState::Failed(err.clone()));
        }
        self.enter(WorkflowState::Idle);
        outcome
    }

    fn enter(&self, next: WorkflowState) {
        self.state.send_replace(next);
    }
}
