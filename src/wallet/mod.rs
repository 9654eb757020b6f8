//! Wallet session management
//!
//! The wallet is an injected capability that holds key material and signs
//! transactions on request; this crate only asks it for accounts and for the
//! network identity it is connected to. Wallet state is read at the moment
//! of explicit user actions and not observed afterwards.

use crate::chain;
use crate::error::RegistryError;
use crate::workflow::StatusReporter;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

/// Injected wallet capability
///
/// Absence of the capability is fatal to all write functionality; see
/// [`connect`].
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet for its accounts, prompting the user if needed
    async fn request_accounts(&self) -> Result<Vec<String>, RegistryError>;

    /// Network identity the wallet is currently connected to
    async fn chain_id(&self) -> Result<u64, RegistryError>;
}

/// An established wallet connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSession {
    /// Address of the connected account
    pub address: String,
    /// Network identity reported by the provider at connection time
    pub connected_chain_id: u64,
}

impl WalletSession {
    /// Abbreviated address for display, `0x1234...abcd`
    pub fn short_address(&self) -> String {
        if self.address.len() <= 10 {
            return self.address.clone();
        }
        format!(
            "{}...{}",
            &self.address[..6],
            &self.address[self.address.len() - 4..]
        )
    }
}

/// Establish a wallet session from the injected capability
///
/// Connecting succeeds even when the wallet is on the wrong network; the
/// mismatch is reported, and writes are blocked later by the network guard.
pub async fn connect(
    provider: Option<&dyn WalletProvider>,
    required_chain_id: u64,
    reporter: &dyn StatusReporter,
) -> Result<WalletSession, RegistryError> {
    let provider = provider.ok_or(RegistryError::WalletUnavailable)?;

    let accounts = provider.request_accounts().await?;
    let address = accounts
        .into_iter()
        .next()
        .ok_or_else(|| RegistryError::WalletConnection("no accounts returned".to_string()))?;
    let connected_chain_id = provider.chain_id().await?;

    if let Err(err) = chain::require_network(connected_chain_id, required_chain_id) {
        reporter.report_error(&err);
    }

    log::info!("Wallet connected: {address} (chain {connected_chain_id})");
    Ok(WalletSession {
        address,
        connected_chain_id,
    })
}

/// Wallet backed by a local signing key
///
/// Stands in for a browser wallet extension in native contexts such as
/// tests and tooling.
pub struct LocalWallet {
    signer: PrivateKeySigner,
    chain_id: u64,
}

impl LocalWallet {
    pub fn new(signer: PrivateKeySigner, chain_id: u64) -> Self {
        Self { signer, chain_id }
    }

    /// Fresh random key, connected to the given network
    pub fn random(chain_id: u64) -> Self {
        Self::new(PrivateKeySigner::random(), chain_id)
    }

    /// The underlying signer, for constructing a submitting gateway
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

#[async_trait]
impl WalletProvider for LocalWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, RegistryError> {
        Ok(vec![self.signer.address().to_string()])
    }

    async fn chain_id(&self) -> Result<u64, RegistryError> {
        Ok(self.chain_id)
    }
}
