//! Recording test double for the registry client
//!
//! Backs the workflow and store tests: every gateway invocation is recorded
//! with its full arguments so tests can assert ordering, argument identity
//! between simulation and submission, and the absence of calls.

use super::{RegisterForm, RegistryClient, TxHandle};
use crate::artwork::Artwork;
use crate::error::RegistryError;
use alloy::primitives::{TxHash, U256};
use async_trait::async_trait;
use std::sync::Mutex;

/// One recorded gateway invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Count,
    ArtworkAt(u64),
    RegistrationFee,
    LikeFee,
    SimulateRegister { form: RegisterForm, value: U256 },
    SubmitRegister { form: RegisterForm, value: U256 },
    SimulateLike { id: u64, value: U256 },
    SubmitLike { id: u64, value: U256 },
    Confirm,
}

/// In-memory registry with scriptable failures
#[derive(Default)]
pub struct MockRegistry {
    pub artworks: Mutex<Vec<Artwork>>,
    pub registration_fee: U256,
    pub like_fee: U256,
    calls: Mutex<Vec<GatewayCall>>,
    fail_reads: Mutex<Option<RegistryError>>,
    fail_fees: Mutex<Option<RegistryError>>,
    fail_simulation: Mutex<Option<RegistryError>>,
    fail_submission: Mutex<Option<RegistryError>>,
    hang_confirmation: bool,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            registration_fee: U256::from(100u64),
            like_fee: U256::from(10u64),
            ..Self::default()
        }
    }

    /// Pre-populate the registry; ids are reassigned sequentially
    pub fn with_artworks(artworks: Vec<(&str, &str, &str, u64)>) -> Self {
        let registry = Self::new();
        {
            let mut stored = registry.artworks.lock().unwrap();
            for (id, (title, artist, nft_url, likes)) in artworks.into_iter().enumerate() {
                stored.push(Artwork {
                    id: id as u64,
                    title: title.to_string(),
                    artist: artist.to_string(),
                    nft_url: nft_url.to_string(),
                    likes,
                });
            }
        }
        registry
    }

    /// Fail `count` and `artwork_at`, leaving fee reads untouched
    pub fn fail_reads_with(self, err: RegistryError) -> Self {
        *self.fail_reads.lock().unwrap() = Some(err);
        self
    }

    /// Fail the fee read operations
    pub fn fail_fees_with(self, err: RegistryError) -> Self {
        *self.fail_fees.lock().unwrap() = Some(err);
        self
    }

    pub fn fail_simulation_with(self, err: RegistryError) -> Self {
        *self.fail_simulation.lock().unwrap() = Some(err);
        self
    }

    pub fn fail_submission_with(self, err: RegistryError) -> Self {
        *self.fail_submission.lock().unwrap() = Some(err);
        self
    }

    /// Make `confirm` suspend forever, for timeout tests
    pub fn hang_confirmation(mut self) -> Self {
        self.hang_confirmation = true;
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls of a kind matched by `predicate`
    pub fn calls_where<F: Fn(&GatewayCall) -> bool>(&self, predicate: F) -> Vec<GatewayCall> {
        self.calls().into_iter().filter(|c| predicate(c)).collect()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn read_gate(&self) -> Result<(), RegistryError> {
        match self.fail_reads.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fee_gate(&self) -> Result<(), RegistryError> {
        match self.fail_fees.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RegistryClient for MockRegistry {
    async fn count(&self) -> Result<u64, RegistryError> {
        self.record(GatewayCall::Count);
        self.read_gate()?;
        Ok(self.artworks.lock().unwrap().len() as u64)
    }

    async fn artwork_at(&self, index: u64) -> Result<Artwork, RegistryError> {
        self.record(GatewayCall::ArtworkAt(index));
        self.read_gate()?;
        self.artworks
            .lock()
            .unwrap()
            .get(index as usize)
            .cloned()
            .ok_or_else(|| RegistryError::Rpc(format!("no artwork at index {index}")))
    }

    async fn registration_fee(&self) -> Result<U256, RegistryError> {
        self.record(GatewayCall::RegistrationFee);
        self.fee_gate()?;
        Ok(self.registration_fee)
    }

    async fn like_fee(&self) -> Result<U256, RegistryError> {
        self.record(GatewayCall::LikeFee);
        self.fee_gate()?;
        Ok(self.like_fee)
    }

    async fn simulate_register(
        &self,
        form: &RegisterForm,
        value: U256,
    ) -> Result<(), RegistryError> {
        self.record(GatewayCall::SimulateRegister {
            form: form.clone(),
            value,
        });
        match self.fail_simulation.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn submit_register(
        &self,
        form: &RegisterForm,
        value: U256,
    ) -> Result<TxHandle, RegistryError> {
        self.record(GatewayCall::SubmitRegister {
            form: form.clone(),
            value,
        });
        if let Some(err) = self.fail_submission.lock().unwrap().clone() {
            return Err(err);
        }
        let mut artworks = self.artworks.lock().unwrap();
        let id = artworks.len() as u64;
        artworks.push(Artwork {
            id,
            title: form.title.clone(),
            artist: form.artist.clone(),
            nft_url: form.nft_url.clone(),
            likes: 0,
        });
        Ok(TxHandle(TxHash::ZERO))
    }

    async fn simulate_like(&self, id: u64, value: U256) -> Result<(), RegistryError> {
        self.record(GatewayCall::SimulateLike { id, value });
        match self.fail_simulation.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn submit_like(&self, id: u64, value: U256) -> Result<TxHandle, RegistryError> {
        self.record(GatewayCall::SubmitLike { id, value });
        if let Some(err) = self.fail_submission.lock().unwrap().clone() {
            return Err(err);
        }
        let mut artworks = self.artworks.lock().unwrap();
        let artwork = artworks
            .get_mut(id as usize)
            .ok_or_else(|| RegistryError::Rpc(format!("no artwork at index {id}")))?;
        artwork.likes += 1;
        Ok(TxHandle(TxHash::ZERO))
    }

    async fn confirm(&self, _tx: TxHandle) -> Result<(), RegistryError> {
        self.record(GatewayCall::Confirm);
        if self.hang_confirmation {
            std::future::pending::<()>().await;
        }
        Ok(())
    }
}
