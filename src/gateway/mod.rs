//! Typed gateway to the artwork registry contract
//!
//! Exposes the contract's four read methods and the staged write protocol:
//! fees are fetched from the contract, every mutating call is first simulated
//! with identical calldata and attached value, and only then submitted. The
//! gateway performs no caching; callers trigger a store resync after a
//! confirmed write.

use crate::artwork::Artwork;
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use alloy::{
    contract::{Error as ContractError, SolCallBuilder},
    network::EthereumWallet,
    primitives::{Address, TxHash, U256},
    providers::{PendingTransactionConfig, Provider, ProviderBuilder},
    sol,
    transports::{
        http::{reqwest::Client, Http},
        RpcError,
    },
};
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use url::Url;

sol! {
    #[sol(rpc)]
    contract ArtRegistry {
        function getArtworkCount() external view returns (uint256 count);
        function artworks(uint256 index) external view
            returns (string title, string artist, string nftUrl, uint256 likes);
        function registrationFee() external view returns (uint256 fee);
        function likeFee() external view returns (uint256 fee);
        function registerArtwork(string title, string artist, string nftUrl) external payable;
        function likeArtwork(uint256 id) external payable;
    }
}

/// Inputs of a registration, as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub title: String,
    pub artist: String,
    pub nft_url: String,
}

impl RegisterForm {
    /// All three fields are required before any network call is made
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.title.is_empty() || self.artist.is_empty() || self.nft_url.is_empty() {
            return Err(RegistryError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }
        Ok(())
    }
}

/// Handle to a submitted, not yet confirmed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxHandle(pub TxHash);

/// Access to the artwork registry, read and staged-write operations
///
/// Write stages are split out so the transaction workflow can drive its
/// state machine through them; implementations must guarantee that a
/// simulate/submit pair for the same arguments builds identical calldata
/// and attached value.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Number of registered artworks
    async fn count(&self) -> Result<u64, RegistryError>;

    /// Artwork at a sequential index in `[0, count)`
    async fn artwork_at(&self, index: u64) -> Result<Artwork, RegistryError>;

    /// Fee the contract charges for a registration, smallest denomination
    async fn registration_fee(&self) -> Result<U256, RegistryError>;

    /// Fee the contract charges for a like, smallest denomination
    async fn like_fee(&self) -> Result<U256, RegistryError>;

    /// Non-mutating pre-flight of `registerArtwork` with the fee attached
    async fn simulate_register(&self, form: &RegisterForm, value: U256)
        -> Result<(), RegistryError>;

    /// Broadcast `registerArtwork` with the fee attached
    async fn submit_register(
        &self,
        form: &RegisterForm,
        value: U256,
    ) -> Result<TxHandle, RegistryError>;

    /// Non-mutating pre-flight of `likeArtwork` with the fee attached
    async fn simulate_like(&self, id: u64, value: U256) -> Result<(), RegistryError>;

    /// Broadcast `likeArtwork` with the fee attached
    async fn submit_like(&self, id: u64, value: U256) -> Result<TxHandle, RegistryError>;

    /// Wait for a submitted transaction to be included. No internal timeout;
    /// callers bound the wait if they need to.
    async fn confirm(&self, tx: TxHandle) -> Result<(), RegistryError>;
}

/// Alloy-backed gateway to the deployed registry contract
pub struct ArtRegistryGateway<P> {
    instance: ArtRegistry::ArtRegistryInstance<Http<Client>, P>,
}

/// Gateway over a plain HTTP provider; serves reads and simulations only
pub fn connect_read_only(
    config: &RegistryConfig,
) -> Result<ArtRegistryGateway<impl Provider<Http<Client>>>, RegistryError> {
    let url = parse_rpc_url(&config.rpc_url)?;
    let address = parse_contract_address(&config.contract_address)?;
    let provider = ProviderBuilder::new().on_http(url);
    Ok(ArtRegistryGateway::new(address, provider))
}

/// Gateway whose provider signs and submits transactions with the given key
pub fn connect_with_signer(
    config: &RegistryConfig,
    signer: PrivateKeySigner,
) -> Result<ArtRegistryGateway<impl Provider<Http<Client>>>, RegistryError> {
    let url = parse_rpc_url(&config.rpc_url)?;
    let address = parse_contract_address(&config.contract_address)?;
    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new().wallet(wallet).on_http(url);
    Ok(ArtRegistryGateway::new(address, provider))
}

fn parse_rpc_url(rpc_url: &str) -> Result<Url, RegistryError> {
    Url::parse(rpc_url).map_err(|e| RegistryError::InvalidConfig(e.to_string()))
}

fn parse_contract_address(address: &str) -> Result<Address, RegistryError> {
    address
        .parse::<Address>()
        .map_err(|e| RegistryError::InvalidConfig(e.to_string()))
}

impl<P: Provider<Http<Client>>> ArtRegistryGateway<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            instance: ArtRegistry::new(address, provider),
        }
    }

    /// Contract address this gateway is bound to
    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    // Single construction path per method, shared by simulation and
    // submission, so both always carry identical calldata and value.
    fn register_call(
        &self,
        form: &RegisterForm,
        value: U256,
    ) -> SolCallBuilder<Http<Client>, &P, ArtRegistry::registerArtworkCall> {
        self.instance
            .registerArtwork(
                form.title.clone(),
                form.artist.clone(),
                form.nft_url.clone(),
            )
            .value(value)
    }

    fn like_call(
        &self,
        id: u64,
        value: U256,
    ) -> SolCallBuilder<Http<Client>, &P, ArtRegistry::likeArtworkCall> {
        self.instance.likeArtwork(U256::from(id)).value(value)
    }
}

#[async_trait]
impl<P> RegistryClient for ArtRegistryGateway<P>
where
    P: Provider<Http<Client>> + Send + Sync + 'static,
{
    async fn count(&self) -> Result<u64, RegistryError> {
        let ret = self
            .instance
            .getArtworkCount()
            .call()
            .await
            .map_err(read_error)?;
        u64::try_from(ret.count).map_err(|_| RegistryError::Rpc("count out of range".to_string()))
    }

    async fn artwork_at(&self, index: u64) -> Result<Artwork, RegistryError> {
        let ret = self
            .instance
            .artworks(U256::from(index))
            .call()
            .await
            .map_err(read_error)?;
        let likes = u64::try_from(ret.likes)
            .map_err(|_| RegistryError::Rpc("like counter out of range".to_string()))?;
        Ok(Artwork {
            id: index,
            title: ret.title,
            artist: ret.artist,
            nft_url: ret.nftUrl,
            likes,
        })
    }

    async fn registration_fee(&self) -> Result<U256, RegistryError> {
        let ret = self
            .instance
            .registrationFee()
            .call()
            .await
            .map_err(read_error)?;
        Ok(ret.fee)
    }

    async fn like_fee(&self) -> Result<U256, RegistryError> {
        let ret = self.instance.likeFee().call().await.map_err(read_error)?;
        Ok(ret.fee)
    }

    async fn simulate_register(
        &self,
        form: &RegisterForm,
        value: U256,
    ) -> Result<(), RegistryError> {
        self.register_call(form, value)
            .call()
            .await
            .map(|_| ())
            .map_err(simulation_error)
    }

    async fn submit_register(
        &self,
        form: &RegisterForm,
        value: U256,
    ) -> Result<TxHandle, RegistryError> {
        // the pending-transaction builder borrows the call builder
        let call = self.register_call(form, value);
        let pending = call.send().await.map_err(submission_error)?;
        Ok(TxHandle(*pending.tx_hash()))
    }

    async fn simulate_like(&self, id: u64, value: U256) -> Result<(), RegistryError> {
        self.like_call(id, value)
            .call()
            .await
            .map(|_| ())
            .map_err(simulation_error)
    }

    async fn submit_like(&self, id: u64, value: U256) -> Result<TxHandle, RegistryError> {
        let call = self.like_call(id, value);
        let pending = call.send().await.map_err(submission_error)?;
        Ok(TxHandle(*pending.tx_hash()))
    }

    async fn confirm(&self, tx: TxHandle) -> Result<(), RegistryError> {
        let watcher = self
            .instance
            .provider()
            .watch_pending_transaction(PendingTransactionConfig::new(tx.0))
            .await
            .map_err(|e| RegistryError::Rpc(e.to_string()))?;
        watcher
            .await
            .map_err(|e| RegistryError::Rpc(e.to_string()))?;
        Ok(())
    }
}

/// Map a read failure: transport problems mean the node is unreachable,
/// everything else is an RPC-level failure.
fn read_error(err: ContractError) -> RegistryError {
    match err {
        ContractError::TransportError(RpcError::Transport(kind)) => {
            RegistryError::NodeUnavailable(kind.to_string())
        }
        other => RegistryError::Rpc(other.to_string()),
    }
}

/// A failed pre-flight means the real call would have been rejected
fn simulation_error(err: ContractError) -> RegistryError {
    RegistryError::SimulationRejected(err.to_string())
}

fn submission_error(err: ContractError) -> RegistryError {
    match err {
        ContractError::TransportError(RpcError::Transport(kind)) => {
            RegistryError::NodeUnavailable(kind.to_string())
        }
        other => RegistryError::Submission(other.to_string()),
    }
}

#[cfg(test)]
pub mod testing;
