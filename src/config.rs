//! Client configuration
//!
//! Fixed coordinates of the artwork registry deployment: the RPC endpoint,
//! the required network identity and the contract address. Defaults target
//! the ZenChain Testnet deployment; a JSON file can override them.

use crate::artwork::{resolve_url, Artwork};
use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Public JSON-RPC endpoint of the ZenChain Testnet
pub const ZENCHAIN_RPC_URL: &str = "https://zenchain-testnet.api.onfinality.io/public";

/// Chain id of the ZenChain Testnet; writes require the wallet to be on it
pub const ZENCHAIN_CHAIN_ID: u64 = 8408;

/// Deployed address of the artwork registry contract
pub const REGISTRY_ADDRESS: &str = "0xF7C6DB53Dc3f4e92a12DA8590F4DE040B2820EE5";

/// Public IPFS gateway used to resolve `ipfs://` artwork links
pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Ticker of the network's native token, used when formatting fees
pub const TOKEN_SYMBOL: &str = "ZTC";

/// Registry client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// JSON-RPC HTTPS endpoint
    pub rpc_url: String,
    /// Required network identity for write operations
    pub chain_id: u64,
    /// On-chain address of the registry contract
    pub contract_address: String,
    /// Gateway prefix for `ipfs://` link resolution
    pub ipfs_gateway: String,
    /// Optional bound on the confirmation wait, in seconds.
    /// `None` waits indefinitely, matching the original behavior.
    pub confirm_timeout_secs: Option<u64>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            rpc_url: ZENCHAIN_RPC_URL.to_string(),
            chain_id: ZENCHAIN_CHAIN_ID,
            contract_address: REGISTRY_ADDRESS.to_string(),
            ipfs_gateway: IPFS_GATEWAY.to_string(),
            confirm_timeout_secs: None,
        }
    }
}

impl RegistryConfig {
    /// Load configuration overrides from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let data = fs::read_to_string(path.as_ref())
            .map_err(|e| RegistryError::InvalidConfig(e.to_string()))?;
        serde_json::from_str(&data).map_err(|e| RegistryError::InvalidConfig(e.to_string()))
    }

    /// Confirmation wait bound as a `Duration`, if one is configured
    pub fn confirm_timeout(&self) -> Option<Duration> {
        self.confirm_timeout_secs.map(Duration::from_secs)
    }

    /// URL suitable for rendering an artwork as a link or image
    ///
    /// `ipfs://` references are rewritten to the configured gateway;
    /// ordinary URLs pass through unchanged.
    pub fn artwork_url(&self, artwork: &Artwork) -> String {
        resolve_url(&artwork.nft_url, &self.ipfs_gateway)
    }
}
