//! Deployment verification
//!
//! Standalone diagnostic: queries the bytecode stored at the contract
//! address and reports whether anything is deployed there. Independent of
//! the transaction workflow.

use crate::error::RegistryError;
use alloy::{
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    transports::RpcError,
};
use url::Url;

/// Outcome of a deployment check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentStatus {
    Deployed,
    NotDeployed,
}

impl DeploymentStatus {
    /// `NotDeployed` iff the returned code is the empty-code sentinel
    /// (`eth_getCode` answers `"0x"` for an address without a contract).
    pub fn from_code(code: &[u8]) -> Self {
        if code.is_empty() {
            DeploymentStatus::NotDeployed
        } else {
            DeploymentStatus::Deployed
        }
    }
}

/// Query whether bytecode exists at `address` on the network behind `rpc_url`
pub async fn check_deployment(
    rpc_url: &str,
    address: &str,
) -> Result<DeploymentStatus, RegistryError> {
    let url = Url::parse(rpc_url).map_err(|e| RegistryError::InvalidConfig(e.to_string()))?;
    let address = address
        .parse::<Address>()
        .map_err(|e| RegistryError::InvalidConfig(e.to_string()))?;

    let provider = ProviderBuilder::new().on_http(url);
    let code = provider.get_code_at(address).await.map_err(|e| match e {
        RpcError::Transport(kind) => RegistryError::NodeUnavailable(kind.to_string()),
        other => RegistryError::Rpc(other.to_string()),
    })?;

    log::debug!("Contract code length: {}", code.len());
    Ok(DeploymentStatus::from_code(&code))
}
