//! Error taxonomy for the registry client
//!
//! One closed set of error kinds so callers and tests can discriminate
//! failures programmatically instead of matching on message text.

use thiserror::Error;

/// Errors surfaced by the registry client
///
/// Every variant is `Clone` so workflow states can carry the failure that
/// produced them. `WalletUnavailable` is fatal to all write functionality
/// for the session; every other kind is recoverable by re-invoking the
/// operation after correcting the underlying condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Wallet provider is not available")]
    WalletUnavailable,

    #[error("Wallet connection error: {0}")]
    WalletConnection(String),

    #[error("Please connect your wallet first")]
    NotConnected,

    #[error("Wrong network: connected to chain {current}, switch to chain {required}")]
    WrongNetwork { current: u64, required: u64 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Node unavailable: {0}")]
    NodeUnavailable(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Simulation rejected: {0}")]
    SimulationRejected(String),

    #[error("Submission error: {0}")]
    Submission(String),

    #[error("Transaction not confirmed within {secs}s")]
    ConfirmationTimeout { secs: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
