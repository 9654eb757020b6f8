//! ZenChain artwork registry client
//!
//! Client library for an append-only artwork registry maintained by a smart
//! contract on the ZenChain Testnet. The core is the transaction workflow:
//! validate the wallet's network identity, fetch the dynamic fee, simulate
//! the mutating call, submit it, wait for confirmation, and resync the local
//! cache with on-chain truth. Everything presentational (layout, chart
//! rendering, the wallet extension itself) lives outside this crate and is
//! reached through the traits at the seams.
//!
//! # Example
//!
//! ```rust
//! use zenart::artwork::Artwork;
//! use zenart::{stats, RegistryConfig};
//!
//! let artworks = vec![Artwork {
//!     id: 0,
//!     title: "Sunrise".to_string(),
//!     artist: "Zahra".to_string(),
//!     nft_url: "ipfs://QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".to_string(),
//!     likes: 3,
//! }];
//!
//! let chart = stats::project(&artworks);
//! assert_eq!(chart.labels, vec!["Sunrise"]);
//! assert_eq!(chart.values, vec![3]);
//!
//! // ipfs:// links resolve to the configured gateway before rendering
//! let config = RegistryConfig::default();
//! assert!(config.artwork_url(&artworks[0]).starts_with("https://ipfs.io/ipfs/"));
//! ```

pub mod artwork;
pub mod chain;
pub mod config;
pub mod error;
pub mod gateway;
pub mod stats;
pub mod store;
pub mod verify;
pub mod wallet;
pub mod workflow;

// Re-export commonly used types
pub use artwork::Artwork;
pub use config::RegistryConfig;
pub use error::RegistryError;
pub use gateway::{
    connect_read_only, connect_with_signer, ArtRegistryGateway, RegisterForm, RegistryClient,
    TxHandle,
};
pub use stats::{ChartController, ChartData, ChartRenderer};
pub use store::ArtworkStore;
pub use verify::DeploymentStatus;
pub use wallet::{WalletProvider, WalletSession};
pub use workflow::{LogReporter, StatusReporter, TransactionWorkflow, WorkflowState};
