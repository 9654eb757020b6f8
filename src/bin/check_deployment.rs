//! Standalone check that the artwork registry contract is deployed
//!
//! Queries the bytecode at the configured address and reports the outcome
//! on the console. Exits non-zero when nothing is deployed or the network
//! is unreachable.

use std::process::ExitCode;
use zenart::config::RegistryConfig;
use zenart::verify::{check_deployment, DeploymentStatus};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let config = RegistryConfig::default();
    match check_deployment(&config.rpc_url, &config.contract_address).await {
        Ok(DeploymentStatus::Deployed) => {
            println!("Contract is deployed at: {}", config.contract_address);
            ExitCode::SUCCESS
        }
        Ok(DeploymentStatus::NotDeployed) => {
            eprintln!(
                "No contract deployed at {} (chain {})",
                config.contract_address, config.chain_id
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("RPC or network error: {err}");
            ExitCode::FAILURE
        }
    }
}
