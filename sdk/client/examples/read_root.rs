//! Read the balance-pass root and threshold from a node.
//!
//! ```text
//! ZKPASS_RPC=http://127.0.0.1:8545 \
//! ZKPASS_BALANCE_PASS=0x... \
//! cargo run -p zkpass-client --example read_root
//! ```

use anyhow::{Context, Result};
use ethers::types::Address;
use zkpass_client::{ProviderSource, ZkPass, ZkPassConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rpc = std::env::var("ZKPASS_RPC").unwrap_or_else(|_| "http://127.0.0.1:8545".into());
    let chain_id: u64 = std::env::var("ZKPASS_CHAIN_ID")
        .unwrap_or_else(|_| "31337".into())
        .parse()
        .context("ZKPASS_CHAIN_ID must be a decimal chain id")?;
    let address: Address = std::env::var("ZKPASS_BALANCE_PASS")
        .context("set ZKPASS_BALANCE_PASS to the balance-pass contract address")?
        .parse()
        .context("ZKPASS_BALANCE_PASS must be a 0x-prefixed address")?;

    let client = ZkPass::new(ZkPassConfig {
        chain_id,
        provider: Some(ProviderSource::Url(rpc)),
        balance_pass_address: Some(address),
    })?;

    let root = client.balance_pass().get_root().await?;
    let threshold = client.balance_pass().get_threshold().await?;

    println!("current root:       {root}");
    println!("required threshold: {threshold}");

    Ok(())
}
