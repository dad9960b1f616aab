//! Facade
//!
//! Single-config entry point: resolves the provider once and hands out pass
//! clients that share it.

use std::sync::Arc;

use ethers::providers::{Http, Provider};
use ethers::types::Address;
use tracing::info;

use crate::balance::BalancePass;
use crate::error::PassError;
use crate::identity::IdentityPass;
use crate::pass::PassConfig;
use crate::provider::{ProviderSource, resolve_provider};
use crate::reputation::ReputationPass;

#[derive(Debug, Clone)]
pub struct ZkPassConfig {
    pub chain_id: u64,
    pub provider: Option<ProviderSource>,
    pub balance_pass_address: Option<Address>,
}

#[derive(Debug)]
pub struct ZkPass {
    chain_id: u64,
    provider: Arc<Provider<Http>>,
    balance_pass: BalancePass,
}

impl ZkPass {
    pub fn new(config: ZkPassConfig) -> Result<Self, PassError> {
        if config.chain_id == 0 {
            return Err(PassError::Config("ZkPass: chain id must be set".into()));
        }

        let provider = resolve_provider(config.provider)?;

        let balance_pass = BalancePass::new(PassConfig {
            chain_id: config.chain_id,
            provider: Some(ProviderSource::Handle(provider.clone())),
            address: config.balance_pass_address,
        })?;

        info!(chain_id = config.chain_id, "zkpass client initialized");

        Ok(Self {
            chain_id: config.chain_id,
            provider,
            balance_pass,
        })
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The resolved provider, shared by every pass client built here.
    pub fn provider(&self) -> Arc<Provider<Http>> {
        self.provider.clone()
    }

    pub fn balance_pass(&self) -> &BalancePass {
        &self.balance_pass
    }

    /// Build an identity-pass client against `address`, reusing the
    /// resolved provider.
    pub fn identity_pass(&self, address: Address) -> Result<IdentityPass, PassError> {
        IdentityPass::new(PassConfig {
            chain_id: self.chain_id,
            provider: Some(ProviderSource::Handle(self.provider.clone())),
            address: Some(address),
        })
    }

    /// Build the (not yet available) reputation-pass client.
    pub fn reputation_pass(&self) -> ReputationPass {
        ReputationPass::new(PassConfig {
            chain_id: self.chain_id,
            provider: None,
            address: None,
        })
    }
}
