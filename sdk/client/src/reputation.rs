//! Reputation pass client (not yet available)
//!
//! Placeholder for the reputation-pass contract. The contract is not
//! deployed on any chain; every method rejects with a not-implemented
//! error by design, so callers can wire the client up today and branch on
//! [`Availability`] until the contract lands.

use ethers::signers::LocalWallet;
use ethers::types::{Address, TransactionReceipt, U256};
use serde_json::Value;

use crate::error::PassError;
use crate::pass::{Availability, PassConfig};

pub struct ReputationPass {
    chain_id: u64,
    address: Option<Address>,
}

impl ReputationPass {
    pub fn new(config: PassConfig) -> Self {
        Self {
            chain_id: config.chain_id,
            address: config.address,
        }
    }

    pub fn availability(&self) -> Availability {
        Availability::NotYetAvailable
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub async fn get_scoring_model(&self) -> Result<String, PassError> {
        Err(PassError::NotImplemented("ReputationPass::get_scoring_model"))
    }

    pub async fn get_user_score(&self, _identifier: &str) -> Result<U256, PassError> {
        Err(PassError::NotImplemented("ReputationPass::get_user_score"))
    }

    pub async fn submit_proof(
        &self,
        _signer: Option<&LocalWallet>,
        _proof: &Value,
        _public_signals: &Value,
    ) -> Result<TransactionReceipt, PassError> {
        Err(PassError::NotImplemented("ReputationPass::submit_proof"))
    }
}
