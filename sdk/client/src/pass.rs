//! Shared pass-client plumbing
//!
//! Every pass client wraps the same core: a chain id, a resolved provider,
//! an optional contract address, and the contract ABI. The lifecycle is a
//! small state machine:
//!
//! ```text
//! Unconfigured (no address)  ── any chain-touching call ──► Config error
//! ReadOnly     (address set) ── read methods succeed; writes need a signer
//! Writable     (per write call, signer supplied)           ──► transaction
//! ```
//!
//! Signers are per-call: the client never remembers that one was supplied.

use std::sync::Arc;

use ethers::abi::Abi;
use ethers::contract::Contract;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::Address;
use tracing::warn;

use crate::error::PassError;
use crate::provider::{ProviderSource, resolve_provider};

/// Whether the contract behind a pass client exists on-chain yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Implemented,
    NotYetAvailable,
}

/// Construction-time configuration shared by all pass clients.
#[derive(Debug, Clone)]
pub struct PassConfig {
    /// Target chain id; must be nonzero.
    pub chain_id: u64,
    /// Transport source; required for any chain interaction.
    pub provider: Option<ProviderSource>,
    /// Contract address; may be set later-bound (methods fail until set).
    pub address: Option<Address>,
}

pub(crate) type ReadContract = Contract<Provider<Http>>;
pub(crate) type WriteContract = Contract<SignerMiddleware<Provider<Http>, LocalWallet>>;

/// Immutable per-client state captured at construction.
#[derive(Debug)]
pub(crate) struct PassCore {
    pub(crate) pass: &'static str,
    pub(crate) chain_id: u64,
    pub(crate) provider: Arc<Provider<Http>>,
    pub(crate) address: Option<Address>,
    pub(crate) abi: Abi,
}

impl PassCore {
    pub(crate) fn new(
        pass: &'static str,
        config: PassConfig,
        abi: Abi,
    ) -> Result<Self, PassError> {
        if config.chain_id == 0 {
            return Err(PassError::Config(format!("{pass}: chain id must be set")));
        }

        let provider = resolve_provider(config.provider)?;

        if config.address.is_none() {
            warn!(
                pass,
                "no contract address configured; chain-touching methods will fail until one is set"
            );
        }

        Ok(Self {
            pass,
            chain_id: config.chain_id,
            provider,
            address: config.address,
            abi,
        })
    }

    pub(crate) fn require_address(&self) -> Result<Address, PassError> {
        self.address.ok_or_else(|| {
            PassError::Config(format!("{}: contract address is not set", self.pass))
        })
    }

    /// Contract bound to the read-only provider.
    pub(crate) fn read_contract(&self) -> Result<ReadContract, PassError> {
        let address = self.require_address()?;
        Ok(Contract::new(address, self.abi.clone(), self.provider.clone()))
    }

    /// Contract bound to a signing middleware for this write call.
    ///
    /// Address is checked before the signer so an unconfigured client fails
    /// with a config error no matter how it is called.
    pub(crate) fn write_contract(
        &self,
        signer: Option<&LocalWallet>,
    ) -> Result<WriteContract, PassError> {
        let address = self.require_address()?;
        let wallet = signer
            .ok_or(PassError::SignerRequired)?
            .clone()
            .with_chain_id(self.chain_id);
        let middleware = SignerMiddleware::new((*self.provider).clone(), wallet);
        Ok(Contract::new(address, self.abi.clone(), Arc::new(middleware)))
    }
}
