//! Identity pass client
//!
//! Wraps the identity-pass contract: holders prove membership in an
//! issuer's identity set. Reads are keyed by issuer; the write path submits
//! a Groth16 proof through `proveIdentity` with public signals
//! `[root, issuerHash, nullifierHash]`.
//!
//! Availability is a construction-time tag: on chains where the contract is
//! not deployed yet, build the client with [`IdentityPass::not_yet_available`]
//! and every operation rejects with a not-implemented error instead of a
//! confusing transport failure.

use ethers::abi::parse_abi;
use ethers::signers::LocalWallet;
use ethers::types::{Address, Filter, TransactionReceipt, U256};
use serde_json::Value;
use tracing::info;

use zkpass_proof::{parse_proof, parse_public_signals, to_bytes32};

use crate::error::{PassError, classify_chain_error};
use crate::events::{IDENTITY_PASS_USED_SIGNATURE, IdentityPassUsed, Subscription, decode_identity_pass_used, watch_logs};
use crate::pass::{Availability, PassConfig, PassCore};

const IDENTITY_PASS_ABI: &[&str] = &[
    "function getCurrentRoot(bytes32) view returns (uint256)",
    "function isNullifierUsed(bytes32) view returns (bool)",
    "function proveIdentity(uint256[2], uint256[2][2], uint256[2], uint256[3])",
    "event IdentityPassUsed(address indexed caller, bytes32 indexed nullifier, bytes32 indexed issuer, uint256 root)",
];

/// Public signals for the identity pass: `[root, issuerHash, nullifierHash]`.
pub const IDENTITY_PASS_SIGNALS: usize = 3;

enum Inner {
    Ready(PassCore),
    NotYetAvailable,
}

pub struct IdentityPass {
    inner: Inner,
}

impl IdentityPass {
    /// Build a functional client against a deployed identity-pass contract.
    pub fn new(config: PassConfig) -> Result<Self, PassError> {
        let abi = parse_abi(IDENTITY_PASS_ABI).map_err(|err| {
            PassError::Config(format!("IdentityPass: invalid built-in ABI: {err}"))
        })?;
        Ok(Self {
            inner: Inner::Ready(PassCore::new("IdentityPass", config, abi)?),
        })
    }

    /// Build a stub client for chains without a deployed contract; every
    /// operation returns [`PassError::NotImplemented`].
    pub fn not_yet_available() -> Self {
        Self {
            inner: Inner::NotYetAvailable,
        }
    }

    pub fn availability(&self) -> Availability {
        match self.inner {
            Inner::Ready(_) => Availability::Implemented,
            Inner::NotYetAvailable => Availability::NotYetAvailable,
        }
    }

    pub fn address(&self) -> Option<Address> {
        match &self.inner {
            Inner::Ready(core) => core.address,
            Inner::NotYetAvailable => None,
        }
    }

    fn core(&self, operation: &'static str) -> Result<&PassCore, PassError> {
        match &self.inner {
            Inner::Ready(core) => Ok(core),
            Inner::NotYetAvailable => Err(PassError::NotImplemented(operation)),
        }
    }

    // ---- Read methods ------------------------------------------------------

    /// Current Merkle root for an issuer's identity set.
    pub async fn get_current_root(&self, issuer_hex: &str) -> Result<U256, PassError> {
        let core = self.core("IdentityPass::get_current_root")?;
        let issuer = to_bytes32("issuer", issuer_hex)?;
        let contract = core.read_contract()?;
        let call = contract
            .method::<_, U256>("getCurrentRoot", issuer)
            .map_err(|err| classify_chain_error("encode getCurrentRoot()", err))?;
        call.call()
            .await
            .map_err(|err| classify_chain_error("read getCurrentRoot()", err))
    }

    /// Whether a nullifier hash has already been consumed.
    pub async fn is_nullifier_used(&self, nullifier_hex: &str) -> Result<bool, PassError> {
        let core = self.core("IdentityPass::is_nullifier_used")?;
        let nullifier = to_bytes32("nullifier", nullifier_hex)?;
        let contract = core.read_contract()?;
        let call = contract
            .method::<_, bool>("isNullifierUsed", nullifier)
            .map_err(|err| classify_chain_error("encode isNullifierUsed()", err))?;
        call.call()
            .await
            .map_err(|err| classify_chain_error("read isNullifierUsed()", err))
    }

    // ---- Write methods -----------------------------------------------------

    /// Submit a Groth16 identity proof and wait for inclusion.
    ///
    /// `public_signals` must be exactly `[root, issuerHash, nullifierHash]`;
    /// the order is passed through to the contract unchanged.
    pub async fn submit_proof(
        &self,
        signer: Option<&LocalWallet>,
        proof: &Value,
        public_signals: &Value,
    ) -> Result<TransactionReceipt, PassError> {
        let core = self.core("IdentityPass::submit_proof")?;
        let contract = core.write_contract(signer)?;

        let calldata = parse_proof(proof)?.to_calldata();
        let signals = parse_public_signals(public_signals, Some(IDENTITY_PASS_SIGNALS))?;
        let inputs = [signals[0], signals[1], signals[2]];

        info!(pass = "IdentityPass", "submitting proof transaction");

        let call = contract
            .method::<_, ()>("proveIdentity", (calldata.a, calldata.b, calldata.c, inputs))
            .map_err(|err| classify_chain_error("encode proveIdentity()", err))?;
        let pending = call
            .send()
            .await
            .map_err(|err| classify_chain_error("submit proveIdentity()", err))?;
        let receipt = pending
            .await
            .map_err(|err| classify_chain_error("await proveIdentity() inclusion", err))?
            .ok_or_else(|| PassError::ChainCall {
                context: "transaction dropped before inclusion".into(),
                source: None,
            })?;

        info!(
            pass = "IdentityPass",
            tx_hash = ?receipt.transaction_hash,
            "proof transaction confirmed"
        );

        Ok(receipt)
    }

    // ---- Events ------------------------------------------------------------

    /// Subscribe to `IdentityPassUsed` events on this contract.
    pub fn on_identity_pass_used<F>(&self, callback: F) -> Result<Subscription, PassError>
    where
        F: Fn(IdentityPassUsed) + Send + 'static,
    {
        let core = self.core("IdentityPass::on_identity_pass_used")?;
        let address = core.require_address()?;
        let filter = Filter::new()
            .address(address)
            .event(IDENTITY_PASS_USED_SIGNATURE);
        Ok(watch_logs(
            core.provider.clone(),
            filter,
            "IdentityPassUsed",
            decode_identity_pass_used,
            callback,
        ))
    }
}
