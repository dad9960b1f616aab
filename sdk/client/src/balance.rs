//! Balance pass client
//!
//! Wraps the balance-pass contract: holders prove, in zero knowledge, that
//! a committed balance clears the required threshold. Reads expose the
//! current Merkle root, the threshold, and nullifier usage; the write path
//! submits a Groth16 proof through `proveAndConsume`.

use ethers::abi::parse_abi;
use ethers::signers::LocalWallet;
use ethers::types::{Filter, TransactionReceipt, U256};
use serde_json::Value;
use tracing::info;

use zkpass_proof::{parse_proof, parse_public_signals, to_bytes32};

use crate::error::{PassError, classify_chain_error};
use crate::events::{ACCESS_GRANTED_SIGNATURE, AccessGranted, Subscription, decode_access_granted, watch_logs};
use crate::pass::{Availability, PassConfig, PassCore};

const BALANCE_PASS_ABI: &[&str] = &[
    "function currentRoot() view returns (uint256)",
    "function requiredThreshold() view returns (uint256)",
    "function nullifiers(bytes32) view returns (bool)",
    "function proveAndConsume(uint256[2], uint256[2][2], uint256[2], uint256[2])",
    "event AccessGranted(address indexed caller, bytes32 nullifier, uint256 root)",
];

/// Public signals for the balance pass: `[root, nullifierHash]`.
pub const BALANCE_PASS_SIGNALS: usize = 2;

#[derive(Debug)]
pub struct BalancePass {
    core: PassCore,
}

impl BalancePass {
    pub fn new(config: PassConfig) -> Result<Self, PassError> {
        let abi = parse_abi(BALANCE_PASS_ABI)
            .map_err(|err| PassError::Config(format!("BalancePass: invalid built-in ABI: {err}")))?;
        Ok(Self {
            core: PassCore::new("BalancePass", config, abi)?,
        })
    }

    pub fn availability(&self) -> Availability {
        Availability::Implemented
    }

    pub fn chain_id(&self) -> u64 {
        self.core.chain_id
    }

    pub fn address(&self) -> Option<ethers::types::Address> {
        self.core.address
    }

    // ---- Read methods ------------------------------------------------------

    /// Current Merkle root the contract verifies membership against.
    pub async fn get_root(&self) -> Result<U256, PassError> {
        let contract = self.core.read_contract()?;
        let call = contract
            .method::<_, U256>("currentRoot", ())
            .map_err(|err| classify_chain_error("encode currentRoot()", err))?;
        call.call()
            .await
            .map_err(|err| classify_chain_error("read currentRoot()", err))
    }

    /// Balance threshold a proof must clear.
    pub async fn get_threshold(&self) -> Result<U256, PassError> {
        let contract = self.core.read_contract()?;
        let call = contract
            .method::<_, U256>("requiredThreshold", ())
            .map_err(|err| classify_chain_error("encode requiredThreshold()", err))?;
        call.call()
            .await
            .map_err(|err| classify_chain_error("read requiredThreshold()", err))
    }

    /// Whether a nullifier hash has already been consumed.
    ///
    /// `nullifier_hex` is a `0x`-prefixed hex string, left-padded to 32
    /// bytes; malformed input fails before any network call.
    pub async fn has_nullifier_been_used(&self, nullifier_hex: &str) -> Result<bool, PassError> {
        let nullifier = to_bytes32("nullifier", nullifier_hex)?;
        let contract = self.core.read_contract()?;
        let call = contract
            .method::<_, bool>("nullifiers", nullifier)
            .map_err(|err| classify_chain_error("encode nullifiers()", err))?;
        call.call()
            .await
            .map_err(|err| classify_chain_error("read nullifiers()", err))
    }

    // ---- Write methods -----------------------------------------------------

    /// Submit a Groth16 balance proof and wait for inclusion.
    ///
    /// `proof` is snarkjs-style proof JSON (or the equivalent object);
    /// `public_signals` must be exactly `[root, nullifierHash]`. The proof
    /// is calldata-mapped (G2 coordinate swap) before submission. Replayed
    /// proofs surface as [`PassError::AlreadyUsed`].
    pub async fn submit_proof(
        &self,
        signer: Option<&LocalWallet>,
        proof: &Value,
        public_signals: &Value,
    ) -> Result<TransactionReceipt, PassError> {
        let contract = self.core.write_contract(signer)?;

        let calldata = parse_proof(proof)?.to_calldata();
        let signals = parse_public_signals(public_signals, Some(BALANCE_PASS_SIGNALS))?;
        let inputs = [signals[0], signals[1]];

        info!(pass = "BalancePass", "submitting proof transaction");

        let call = contract
            .method::<_, ()>("proveAndConsume", (calldata.a, calldata.b, calldata.c, inputs))
            .map_err(|err| classify_chain_error("encode proveAndConsume()", err))?;
        let pending = call
            .send()
            .await
            .map_err(|err| classify_chain_error("submit proveAndConsume()", err))?;
        let receipt = pending
            .await
            .map_err(|err| classify_chain_error("await proveAndConsume() inclusion", err))?
            .ok_or_else(|| PassError::ChainCall {
                context: "transaction dropped before inclusion".into(),
                source: None,
            })?;

        info!(
            pass = "BalancePass",
            tx_hash = ?receipt.transaction_hash,
            "proof transaction confirmed"
        );

        Ok(receipt)
    }

    // ---- Events ------------------------------------------------------------

    /// Subscribe to `AccessGranted` events on this contract.
    ///
    /// Must be called inside a tokio runtime; the returned handle stops the
    /// subscription via [`Subscription::unsubscribe`].
    pub fn on_access_granted<F>(&self, callback: F) -> Result<Subscription, PassError>
    where
        F: Fn(AccessGranted) + Send + 'static,
    {
        let address = self.core.require_address()?;
        let filter = Filter::new()
            .address(address)
            .event(ACCESS_GRANTED_SIGNATURE);
        Ok(watch_logs(
            self.core.provider.clone(),
            filter,
            "AccessGranted",
            decode_access_granted,
            callback,
        ))
    }
}
