//! zkpass Client SDK
//!
//! EVM client for the zkpass family of zero-knowledge "pass" contracts.
//! Every interesting computation (proof verification, Merkle roots,
//! nullifier accounting) lives in the contracts; this crate builds the
//! calls, translates prover output into verifier calldata, reads on-chain
//! state, and submits proofs as transactions.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        ZkPass facade                      │
//! │   ┌─────────────┐  ┌──────────────┐  ┌────────────────┐   │
//! │   │ BalancePass │  │ IdentityPass │  │ ReputationPass │   │
//! │   │ (deployed)  │  │ (deployed)   │  │ (not yet)      │   │
//! │   └──────┬──────┘  └──────┬───────┘  └────────────────┘   │
//! │          │   reads / submit_proof / events                │
//! │          ▼                ▼                               │
//! │   ethers JSON-RPC provider (injected handle or URL)       │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Proof and public-signal parsing lives in [`zkpass_proof`], re-exported
//! here as [`proof`].

pub mod balance;
pub mod error;
pub mod events;
pub mod facade;
pub mod identity;
pub mod pass;
pub mod provider;
pub mod reputation;

pub use balance::{BALANCE_PASS_SIGNALS, BalancePass};
pub use error::PassError;
pub use events::{AccessGranted, EventDecodeError, IdentityPassUsed, Subscription};
pub use facade::{ZkPass, ZkPassConfig};
pub use identity::{IDENTITY_PASS_SIGNALS, IdentityPass};
pub use pass::{Availability, PassConfig};
pub use provider::{ProviderSource, resolve_provider};
pub use reputation::ReputationPass;

pub use zkpass_proof as proof;
