//! zkpass Proof SDK
//!
//! Data-contract logic shared by every zkpass client: parsing snarkjs-style
//! Groth16 proof JSON, parsing public-signal arrays, and mapping both into
//! the argument shape expected by the on-chain Solidity verifiers.
//!
//! ```text
//! snarkjs proof.json ──parse──► Groth16Proof ──to_calldata──► ProofCalldata
//!                                                  │
//!                                 G2 coordinate swap happens here
//! ```
//!
//! Everything in this crate is pure data transformation; no network access.

pub mod bytes;
pub mod calldata;
pub mod error;
pub mod parse;

pub use bytes::to_bytes32;
pub use calldata::ProofCalldata;
pub use error::FormatError;
pub use parse::{Groth16Proof, parse_proof, parse_public_signals};
