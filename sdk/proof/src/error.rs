//! Format errors
//!
//! Every failure in this crate is a malformed-input error: a missing proof
//! component, a wrong array shape, a value that is not an unsigned integer,
//! or a bad hex argument. Range checks against the field modulus are
//! intentionally absent; the verifier contract rejects out-of-field values.

use thiserror::Error;

/// Malformed proof, public-signal, or hex-argument input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid Groth16 proof format: missing `{0}`")]
    MissingComponent(&'static str),

    #[error("proof component `{component}` has the wrong shape: {reason}")]
    Shape {
        component: &'static str,
        reason: String,
    },

    #[error("`{0}` is not an unsigned 256-bit integer")]
    Integer(String),

    #[error("public signals must be an array")]
    NotAnArray,

    #[error("expected {expected} public signals, got {got}")]
    SignalCount { expected: usize, got: usize },

    #[error("invalid {label} hex string: {reason}")]
    Hex { label: String, reason: String },
}
