//! Error taxonomy
//!
//! One error enum for every pass client. Each fallible boundary call is
//! wrapped at the point of failure with its cause attached; nothing is
//! retried and nothing is swallowed. Nullifier-reuse failures get their own
//! variant so callers can branch without string matching.

use thiserror::Error;
use zkpass_proof::FormatError;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Revert string emitted by the pass contracts when a proof is replayed.
pub(crate) const NULLIFIER_REUSE_MARKER: &str = "Nullifier already used";

#[derive(Error, Debug)]
pub enum PassError {
    /// Missing chain id, provider, or contract address.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed proof JSON, public-signal array, or hex argument.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// No usable JSON-RPC transport could be resolved.
    #[error("provider error: {0}")]
    Provider(String),

    /// A write method was invoked without a signer.
    #[error("write call requires a signer")]
    SignerRequired,

    /// The underlying read call or transaction failed.
    #[error("chain call failed: {context}")]
    ChainCall {
        context: String,
        #[source]
        source: Option<Cause>,
    },

    /// The nullifier behind this proof has already been consumed on-chain.
    #[error("pass already used: nullifier has been consumed")]
    AlreadyUsed {
        #[source]
        source: Cause,
    },

    /// The contract behind this operation is not yet deployed.
    #[error("{0} is not implemented yet")]
    NotImplemented(&'static str),
}

/// Wrap a transport/contract failure, promoting nullifier reuse to its
/// dedicated variant.
pub(crate) fn classify_chain_error<E>(context: &str, err: E) -> PassError
where
    E: std::error::Error + Send + Sync + 'static,
{
    if err.to_string().contains(NULLIFIER_REUSE_MARKER) {
        PassError::AlreadyUsed {
            source: Box::new(err),
        }
    } else {
        PassError::ChainCall {
            context: context.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullifier_reuse_gets_own_variant() {
        let err = std::io::Error::other("execution reverted: Nullifier already used");
        assert!(matches!(
            classify_chain_error("submit proveAndConsume()", err),
            PassError::AlreadyUsed { .. }
        ));
    }

    #[test]
    fn test_other_failures_stay_generic() {
        let err = std::io::Error::other("connection refused");
        let classified = classify_chain_error("read currentRoot()", err);
        assert!(matches!(classified, PassError::ChainCall { .. }));
        assert!(classified.to_string().contains("currentRoot"));
    }

    #[test]
    fn test_format_errors_convert() {
        let err: PassError = FormatError::MissingComponent("pi_a").into();
        assert!(matches!(err, PassError::Format(_)));
    }
}
