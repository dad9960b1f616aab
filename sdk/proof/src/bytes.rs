//! bytes32 argument normalization
//!
//! Contract methods take nullifiers and issuer ids as `bytes32`. Callers
//! supply `0x`-prefixed hex of any length up to 32 bytes; values are
//! left-zero-padded. Validation happens here, before any network call.

use crate::error::FormatError;

/// Validate a `0x`-prefixed hex string and left-pad it to 32 bytes.
///
/// Odd nibble counts are accepted: `"0x1"` becomes `0x00…01`. `label` names
/// the argument in the error (`"nullifier"`, `"issuer"`, ...).
pub fn to_bytes32(label: &str, value: &str) -> Result<[u8; 32], FormatError> {
    let bad = |reason: &str| FormatError::Hex {
        label: label.to_string(),
        reason: reason.to_string(),
    };

    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| bad("expected 0x-prefixed hex"))?;

    if digits.is_empty() {
        return Err(bad("empty hex string"));
    }
    if digits.len() > 64 {
        return Err(bad("longer than 32 bytes"));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad("contains non-hex characters"));
    }

    let padded = format!("{digits:0>64}");
    let raw = hex::decode(&padded).map_err(|_| bad("contains non-hex characters"))?;

    let mut out = [0u8; 32];
    out.copy_from_slice(&raw);
    Ok(out)
}
