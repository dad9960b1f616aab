//! Groth16 proof & public-signal parsing
//!
//! Accepts proofs in the JSON shape emitted by snarkjs-style provers:
//!
//! ```text
//! pi_a: [Ax, Ay, 1]
//! pi_b: [[Bx1, Bx2], [By1, By2], [1, 0]]
//! pi_c: [Cx, Cy, 1]
//! ```
//!
//! Leaves may be decimal strings, `0x`-prefixed hex strings, or plain JSON
//! integers. The homogeneous third coordinate of each point is dropped; the
//! parsed proof is fixed-shape.

use ethers_core::types::U256;
use serde_json::Value;

use crate::error::FormatError;

/// A parsed Groth16 proof.
///
/// Affine coordinates only; the projective `1` terms of the prover output
/// are stripped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groth16Proof {
    /// G1 point A: `[x, y]`.
    pub pi_a: [U256; 2],
    /// G2 point B, row-major as produced by the prover: `[[x1, x2], [y1, y2]]`.
    pub pi_b: [[U256; 2]; 2],
    /// G1 point C: `[x, y]`.
    pub pi_c: [U256; 2],
}

/// Convert a single proof/signal leaf to a 256-bit unsigned integer.
///
/// Decimal strings are the snarkjs default; hex strings and native JSON
/// integers are accepted for parity with `BigInt(...)` in the reference
/// tooling.
fn leaf_to_u256(value: &Value) -> Result<U256, FormatError> {
    match value {
        Value::String(s) => {
            let parsed = if let Some(hex_digits) = s.strip_prefix("0x") {
                U256::from_str_radix(hex_digits, 16).ok()
            } else {
                U256::from_dec_str(s).ok()
            };
            parsed.ok_or_else(|| FormatError::Integer(s.clone()))
        }
        Value::Number(n) => n
            .as_u64()
            .map(U256::from)
            .ok_or_else(|| FormatError::Integer(n.to_string())),
        other => Err(FormatError::Integer(other.to_string())),
    }
}

/// Parse a G1 point: the first two coordinates of a JSON array.
fn parse_g1(component: &'static str, raw: &Value) -> Result<[U256; 2], FormatError> {
    let coords = raw.as_array().ok_or(FormatError::Shape {
        component,
        reason: "expected an array of coordinates".into(),
    })?;
    if coords.len() < 2 {
        return Err(FormatError::Shape {
            component,
            reason: format!("expected at least 2 coordinates, got {}", coords.len()),
        });
    }
    Ok([leaf_to_u256(&coords[0])?, leaf_to_u256(&coords[1])?])
}

/// Parse a G2 point: the first two rows of a row-major coordinate matrix.
fn parse_g2(component: &'static str, raw: &Value) -> Result<[[U256; 2]; 2], FormatError> {
    let rows = raw.as_array().ok_or(FormatError::Shape {
        component,
        reason: "expected an array of coordinate pairs".into(),
    })?;
    if rows.len() < 2 {
        return Err(FormatError::Shape {
            component,
            reason: format!("expected at least 2 coordinate pairs, got {}", rows.len()),
        });
    }
    Ok([
        parse_g1(component, &rows[0])?,
        parse_g1(component, &rows[1])?,
    ])
}

/// Parse a Groth16 proof JSON object.
///
/// Fails with [`FormatError::MissingComponent`] if any of `pi_a`, `pi_b`,
/// `pi_c` is absent or null. No field-membership validation is performed;
/// the verifier contract rejects out-of-field values.
pub fn parse_proof(raw: &Value) -> Result<Groth16Proof, FormatError> {
    let component = |name: &'static str| -> Result<&Value, FormatError> {
        match raw.get(name) {
            Some(v) if !v.is_null() => Ok(v),
            _ => Err(FormatError::MissingComponent(name)),
        }
    };

    let pi_a = parse_g1("pi_a", component("pi_a")?)?;
    let pi_b = parse_g2("pi_b", component("pi_b")?)?;
    let pi_c = parse_g1("pi_c", component("pi_c")?)?;

    Ok(Groth16Proof { pi_a, pi_b, pi_c })
}

/// Parse a public-signal array (decimal strings or integers) into `U256`s.
///
/// When `expected_len` is given the array length must match exactly; pass
/// clients enforce 2 signals for the balance pass and 3 for the identity
/// pass.
pub fn parse_public_signals(
    raw: &Value,
    expected_len: Option<usize>,
) -> Result<Vec<U256>, FormatError> {
    let signals = raw.as_array().ok_or(FormatError::NotAnArray)?;

    if let Some(expected) = expected_len {
        if signals.len() != expected {
            return Err(FormatError::SignalCount {
                expected,
                got: signals.len(),
            });
        }
    }

    signals.iter().map(leaf_to_u256).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_proof() -> Value {
        json!({
            "pi_a": ["11", "22", "1"],
            "pi_b": [["1", "2"], ["3", "4"], ["1", "0"]],
            "pi_c": ["33", "44", "1"],
        })
    }

    #[test]
    fn test_parse_valid_proof() {
        let proof = parse_proof(&sample_proof()).unwrap();

        assert_eq!(proof.pi_a, [U256::from(11u64), U256::from(22u64)]);
        assert_eq!(
            proof.pi_b,
            [
                [U256::from(1u64), U256::from(2u64)],
                [U256::from(3u64), U256::from(4u64)]
            ]
        );
        assert_eq!(proof.pi_c, [U256::from(33u64), U256::from(44u64)]);
    }

    #[test]
    fn test_missing_components() {
        for component in ["pi_a", "pi_b", "pi_c"] {
            let mut raw = sample_proof();
            raw.as_object_mut().unwrap().remove(component);

            assert_eq!(
                parse_proof(&raw),
                Err(FormatError::MissingComponent(component))
            );
        }
    }

    #[test]
    fn test_null_component_is_missing() {
        let mut raw = sample_proof();
        raw["pi_b"] = Value::Null;
        assert_eq!(parse_proof(&raw), Err(FormatError::MissingComponent("pi_b")));
    }

    #[test]
    fn test_leaf_forms() {
        // Decimal string, hex string, and native integer all parse.
        let raw = json!({
            "pi_a": ["255", "0xff", 255],
            "pi_b": [[1, 2], [3, 4]],
            "pi_c": [5, 6],
        });
        let proof = parse_proof(&raw).unwrap();
        assert_eq!(proof.pi_a, [U256::from(255u64), U256::from(255u64)]);
    }

    #[test]
    fn test_field_sized_values() {
        // BN254 base-field-sized coordinate fits in a U256.
        let p = "21888242871839275222246405745257275088696311157297823662689037894645226208583";
        let raw = json!({
            "pi_a": [p, "1"],
            "pi_b": [["1", "2"], ["3", "4"]],
            "pi_c": ["1", "2"],
        });
        let proof = parse_proof(&raw).unwrap();
        assert_eq!(proof.pi_a[0], U256::from_dec_str(p).unwrap());
    }

    #[test]
    fn test_bad_leaf() {
        let raw = json!({
            "pi_a": ["not a number", "2"],
            "pi_b": [["1", "2"], ["3", "4"]],
            "pi_c": ["1", "2"],
        });
        assert_eq!(
            parse_proof(&raw),
            Err(FormatError::Integer("not a number".into()))
        );
    }

    #[test]
    fn test_short_g2() {
        let raw = json!({
            "pi_a": ["1", "2"],
            "pi_b": [["1", "2"]],
            "pi_c": ["1", "2"],
        });
        assert!(matches!(
            parse_proof(&raw),
            Err(FormatError::Shape { component: "pi_b", .. })
        ));
    }

    #[test]
    fn test_signals_length_enforced() {
        let raw = json!(["1", "2", "3"]);

        let signals = parse_public_signals(&raw, Some(3)).unwrap();
        assert_eq!(
            signals,
            vec![U256::from(1u64), U256::from(2u64), U256::from(3u64)]
        );

        assert_eq!(
            parse_public_signals(&raw, Some(2)),
            Err(FormatError::SignalCount { expected: 2, got: 3 })
        );
    }

    #[test]
    fn test_signals_unbounded_when_no_expectation() {
        let raw = json!(["7"]);
        assert_eq!(
            parse_public_signals(&raw, None).unwrap(),
            vec![U256::from(7u64)]
        );
    }

    #[test]
    fn test_signals_not_an_array() {
        assert_eq!(
            parse_public_signals(&json!({"root": "1"}), Some(2)),
            Err(FormatError::NotAnArray)
        );
    }
}
