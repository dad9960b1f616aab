//! Verifier calldata mapping
//!
//! Provers emit G2 points with each coordinate pair in `[real, imaginary]`
//! order; the Solidity verifier's pairing check consumes the opposite order.
//! The swap below must hit both pairs. Swapping only one, or skipping the
//! swap, yields a proof that fails verification even though every value is
//! individually well-formed.

use ethers_core::types::U256;

use crate::parse::Groth16Proof;

/// The argument shape of `proveAndConsume` / `proveIdentity`:
/// `(uint256[2] a, uint256[2][2] b, uint256[2] c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofCalldata {
    pub a: [U256; 2],
    pub b: [[U256; 2]; 2],
    pub c: [U256; 2],
}

impl Groth16Proof {
    /// Map this proof to the verifier's argument convention.
    ///
    /// A and C pass through; each coordinate pair of B is swapped.
    pub fn to_calldata(&self) -> ProofCalldata {
        ProofCalldata {
            a: [self.pi_a[0], self.pi_a[1]],
            b: [
                [self.pi_b[0][1], self.pi_b[0][0]],
                [self.pi_b[1][1], self.pi_b[1][0]],
            ],
            c: [self.pi_c[0], self.pi_c[1]],
        }
    }
}
