//! Poseidon arithmetic hash engine
//!
//! This module implements the Poseidon sponge over the BN254 scalar
//! field. Poseidon operates natively on field elements, which keeps the
//! commitment relation cheap to express as arithmetic-circuit
//! constraints, unlike byte-oriented hashes.
//!
//! The engine precomputes round constants and MDS matrices for every
//! supported width at construction time. Construct it once at process
//! start and share it through an `Arc`: the handle is read-only after
//! construction and safe for unsynchronized concurrent reads.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use zkauth::crypto::Poseidon;
//! use halo2curves::bn256::Fr as Field;
//!
//! let hash = Arc::new(Poseidon::new());
//! let digest = hash.hash(&[Field::from(1u64), Field::from(2u64)]).unwrap();
//! ```

use blake2::{Blake2b512, Digest};
use ff::Field as _;
use halo2curves::bn256::Fr as Field;

use crate::error::{Error, Result};
use crate::field::FieldUtils;

/// Maximum number of hash inputs (sponge width 6)
pub const MAX_INPUTS: usize = 5;

/// Full rounds, split evenly before and after the partial rounds
const FULL_ROUNDS: usize = 8;

/// Partial round counts per width t = 2..=6
const PARTIAL_ROUNDS: [usize; MAX_INPUTS] = [56, 57, 56, 60, 60];

/// Domain string versioning the parameter derivation
const PARAMETER_DOMAIN: &str = "zkauth.poseidon.v1";

/// Parameters for one sponge width
struct PoseidonParams {
    /// State width (inputs + 1 capacity element)
    t: usize,

    /// Number of partial rounds for this width
    r_p: usize,

    /// Round constants, one row of `t` constants per round
    round_constants: Vec<Vec<Field>>,

    /// MDS mixing matrix, `t` rows of `t` elements
    mds: Vec<Vec<Field>>,
}

/// Poseidon hash engine
///
/// Holds precomputed parameters for widths 2 through 6. Cheap to share
/// behind an `Arc`; expensive enough to construct that it should be
/// built once per process.
pub struct Poseidon {
    params: Vec<PoseidonParams>,
}

impl Poseidon {
    /// Construct the engine, deriving parameters for every width
    ///
    /// Derivation is deterministic: two engines always agree on every
    /// digest, in this process or any other.
    pub fn new() -> Self {
        let params = (2..=MAX_INPUTS + 1).map(Self::derive_params).collect();
        Self { params }
    }

    /// Hash 1 to 5 field elements into one
    ///
    /// # Arguments
    /// * `inputs` - Field elements to absorb
    ///
    /// # Returns
    /// `Ok(Field)` digest, `Err(Error::Validation)` on unsupported arity
    pub fn hash(&self, inputs: &[Field]) -> Result<Field> {
        let (digest, _) = self.hash_inner(inputs, false)?;
        Ok(digest)
    }

    /// Hash with a full per-round state trace
    ///
    /// Returns the digest together with every intermediate state element,
    /// in round order. The trace is what populates circuit wires during
    /// witness calculation.
    pub fn hash_with_trace(&self, inputs: &[Field]) -> Result<(Field, Vec<Field>)> {
        let (digest, trace) = self.hash_inner(inputs, true)?;
        Ok((digest, trace))
    }

    fn hash_inner(&self, inputs: &[Field], record: bool) -> Result<(Field, Vec<Field>)> {
        if inputs.is_empty() || inputs.len() > MAX_INPUTS {
            return Err(Error::Validation(format!(
                "poseidon arity must be 1..={}, got {}",
                MAX_INPUTS,
                inputs.len()
            )));
        }
        let params = &self.params[inputs.len() - 1];

        // Sponge state: zero capacity element followed by the inputs
        let mut state = vec![Field::ZERO; params.t];
        state[1..].copy_from_slice(inputs);

        let mut trace = Vec::new();
        let half = FULL_ROUNDS / 2;
        let rounds = FULL_ROUNDS + params.r_p;
        for r in 0..rounds {
            for (s, c) in state.iter_mut().zip(&params.round_constants[r]) {
                *s += c;
            }
            if r < half || r >= half + params.r_p {
                for s in state.iter_mut() {
                    *s = sbox(*s);
                }
            } else {
                state[0] = sbox(state[0]);
            }
            state = mds_mul(&params.mds, &state);
            if record {
                trace.extend_from_slice(&state);
            }
        }

        Ok((state[0], trace))
    }

    /// Derive round constants and MDS matrix for one width
    fn derive_params(t: usize) -> PoseidonParams {
        let r_p = PARTIAL_ROUNDS[t - 2];
        let rounds = FULL_ROUNDS + r_p;

        let round_constants = (0..rounds)
            .map(|r| (0..t).map(|i| constant_for(t, r, i)).collect())
            .collect();

        // Cauchy matrix 1/(x_i + y_j) with x_i = i, y_j = t + j; entries
        // sum to values in [t, 3t-2], so every inverse exists
        let mds = (0..t)
            .map(|i| {
                (0..t)
                    .map(|j| {
                        Field::from((i + t + j) as u64)
                            .invert()
                            .unwrap_or(Field::ZERO)
                    })
                    .collect()
            })
            .collect();

        PoseidonParams {
            t,
            r_p,
            round_constants,
            mds,
        }
    }
}

impl Default for Poseidon {
    fn default() -> Self {
        Self::new()
    }
}

/// The x^5 S-box
fn sbox(x: Field) -> Field {
    let x2 = x.square();
    let x4 = x2.square();
    x4 * x
}

/// Multiply state by the MDS matrix
fn mds_mul(mds: &[Vec<Field>], state: &[Field]) -> Vec<Field> {
    mds.iter()
        .map(|row| {
            row.iter()
                .zip(state)
                .fold(Field::ZERO, |acc, (m, s)| acc + *m * s)
        })
        .collect()
}

/// Derive one round constant from the versioned domain string
fn constant_for(t: usize, round: usize, index: usize) -> Field {
    let mut hasher = Blake2b512::new();
    Digest::update(
        &mut hasher,
        format!("{}.rc.{}.{}.{}", PARAMETER_DOMAIN, t, round, index).as_bytes(),
    );
    let digest = Digest::finalize(hasher);
    FieldUtils::from_be_bytes_reduce(&digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let engine = Poseidon::new();
        let inputs = [Field::from(1u64), Field::from(2u64)];
        let a = engine.hash(&inputs).unwrap();
        let b = engine.hash(&inputs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_two_engines_agree() {
        let a = Poseidon::new();
        let b = Poseidon::new();
        let inputs = [Field::from(7u64)];
        assert_eq!(a.hash(&inputs).unwrap(), b.hash(&inputs).unwrap());
    }

    #[test]
    fn test_different_inputs_differ() {
        let engine = Poseidon::new();
        let a = engine.hash(&[Field::from(1u64)]).unwrap();
        let b = engine.hash(&[Field::from(2u64)]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_arity_changes_digest() {
        // Absorbing a trailing zero is not the same as omitting it
        let engine = Poseidon::new();
        let a = engine.hash(&[Field::from(5u64)]).unwrap();
        let b = engine.hash(&[Field::from(5u64), Field::ZERO]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_input_order_matters() {
        let engine = Poseidon::new();
        let a = engine
            .hash(&[Field::from(1u64), Field::from(2u64)])
            .unwrap();
        let b = engine
            .hash(&[Field::from(2u64), Field::from(1u64)])
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_all_supported_arities() {
        let engine = Poseidon::new();
        for n in 1..=MAX_INPUTS {
            let inputs: Vec<Field> = (0..n).map(|i| Field::from(i as u64 + 1)).collect();
            assert!(engine.hash(&inputs).is_ok(), "arity {} failed", n);
        }
    }

    #[test]
    fn test_rejects_unsupported_arity() {
        let engine = Poseidon::new();
        assert!(engine.hash(&[]).is_err());
        let too_many = vec![Field::ZERO; MAX_INPUTS + 1];
        assert!(engine.hash(&too_many).is_err());
    }

    #[test]
    fn test_trace_matches_digest() {
        let engine = Poseidon::new();
        let inputs = [Field::from(9u64)];
        let plain = engine.hash(&inputs).unwrap();
        let (digest, trace) = engine.hash_with_trace(&inputs).unwrap();
        assert_eq!(plain, digest);
        // One state row of width 2 per round; the digest is the first
        // element of the final row
        assert_eq!(trace.len(), 2 * (FULL_ROUNDS + PARTIAL_ROUNDS[0]));
        assert_eq!(trace[trace.len() - 2], digest);
    }

    #[test]
    fn test_mds_entries_nonzero() {
        let params = Poseidon::derive_params(3);
        for row in &params.mds {
            for entry in row {
                assert_ne!(*entry, Field::ZERO);
            }
        }
    }
}
