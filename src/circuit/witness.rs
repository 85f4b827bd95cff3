//! Witness calculation
//!
//! Evaluates the secret-proof circuit's constraints for a given input
//! and produces the full wire assignment. Calculation fails when the
//! constraints are unsatisfiable, which for this circuit means exactly
//! one thing: the claimed secret does not hash to the claimed
//! commitment.

use std::sync::Arc;

use ff::Field as _;
use halo2curves::bn256::Fr as Field;

use crate::crypto::Poseidon;
use crate::error::{Error, Result};
use crate::field::FieldUtils;

/// Input to the compiled circuit
///
/// Field names and decimal-string encoding match the circuit's declared
/// inputs exactly; the backend consumes this shape verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitInput {
    /// Private input: the secret, as a decimal string
    pub secret: String,

    /// Public input: the commitment, as a decimal string
    pub commitment: String,
}

impl CircuitInput {
    /// Build the input from parsed field elements
    pub fn new(secret: &Field, commitment: &Field) -> Self {
        Self {
            secret: FieldUtils::to_dec(secret),
            commitment: FieldUtils::to_dec(commitment),
        }
    }
}

/// A satisfying assignment of the circuit's wires
#[derive(Debug, Clone)]
pub struct Witness {
    /// All wire values: constant one, public inputs, private inputs,
    /// then the intermediate hash-gadget states
    pub wires: Vec<Field>,

    /// The public subset, in signal order
    pub public_inputs: Vec<Field>,
}

/// Witness calculator for the secret-proof circuit
///
/// Plays the role of the compiled witness-generation artifact: given
/// the circuit input, it either produces a satisfying wire assignment
/// or reports that none exists.
pub struct WitnessCalculator {
    /// Shared arithmetic hash engine backing the hash gadget
    hash: Arc<Poseidon>,
}

impl WitnessCalculator {
    /// Create a calculator backed by the given hash engine
    pub fn new(hash: Arc<Poseidon>) -> Self {
        Self { hash }
    }

    /// Compute the witness for a circuit input
    ///
    /// # Arguments
    /// * `input` - Decimal-string circuit input
    ///
    /// # Returns
    /// `Ok(Witness)` when the constraints are satisfiable,
    /// `Err(Error::Witness)` when `commitment != Poseidon(secret)`,
    /// `Err(Error::Validation)` on malformed encodings
    pub fn calculate(&self, input: &CircuitInput) -> Result<Witness> {
        let secret = FieldUtils::from_dec(&input.secret)?;
        let commitment = FieldUtils::from_dec(&input.commitment)?;

        let (digest, trace) = self.hash.hash_with_trace(&[secret])?;
        if digest != commitment {
            // Deliberately silent about the recomputed digest: reporting
            // it would hand the hash of an attacker-chosen secret to the
            // caller
            return Err(Error::Witness(
                "constraints unsatisfiable: secret is not a preimage of commitment".to_string(),
            ));
        }

        let mut wires = Vec::with_capacity(3 + trace.len());
        wires.push(Field::ONE);
        wires.push(commitment);
        wires.push(secret);
        wires.extend(trace);

        Ok(Witness {
            wires,
            public_inputs: vec![commitment],
        })
    }
}
