//! Proof generator
//!
//! Drives the proving backend to produce a zero-knowledge proof that
//! the caller knows the secret preimage of a commitment. Proving is a
//! blocking, CPU-bound computation with no internal concurrency;
//! callers embedding it in a request path should impose their own
//! deadline around it.
//!
//! A failure to build a witness means the supplied secret does not hash
//! to the supplied commitment. That is a client error and never worth
//! retrying with the same inputs.

use std::sync::Arc;
use std::time::Instant;

use crate::circuit::CircuitInput;
use crate::error::Result;
use crate::field::FieldUtils;
use crate::proof::backend::ProvingBackend;
use crate::proof::keys::ProvingKey;
use crate::types::ProofBundle;
use crate::utils::Helpers;

/// Builds proofs of secret knowledge for a fixed proving key
pub struct ProofGenerator<B: ProvingBackend> {
    backend: Arc<B>,
    proving_key: ProvingKey,
}

impl<B: ProvingBackend> ProofGenerator<B> {
    /// Create a generator over the given backend and proving key
    pub fn new(backend: Arc<B>, proving_key: ProvingKey) -> Self {
        Self {
            backend,
            proving_key,
        }
    }

    /// Prove knowledge of the secret behind a commitment
    ///
    /// On success `public_signals[0]` equals the canonical decimal form
    /// of `commitment_dec`, because the circuit exposes the commitment
    /// as its sole public output.
    ///
    /// # Arguments
    /// * `secret_hex` - The secret as hex, with or without `0x` prefix
    /// * `commitment_dec` - The commitment as a decimal string
    ///
    /// # Returns
    /// `Ok(ProofBundle)` with proof, public signals, and calldata-shaped
    /// hex arguments; `Err(Error::Witness)` when the secret is not a
    /// preimage of the commitment
    pub fn prove(&self, secret_hex: &str, commitment_dec: &str) -> Result<ProofBundle> {
        let secret = FieldUtils::from_hex(secret_hex)?;
        let commitment = FieldUtils::from_dec(commitment_dec)?;
        let input = CircuitInput::new(&secret, &commitment);

        let witness = self.backend.compute_witness(&input)?;

        let started = Instant::now();
        let (proof, public_signals) = self.backend.prove(&self.proving_key, &witness)?;
        log::debug!(
            "proof generated in {}",
            Helpers::format_duration_from(started.elapsed())
        );

        let solidity_args = solidity_calldata(proof.flatten(), &public_signals)?;
        Ok(ProofBundle {
            proof,
            public_signals,
            solidity_args,
        })
    }
}

/// Flatten proof coordinates and public signals into hex calldata
///
/// Pure formatting with no cryptographic effect: hex-prefixed entries
/// are normalized to minimal lowercase form, bare decimal entries are
/// hex-encoded.
fn solidity_calldata(coordinates: Vec<&str>, public_signals: &[String]) -> Result<Vec<String>> {
    coordinates
        .into_iter()
        .chain(public_signals.iter().map(String::as_str))
        .map(|entry| {
            let parsed = if entry.starts_with("0x") || entry.starts_with("0X") {
                FieldUtils::from_hex(entry)?
            } else {
                FieldUtils::from_dec(entry)?
            };
            Ok(FieldUtils::to_hex(&parsed))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Poseidon;
    use crate::error::Error;
    use crate::proof::backend::Groth16Backend;
    use crate::proof::keys;
    use halo2curves::bn256::Fr as Field;

    fn generator() -> (ProofGenerator<Groth16Backend>, Arc<Poseidon>) {
        let hash = Arc::new(Poseidon::new());
        let (pk, _vk) = keys::setup();
        let backend = Arc::new(Groth16Backend::new(hash.clone()));
        (ProofGenerator::new(backend, pk), hash)
    }

    fn secret_and_commitment(hash: &Poseidon) -> (String, String) {
        let secret = Field::from(987654321u64);
        let commitment = hash.hash(&[secret]).unwrap();
        (FieldUtils::to_hex(&secret), FieldUtils::to_dec(&commitment))
    }

    #[test]
    fn test_prove_exposes_commitment_as_first_signal() {
        let (prover, hash) = generator();
        let (secret_hex, commitment_dec) = secret_and_commitment(&hash);
        let bundle = prover.prove(&secret_hex, &commitment_dec).unwrap();
        assert_eq!(bundle.public_signals[0], commitment_dec);
    }

    #[test]
    fn test_prove_accepts_unprefixed_hex() {
        let (prover, hash) = generator();
        let (secret_hex, commitment_dec) = secret_and_commitment(&hash);
        let bare = secret_hex.trim_start_matches("0x");
        assert!(prover.prove(bare, &commitment_dec).is_ok());
    }

    #[test]
    fn test_prove_wrong_secret_is_witness_error() {
        let (prover, hash) = generator();
        let (_, commitment_dec) = secret_and_commitment(&hash);
        match prover.prove("0xdead", &commitment_dec) {
            Err(Error::Witness(_)) => {}
            other => panic!("expected witness error, got {:?}", other),
        }
    }

    #[test]
    fn test_prove_malformed_inputs_are_validation_errors() {
        let (prover, hash) = generator();
        let (secret_hex, commitment_dec) = secret_and_commitment(&hash);
        assert!(matches!(
            prover.prove("0xzz", &commitment_dec),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            prover.prove(&secret_hex, "12x4"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_solidity_args_shape() {
        let (prover, hash) = generator();
        let (secret_hex, commitment_dec) = secret_and_commitment(&hash);
        let bundle = prover.prove(&secret_hex, &commitment_dec).unwrap();

        // 8 proof coordinates plus 1 public signal
        assert_eq!(bundle.solidity_args.len(), 9);
        assert!(bundle.solidity_args.iter().all(|a| a.starts_with("0x")));

        // Last entry is the commitment, hex-encoded
        let commitment = FieldUtils::from_dec(&commitment_dec).unwrap();
        assert_eq!(
            bundle.solidity_args[8],
            FieldUtils::to_hex(&commitment)
        );
    }

    #[test]
    fn test_solidity_calldata_normalizes_mixed_entries() {
        let signals = vec!["255".to_string()];
        let args = solidity_calldata(vec!["0xFF", "10"], &signals).unwrap();
        assert_eq!(args, vec!["0xff", "0xa", "0xff"]);
    }
}
