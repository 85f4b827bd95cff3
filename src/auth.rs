//! Authentication service
//!
//! Ties the three protocol components together behind one facade:
//! registration derives a commitment from user attributes, proving
//! turns a stored secret into a proof bundle, and verification checks
//! a bundle against a claimed commitment.
//!
//! The service holds no per-user state. Callers persist the
//! commitment (server side) and the secret (client side) themselves.
//!
//! # Example
//!
//! ```rust
//! use zkauth::auth::AuthService;
//! use zkauth::types::UserAttributes;
//!
//! let service = AuthService::ephemeral();
//! let attrs = UserAttributes {
//!     email: "alice@example.com".to_string(),
//!     name: "Alice Smith".to_string(),
//!     age: 30,
//!     country: "US".to_string(),
//!     dob: "1995-06-15".to_string(),
//! };
//!
//! let registration = service.register(&attrs).unwrap();
//! let response = registration.to_response();
//! let bundle = service.prove(&response.secret, &response.commitment).unwrap();
//! assert!(service
//!     .verify(&response.commitment, &bundle.proof, &bundle.public_signals)
//!     .unwrap());
//! ```

use std::sync::Arc;

use crate::commitment::CommitmentGenerator;
use crate::crypto::Poseidon;
use crate::error::{Error, Result};
use crate::proof::{
    Groth16Backend, ProofGenerator, ProofVerifier, ProvingBackend, ProvingKey, VerificationKey,
};
use crate::types::{Proof, ProofBundle, Registration, UserAttributes};

/// Facade over commitment generation, proving, and verification
pub struct AuthService<B: ProvingBackend = Groth16Backend> {
    commitments: CommitmentGenerator,
    prover: ProofGenerator<B>,
    verifier: ProofVerifier<B>,
}

impl AuthService<Groth16Backend> {
    /// Create a service from a hash engine and a key pair
    ///
    /// # Arguments
    /// * `hash` - Shared Poseidon engine
    /// * `proving_key` - Key used to generate proofs
    /// * `verification_key` - Key used to check proofs
    ///
    /// # Returns
    /// `Err(Error::Configuration)` when the keys come from different
    /// setups and could never agree on a proof
    pub fn new(
        hash: Arc<Poseidon>,
        proving_key: ProvingKey,
        verification_key: VerificationKey,
    ) -> Result<Self> {
        if !verification_key.pairs_with(&proving_key) {
            return Err(Error::Configuration(
                "proving and verification keys come from different setups".to_string(),
            ));
        }
        let backend = Arc::new(Groth16Backend::new(hash.clone()));
        Ok(Self {
            commitments: CommitmentGenerator::new(hash),
            prover: ProofGenerator::new(backend.clone(), proving_key),
            verifier: ProofVerifier::new(backend, verification_key),
        })
    }

    /// Create a service over a freshly generated key pair
    ///
    /// Intended for tests and local experiments. Proofs made by one
    /// ephemeral service do not verify under another.
    pub fn ephemeral() -> Self {
        let hash = Arc::new(Poseidon::new());
        let (pk, vk) = crate::proof::setup();
        // setup() always returns a matched pair
        let backend = Arc::new(Groth16Backend::new(hash.clone()));
        Self {
            commitments: CommitmentGenerator::new(hash),
            prover: ProofGenerator::new(backend.clone(), pk),
            verifier: ProofVerifier::new(backend, vk),
        }
    }
}

impl<B: ProvingBackend> AuthService<B> {
    /// Register a user: validate attributes and derive their secret,
    /// nonce, and commitment
    pub fn register(&self, attrs: &UserAttributes) -> Result<Registration> {
        attrs.validate()?;
        let registration = self.commitments.generate(attrs)?;
        log::info!("registered commitment for new user");
        Ok(registration)
    }

    /// Prove knowledge of the secret behind a commitment
    pub fn prove(&self, secret_hex: &str, commitment_dec: &str) -> Result<ProofBundle> {
        self.prover.prove(secret_hex, commitment_dec)
    }

    /// Verify a proof against a claimed commitment
    ///
    /// Fails with the opaque `unauthorized` error on any mismatch.
    pub fn verify(
        &self,
        commitment: &str,
        proof: &Proof,
        public_signals: &[String],
    ) -> Result<bool> {
        self.verifier.verify(commitment, proof, public_signals)
    }
}
