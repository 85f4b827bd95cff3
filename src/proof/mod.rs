//! Proof generation and verification
//!
//! The proof layer turns secret knowledge into transferable evidence:
//!
//! - [`keys`] manages the proving/verification key pair produced by a
//!   one-time setup
//! - [`backend`] defines the [`ProvingBackend`] capability trait and
//!   the Groth16-shaped default backend
//! - [`prover`] builds proof bundles from a secret and commitment
//! - [`verifier`] checks proofs and binds them to a commitment
//!
//! Generators and verifiers are cheap to construct and safe to share
//! across threads behind an `Arc`.

pub mod backend;
pub mod keys;
pub mod prover;
pub mod verifier;

pub use backend::{Groth16Backend, ProvingBackend};
pub use keys::{setup, ProvingKey, VerificationKey};
pub use prover::ProofGenerator;
pub use verifier::ProofVerifier;
