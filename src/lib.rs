//! zkauth: Privacy-Preserving Authentication with Zero-Knowledge Proofs
//!
//! This library implements a commitment/proof protocol: registration
//! derives a hiding commitment from user attributes, authentication
//! proves knowledge of the secret behind that commitment without
//! revealing it, and verification checks the proof while binding it to
//! the claimed commitment.
//!
//! # Example
//!
//! ```no_run
//! use zkauth::auth::AuthService;
//! use zkauth::types::UserAttributes;
//!
//! let service = AuthService::ephemeral();
//!
//! // Register: derive secret, nonce, and commitment
//! let attrs = UserAttributes {
//!     email: "alice@example.com".to_string(),
//!     name: "Alice Smith".to_string(),
//!     age: 30,
//!     country: "US".to_string(),
//!     dob: "1995-06-15".to_string(),
//! };
//! let registration = service.register(&attrs)?.to_response();
//!
//! // Prove knowledge of the secret
//! let bundle = service.prove(&registration.secret, &registration.commitment)?;
//!
//! // Verify the proof against the commitment
//! assert!(service.verify(&registration.commitment, &bundle.proof, &bundle.public_signals)?);
//! # Ok::<(), zkauth::error::Error>(())
//! ```

/// zkauth version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Main modules
pub mod commitment;
pub mod error;
pub mod field;
pub mod types;

pub mod auth;
pub mod circuit;
pub mod crypto;
pub mod proof;
pub mod utils;

#[cfg(feature = "api")]
pub mod api;

// Re-export main types
pub use auth::AuthService;
pub use commitment::CommitmentGenerator;
pub use error::{Error, Result};
pub use field::FieldUtils;
pub use proof::{ProofGenerator, ProofVerifier, ProvingBackend};
pub use types::{Proof, ProofBundle, Registration, UserAttributes};
