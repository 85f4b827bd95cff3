//! Commitment generator
//!
//! Folds user attributes and a fresh random nonce into a secret field
//! element and its public Poseidon commitment.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use zkauth::commitment::CommitmentGenerator;
//! use zkauth::crypto::Poseidon;
//! use zkauth::types::UserAttributes;
//!
//! let generator = CommitmentGenerator::new(Arc::new(Poseidon::new()));
//! let attrs = UserAttributes {
//!     email: "alice@ex.com".to_string(),
//!     name: "Alice".to_string(),
//!     age: 30,
//!     country: "US".to_string(),
//!     dob: "1994-05-01".to_string(),
//! };
//! let registration = generator.generate(&attrs).unwrap();
//! ```

use std::sync::Arc;

use halo2curves::bn256::Fr as Field;

use crate::crypto::{HashUtils, Poseidon, RandomUtils};
use crate::error::{Error, Result};
use crate::types::{parse_dob, Registration, UserAttributes};

/// Derives `(secret, nonce, commitment)` from user attributes
///
/// Pure apart from one read of the OS random source. Deterministic for
/// a fixed nonce, which is what makes registrations reproducible under
/// test.
pub struct CommitmentGenerator {
    /// Shared arithmetic hash engine
    hash: Arc<Poseidon>,
}

impl CommitmentGenerator {
    /// Create a generator backed by the given hash engine
    pub fn new(hash: Arc<Poseidon>) -> Self {
        Self { hash }
    }

    /// Derive a registration with a fresh random nonce
    ///
    /// # Arguments
    /// * `attrs` - User attributes, assumed validated at the boundary
    ///
    /// # Returns
    /// `Ok(Registration)` with secret, nonce, and commitment
    pub fn generate(&self, attrs: &UserAttributes) -> Result<Registration> {
        self.generate_with_nonce(attrs, RandomUtils::generate_nonce())
    }

    /// Derive a registration with a caller-supplied nonce
    ///
    /// Exposed for deterministic derivation (key recovery from a stored
    /// nonce, reproducible tests). Production registration always draws
    /// a fresh nonce via [`generate`](Self::generate).
    pub fn generate_with_nonce(
        &self,
        attrs: &UserAttributes,
        nonce: Field,
    ) -> Result<Registration> {
        let user_hash = self.user_hash(attrs)?;
        let secret = self.hash.hash(&[user_hash, nonce])?;
        let commitment = self.hash.hash(&[secret])?;
        log::debug!("derived commitment for registration");

        Ok(Registration {
            secret,
            nonce,
            commitment,
        })
    }

    /// Fold the five attributes into the user hash
    ///
    /// Email and name pass through Keccak-256 first so arbitrary-length
    /// strings enter the field as fixed-width digests; the scalar
    /// attributes are encoded directly.
    fn user_hash(&self, attrs: &UserAttributes) -> Result<Field> {
        let email_field = HashUtils::keccak256_to_field(&attrs.email.to_lowercase());
        let name_field = HashUtils::keccak256_to_field(attrs.name.trim());

        let country = pack_country(&attrs.country)?;
        let dob = parse_dob(&attrs.dob)?;

        self.hash.hash(&[
            email_field,
            name_field,
            Field::from(u64::from(attrs.age)),
            Field::from(u64::from(country)),
            Field::from(dob),
        ])
    }
}

/// Pack a 2-letter country code into a big-endian u16
fn pack_country(country: &str) -> Result<u16> {
    let bytes = country.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
        return Err(Error::Validation(format!(
            "country code not packable into 16 bits: {:?}",
            country
        )));
    }
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldUtils;

    fn generator() -> CommitmentGenerator {
        CommitmentGenerator::new(Arc::new(Poseidon::new()))
    }

    fn attrs() -> UserAttributes {
        UserAttributes {
            email: "alice@ex.com".to_string(),
            name: "Alice".to_string(),
            age: 30,
            country: "US".to_string(),
            dob: "1994-05-01".to_string(),
        }
    }

    #[test]
    fn test_fixed_nonce_is_deterministic() {
        let g = generator();
        let nonce = Field::from(12345u64);
        let a = g.generate_with_nonce(&attrs(), nonce).unwrap();
        let b = g.generate_with_nonce(&attrs(), nonce).unwrap();
        assert_eq!(a.secret, b.secret);
        assert_eq!(a.commitment, b.commitment);
    }

    #[test]
    fn test_different_nonces_give_different_secrets() {
        let g = generator();
        let a = g
            .generate_with_nonce(&attrs(), Field::from(1u64))
            .unwrap();
        let b = g
            .generate_with_nonce(&attrs(), Field::from(2u64))
            .unwrap();
        assert_ne!(a.secret, b.secret);
        assert_ne!(a.commitment, b.commitment);
    }

    #[test]
    fn test_fresh_registrations_never_collide() {
        let g = generator();
        let a = g.generate(&attrs()).unwrap();
        let b = g.generate(&attrs()).unwrap();
        assert_ne!(a.nonce, b.nonce);
        assert_ne!(a.secret, b.secret);
        assert_ne!(a.commitment, b.commitment);
    }

    #[test]
    fn test_commitment_is_hash_of_secret() {
        let g = generator();
        let registration = g.generate(&attrs()).unwrap();
        let engine = Poseidon::new();
        let recomputed = engine.hash(&[registration.secret]).unwrap();
        assert_eq!(registration.commitment, recomputed);
    }

    #[test]
    fn test_email_is_case_insensitive() {
        let g = generator();
        let nonce = Field::from(7u64);
        let mut upper = attrs();
        upper.email = "ALICE@EX.COM".to_string();
        let a = g.generate_with_nonce(&attrs(), nonce).unwrap();
        let b = g.generate_with_nonce(&upper, nonce).unwrap();
        assert_eq!(a.commitment, b.commitment);
    }

    #[test]
    fn test_name_is_trimmed() {
        let g = generator();
        let nonce = Field::from(7u64);
        let mut padded = attrs();
        padded.name = "  Alice  ".to_string();
        let a = g.generate_with_nonce(&attrs(), nonce).unwrap();
        let b = g.generate_with_nonce(&padded, nonce).unwrap();
        assert_eq!(a.commitment, b.commitment);
    }

    #[test]
    fn test_attribute_change_changes_commitment() {
        let g = generator();
        let nonce = Field::from(7u64);
        let base = g.generate_with_nonce(&attrs(), nonce).unwrap();

        let mut changed = attrs();
        changed.age = 31;
        let other = g.generate_with_nonce(&changed, nonce).unwrap();
        assert_ne!(base.commitment, other.commitment);
    }

    #[test]
    fn test_rejects_unpackable_country() {
        let g = generator();
        for country in ["USA", "U", "", "Ü2", "1A"] {
            let mut bad = attrs();
            bad.country = country.to_string();
            assert!(
                g.generate(&bad).is_err(),
                "accepted country {:?}",
                country
            );
        }
    }

    #[test]
    fn test_rejects_malformed_dob() {
        let g = generator();
        let mut bad = attrs();
        bad.dob = "01-05-1994".to_string();
        assert!(g.generate(&bad).is_err());
    }

    #[test]
    fn test_pack_country_big_endian() {
        // 'U' = 0x55, 'S' = 0x53
        assert_eq!(pack_country("US").unwrap(), 0x5553);
    }

    #[test]
    fn test_wire_encoding_of_registration() {
        let g = generator();
        let response = g.generate(&attrs()).unwrap().to_response();
        assert!(response.secret.starts_with("0x"));
        assert!(response.nonce.starts_with("0x"));
        assert!(FieldUtils::from_dec(&response.commitment).is_ok());
    }
}
