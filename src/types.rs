//! Core types for the registration/authentication protocol
//!
//! This module defines the data model shared across components:
//! - User attributes and their boundary validation rules
//! - Registration output (secret, nonce, commitment)
//! - Groth16-shaped proofs and the prove/verify wire contracts

use halo2curves::bn256::Fr as Field;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::FieldUtils;

/// Raw identity attributes supplied at registration
///
/// Input-only: attributes are folded into the user hash and never
/// persisted by the protocol core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAttributes {
    /// Email address (lower-cased before hashing)
    pub email: String,

    /// Display name (trimmed before hashing)
    pub name: String,

    /// Age in years
    pub age: u32,

    /// ISO 3166-1 alpha-2 country code
    pub country: String,

    /// Date of birth as `YYYY-MM-DD`
    pub dob: String,
}

impl UserAttributes {
    /// Validate the attribute set at an input boundary
    ///
    /// Mirrors the request-validation layer: email shape, name alphabet
    /// and length, age range, country code alphabet, dob format. Core
    /// components assume these hold; the API and CLI boundaries call
    /// this before handing attributes to the commitment generator.
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        let at = email
            .find('@')
            .ok_or_else(|| Error::Validation("email must contain '@'".to_string()))?;
        let (local, domain) = (&email[..at], &email[at + 1..]);
        if local.is_empty() || domain.is_empty() || !domain.contains('.') || email.contains(' ') {
            return Err(Error::Validation(format!("invalid email: {:?}", email)));
        }

        let name = self.name.trim();
        let name_len = name.chars().count();
        if !(2..=60).contains(&name_len) {
            return Err(Error::Validation(
                "name must be 2 to 60 characters".to_string(),
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, ' ' | '.' | '\'' | '-'))
        {
            return Err(Error::Validation(format!("invalid name: {:?}", name)));
        }

        if !(13..=120).contains(&self.age) {
            return Err(Error::Validation(format!(
                "age must be in [13, 120], got {}",
                self.age
            )));
        }

        if self.country.len() != 2
            || !self.country.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(Error::Validation(format!(
                "country must be a 2-letter uppercase code, got {:?}",
                self.country
            )));
        }

        parse_dob(&self.dob)?;
        Ok(())
    }
}

/// Parse `YYYY-MM-DD` into its `YYYYMMDD` integer encoding
///
/// Month and day are range-checked; calendar-exact day counts are left
/// to the validation layer's date parsing upstream.
pub(crate) fn parse_dob(dob: &str) -> Result<u64> {
    let bytes = dob.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
    if !well_formed {
        return Err(Error::Validation(format!(
            "dob must be YYYY-MM-DD, got {:?}",
            dob
        )));
    }

    let digits: String = dob.chars().filter(|c| c.is_ascii_digit()).collect();
    let packed: u64 = digits
        .parse()
        .map_err(|_| Error::Validation(format!("dob out of range: {:?}", dob)))?;

    let month = (packed / 100) % 100;
    let day = packed % 100;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(Error::Validation(format!(
            "dob has impossible month or day: {:?}",
            dob
        )));
    }
    Ok(packed)
}

/// Output of one registration
///
/// The secret stays with the registering client; only the commitment is
/// handed to relying parties.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Private field element the client must keep secret
    pub secret: Field,

    /// Per-registration random nonce, owned by the client
    pub nonce: Field,

    /// Public commitment, `Poseidon(secret)`
    pub commitment: Field,
}

impl Registration {
    /// Encode into the registration wire contract
    pub fn to_response(&self) -> RegisterResponse {
        RegisterResponse {
            secret: FieldUtils::to_hex(&self.secret),
            nonce: FieldUtils::to_hex(&self.nonce),
            commitment: FieldUtils::to_dec(&self.commitment),
        }
    }
}

/// Registration response wire shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Secret as a 0x-prefixed hex string
    pub secret: String,

    /// Nonce as a 0x-prefixed hex string
    pub nonce: String,

    /// Commitment as a decimal string
    pub commitment: String,
}

/// Proof generation request wire shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveRequest {
    /// Secret as hex, with or without `0x` prefix
    pub secret_hex: String,

    /// Commitment as a decimal string
    pub commitment: String,
}

/// A Groth16-shaped zero-knowledge proof
///
/// Three curve-point groups with decimal-string coordinates. Opaque to
/// the protocol layer: only the backend interprets the coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    /// G1 point A
    pub a: [String; 2],

    /// G2 point B
    pub b: [[String; 2]; 2],

    /// G1 point C
    pub c: [String; 2],
}

impl Proof {
    /// Coordinates flattened in calldata order: a, b, c
    pub fn flatten(&self) -> Vec<&str> {
        vec![
            self.a[0].as_str(),
            self.a[1].as_str(),
            self.b[0][0].as_str(),
            self.b[0][1].as_str(),
            self.b[1][0].as_str(),
            self.b[1][1].as_str(),
            self.c[0].as_str(),
            self.c[1].as_str(),
        ]
    }
}

/// Proof generation result wire shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofBundle {
    /// The zero-knowledge proof
    pub proof: Proof,

    /// Field elements exposed by the proof; element 0 is the commitment
    /// as a decimal string
    pub public_signals: Vec<String>,

    /// Flattened calldata as 0x-prefixed hex strings, for callers that
    /// need byte-for-byte on-chain verifier arguments
    pub solidity_args: Vec<String>,
}

/// Verification request wire shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Commitment the caller claims to authenticate against
    pub commitment: String,

    /// The proof to check
    pub proof: Proof,

    /// Public signals accompanying the proof
    pub public_signals: Vec<String>,
}
