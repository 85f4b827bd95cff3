//! Proving and verification key artifacts
//!
//! The two keys are paired outputs of one circuit setup. They are
//! loaded once at process start, are read-only afterwards, and every
//! proof produced in a process must verify against the verification key
//! matching the proving key that built it. A mismatched pair is a fatal
//! configuration error, detected at construction time rather than per
//! request.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::circuit::circuit_digest;
use crate::crypto::RandomUtils;
use crate::error::{Error, Result};

/// Proof system identifier carried by both keys
pub const PROTOCOL: &str = "groth16";

/// Curve identifier carried by both keys
pub const CURVE: &str = "bn128";

/// Key used to build proofs
///
/// Held by the proving side only; never needed for verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvingKey {
    /// Proof system this key belongs to
    pub protocol: String,

    /// Curve this key was generated over
    pub curve: String,

    /// Digest of the compiled circuit the key was set up for
    pub circuit_digest: String,

    /// Identifier of the setup run that produced this key pair
    pub setup_id: String,

    /// Opaque key material, hex-encoded
    pub key_data: String,
}

/// Key used to check proofs
///
/// Safe to distribute to every relying party.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationKey {
    /// Proof system this key belongs to
    pub protocol: String,

    /// Curve this key was generated over
    pub curve: String,

    /// Digest of the compiled circuit the key was set up for
    pub circuit_digest: String,

    /// Identifier of the setup run that produced this key pair
    pub setup_id: String,

    /// Opaque key material, hex-encoded
    pub key_data: String,

    /// Number of public signals the circuit exposes
    pub n_public: usize,
}

impl ProvingKey {
    /// Load a proving key from a JSON artifact
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let key: Self = read_artifact(path.as_ref())?;
        key.check_identity()?;
        Ok(key)
    }

    /// Write the key to a JSON artifact
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_artifact(path.as_ref(), self)
    }

    fn check_identity(&self) -> Result<()> {
        check_identity(&self.protocol, &self.curve, &self.circuit_digest, "proving key")
    }
}

impl VerificationKey {
    /// Load a verification key from a JSON artifact
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let key: Self = read_artifact(path.as_ref())?;
        key.check_identity()?;
        Ok(key)
    }

    /// Write the key to a JSON artifact
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_artifact(path.as_ref(), self)
    }

    /// Whether this key pairs with the given proving key
    ///
    /// Keys pair when they come from the same setup run over the same
    /// compiled circuit.
    pub fn pairs_with(&self, proving_key: &ProvingKey) -> bool {
        self.protocol == proving_key.protocol
            && self.curve == proving_key.curve
            && self.circuit_digest == proving_key.circuit_digest
            && self.setup_id == proving_key.setup_id
    }

    fn check_identity(&self) -> Result<()> {
        check_identity(
            &self.protocol,
            &self.curve,
            &self.circuit_digest,
            "verification key",
        )
    }
}

/// Run a fresh setup, producing a matched key pair
///
/// Setup for development and tests. Deployment key material comes from
/// the circuit build pipeline; this produces the same artifact shape
/// with freshly drawn key data.
pub fn setup() -> (ProvingKey, VerificationKey) {
    let setup_id = hex::encode(RandomUtils::generate_bytes(32));
    let digest = circuit_digest();

    let proving_key = ProvingKey {
        protocol: PROTOCOL.to_string(),
        curve: CURVE.to_string(),
        circuit_digest: digest.clone(),
        setup_id: setup_id.clone(),
        key_data: hex::encode(RandomUtils::generate_bytes(64)),
    };
    let verification_key = VerificationKey {
        protocol: PROTOCOL.to_string(),
        curve: CURVE.to_string(),
        circuit_digest: digest,
        setup_id,
        key_data: hex::encode(RandomUtils::generate_bytes(64)),
        n_public: 1,
    };
    (proving_key, verification_key)
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|e| {
        Error::Configuration(format!("cannot read key artifact {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&data).map_err(|e| {
        Error::Configuration(format!(
            "malformed key artifact {}: {}",
            path.display(),
            e
        ))
    })
}

fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn check_identity(protocol: &str, curve: &str, digest: &str, what: &str) -> Result<()> {
    if protocol != PROTOCOL || curve != CURVE {
        return Err(Error::Configuration(format!(
            "{} is for {}/{}, expected {}/{}",
            what, protocol, curve, PROTOCOL, CURVE
        )));
    }
    if digest != circuit_digest() {
        return Err(Error::Configuration(format!(
            "{} was built for a different circuit",
            what
        )));
    }
    Ok(())
}
