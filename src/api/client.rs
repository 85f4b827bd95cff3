//! API client
//!
//! This module provides HTTP client functionality for interacting with the API server.
//!
//! # Example
//!
//! ```rust,no_run
//! use zkauth::api::ApiClient;
//! use zkauth::types::UserAttributes;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("http://127.0.0.1:8080");
//!
//!     let attrs = UserAttributes {
//!         email: "alice@example.com".to_string(),
//!         name: "Alice Smith".to_string(),
//!         age: 30,
//!         country: "US".to_string(),
//!         dob: "1995-06-15".to_string(),
//!     };
//!
//!     let registration = client.register(&attrs).await?;
//!     let bundle = client.prove(&registration.secret, &registration.commitment).await?;
//!     let verified = client
//!         .verify(&registration.commitment, &bundle.proof, &bundle.public_signals)
//!         .await?;
//!     println!("Verified: {}", verified);
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "api")]
use crate::api::server::VerifyResponse;
#[cfg(feature = "api")]
use crate::types::{
    Proof, ProofBundle, ProveRequest, RegisterResponse, UserAttributes, VerifyRequest,
};

/// API client
///
/// Provides methods for interacting with the zkauth API server.
#[cfg(feature = "api")]
pub struct ApiClient {
    /// Base URL of the API server
    base_url: String,
    client: reqwest::Client,
}

#[cfg(feature = "api")]
impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API server (e.g., "http://127.0.0.1:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Register a user
    ///
    /// # Arguments
    /// * `attrs` - User attributes to register
    ///
    /// # Returns
    /// `Ok(RegisterResponse)` with the derived secret, nonce, and
    /// commitment if successful, `Err` otherwise
    pub async fn register(
        &self,
        attrs: &UserAttributes,
    ) -> Result<RegisterResponse, Box<dyn std::error::Error>> {
        let url = format!("{}/register", self.base_url);
        let response = self.client.post(&url).json(attrs).send().await?;

        if !response.status().is_success() {
            return Err(format!("API request failed: {}", response.status()).into());
        }

        let result: RegisterResponse = response.json().await?;
        Ok(result)
    }

    /// Generate a proof of secret knowledge
    ///
    /// # Arguments
    /// * `secret_hex` - Secret as hex, with or without `0x` prefix
    /// * `commitment` - Commitment as a decimal string
    ///
    /// # Returns
    /// `Ok(ProofBundle)` if successful, `Err` otherwise
    pub async fn prove(
        &self,
        secret_hex: &str,
        commitment: &str,
    ) -> Result<ProofBundle, Box<dyn std::error::Error>> {
        let url = format!("{}/prove", self.base_url);
        let request = ProveRequest {
            secret_hex: secret_hex.to_string(),
            commitment: commitment.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(format!("API request failed: {}", response.status()).into());
        }

        let result: ProofBundle = response.json().await?;
        Ok(result)
    }

    /// Verify a proof against a commitment
    ///
    /// # Arguments
    /// * `commitment` - Commitment as a decimal string
    /// * `proof` - The proof to check
    /// * `public_signals` - Public signals accompanying the proof
    ///
    /// # Returns
    /// `Ok(true)` when the server accepts the proof, `Ok(false)` when
    /// it answers 401, `Err` on transport or server failures
    pub async fn verify(
        &self,
        commitment: &str,
        proof: &Proof,
        public_signals: &[String],
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let url = format!("{}/verify", self.base_url);
        let request = VerifyRequest {
            commitment: commitment.to_string(),
            proof: proof.clone(),
            public_signals: public_signals.to_vec(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(format!("API request failed: {}", response.status()).into());
        }

        let result: VerifyResponse = response.json().await?;
        Ok(result.verified)
    }

    /// Health check
    ///
    /// # Returns
    /// `Ok(())` if server is healthy, `Err` otherwise
    pub async fn health_check(&self) -> Result<(), Box<dyn std::error::Error>> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(format!("Health check failed: {}", response.status()).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "api")]
    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("http://127.0.0.1:8080");
        assert_eq!(client.base_url, "http://127.0.0.1:8080");
    }
}
