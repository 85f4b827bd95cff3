//! API server
//!
//! This module provides HTTP/REST API server functionality using Axum.
//!
//! Endpoints:
//! - `GET /health` - liveness and version
//! - `POST /register` - validate attributes, return secret/nonce/commitment
//! - `POST /prove` - generate a proof bundle from secret and commitment
//! - `POST /verify` - check a proof against a commitment
//!
//! Client errors (bad input, unsatisfiable witness) map to 400, a
//! failed verification maps to 401 with the opaque `unauthorized`
//! body, everything else is a 500.
//!
//! # Example
//!
//! ```rust,no_run
//! use zkauth::api::ApiServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = ApiServer::new("127.0.0.1:8080".parse().unwrap());
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#[cfg(feature = "api")]
use std::net::SocketAddr;
#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "api")]
use tower_http::cors::CorsLayer;

#[cfg(feature = "api")]
use crate::auth::AuthService;
#[cfg(feature = "api")]
use crate::error::Error;
#[cfg(feature = "api")]
use crate::types::{ProveRequest, RegisterResponse, UserAttributes, VerifyRequest};

/// Error body returned by all failing endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Verification response wire shape
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Whether the proof authenticated against the commitment
    pub verified: bool,
}

/// API server
///
/// Serves the register/prove/verify protocol over HTTP. One shared
/// [`AuthService`] backs all requests.
#[cfg(feature = "api")]
pub struct ApiServer {
    /// Server address
    addr: SocketAddr,
    service: Arc<AuthService>,
}

#[cfg(feature = "api")]
impl ApiServer {
    /// Create a server with a fresh ephemeral key pair
    ///
    /// # Arguments
    /// * `addr` - Socket address to bind to
    pub fn new(addr: SocketAddr) -> Self {
        Self::with_service(addr, Arc::new(AuthService::ephemeral()))
    }

    /// Create a server over an existing service
    ///
    /// Use this with keys loaded from disk so proofs survive restarts.
    pub fn with_service(addr: SocketAddr, service: Arc<AuthService>) -> Self {
        Self { addr, service }
    }

    /// Build the router; exposed separately for in-process testing
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/register", post(register))
            .route("/prove", post(prove))
            .route("/verify", post(verify))
            .layer(CorsLayer::permissive())
            .with_state(self.service.clone())
    }

    /// Start the API server
    ///
    /// This method starts the HTTP server and blocks until shutdown.
    ///
    /// # Returns
    /// `Ok(())` if server starts successfully, `Err` otherwise
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        println!("🚀 API server listening on {}", self.addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(feature = "api")]
fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        Error::Validation(_) | Error::Witness(_) => StatusCode::BAD_REQUEST,
        Error::Authentication => StatusCode::UNAUTHORIZED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("request failed: {}", err);
    }
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Health check endpoint
#[cfg(feature = "api")]
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
    }))
}

/// Register endpoint
#[cfg(feature = "api")]
async fn register(
    State(service): State<Arc<AuthService>>,
    Json(attrs): Json<UserAttributes>,
) -> Result<Json<RegisterResponse>, (StatusCode, Json<ErrorResponse>)> {
    let registration = service.register(&attrs).map_err(error_response)?;
    Ok(Json(registration.to_response()))
}

/// Prove endpoint
#[cfg(feature = "api")]
async fn prove(
    State(service): State<Arc<AuthService>>,
    Json(request): Json<ProveRequest>,
) -> Result<Json<crate::types::ProofBundle>, (StatusCode, Json<ErrorResponse>)> {
    let bundle = service
        .prove(&request.secret_hex, &request.commitment)
        .map_err(error_response)?;
    Ok(Json(bundle))
}

/// Verify endpoint
#[cfg(feature = "api")]
async fn verify(
    State(service): State<Arc<AuthService>>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, (StatusCode, Json<ErrorResponse>)> {
    let verified = service
        .verify(&request.commitment, &request.proof, &request.public_signals)
        .map_err(error_response)?;
    Ok(Json(VerifyResponse { verified }))
}
