//! Utilities module
//!
//! This module provides utility functions for common operations:
//! - Helper functions
//! - Logging utilities
//!
//! # Example
//!
//! ```rust
//! use zkauth::utils::{Logger, Helpers};
//!
//! // Initialize logger
//! Logger::init();
//!
//! // Helper function
//! let formatted = Helpers::format_duration(1_000_000);
//! ```

pub mod helpers;
pub mod logger;

// Re-export main types for convenience
pub use helpers::Helpers;
pub use logger::Logger;
