//! Logging utilities
//!
//! This module provides logging functionality using the `log` crate.
//!
//! # Example
//!
//! ```rust
//! use zkauth::utils::Logger;
//!
//! // Initialize logger
//! Logger::init();
//!
//! // Log messages
//! Logger::info("Service started");
//! Logger::debug("Debug information");
//! ```

use log::LevelFilter;

/// Logging utilities
///
/// Provides methods for logging messages at different levels.
pub struct Logger;

impl Logger {
    /// Initialize the logger
    ///
    /// Sets up the logger with default configuration. Environment
    /// variables override the default level (e.g., `RUST_LOG=debug`).
    pub fn init() {
        env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Info)
            .init();
    }

    /// Initialize logger with custom log level
    ///
    /// # Arguments
    /// * `level` - Log level filter
    pub fn init_with_level(level: LevelFilter) {
        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }

    /// Log an info message
    ///
    /// # Arguments
    /// * `message` - Message to log
    pub fn info(message: &str) {
        log::info!("{}", message);
    }

    /// Log a debug message
    ///
    /// # Arguments
    /// * `message` - Message to log
    pub fn debug(message: &str) {
        log::debug!("{}", message);
    }

    /// Log a warning message
    ///
    /// # Arguments
    /// * `message` - Message to log
    pub fn warn(message: &str) {
        log::warn!("{}", message);
    }

    /// Log an error message
    ///
    /// # Arguments
    /// * `message` - Message to log
    pub fn error(message: &str) {
        log::error!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_messages() {
        // env_logger can only be initialized once per process, so the
        // logging macros are exercised without calling init here.
        Logger::info("Test info message");
        Logger::debug("Test debug message");
        Logger::warn("Test warning message");
        Logger::error("Test error message");
    }
}
