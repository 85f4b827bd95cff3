//! Helper functions
//!
//! This module provides common utility functions used throughout the codebase.
//!
//! # Example
//!
//! ```rust
//! use zkauth::utils::Helpers;
//!
//! // Format duration
//! let formatted = Helpers::format_duration(1_234_000_000);
//! println!("Time: {}", formatted); // "1.23s"
//! ```

use std::time::Duration;

/// Helper functions
///
/// Provides common utility functions.
pub struct Helpers;

impl Helpers {
    /// Format duration to human-readable string
    ///
    /// # Arguments
    /// * `nanos` - Duration in nanoseconds
    ///
    /// # Returns
    /// Formatted string (e.g., "1.23s", "500ms")
    ///
    /// # Example
    /// ```
    /// use zkauth::utils::Helpers;
    ///
    /// let formatted = Helpers::format_duration(1_234_000_000);
    /// assert!(formatted.contains("s"));
    /// ```
    pub fn format_duration(nanos: u64) -> String {
        let duration = Duration::from_nanos(nanos);
        let seconds = duration.as_secs();
        let millis = duration.as_millis();

        if seconds >= 1 {
            let subsec_nanos = duration.subsec_nanos();
            let total_seconds = seconds as f64 + subsec_nanos as f64 / 1_000_000_000.0;
            format!("{:.2}s", total_seconds)
        } else if millis >= 1 {
            format!("{}ms", millis)
        } else {
            format!("{}ns", nanos)
        }
    }

    /// Format duration from Duration struct
    ///
    /// # Arguments
    /// * `duration` - Duration struct
    ///
    /// # Returns
    /// Formatted string
    pub fn format_duration_from(duration: Duration) -> String {
        Self::format_duration(duration.as_nanos() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_seconds() {
        assert_eq!(Helpers::format_duration(1_500_000_000), "1.50s");
    }

    #[test]
    fn test_format_duration_millis() {
        assert_eq!(Helpers::format_duration(42_000_000), "42ms");
    }

    #[test]
    fn test_format_duration_nanos() {
        assert_eq!(Helpers::format_duration(512), "512ns");
    }

    #[test]
    fn test_format_duration_from() {
        let formatted = Helpers::format_duration_from(Duration::from_millis(5));
        assert_eq!(formatted, "5ms");
    }
}
