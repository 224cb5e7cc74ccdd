//! Error types for the chord recognition engine

use std::fmt;

/// Errors that can occur at the boundaries of chord recognition
///
/// The recognition path itself never fails: degenerate input resolves to a
/// "no chord" result. These errors are reserved for malformed data handed to
/// the crate (wrong chromagram length, bad configuration, out-of-order frames).
#[derive(Debug, Clone, PartialEq)]
pub enum ChordError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Frame timestamps went backwards
    InvalidTimestamp(String),
}

impl fmt::Display for ChordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ChordError::InvalidTimestamp(msg) => write!(f, "Invalid timestamp: {}", msg),
        }
    }
}

impl std::error::Error for ChordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ChordError::InvalidInput("chromagram must have 12 bins".to_string());
        assert_eq!(err.to_string(), "Invalid input: chromagram must have 12 bins");

        let err = ChordError::InvalidTimestamp("1.0 < 2.0".to_string());
        assert_eq!(err.to_string(), "Invalid timestamp: 1.0 < 2.0");
    }
}
