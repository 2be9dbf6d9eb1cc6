//! Host-level configuration errors.
//!
//! The stepping core itself never fails: invalid sizes are clamped at the
//! boundary and stepping a finished algorithm is a no-op. Errors only arise
//! at the edges, when command-line configuration is parsed.

use std::fmt;

/// Errors surfaced while configuring the visualizer.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The requested algorithm is not one the host knows about.
    UnknownAlgorithm { name: String },

    /// A numeric argument could not be parsed.
    InvalidNumber { flag: String, value: String },

    /// A flag was given without its required value.
    MissingValue { flag: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownAlgorithm { name } => {
                write!(
                    f,
                    "Unknown algorithm '{}' (expected bubble, quick, or backtracker)",
                    name
                )
            }
            ConfigError::InvalidNumber { flag, value } => {
                write!(f, "Invalid value '{}' for {} (expected a number)", value, flag)
            }
            ConfigError::MissingValue { flag } => {
                write!(f, "Missing value for {}", flag)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
