//! Error types for identicon construction and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all identicon operations
#[derive(Debug)]
pub enum IdenticonError {
    /// The identifier was empty
    ///
    /// Raised before any digest is computed; no partial identicon exists.
    InvalidIdentifier,

    /// An explicitly supplied configuration value could not be used
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value as supplied by the caller
        value: String,
        /// Explanation of why the value was rejected
        reason: String,
    },

    /// Failed to encode or write an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for IdenticonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier => write!(f, "Invalid identifier: must not be empty"),
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for IdenticonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidIdentifier | Self::InvalidConfiguration { .. } => None,
        }
    }
}

/// Convenience type alias for identicon results
pub type Result<T> = std::result::Result<T, IdenticonError>;

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> IdenticonError {
    IdenticonError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
