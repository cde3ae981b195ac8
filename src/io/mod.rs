//! Command-line front end, export and error handling

/// Command-line interface for batch identicon generation
pub mod cli;
/// Generation defaults and output constants
pub mod configuration;
/// Error types
pub mod error;
/// PNG export and banner composition
pub mod export;
/// Progress display for batch generation
pub mod progress;
