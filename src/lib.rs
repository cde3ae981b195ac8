//! Deterministic identicon generation from identifier strings
//!
//! An identifier is digested, the digest is turned into a square tile matrix
//! with left-right mirror symmetry, and the matrix is rendered into an RGBA
//! pixel buffer. The same identifier and options always yield the same image.

#![forbid(unsafe_code)]

/// Digest functions and tile matrix generation
pub mod generation;
/// Identicon aggregate and introspection
pub mod identicon;
/// Command-line interface, export and error handling
pub mod io;
/// Generation options with defaults and overrides
pub mod options;
/// Pixel buffer and tile rendering
pub mod render;

pub use generation::{Digest, TileMatrix};
pub use identicon::Identicon;
pub use io::error::{IdenticonError, Result};
pub use options::{Options, Override};
pub use render::Image;
