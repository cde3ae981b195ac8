//! Identifier to tile matrix pipeline
//!
//! This module contains the entropy side of identicon generation:
//! - Stateless digest functions and digest stretching
//! - The mirrored boolean tile matrix derived from a digest

/// Digest functions and stretching of short digests
pub mod digest;
/// Tile matrix with left-right mirror symmetry
pub mod matrix;

pub use digest::Digest;
pub use matrix::{TileMatrix, compute_matrix};
