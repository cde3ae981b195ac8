//! Tile matrix to pixel buffer rendering
//!
//! This module contains the output side of identicon generation:
//! - The RGBA pixel buffer and its random-access pixel contract
//! - Flood filling of background and foreground tiles

/// RGBA pixel buffer with bounds-safe pixel access
pub mod image;
/// Rendering of a tile matrix into an image
pub mod renderer;

pub use self::image::{Bounds, Image, TRANSPARENT};
pub use renderer::{derive_foreground, render};
