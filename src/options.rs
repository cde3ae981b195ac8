//! Identicon configuration with defaults and ordered overrides

use image::Rgba;
use log::warn;

use crate::generation::Digest;
use crate::io::configuration::{DEFAULT_BACKGROUND, DEFAULT_IMAGE_SIZE, DEFAULT_RESOLUTION};

/// Immutable settings for one identicon generation
///
/// Start from [`Options::default`] and adjust with the `with_*` methods or a
/// list of [`Override`] records. Zero resolution or image size overrides are
/// discarded and the previous value is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    resolution: usize,
    image_size: u32,
    background: Rgba<u8>,
    foreground: Option<Rgba<u8>>,
    digest: Digest,
}

/// Single configuration change applied on top of existing options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    /// Tiles per side
    Resolution(usize),
    /// Edge length of the image in pixels
    ImageSize(u32),
    /// Color of unset tiles
    Background(Rgba<u8>),
    /// Color of set tiles, replacing the digest-derived color
    Foreground(Rgba<u8>),
    /// Digest function used as entropy source
    Digest(Digest),
}

impl Default for Options {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            image_size: DEFAULT_IMAGE_SIZE,
            background: Rgba(DEFAULT_BACKGROUND),
            foreground: None,
            digest: Digest::default(),
        }
    }
}

impl Options {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply overrides in order, later records winning
    #[must_use]
    pub fn apply(mut self, overrides: impl IntoIterator<Item = Override>) -> Self {
        for record in overrides {
            self.apply_one(record);
        }
        self
    }

    fn apply_one(&mut self, record: Override) {
        match record {
            Override::Resolution(0) => warn!("Ignoring zero grid resolution override"),
            Override::Resolution(resolution) => self.resolution = resolution,
            Override::ImageSize(0) => warn!("Ignoring zero image size override"),
            Override::ImageSize(size) => self.image_size = size,
            Override::Background(color) => self.background = color,
            Override::Foreground(color) => self.foreground = Some(color),
            Override::Digest(digest) => self.digest = digest,
        }
    }

    /// Set the number of tiles per side, ignoring zero
    #[must_use]
    pub fn with_resolution(self, resolution: usize) -> Self {
        self.apply([Override::Resolution(resolution)])
    }

    /// Set the image edge length in pixels, ignoring zero
    #[must_use]
    pub fn with_image_size(self, size: u32) -> Self {
        self.apply([Override::ImageSize(size)])
    }

    /// Set the background color
    #[must_use]
    pub fn with_background(self, color: Rgba<u8>) -> Self {
        self.apply([Override::Background(color)])
    }

    /// Set a fixed foreground color
    #[must_use]
    pub fn with_foreground(self, color: Rgba<u8>) -> Self {
        self.apply([Override::Foreground(color)])
    }

    /// Set the digest function
    #[must_use]
    pub fn with_digest(self, digest: Digest) -> Self {
        self.apply([Override::Digest(digest)])
    }

    /// Tiles per side
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Image edge length in pixels
    pub const fn image_size(&self) -> u32 {
        self.image_size
    }

    /// Color of unset tiles
    pub const fn background(&self) -> Rgba<u8> {
        self.background
    }

    /// Fixed foreground color, `None` when derived from the digest
    pub const fn foreground(&self) -> Option<Rgba<u8>> {
        self.foreground
    }

    /// Digest function
    pub const fn digest(&self) -> Digest {
        self.digest
    }

    /// Edge length of one tile in pixels
    ///
    /// Zero when the resolution exceeds the image size.
    pub fn tile_size(&self) -> u32 {
        u32::try_from(self.resolution).map_or(0, |resolution| self.image_size / resolution)
    }
}
