//! Identicon aggregate tying identifier, digest, tile matrix and pixels together

use image::{GenericImageView, Rgba};
use log::debug;

use crate::generation::TileMatrix;
use crate::generation::digest::digest_identifier;
use crate::io::error::Result;
use crate::options::Options;
use crate::render::{Image, render};

/// Deterministic avatar generated from an identifier string
///
/// All parts are computed by [`Identicon::new`]; the same identifier and
/// options always produce the same digest, matrix and pixels.
#[derive(Debug, Clone)]
pub struct Identicon {
    id: String,
    options: Options,
    digest: Vec<u8>,
    matrix: TileMatrix,
    image: Image,
}

impl Identicon {
    /// Generate the identicon for `id` with the given options
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::InvalidIdentifier`](crate::IdenticonError::InvalidIdentifier)
    /// if `id` is empty, and propagates failures of the digest function
    pub fn new(id: impl Into<String>, options: Options) -> Result<Self> {
        let id = id.into();
        let digest = digest_identifier(&id, options.resolution(), options.digest())?;
        let matrix = TileMatrix::from_digest(&digest, options.resolution());
        let image = render(&matrix, &options, &digest);

        debug!(
            "Generated {}x{} identicon for '{id}' with {} digest {}",
            options.resolution(),
            options.resolution(),
            options.digest(),
            hex::encode(&digest)
        );

        Ok(Self {
            id,
            options,
            digest,
            matrix,
            image,
        })
    }

    /// Generate the identicon for `id` with default options
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::InvalidIdentifier`](crate::IdenticonError::InvalidIdentifier)
    /// if `id` is empty
    pub fn with_defaults(id: impl Into<String>) -> Result<Self> {
        Self::new(id, Options::default())
    }

    /// Identifier the identicon was generated from
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Options used for generation
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Stretched digest bytes
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Stretched digest as lowercase hexadecimal
    pub fn hex_digest(&self) -> String {
        hex::encode(&self.digest)
    }

    /// Tile matrix
    pub const fn matrix(&self) -> &TileMatrix {
        &self.matrix
    }

    /// Rendered pixels
    pub const fn image(&self) -> &Image {
        &self.image
    }

    /// Mutable access to the rendered pixels for direct pixel writes
    pub const fn image_mut(&mut self) -> &mut Image {
        &mut self.image
    }

    /// Discard everything but the rendered pixels
    pub fn into_image(self) -> Image {
        self.image
    }
}

impl GenericImageView for Identicon {
    type Pixel = Rgba<u8>;

    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        GenericImageView::bounds(&self.image)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        self.image.pixel_at(x, y)
    }
}
