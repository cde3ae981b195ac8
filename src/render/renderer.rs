//! Tile matrix rendering with background flood fill and per-tile foreground fill

use image::Rgba;
use log::debug;

use crate::generation::TileMatrix;
use crate::io::configuration::FOREGROUND_DIGEST_OFFSETS;
use crate::options::Options;
use crate::render::image::Image;

/// Render a tile matrix into a square image
///
/// The whole image is first filled with the background color, then every set
/// tile is filled with the foreground color. Tiles are `image_size / resolution`
/// pixels wide; when the image size is not a multiple of the resolution the
/// remaining strip along the right and bottom edges keeps the background.
pub fn render(matrix: &TileMatrix, options: &Options, digest: &[u8]) -> Image {
    let mut image = Image::blank(options.image_size());
    image.fill(options.background());

    let foreground = options
        .foreground()
        .unwrap_or_else(|| derive_foreground(digest));
    let tile_size = options.tile_size();

    debug!(
        "Rendering {} of {} tiles at {tile_size}px with foreground {:?}",
        matrix.set_count(),
        matrix.resolution() * matrix.resolution(),
        foreground.0
    );

    for (col, row) in matrix.set_tiles() {
        image.fill_rect(
            col as u32 * tile_size,
            row as u32 * tile_size,
            tile_size,
            tile_size,
            foreground,
        );
    }

    image
}

/// Foreground color taken from fixed digest positions, fully opaque
///
/// Bytes 1, 2 and 3 of the digest become red, green and blue. Missing bytes
/// read as zero.
pub fn derive_foreground(digest: &[u8]) -> Rgba<u8> {
    let [red, green, blue] =
        FOREGROUND_DIGEST_OFFSETS.map(|offset| digest.get(offset).copied().unwrap_or(0));
    Rgba([red, green, blue, u8::MAX])
}
