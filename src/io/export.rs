//! PNG export of single identicons and banner composition

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage, imageops};

use crate::identicon::Identicon;
use crate::io::configuration::{BANNER_BACKGROUND, BANNER_ROWS, BANNER_SPACING, OUTPUT_EXTENSION};
use crate::io::error::{IdenticonError, Result, invalid_configuration};

/// Output file for an identifier inside `directory`
///
/// Characters other than ASCII alphanumerics, `-`, `_` and `.` are replaced
/// with `_` so any identifier maps to a flat file name.
pub fn output_path(directory: &Path, id: &str) -> PathBuf {
    let stem: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    directory.join(format!("{stem}.{OUTPUT_EXTENSION}"))
}

/// Save an identicon as PNG, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(identicon: &Identicon, path: &Path) -> Result<()> {
    save_rgba(identicon.image().as_rgba_image(), path)
}

/// Arrange identicons in rows on a white canvas
///
/// Identicons are placed left to right over [`BANNER_ROWS`] rows, separated
/// and framed by [`BANNER_SPACING`] pixels. Cells are sized for the largest
/// identicon.
///
/// # Errors
///
/// Returns an error if `identicons` is empty
pub fn compose_banner(identicons: &[Identicon]) -> Result<RgbaImage> {
    if identicons.is_empty() {
        return Err(invalid_configuration(
            "banner",
            &0,
            &"at least one identicon is required",
        ));
    }

    let cell = identicons
        .iter()
        .map(|identicon| identicon.image().size())
        .max()
        .unwrap_or(0);
    let columns = identicons.len().div_ceil(BANNER_ROWS);
    let rows = identicons.len().div_ceil(columns);

    let width = columns as u32 * (cell + BANNER_SPACING) + BANNER_SPACING;
    let height = rows as u32 * (cell + BANNER_SPACING) + BANNER_SPACING;
    let mut banner = RgbaImage::from_pixel(width, height, Rgba(BANNER_BACKGROUND));

    for (index, identicon) in identicons.iter().enumerate() {
        let x = BANNER_SPACING + (index % columns) as u32 * (cell + BANNER_SPACING);
        let y = BANNER_SPACING + (index / columns) as u32 * (cell + BANNER_SPACING);
        imageops::overlay(&mut banner, identicon.image(), i64::from(x), i64::from(y));
    }

    Ok(banner)
}

/// Compose a banner and save it as PNG
///
/// # Errors
///
/// Returns an error if `identicons` is empty or the banner cannot be written
pub fn save_banner(identicons: &[Identicon], path: &Path) -> Result<()> {
    let banner = compose_banner(identicons)?;
    save_rgba(&banner, path)
}

fn save_rgba(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IdenticonError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| IdenticonError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
