//! Square boolean tile matrix with left-right mirror symmetry
//!
//! Tiles are addressed as `[column, row]`. Every tile takes its value from a
//! single digest byte: the tile is set when bit [`TILE_BIT_MASK`] of the byte
//! is set. The byte backing tile `(col, row)` lives at
//! `real_col * resolution + row`, where `real_col` is `col` for the left half
//! and the center column, and `resolution - 1 - col` for the mirrored right
//! half. Mirrored columns therefore read exactly the bytes of their left-half
//! counterpart and the matrix is symmetric across the vertical center.

use std::fmt;

use log::trace;
use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::generation::digest::{Digest, digest_identifier};
use crate::io::configuration::TILE_BIT_MASK;
use crate::io::error::Result;

/// Immutable tile grid of an identicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMatrix {
    /// Tile states indexed by (`col`, `row`)
    tiles: Array2<bool>,
}

impl TileMatrix {
    /// Build the matrix for `resolution` from already stretched digest bytes
    ///
    /// Digest positions past the end of `digest` leave their tiles unset;
    /// callers are expected to supply at least
    /// [`required_digest_bytes`](crate::generation::digest::required_digest_bytes).
    pub fn from_digest(digest: &[u8], resolution: usize) -> Self {
        let half = resolution / 2;
        let mirror_start = resolution - half;

        let tiles = Array2::from_shape_fn((resolution, resolution), |(col, row)| {
            let mirrored = col >= mirror_start;
            let index = byte_index(col, row, resolution, mirrored);
            let value = digest
                .get(index)
                .is_some_and(|byte| byte & TILE_BIT_MASK != 0);
            trace!("Tile {col}:{row} = {value} (digest byte {index}, mirrored: {mirrored})");
            value
        });

        Self { tiles }
    }

    /// Number of tiles per side
    pub fn resolution(&self) -> usize {
        self.tiles.nrows()
    }

    /// State of the tile at (`col`, `row`), `None` outside the grid
    pub fn get(&self, col: usize, row: usize) -> Option<bool> {
        self.tiles.get([col, row]).copied()
    }

    /// Read-only view of all tiles, indexed by (`col`, `row`)
    pub fn view(&self) -> ArrayView2<'_, bool> {
        self.tiles.view()
    }

    /// Tiles of a single column from top to bottom
    pub fn column(&self, col: usize) -> Option<ArrayView1<'_, bool>> {
        (col < self.resolution()).then(|| self.tiles.row(col))
    }

    /// Coordinates (`col`, `row`) of every set tile in column-major order
    pub fn set_tiles(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tiles
            .indexed_iter()
            .filter_map(|(position, &set)| set.then_some(position))
    }

    /// Number of set tiles
    pub fn set_count(&self) -> usize {
        self.tiles.iter().filter(|&&set| set).count()
    }

    /// Check that every column equals its mirror image across the vertical center
    pub fn is_mirror_symmetric(&self) -> bool {
        let resolution = self.resolution();
        (0..resolution / 2).all(|col| self.column(col) == self.column(resolution - 1 - col))
    }
}

impl fmt::Display for TileMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolution = self.resolution();
        for row in 0..resolution {
            for col in 0..resolution {
                let glyph = if self.get(col, row) == Some(true) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{glyph}")?;
            }
            if row + 1 < resolution {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Digest byte backing the tile at (`col`, `row`)
///
/// Columns of the right half are mapped back onto their left-half partner.
pub const fn byte_index(col: usize, row: usize, resolution: usize, mirrored: bool) -> usize {
    let real_col = if mirrored {
        resolution - 1 - col
    } else {
        col
    };
    real_col * resolution + row
}

/// Digest an identifier and derive its tile matrix
///
/// # Errors
///
/// Returns [`IdenticonError::InvalidIdentifier`](crate::IdenticonError::InvalidIdentifier)
/// for an empty identifier and propagates digest stretching failures
pub fn compute_matrix(identifier: &str, resolution: usize, digest: Digest) -> Result<TileMatrix> {
    let bytes = digest_identifier(identifier, resolution, digest)?;
    Ok(TileMatrix::from_digest(&bytes, resolution))
}
