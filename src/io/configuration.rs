//! Generation constants and runtime configuration defaults

// Defaults for configurable parameters
/// Number of tiles per side of the grid
pub const DEFAULT_RESOLUTION: usize = 5;
/// Edge length of the rendered image in pixels (divisible by the default resolution)
pub const DEFAULT_IMAGE_SIZE: u32 = 100;
/// Light gray, fully opaque
pub const DEFAULT_BACKGROUND: [u8; 4] = [240, 240, 240, 255];

// Digest layout
/// Digest positions feeding the red, green and blue channels of a derived foreground
pub const FOREGROUND_DIGEST_OFFSETS: [usize; 3] = [1, 2, 3];
/// Lower bound on the stretched digest length so the foreground bytes always exist
pub const MIN_DIGEST_BYTES: usize = 4;
/// Bit of a digest byte that switches its tile on
pub const TILE_BIT_MASK: u8 = 0b10;

// Output settings
/// File extension of exported identicons
pub const OUTPUT_EXTENSION: &str = "png";
/// Gap between identicons and around the border of a banner, in pixels
pub const BANNER_SPACING: u32 = 15;
/// Banner canvas color
pub const BANNER_BACKGROUND: [u8; 4] = [255, 255, 255, 255];
/// Number of rows identicons are distributed over in a banner
pub const BANNER_ROWS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
