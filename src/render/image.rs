//! Square RGBA pixel buffer implementing a minimal random-access image contract
//!
//! Pixels are stored non-premultiplied in row-major order with a stride of
//! `4 * size` bytes. Reads outside the bounds return [`TRANSPARENT`] and
//! writes outside the bounds are ignored, so generic image-editing consumers
//! can address the buffer without checking coordinates first.

use image::{ColorType, GenericImageView, Rgba, RgbaImage};

/// Fully transparent black, returned for out-of-bounds reads
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

const CHANNELS: usize = 4;

/// Half-open pixel rectangle `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Top-left corner (inclusive)
    pub min: (u32, u32),
    /// Bottom-right corner (exclusive)
    pub max: (u32, u32),
}

impl Bounds {
    /// Check if a pixel coordinate lies inside the rectangle
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min.0 && x < self.max.0 && y >= self.min.1 && y < self.max.1
    }

    /// Horizontal extent in pixels
    pub const fn width(&self) -> u32 {
        self.max.0.saturating_sub(self.min.0)
    }

    /// Vertical extent in pixels
    pub const fn height(&self) -> u32 {
        self.max.1.saturating_sub(self.min.1)
    }
}

/// Rendered identicon pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    buffer: RgbaImage,
}

impl Image {
    /// Allocate a zeroed (fully transparent) image of `size` x `size` pixels
    pub fn blank(size: u32) -> Self {
        Self {
            buffer: RgbaImage::new(size, size),
        }
    }

    /// Edge length in pixels
    pub fn size(&self) -> u32 {
        self.buffer.width()
    }

    /// Always spans `(0, 0)` to `(size, size)`
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: (0, 0),
            max: self.buffer.dimensions(),
        }
    }

    /// Non-premultiplied 8-bit RGBA
    pub const fn color_model(&self) -> ColorType {
        ColorType::Rgba8
    }

    /// Color of the pixel at (`x`, `y`), transparent outside the bounds
    pub fn pixel_at(&self, x: u32, y: u32) -> Rgba<u8> {
        self.buffer
            .get_pixel_checked(x, y)
            .copied()
            .unwrap_or(TRANSPARENT)
    }

    /// Overwrite the pixel at (`x`, `y`), ignoring coordinates outside the bounds
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if let Some(pixel) = self.buffer.get_pixel_mut_checked(x, y) {
            *pixel = color;
        }
    }

    /// Overwrite every pixel of the rectangle at (`x`, `y`) of the given extent
    ///
    /// The rectangle is clipped to the image bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
        let size = self.size();
        let x_end = x.saturating_add(width).min(size);
        let y_end = y.saturating_add(height).min(size);

        for py in y..y_end {
            for px in x..x_end {
                self.buffer.put_pixel(px, py, color);
            }
        }
    }

    /// Overwrite every pixel of the image
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.buffer.pixels_mut() {
            *pixel = color;
        }
    }

    /// Number of bytes between vertically adjacent pixels
    pub fn stride(&self) -> usize {
        CHANNELS * self.size() as usize
    }

    /// Index of the first byte of the pixel at (`x`, `y`) within [`Self::as_raw`]
    pub fn pixel_offset(&self, x: u32, y: u32) -> Option<usize> {
        self.bounds()
            .contains(x, y)
            .then(|| y as usize * self.stride() + x as usize * CHANNELS)
    }

    /// Flat RGBA bytes in row-major order
    pub fn as_raw(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// Borrow the underlying image buffer for encoding
    pub const fn as_rgba_image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Take ownership of the underlying image buffer
    pub fn into_rgba_image(self) -> RgbaImage {
        self.buffer
    }
}

impl GenericImageView for Image {
    type Pixel = Rgba<u8>;

    fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        let (width, height) = self.buffer.dimensions();
        (0, 0, width, height)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        self.pixel_at(x, y)
    }
}
