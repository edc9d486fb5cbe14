//! In-memory RGB raster.
//!
//! Decoding and encoding live outside this crate; everything here works on
//! an already-loaded `height x width` array of [`Rgb`] in row-major order.

use super::rgb::Rgb;

/// A row-major RGB raster.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl RgbImage {
    /// Create an image filled with one color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            pixels: vec![color; width * height],
            width,
            height,
        }
    }

    /// Wrap row-major pixels.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(pixels: Vec<Rgb>, width: usize, height: usize) -> Option<Self> {
        (pixels.len() == width * height).then(|| Self::from_parts(pixels, width, height))
    }

    /// Wrap pixels whose length the caller already guarantees.
    pub(crate) fn from_parts(pixels: Vec<Rgb>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Build an image from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// Returns `None` if the buffer length is not `width * height * 3`.
    pub fn from_rgb_bytes(bytes: &[u8], width: usize, height: usize) -> Option<Self> {
        if bytes.len() != width * height * 3 {
            return None;
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect();
        Some(Self::from_parts(pixels, width, height))
    }

    /// Build an image from nested rows. Returns `None` for ragged input.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let pixels = rows.into_iter().flatten().collect();
        Some(Self::from_parts(pixels, width, height))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Rgb] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y * self.width + x] = color;
    }

    /// A view with the bottom `rows` removed.
    ///
    /// Removing more rows than exist leaves an empty image.
    pub fn without_bottom_rows(&self, rows: usize) -> RgbImage {
        let height = self.height.saturating_sub(rows);
        RgbImage {
            pixels: self.pixels[..height * self.width].to_vec(),
            width: self.width,
            height,
        }
    }

    /// Packed `[R, G, B, ...]` bytes, suitable for an 8-bit RGB encoder.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            out.extend_from_slice(&p.to_bytes());
        }
        out
    }
}
