//! 8-bit RGB color and its canonical `"R,G,B"` key form.
//!
//! Lookup tables are persisted with textual keys, so [`Rgb`] implements
//! [`Display`](std::fmt::Display) and [`FromStr`] for exactly that form.
//! The in-memory table keys on the struct itself; the text form only
//! exists at the persistence boundary.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// An 8-bit sRGB triple as stored in the source images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

/// A color used as a lookup key.
///
/// Keys are plain colors; the alias documents intent at call sites that
/// deal with table keys rather than pixels.
pub type ColorKey = Rgb;

impl Rgb {
    /// Pure white, the substitution target for near-white noise.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Mid gray, used to mark cells without data in previews.
    pub const NO_DATA_GRAY: Self = Self::new(128, 128, 128);

    /// Create a color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// True if every channel lies in `low..=high`.
    #[inline]
    pub fn channels_within(self, low: u8, high: u8) -> bool {
        self.to_bytes().iter().all(|&c| (low..=high).contains(&c))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    /// Canonical key form: decimal channels joined by commas, no spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse the canonical `"R,G,B"` key form.
    ///
    /// Whitespace around each channel is tolerated so hand-edited tables
    /// still load.
    ///
    /// # Examples
    ///
    /// ```
    /// use depth_ramp::Rgb;
    ///
    /// let c: Rgb = "12,34,56".parse().unwrap();
    /// assert_eq!(c, Rgb::new(12, 34, 56));
    /// assert_eq!(c.to_string(), "12,34,56");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(ParseColorError::ChannelCount(parts.len()));
        }
        let r = parts[0].trim().parse::<u8>()?;
        let g = parts[1].trim().parse::<u8>()?;
        let b = parts[2].trim().parse::<u8>()?;
        Ok(Self::new(r, g, b))
    }
}
