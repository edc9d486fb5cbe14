//! Per-pixel depth classification with the near-white fallback.
//!
//! Anti-aliasing and compression leave a halo of light grays around white
//! regions that no reference strip calibrates. Rather than listing every
//! such shade, a pixel whose channels all lie inside the [`NearWhiteBand`]
//! and that has no exact table entry is looked up as pure white instead.
//!
//! The fallback cannot tell a noisy legend pixel from genuinely near-white
//! terrain; both receive white's depth. That conflation is kept as-is.

use crate::color::Rgb;
use crate::lookup::DepthLookupTable;

use super::tally::UnknownColorTally;

/// Inclusive per-channel bounds that qualify a color for the white fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearWhiteBand {
    pub low: u8,
    pub high: u8,
}

impl NearWhiteBand {
    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    /// True if every channel of `color` lies within the band.
    #[inline]
    pub fn contains(&self, color: Rgb) -> bool {
        color.channels_within(self.low, self.high)
    }
}

impl Default for NearWhiteBand {
    fn default() -> Self {
        Self::new(192, 255)
    }
}

/// Outcome of classifying one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// The exact color is in the table
    Found(f64),
    /// The color was absent but near-white; this is white's depth
    Substituted(f64),
    /// No depth, even after the fallback
    Missing,
}

impl Classification {
    /// The depth, if any.
    #[inline]
    pub fn depth(self) -> Option<f64> {
        match self {
            Classification::Found(d) | Classification::Substituted(d) => Some(d),
            Classification::Missing => None,
        }
    }

    #[inline]
    pub fn is_missing(self) -> bool {
        matches!(self, Classification::Missing)
    }
}

/// Maps colors to depths through a [`DepthLookupTable`].
///
/// # Example
///
/// ```
/// use depth_ramp::{Classification, DepthClassifier, DepthLookupTable, Rgb};
///
/// let mut table = DepthLookupTable::new();
/// table.insert(Rgb::WHITE, 0.0);
/// table.insert(Rgb::new(0, 0, 255), -300.0);
///
/// let classifier = DepthClassifier::new(&table);
/// assert_eq!(classifier.classify(Rgb::new(0, 0, 255)), Classification::Found(-300.0));
/// assert_eq!(classifier.classify(Rgb::new(230, 230, 230)), Classification::Substituted(0.0));
/// assert_eq!(classifier.classify(Rgb::new(10, 20, 30)), Classification::Missing);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DepthClassifier<'a> {
    table: &'a DepthLookupTable,
    band: NearWhiteBand,
}

impl<'a> DepthClassifier<'a> {
    /// Classifier with the default 192..=255 near-white band.
    pub fn new(table: &'a DepthLookupTable) -> Self {
        Self::with_band(table, NearWhiteBand::default())
    }

    pub fn with_band(table: &'a DepthLookupTable, band: NearWhiteBand) -> Self {
        Self { table, band }
    }

    #[inline]
    pub fn table(&self) -> &'a DepthLookupTable {
        self.table
    }

    #[inline]
    pub fn band(&self) -> NearWhiteBand {
        self.band
    }

    /// Classify one color without side effects.
    pub fn classify(&self, color: Rgb) -> Classification {
        if let Some(depth) = self.table.get(color) {
            return Classification::Found(depth);
        }
        if self.band.contains(color) {
            if let Some(depth) = self.table.get(Rgb::WHITE) {
                return Classification::Substituted(depth);
            }
        }
        Classification::Missing
    }

    /// Classify and record the original color in `tally` when missing.
    pub fn classify_tallied(&self, color: Rgb, tally: &mut UnknownColorTally) -> Classification {
        let result = self.classify(color);
        if result.is_missing() {
            tally.record(color);
        }
        result
    }
}
