//! Per-color counts of pixels that could not be classified.

use std::collections::HashMap;

use crate::color::Rgb;

/// Occurrence counts of unmapped colors.
///
/// Purely diagnostic: nothing downstream reads it. Extraction returns one
/// per call instead of accumulating into shared state, so separate runs
/// (or tiles) can be merged afterwards with [`merge`](Self::merge).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownColorTally {
    counts: HashMap<Rgb, usize>,
}

impl UnknownColorTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `color`.
    #[inline]
    pub fn record(&mut self, color: Rgb) {
        *self.counts.entry(color).or_insert(0) += 1;
    }

    /// Occurrences recorded for `color`.
    #[inline]
    pub fn count(&self, color: Rgb) -> usize {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Number of distinct unmapped colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total unmapped pixels across all colors.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Add every count from `other` into `self`.
    pub fn merge(&mut self, other: &UnknownColorTally) {
        for (&color, &n) in &other.counts {
            *self.counts.entry(color).or_insert(0) += n;
        }
    }

    /// Entries ordered by descending count, ties broken by color.
    pub fn sorted_by_frequency(&self) -> Vec<(Rgb, usize)> {
        let mut entries: Vec<(Rgb, usize)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}
