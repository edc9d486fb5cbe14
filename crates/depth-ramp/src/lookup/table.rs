//! Color-to-depth lookup table.

use std::collections::HashMap;

use crate::color::{ColorKey, Rgb};

/// A mapping from exact colors to calibrated depth values.
///
/// Iteration follows first-insertion order, so a table built by the
/// calibrator iterates in strip column order. Inserting an existing key
/// replaces its depth but keeps its position.
///
/// # Example
///
/// ```
/// use depth_ramp::{DepthLookupTable, Rgb};
///
/// let mut table = DepthLookupTable::new();
/// table.insert(Rgb::new(0, 0, 255), -300.0);
/// assert_eq!(table.get(Rgb::new(0, 0, 255)), Some(-300.0));
/// assert_eq!(table.get(Rgb::new(1, 2, 3)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepthLookupTable {
    depths: HashMap<ColorKey, f64>,
    order: Vec<ColorKey>,
}

impl DepthLookupTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the depth for `color`.
    pub fn insert(&mut self, color: Rgb, depth: f64) {
        if self.depths.insert(color, depth).is_none() {
            self.order.push(color);
        }
    }

    /// Depth stored for exactly this color.
    #[inline]
    pub fn get(&self, color: Rgb) -> Option<f64> {
        self.depths.get(&color).copied()
    }

    #[inline]
    pub fn contains(&self, color: Rgb) -> bool {
        self.depths.contains_key(&color)
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Rgb, f64)> + '_ {
        self.order.iter().map(move |c| (*c, self.depths[c]))
    }
}

impl FromIterator<(Rgb, f64)> for DepthLookupTable {
    fn from_iter<I: IntoIterator<Item = (Rgb, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (color, depth) in iter {
            table.insert(color, depth);
        }
        table
    }
}
