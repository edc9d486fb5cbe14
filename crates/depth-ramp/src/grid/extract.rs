//! Full-image extraction: legend crop, then per-pixel classification.

use crate::classify::{Classification, DepthClassifier, UnknownColorTally};
use crate::color::RgbImage;

use super::depth_grid::DepthGrid;

/// Rows at the bottom of the source maps reserved for the color legend.
pub const DEFAULT_LEGEND_HEIGHT: usize = 50;

/// Result of one extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Dense depth grid, `(H - legend) x W`
    pub grid: DepthGrid,
    /// Unmapped colors and their counts
    pub tally: UnknownColorTally,
    /// Cells resolved by exact match
    pub found: usize,
    /// Cells resolved through the near-white fallback
    pub substituted: usize,
}

/// Converts a map image into a dense [`DepthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightmapExtractor {
    legend_height: usize,
}

impl HeightmapExtractor {
    pub fn new(legend_height: usize) -> Self {
        Self { legend_height }
    }

    #[inline]
    pub fn legend_height(&self) -> usize {
        self.legend_height
    }

    /// Drop the legend rows and classify every remaining pixel in
    /// row-major order.
    ///
    /// A legend taller than the image leaves a grid with no rows.
    pub fn extract(&self, image: &RgbImage, classifier: &DepthClassifier<'_>) -> Extraction {
        let body = image.without_bottom_rows(self.legend_height);
        let mut tally = UnknownColorTally::new();
        let mut found = 0;
        let mut substituted = 0;

        let cells: Vec<Option<f64>> = body
            .pixels()
            .iter()
            .map(|&color| {
                let result = classifier.classify_tallied(color, &mut tally);
                match result {
                    Classification::Found(_) => found += 1,
                    Classification::Substituted(_) => substituted += 1,
                    Classification::Missing => {}
                }
                result.depth()
            })
            .collect();

        let grid = DepthGrid::from_parts(cells, body.width(), body.height());

        Extraction {
            grid,
            tally,
            found,
            substituted,
        }
    }
}

impl Default for HeightmapExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_LEGEND_HEIGHT)
    }
}
