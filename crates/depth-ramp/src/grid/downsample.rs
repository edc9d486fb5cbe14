//! Block-average downsampling that tolerates missing cells.
//!
//! Each output cell is the mean of the present values in its
//! `factor x factor` input block. A block is only `None` when every one of
//! its cells is, so a few unmapped legend or noise pixels never blank an
//! otherwise valid coarse cell. Rows and columns past the last complete
//! block are dropped.

use super::depth_grid::DepthGrid;
use super::error::GridError;

/// Default reduction factor for persisted heightmaps.
pub const DEFAULT_DOWNSAMPLE_FACTOR: usize = 2;

/// Reduces a [`DepthGrid`] by an integer factor.
///
/// # Example
///
/// ```
/// use depth_ramp::{BlockDownsampler, DepthGrid};
///
/// let grid = DepthGrid::from_rows(vec![
///     vec![Some(1.0), Some(3.0)],
///     vec![None, None],
/// ])
/// .unwrap();
///
/// let coarse = BlockDownsampler::new(2).unwrap().downsample(&grid);
/// assert_eq!(coarse.to_rows(), vec![vec![Some(2.0)]]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDownsampler {
    factor: usize,
}

impl BlockDownsampler {
    /// # Errors
    ///
    /// [`GridError::ZeroFactor`] if `factor` is zero.
    pub fn new(factor: usize) -> Result<Self, GridError> {
        if factor == 0 {
            return Err(GridError::ZeroFactor);
        }
        Ok(Self { factor })
    }

    #[inline]
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Produce a `floor(H / factor) x floor(W / factor)` grid.
    pub fn downsample(&self, grid: &DepthGrid) -> DepthGrid {
        let f = self.factor;
        let out_h = grid.height() / f;
        let out_w = grid.width() / f;
        let src = grid.cells();
        let src_w = grid.width();

        let mut cells = Vec::with_capacity(out_h * out_w);
        for by in 0..out_h {
            for bx in 0..out_w {
                let mut sum = 0.0;
                let mut n = 0usize;
                for dy in 0..f {
                    let row = (by * f + dy) * src_w;
                    for dx in 0..f {
                        if let Some(v) = src[row + bx * f + dx] {
                            sum += v;
                            n += 1;
                        }
                    }
                }
                cells.push((n > 0).then(|| sum / n as f64));
            }
        }

        DepthGrid::from_parts(cells, out_w, out_h)
    }
}

impl Default for BlockDownsampler {
    fn default() -> Self {
        Self {
            factor: DEFAULT_DOWNSAMPLE_FACTOR,
        }
    }
}
