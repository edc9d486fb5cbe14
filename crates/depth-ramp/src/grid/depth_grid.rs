//! Dense 2D grid of optional depths.

use super::error::GridError;

/// A row-major `height x width` grid where `None` means "no depth".
#[derive(Debug, Clone, PartialEq)]
pub struct DepthGrid {
    cells: Vec<Option<f64>>,
    width: usize,
    height: usize,
}

/// Summary of the present cells in a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStats {
    /// Cells holding a depth
    pub present: usize,
    /// Cells without a depth
    pub missing: usize,
    /// Smallest present depth, if any
    pub min: Option<f64>,
    /// Largest present depth, if any
    pub max: Option<f64>,
}

impl DepthGrid {
    /// A grid with every cell `None`.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: vec![None; width * height],
            width,
            height,
        }
    }

    /// Wrap cells the caller already sized to `width * height`.
    pub(super) fn from_parts(cells: Vec<Option<f64>>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            cells.len(),
            width * height,
            "cell count ({}) must match width * height ({}x{})",
            cells.len(),
            width,
            height,
        );
        Self {
            cells,
            width,
            height,
        }
    }

    /// Wrap row-major cells.
    ///
    /// # Errors
    ///
    /// [`GridError::DimensionMismatch`] if `cells.len() != width * height`.
    pub fn from_cells(
        cells: Vec<Option<f64>>,
        width: usize,
        height: usize,
    ) -> Result<Self, GridError> {
        if cells.len() != width * height {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build from nested rows, the persisted layout.
    ///
    /// # Errors
    ///
    /// [`GridError::Ragged`] if rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged {
                row,
                expected: width,
                actual: r.len(),
            });
        }
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    /// Nested rows, the persisted layout.
    pub fn to_rows(&self) -> Vec<Vec<Option<f64>>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.cells.chunks(self.width).map(<[_]>::to_vec).collect()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Option<f64>] {
        &self.cells
    }

    /// Cell at column `x`, row `y`; outer `None` when out of bounds.
    ///
    /// Same argument order as [`RgbImage::get`](crate::RgbImage::get).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Option<f64>> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Overwrite the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: Option<f64>) {
        assert!(x < self.width && y < self.height, "cell out of bounds");
        self.cells[y * self.width + x] = value;
    }

    /// Count present/missing cells and find the depth range.
    pub fn stats(&self) -> GridStats {
        let mut present = 0;
        let mut min: Option<f64> = None;
        let mut max: Option<f64> = None;
        for v in self.cells.iter().flatten() {
            present += 1;
            min = Some(min.map_or(*v, |m| m.min(*v)));
            max = Some(max.map_or(*v, |m| m.max(*v)));
        }
        GridStats {
            present,
            missing: self.cells.len() - present,
            min,
            max,
        }
    }
}
