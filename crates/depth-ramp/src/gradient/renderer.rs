//! Depth grid to preview image.

use crate::color::{Rgb, RgbImage};
use crate::grid::DepthGrid;

use super::ramp::Gradient;

/// Renders a [`DepthGrid`] through a [`Gradient`].
///
/// Missing and NaN cells get the no-data color, mid gray by default, which
/// the diagnostic ramp never produces on its own.
///
/// # Example
///
/// ```
/// use depth_ramp::{DepthGrid, GradientRenderer, Rgb};
///
/// let grid = DepthGrid::from_rows(vec![vec![Some(0.0), None]]).unwrap();
/// let image = GradientRenderer::default().render(&grid);
///
/// assert_eq!(image.get(0, 0), Some(Rgb::WHITE));
/// assert_eq!(image.get(1, 0), Some(Rgb::new(128, 128, 128)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRenderer {
    gradient: Gradient,
    no_data: Rgb,
}

impl GradientRenderer {
    pub fn new(gradient: Gradient) -> Self {
        Self {
            gradient,
            no_data: Rgb::NO_DATA_GRAY,
        }
    }

    /// Override the color used for cells without a depth.
    pub fn no_data_color(mut self, color: Rgb) -> Self {
        self.no_data = color;
        self
    }

    #[inline]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Color for a single cell.
    #[inline]
    pub fn color_for(&self, value: Option<f64>) -> Rgb {
        match value {
            Some(v) if !v.is_nan() => self.gradient.color_at(v),
            _ => self.no_data,
        }
    }

    /// An image with one pixel per grid cell.
    pub fn render(&self, grid: &DepthGrid) -> RgbImage {
        let pixels = grid.cells().iter().map(|&v| self.color_for(v)).collect();
        RgbImage::from_parts(pixels, grid.width(), grid.height())
    }
}

impl Default for GradientRenderer {
    fn default() -> Self {
        Self::new(Gradient::diagnostic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::GradientStop;

    #[test]
    fn test_spec_points() {
        let r = GradientRenderer::default();
        assert_eq!(r.color_for(Some(-500.0)), Rgb::new(0, 0, 0));
        assert_eq!(r.color_for(Some(-400.0)), Rgb::new(0, 0, 127));
        assert_eq!(r.color_for(Some(-600.0)), Rgb::new(0, 0, 0));
        assert_eq!(r.color_for(Some(200.0)), Rgb::new(255, 0, 0));
        assert_eq!(r.color_for(None), Rgb::new(128, 128, 128));
        assert_eq!(r.color_for(Some(f64::NAN)), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_render_shape_and_layout() {
        let grid = DepthGrid::from_rows(vec![
            vec![Some(-500.0), Some(160.0), None],
            vec![Some(0.0), Some(f64::NAN), Some(-300.0)],
        ])
        .unwrap();
        let image = GradientRenderer::default().render(&grid);

        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(
            image.pixels(),
            &[
                Rgb::new(0, 0, 0),
                Rgb::new(255, 0, 0),
                Rgb::new(128, 128, 128),
                Rgb::new(255, 255, 255),
                Rgb::new(128, 128, 128),
                Rgb::new(0, 0, 255),
            ]
        );
    }

    #[test]
    fn test_custom_gradient_and_no_data() {
        let gradient = Gradient::new(vec![
            GradientStop::new(0.0, Rgb::new(0, 0, 0)),
            GradientStop::new(100.0, Rgb::new(0, 200, 0)),
        ])
        .unwrap();
        let r = GradientRenderer::new(gradient).no_data_color(Rgb::new(255, 0, 255));

        assert_eq!(r.color_for(Some(25.0)), Rgb::new(0, 50, 0));
        assert_eq!(r.color_for(None), Rgb::new(255, 0, 255));
    }
}
