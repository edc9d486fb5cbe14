//! Synthetic strip and map images.

use depth_ramp::{Rgb, RgbImage, DEFAULT_LEGEND_HEIGHT, DEFAULT_STRIP_WIDTH};

/// Colors used by the synthetic map
pub mod colors {
    use depth_ramp::Rgb;

    /// First strip column, depth -500
    pub const DEEPEST: Rgb = Rgb::new(0, 0, 0);

    /// Anti-aliased gray missing from the strip
    pub const LIGHT_GRAY: Rgb = Rgb::new(200, 200, 200);

    /// Never calibrated
    pub const MAGENTA: Rgb = Rgb::new(250, 0, 250);

    /// Legend text color, never calibrated
    pub const LEGEND_GREEN: Rgb = Rgb::new(13, 250, 13);
}

/// Strip column `i` gets a unique dark color; the last column is white
pub fn strip_color(i: usize) -> Rgb {
    if i == DEFAULT_STRIP_WIDTH - 1 {
        Rgb::WHITE
    } else {
        Rgb::new((i / 256) as u8, (i % 256) as u8, 0)
    }
}

/// A one-row reference strip of the default width
pub fn reference_strip() -> RgbImage {
    RgbImage::from_pixels(
        (0..DEFAULT_STRIP_WIDTH).map(strip_color).collect(),
        DEFAULT_STRIP_WIDTH,
        1,
    )
    .expect("strip dimensions")
}

/// An 8x6 data area above a default-height legend.
///
/// Left half is the deepest color, right half white with one light gray
/// pixel at (5, 1). Pixels (0, 0) and (1, 0) are magenta.
pub fn sample_map() -> RgbImage {
    let width = 8;
    let data_rows = 6;
    let mut map = RgbImage::filled(width, data_rows + DEFAULT_LEGEND_HEIGHT, colors::LEGEND_GREEN);
    for y in 0..data_rows {
        for x in 0..width {
            let color = if x < width / 2 {
                colors::DEEPEST
            } else {
                Rgb::WHITE
            };
            map.set(x, y, color);
        }
    }
    map.set(5, 1, colors::LIGHT_GRAY);
    map.set(0, 0, colors::MAGENTA);
    map.set(1, 0, colors::MAGENTA);
    map
}

/// Expected downsampled heightmap for [`sample_map`]
pub fn sample_heightmap_rows() -> Vec<Vec<Option<f64>>> {
    vec![vec![Some(-500.0), Some(-500.0), Some(160.0), Some(160.0)]; 3]
}
