use crate::error::PipelineError;
use depth_ramp::{Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Read a PNG file into an opaque RGB image
pub fn load_rgb_png(path: &Path) -> Result<RgbImage, PipelineError> {
    let bytes = std::fs::read(path)?;
    let image = decode_rgb_png(&bytes)
        .map_err(|e| PipelineError::ImageDecode(format!("{}: {e}", path.display())))?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded PNG"
    );
    Ok(image)
}

/// Decode PNG bytes into an opaque RGB image.
///
/// Palette and sub-byte inputs are expanded, 16-bit channels are reduced to
/// 8 bits, gray is replicated across channels and alpha is discarded.
pub fn decode_rgb_png(bytes: &[u8]) -> Result<RgbImage, String> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(|e| e.to_string())?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(|e| e.to_string())?;
    let data = &buf[..info.buffer_size()];

    let width = info.width as usize;
    let height = info.height as usize;
    let samples = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => return Err("palette was not expanded".to_string()),
    };
    let line = info.line_size;

    let mut pixels = Vec::with_capacity(width * height);
    for row in data.chunks_exact(line).take(height) {
        for px in row[..width * samples].chunks_exact(samples) {
            pixels.push(match samples {
                1 | 2 => Rgb::new(px[0], px[0], px[0]),
                _ => Rgb::new(px[0], px[1], px[2]),
            });
        }
    }
    let decoded = pixels.len();
    RgbImage::from_pixels(pixels, width, height)
        .ok_or_else(|| format!("expected {} pixels, decoded {decoded}", width * height))
}

/// Encode an RGB image as an 8-bit truecolor PNG
pub fn encode_rgb_png(image: &RgbImage) -> Result<Vec<u8>, PipelineError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PipelineError::ImageEncode(format!(
            "cannot encode a {}x{} image",
            image.width(),
            image.height()
        )));
    }
    let width = u32::try_from(image.width())
        .map_err(|_| PipelineError::ImageEncode("image too wide".to_string()))?;
    let height = u32::try_from(image.height())
        .map_err(|_| PipelineError::ImageEncode("image too tall".to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| PipelineError::ImageEncode(e.to_string()))?;
        writer
            .write_image_data(&image.to_rgb_bytes())
            .map_err(|e| PipelineError::ImageEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    // Re-compress with oxipng; keep the fast encoding if that fails
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);
    Ok(optimized)
}

/// Encode and write an RGB image to `path`
pub fn save_rgb_png(image: &RgbImage, path: &Path) -> Result<(), PipelineError> {
    let bytes = encode_rgb_png(image)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}
