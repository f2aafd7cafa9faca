use image::imageops::{self, FilterType};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::raster::blend;

/// Where and how strongly the watermark is stamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WatermarkPlacement {
    /// Watermark width as a fraction of the canvas width.
    pub width_ratio: f64,
    /// Global opacity applied on top of the watermark's own alpha.
    pub opacity: f64,
}

impl Default for WatermarkPlacement {
    fn default() -> Self {
        Self {
            width_ratio: 0.25,
            opacity: 0.25,
        }
    }
}

/// Decodes watermark bytes (PNG).
pub fn decode_watermark(bytes: &[u8]) -> Result<RgbaImage, ExportError> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| ExportError::InvalidWatermark(e.to_string()))?
        .to_rgba8();
    if image.width() == 0 || image.height() == 0 {
        return Err(ExportError::InvalidWatermark("image has no pixels".to_string()));
    }
    Ok(image)
}

/// Scales the watermark to `width_ratio` of the canvas width (aspect
/// preserved) and blends it, centered, at `opacity`.
pub fn apply_watermark(
    canvas: &mut RgbaImage,
    watermark: &RgbaImage,
    placement: WatermarkPlacement,
) -> Result<(), ExportError> {
    if watermark.width() == 0 || watermark.height() == 0 {
        return Err(ExportError::InvalidWatermark("image has no pixels".to_string()));
    }

    let target_width = f64::from(canvas.width()) * placement.width_ratio;
    let target_height =
        f64::from(watermark.height()) / f64::from(watermark.width()) * target_width;
    let width = (target_width.round() as u32).max(1);
    let height = (target_height.round() as u32).max(1);

    let scaled = imageops::resize(watermark, width, height, FilterType::Triangle);
    let x0 = ((f64::from(canvas.width()) - f64::from(width)) / 2.0).round() as i64;
    let y0 = ((f64::from(canvas.height()) - f64::from(height)) / 2.0).round() as i64;

    for (x, y, pixel) in scaled.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = f64::from(a) / 255.0 * placement.opacity;
        blend(canvas, x0 + i64::from(x), y0 + i64::from(y), [r, g, b], alpha);
    }

    tracing::debug!(width, height, x = x0, y = y0, "watermark applied");
    Ok(())
}
