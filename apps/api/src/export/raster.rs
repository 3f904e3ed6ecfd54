//! Surface rasterization — pluggable, trait-based like the optimizer seam.
//!
//! The browser owns the rendered preview, so the default backend accepts the
//! client's capture upload and normalizes it: decode, then composite any
//! transparency onto opaque white, which the paged output requires regardless
//! of the surface's own background.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

/// The reference capture upscale factor for crisper output.
pub const CAPTURE_SCALE: u32 = 2;

/// The uploaded preview capture: encoded image bytes plus the scale the
/// client captured at. The scale cancels out of the pagination arithmetic and
/// only affects output resolution.
#[derive(Debug, Clone)]
pub struct SurfaceCapture {
    pub png: Bytes,
    pub scale: u32,
}

/// Opaque RGB raster, rows top-down, 3 bytes per pixel.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl RasterImage {
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let at = ((y * self.width + x) * 3) as usize;
        [self.rgb[at], self.rgb[at + 1], self.rgb[at + 2]]
    }
}

/// Rasterizer seam held as `Arc<dyn SurfaceRasterizer>` in app state, so a
/// server-side headless renderer can replace the capture path without
/// touching the export handler.
#[async_trait]
pub trait SurfaceRasterizer: Send + Sync {
    async fn rasterize(&self, capture: &SurfaceCapture) -> Result<RasterImage, AppError>;
}

/// Default backend: decodes the client capture and flattens it onto white.
pub struct CaptureRasterizer;

#[async_trait]
impl SurfaceRasterizer for CaptureRasterizer {
    async fn rasterize(&self, capture: &SurfaceCapture) -> Result<RasterImage, AppError> {
        let decoded = image::load_from_memory(&capture.png)
            .map_err(|e| AppError::Export(format!("Failed to decode surface capture: {e}")))?;
        Ok(flatten_onto_white(&decoded.to_rgba8()))
    }
}

/// Composites RGBA pixels onto an opaque white background.
fn flatten_onto_white(rgba: &image::RgbaImage) -> RasterImage {
    let (width, height) = rgba.dimensions();
    let mut rgb = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for pixel in rgba.pixels() {
        let alpha = pixel[3] as u32;
        for channel in 0..3 {
            let value = (pixel[channel] as u32 * alpha + 255 * (255 - alpha)) / 255;
            rgb.push(value as u8);
        }
    }
    RasterImage { width, height, rgb }
}
