//! Straight-alpha pixel grids rendered with resvg
//!
//! Front ends sample a [`Raster`] cell by cell.

use tiny_skia::{Pixmap, Transform};

use crate::error::GlyphError;

/// Rasterized scene
#[derive(Debug, Clone)]
pub struct Raster {
    /// RGBA pixel data (straight alpha)
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Raster {
    pub(crate) fn from_pixmap(pixmap: &Pixmap) -> Self {
        Self {
            pixels: unpremultiply_alpha(pixmap.data()),
            width: pixmap.width(),
            height: pixmap.height(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// RGB at `(x, y)` if the pixel's alpha reaches `min_alpha`.
    pub fn opaque_rgb(&self, x: u32, y: u32, min_alpha: u8) -> Option<[u8; 3]> {
        self.pixel(x, y)
            .filter(|[_, _, _, a]| *a >= min_alpha.max(1))
            .map(|[r, g, b, _]| [r, g, b])
    }
}

/// A transparent pixmap, or an error for an empty or oversized area.
pub(crate) fn blank_pixmap(width: u32, height: u32) -> Result<Pixmap, GlyphError> {
    Pixmap::new(width, height).ok_or(GlyphError::InvalidDimensions { width, height })
}

/// Scale a `content_width` × `content_height` box to fit `width` × `height`,
/// centered.
pub(crate) fn fit_transform(
    content_width: f32,
    content_height: f32,
    width: u32,
    height: u32,
) -> Transform {
    let scale = (width as f32 / content_width).min(height as f32 / content_height);
    let offset_x = (width as f32 - content_width * scale) / 2.0;
    let offset_y = (height as f32 - content_height * scale) / 2.0;
    Transform::from_scale(scale, scale).post_translate(offset_x, offset_y)
}

/// Convert premultiplied alpha to straight alpha
fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let r = (chunk[0] as f32 / a).round().min(255.0) as u8;
            let g = (chunk[1] as f32 / a).round().min(255.0) as u8;
            let b = (chunk[2] as f32 / a).round().min(255.0) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }

    result
}
