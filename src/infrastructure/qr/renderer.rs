//! Styled QR code rendering and export.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CornerDotShape, CornerSquareShape, DotShape, StyleOptions};

/// Default edge length of exported images in pixels.
pub const DEFAULT_SIZE: u32 = 256;
/// Smallest accepted edge length in pixels.
pub const MIN_SIZE: u32 = 64;
/// Largest accepted edge length in pixels.
pub const MAX_SIZE: u32 = 2048;

/// Quiet zone around the symbol, in modules.
const MARGIN_MODULES: usize = 2;
/// Edge length of a finder pattern, in modules.
const FINDER_SIZE: usize = 7;

/// Errors produced while rendering or exporting a QR code.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("payload cannot be encoded as a QR code: {0}")]
    Payload(String),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Binary formats a QR code can be exported to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Svg,
    Jpeg,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Jpeg => "jpeg",
        }
    }

    /// MIME type served with the exported bytes.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// Which part of the symbol a module belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModuleKind {
    Data,
    CornerSquare,
    CornerDot,
}

/// Renders payloads into styled QR images.
#[derive(Debug, Clone)]
pub struct QrRenderer {
    ec_level: EcLevel,
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl QrRenderer {
    /// Creates a renderer using error-correction level Q.
    pub fn new() -> Self {
        Self {
            ec_level: EcLevel::Q,
        }
    }

    /// Encodes `payload` and binds it to `style`.
    ///
    /// `size` is clamped to [`MIN_SIZE`]..=[`MAX_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Payload`] if the payload does not fit in a QR code.
    pub fn render(
        &self,
        payload: &str,
        style: &StyleOptions,
        size: u32,
    ) -> Result<QrImage, RenderError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), self.ec_level)
            .map_err(|e| RenderError::Payload(e.to_string()))?;

        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();

        Ok(QrImage {
            modules,
            width,
            style: style.clone(),
            size: size.clamp(MIN_SIZE, MAX_SIZE),
        })
    }
}

/// An encoded QR symbol ready for export.
#[derive(Debug, Clone)]
pub struct QrImage {
    modules: Vec<bool>,
    width: usize,
    style: StyleOptions,
    size: u32,
}

impl QrImage {
    /// Number of modules along one edge, without the quiet zone.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Exported edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns whether the module at `(x, y)` is dark.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Serializes the image in the requested format.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Encode`] if raster encoding fails.
    pub fn export(&self, format: ExportFormat) -> Result<Vec<u8>, RenderError> {
        match format {
            ExportFormat::Svg => Ok(self.to_svg().into_bytes()),
            ExportFormat::Png => {
                let mut buf = Cursor::new(Vec::new());
                DynamicImage::ImageRgba8(self.rasterize(false))
                    .write_to(&mut buf, ImageFormat::Png)?;
                Ok(buf.into_inner())
            }
            ExportFormat::Jpeg => {
                let rgb = DynamicImage::ImageRgba8(self.rasterize(true)).to_rgb8();
                let mut buf = Cursor::new(Vec::new());
                DynamicImage::ImageRgb8(rgb).write_to(&mut buf, ImageFormat::Jpeg)?;
                Ok(buf.into_inner())
            }
        }
    }

    fn total_modules(&self) -> usize {
        self.width + 2 * MARGIN_MODULES
    }

    fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.width)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_dark(x, y))
    }

    fn classify(&self, x: usize, y: usize) -> ModuleKind {
        let far = self.width - FINDER_SIZE;
        let origin = match (x < FINDER_SIZE, y < FINDER_SIZE, x >= far, y >= far) {
            (true, true, _, _) => (0, 0),
            (_, true, true, _) => (far, 0),
            (true, _, _, true) => (0, far),
            _ => return ModuleKind::Data,
        };

        let dx = (x - origin.0).abs_diff(3);
        let dy = (y - origin.1).abs_diff(3);
        if dx.max(dy) <= 1 {
            ModuleKind::CornerDot
        } else {
            ModuleKind::CornerSquare
        }
    }

    /// Corner radius of a module, as a fraction of the module edge.
    fn radius(&self, kind: ModuleKind) -> f32 {
        match kind {
            ModuleKind::Data => match self.style.dot_shape {
                DotShape::Square => 0.0,
                DotShape::Classy => 0.15,
                DotShape::Rounded => 0.25,
                DotShape::ClassyRounded => 0.35,
                DotShape::ExtraRounded => 0.4,
                DotShape::Dots => 0.5,
            },
            ModuleKind::CornerSquare => match self.style.corner_square_shape {
                CornerSquareShape::Square => 0.0,
                CornerSquareShape::ExtraRounded => 0.35,
                CornerSquareShape::Dot => 0.5,
            },
            ModuleKind::CornerDot => match self.style.corner_dot_shape {
                CornerDotShape::Square => 0.0,
                CornerDotShape::Dot => 0.5,
            },
        }
    }

    fn to_svg(&self) -> String {
        let n = self.total_modules();
        let fg = format!("#{}", hex::encode(self.style.foreground_rgb()));

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {n} {n}">"#,
            size = self.size,
        );

        if !self.style.transparent_background {
            let bg = format!("#{}", hex::encode(self.style.background_rgb()));
            svg.push_str(&format!(
                r#"<rect width="{n}" height="{n}" fill="{bg}"/>"#
            ));
        }

        for (x, y) in self.dark_modules() {
            let rx = self.radius(self.classify(x, y));
            svg.push_str(&format!(
                r#"<rect x="{}" y="{}" width="1" height="1" rx="{}" fill="{}"/>"#,
                x + MARGIN_MODULES,
                y + MARGIN_MODULES,
                rx,
                fg
            ));
        }

        svg.push_str("</svg>");
        svg
    }

    /// Draws the symbol into an RGBA buffer.
    ///
    /// With `opaque` set, a transparent background is painted white.
    fn rasterize(&self, opaque: bool) -> RgbaImage {
        let size = self.size.max(self.total_modules() as u32);
        let cell = size as f32 / self.total_modules() as f32;

        let background = match (self.style.transparent_background, opaque) {
            (true, false) => Rgba([0, 0, 0, 0]),
            (true, true) => Rgba([255, 255, 255, 255]),
            (false, _) => {
                let [r, g, b] = self.style.background_rgb();
                Rgba([r, g, b, 255])
            }
        };
        let [r, g, b] = self.style.foreground_rgb();
        let foreground = Rgba([r, g, b, 255]);

        let mut img = RgbaImage::from_pixel(size, size, background);

        for (x, y) in self.dark_modules() {
            let radius = self.radius(self.classify(x, y)) * cell;
            let x0 = (x + MARGIN_MODULES) as f32 * cell;
            let y0 = (y + MARGIN_MODULES) as f32 * cell;

            let px_start = x0.floor() as u32;
            let px_end = ((x0 + cell).ceil() as u32).min(size);
            let py_start = y0.floor() as u32;
            let py_end = ((y0 + cell).ceil() as u32).min(size);

            for py in py_start..py_end {
                for px in px_start..px_end {
                    let cx = px as f32 + 0.5;
                    let cy = py as f32 + 0.5;
                    if inside_rounded_cell(cx, cy, x0, y0, cell, radius) {
                        img.put_pixel(px, py, foreground);
                    }
                }
            }
        }

        img
    }
}

/// Point-in-rounded-square test for a cell at `(x0, y0)` with edge `cell`.
fn inside_rounded_cell(px: f32, py: f32, x0: f32, y0: f32, cell: f32, radius: f32) -> bool {
    if px < x0 || py < y0 || px >= x0 + cell || py >= y0 + cell {
        return false;
    }

    let half = cell / 2.0;
    let dx = ((px - (x0 + half)).abs() - (half - radius)).max(0.0);
    let dy = ((py - (y0 + half)).abs() - (half - radius)).max(0.0);

    dx * dx + dy * dy <= radius * radius
}
