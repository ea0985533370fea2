//! QR code rendering backed by the `qrcode` and `image` crates.
//!
//! [`QrRenderer::render`] turns a payload and [`crate::domain::entities::StyleOptions`]
//! into a [`QrImage`], which [`QrImage::export`] serializes as PNG, SVG or JPEG.

mod renderer;

pub use renderer::{
    DEFAULT_SIZE, ExportFormat, MAX_SIZE, MIN_SIZE, QrImage, QrRenderer, RenderError,
};
