//! Cosmetic QR code style options stored alongside each slug.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// `#rrggbb` color notation produced by HTML color pickers.
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

/// Shape used for the data modules of the QR code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotShape {
    Dots,
    Rounded,
    Classy,
    ClassyRounded,
    #[default]
    Square,
    ExtraRounded,
}

/// Shape of the outer ring of the three finder patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerSquareShape {
    Dot,
    #[default]
    Square,
    ExtraRounded,
}

/// Shape of the inner 3x3 block of the finder patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerDotShape {
    Dot,
    #[default]
    Square,
}

/// Visual options for a rendered QR code.
///
/// Purely cosmetic: nothing in the registry or resolver depends on these
/// values. Missing fields fall back to the black-on-white square defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StyleOptions {
    #[validate(regex(path = *HEX_COLOR_REGEX, message = "Color must be in #rrggbb format"))]
    pub foreground_color: String,

    #[validate(regex(path = *HEX_COLOR_REGEX, message = "Color must be in #rrggbb format"))]
    pub background_color: String,

    pub transparent_background: bool,
    pub dot_shape: DotShape,
    pub corner_square_shape: CornerSquareShape,
    pub corner_dot_shape: CornerDotShape,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            foreground_color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
            transparent_background: false,
            dot_shape: DotShape::default(),
            corner_square_shape: CornerSquareShape::default(),
            corner_dot_shape: CornerDotShape::default(),
        }
    }
}

impl StyleOptions {
    /// Foreground color as RGB, black if the stored value is malformed.
    pub fn foreground_rgb(&self) -> [u8; 3] {
        parse_hex_color(&self.foreground_color).unwrap_or([0, 0, 0])
    }

    /// Background color as RGB, white if the stored value is malformed.
    pub fn background_rgb(&self) -> [u8; 3] {
        parse_hex_color(&self.background_color).unwrap_or([255, 255, 255])
    }
}

/// Parses `#rrggbb` into its three channels.
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let digits = value.strip_prefix('#')?;
    let bytes = hex::decode(digits).ok()?;
    <[u8; 3]>::try_from(bytes.as_slice()).ok()
}
