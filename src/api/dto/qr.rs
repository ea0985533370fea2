//! DTOs for QR code downloads.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::StyleOptions;
use crate::infrastructure::qr::{ExportFormat, MAX_SIZE, MIN_SIZE};

/// Ad-hoc QR download for a slug that may not be registered yet.
#[derive(Debug, Deserialize, Validate)]
pub struct QrRequest {
    /// Slug to encode; the bare origin is encoded when absent.
    pub slug: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub style: StyleOptions,

    #[serde(default)]
    pub format: ExportFormat,

    pub filename: Option<String>,

    #[validate(range(min = MIN_SIZE, max = MAX_SIZE))]
    pub size: Option<u32>,
}

/// Query string of the registered-slug download endpoint.
///
/// Uses `serde_with` so that `?filename=` is treated like an absent filename.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct DownloadQuery {
    #[serde(default)]
    pub format: ExportFormat,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub filename: Option<String>,

    #[validate(range(min = MIN_SIZE, max = MAX_SIZE))]
    pub size: Option<u32>,
}
