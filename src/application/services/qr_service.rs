//! QR code payload construction and download export.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::entities::StyleOptions;
use crate::domain::repositories::SlugRepository;
use crate::infrastructure::qr::{DEFAULT_SIZE, ExportFormat, QrRenderer, RenderError};
use crate::utils::public_url::build_public_url;

/// Filename used when neither a filename nor a slug is given.
pub const DEFAULT_FILENAME: &str = "qr-fire-code";

/// Errors from QR export.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("slug '{0}' is not registered")]
    SlugNotFound(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

/// What to export and how.
#[derive(Debug, Clone, Default)]
pub struct QrExport {
    pub slug: Option<String>,
    pub style: StyleOptions,
    pub format: ExportFormat,
    pub filename: Option<String>,
    pub size: Option<u32>,
}

/// A rendered file ready to be served as a download.
#[derive(Debug, Clone)]
pub struct QrDownload {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Builds QR payloads from the public origin and renders downloads.
pub struct QrService {
    public_origin: String,
    renderer: QrRenderer,
    repository: Arc<dyn SlugRepository>,
}

impl QrService {
    /// Creates a new QR service.
    pub fn new(public_origin: impl Into<String>, repository: Arc<dyn SlugRepository>) -> Self {
        Self {
            public_origin: public_origin.into(),
            renderer: QrRenderer::new(),
            repository,
        }
    }

    /// Public origin that short URLs are built on.
    pub fn public_origin(&self) -> &str {
        &self.public_origin
    }

    /// The string encoded in the QR code: `<origin>/<slug>` or `<origin>`.
    pub fn payload(&self, slug: Option<&str>) -> String {
        build_public_url(&self.public_origin, slug)
    }

    /// Renders a QR code for an arbitrary (possibly unregistered) slug.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::Render`] if rendering or encoding fails.
    pub fn export(&self, request: QrExport) -> Result<QrDownload, QrError> {
        let slug = request.slug.as_deref().filter(|s| !s.is_empty());
        let payload = self.payload(slug);

        let image = self.renderer.render(
            &payload,
            &request.style,
            request.size.unwrap_or(DEFAULT_SIZE),
        )?;
        let bytes = image
            .export(request.format)
            .inspect_err(|e| error!("QR export failed: {}", e))?;

        debug!(
            payload = %payload,
            format = request.format.extension(),
            bytes = bytes.len(),
            "Exported QR code"
        );

        Ok(QrDownload {
            filename: download_filename(request.filename.as_deref(), slug, request.format),
            content_type: request.format.content_type(),
            bytes,
        })
    }

    /// Renders a QR code for a registered slug using its stored style.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::SlugNotFound`] if the slug is not registered,
    /// [`QrError::StoreUnavailable`] on store failures, and
    /// [`QrError::Render`] if rendering fails.
    pub async fn export_registered(
        &self,
        slug: &str,
        format: ExportFormat,
        filename: Option<String>,
        size: Option<u32>,
    ) -> Result<QrDownload, QrError> {
        let record = self
            .repository
            .find_by_slug(slug)
            .await
            .map_err(|e| {
                error!("Slug lookup failed for '{}': {}", slug, e);
                QrError::StoreUnavailable(e.to_string())
            })?
            .ok_or_else(|| QrError::SlugNotFound(slug.to_string()))?;

        self.export(QrExport {
            slug: Some(record.slug),
            style: record.style,
            format,
            filename,
            size,
        })
    }
}

/// Chooses the download filename: explicit name, else slug, else the default.
///
/// Characters outside `[A-Za-z0-9._-]` and leading dots are dropped so the
/// name is safe inside a `Content-Disposition` header. The format's
/// extension is appended unless already present.
pub fn download_filename(
    filename: Option<&str>,
    slug: Option<&str>,
    format: ExportFormat,
) -> String {
    let sanitize = |s: &str| -> String {
        let kept: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            .collect();
        kept.trim_start_matches('.').to_string()
    };

    let base = [filename, slug]
        .into_iter()
        .flatten()
        .map(sanitize)
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

    let suffix = format!(".{}", format.extension());
    if base.to_ascii_lowercase().ends_with(&suffix) {
        base
    } else {
        format!("{}{}", base, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{SlugId, SlugRecord};
    use crate::domain::repositories::{MockSlugRepository, StoreError};
    use chrono::Utc;

    fn service(mock_repo: MockSlugRepository) -> QrService {
        QrService::new("https://qr.example.com/", Arc::new(mock_repo))
    }

    #[test]
    fn test_payload_with_and_without_slug() {
        let service = service(MockSlugRepository::new());

        assert_eq!(
            service.payload(Some("wow-doge")),
            "https://qr.example.com/wow-doge"
        );
        assert_eq!(service.payload(None), "https://qr.example.com");
    }

    #[test]
    fn test_download_filename_defaults() {
        assert_eq!(
            download_filename(None, None, ExportFormat::Png),
            "qr-fire-code.png"
        );
        assert_eq!(
            download_filename(None, Some("wow-doge"), ExportFormat::Svg),
            "wow-doge.svg"
        );
        assert_eq!(
            download_filename(Some("poster"), Some("wow-doge"), ExportFormat::Jpeg),
            "poster.jpeg"
        );
    }

    #[test]
    fn test_download_filename_sanitized() {
        assert_eq!(
            download_filename(Some("../we\"ird name"), None, ExportFormat::Png),
            "weirdname.png"
        );
        assert_eq!(
            download_filename(Some("\"\""), Some("fallback"), ExportFormat::Png),
            "fallback.png"
        );
        assert_eq!(
            download_filename(Some("logo.PNG"), None, ExportFormat::Png),
            "logo.PNG"
        );
    }

    #[test]
    fn test_export_unregistered_slug() {
        let service = service(MockSlugRepository::new());

        let download = service
            .export(QrExport {
                slug: Some("preview".to_string()),
                format: ExportFormat::Svg,
                ..QrExport::default()
            })
            .unwrap();

        assert_eq!(download.filename, "preview.svg");
        assert_eq!(download.content_type, "image/svg+xml");
        assert!(download.bytes.starts_with(b"<svg"));
    }

    #[tokio::test]
    async fn test_export_registered_uses_stored_style() {
        let mut mock_repo = MockSlugRepository::new();
        mock_repo
            .expect_find_by_slug()
            .withf(|slug| slug == "styled")
            .times(1)
            .returning(|slug| {
                let style = StyleOptions {
                    foreground_color: "#123456".to_string(),
                    ..StyleOptions::default()
                };
                Ok(Some(SlugRecord::new(
                    SlugId(3),
                    slug.to_string(),
                    Some("https://example.com".to_string()),
                    Utc::now(),
                    style,
                )))
            });

        let download = service(mock_repo)
            .export_registered("styled", ExportFormat::Svg, None, None)
            .await
            .unwrap();

        let svg = String::from_utf8(download.bytes).unwrap();
        assert!(svg.contains("#123456"));
        assert_eq!(download.filename, "styled.svg");
    }

    #[tokio::test]
    async fn test_export_registered_not_found() {
        let mut mock_repo = MockSlugRepository::new();
        mock_repo.expect_find_by_slug().returning(|_| Ok(None));

        let result = service(mock_repo)
            .export_registered("missing", ExportFormat::Png, None, None)
            .await;

        assert!(matches!(result, Err(QrError::SlugNotFound(_))));
    }

    #[tokio::test]
    async fn test_export_registered_store_failure() {
        let mut mock_repo = MockSlugRepository::new();
        mock_repo
            .expect_find_by_slug()
            .returning(|_| Err(StoreError::Unavailable("down".to_string())));

        let result = service(mock_repo)
            .export_registered("any", ExportFormat::Png, None, None)
            .await;

        assert!(matches!(result, Err(QrError::StoreUnavailable(_))));
    }
}
