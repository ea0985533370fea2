//! HTTP error envelope for the JSON API.
//!
//! Every error renders as
//!
//! ```json
//! { "error": { "code": "conflict", "message": "...", "details": { ... } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::application::services::{QrError, RegistrationError};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors returned by API handlers, one variant per HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Unavailable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Status code and machine-readable code for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            AppError::Unavailable { .. } => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Converts the error into its serializable payload.
    pub fn into_error_info(self) -> ErrorInfo {
        let (_, code) = self.status();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Unavailable { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status();
        let body = ErrorBody {
            error: self.into_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = Map::new();
        collect_field_messages(&errors, "", &mut fields);
        AppError::bad_request("Request validation failed", json!({ "fields": fields }))
    }
}

/// Flattens validator output into `{ "field": "message" }`, keeping the first
/// message per field. Nested structs are keyed as `parent.child`, list
/// entries as `parent[i].child`.
fn collect_field_messages(
    errors: &validator::ValidationErrors,
    prefix: &str,
    out: &mut Map<String, Value>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let key = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(first) = list.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| first.code.to_string());
                    out.insert(key, Value::String(message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_field_messages(nested, &key, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_messages(nested, &format!("{}[{}]", key, index), out);
                }
            }
        }
    }
}

impl From<RegistrationError> for AppError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::InvalidSlug(reason) => AppError::bad_request(
                "Invalid slug",
                json!({ "fields": { "slug": reason.to_string() } }),
            ),
            RegistrationError::InvalidUrl(reason) => AppError::bad_request(
                "Invalid destination URL",
                json!({
                    "fields": { "url": reason.to_string() },
                    "reason": reason.reason(),
                }),
            ),
            RegistrationError::DuplicateSlug(slug) => AppError::conflict(
                "This slug is already taken. Please choose another one.",
                json!({ "fields": { "slug": "Slug is already taken." }, "slug": slug }),
            ),
            RegistrationError::StoreUnavailable(_) => {
                AppError::unavailable("Error creating QR code. Please try again.", json!({}))
            }
        }
    }
}

impl From<QrError> for AppError {
    fn from(e: QrError) -> Self {
        match e {
            QrError::SlugNotFound(slug) => {
                AppError::not_found("Slug not found", json!({ "slug": slug }))
            }
            QrError::StoreUnavailable(_) => {
                AppError::unavailable("Store unavailable", json!({}))
            }
            QrError::Render(reason) => AppError::bad_request(
                "QR code could not be rendered",
                json!({ "reason": reason.to_string() }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::StoreError;
    use crate::utils::slug::SlugError;
    use crate::utils::url_validator::UrlValidationError;
    use validator::Validate;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::conflict("x", json!({})).status().0,
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::unavailable("x", json!({})).status().0,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_registration_errors_have_field_messages() {
        let info = AppError::from(RegistrationError::InvalidSlug(SlugError::Empty)).into_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.details["fields"]["slug"], "Slug is required.");

        let info = AppError::from(RegistrationError::InvalidUrl(UrlValidationError::Missing))
            .into_error_info();
        assert_eq!(info.details["fields"]["url"], "Destination URL is required.");
    }

    #[derive(validator::Validate)]
    struct Inner {
        #[validate(length(min = 2, message = "Too short."))]
        name: String,
    }

    #[derive(validator::Validate)]
    struct Outer {
        #[validate(length(max = 3))]
        slug: String,
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn test_validation_errors_use_field_messages() {
        let errors = Outer {
            slug: "toolong".to_string(),
            inner: Inner {
                name: "x".to_string(),
            },
        }
        .validate()
        .unwrap_err();

        let info = AppError::from(errors).into_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.details["fields"]["slug"], "length");
        assert_eq!(info.details["fields"]["inner.name"], "Too short.");
    }

    #[test]
    fn test_duplicate_is_conflict() {
        let err = AppError::from(RegistrationError::DuplicateSlug("a".to_string()));
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[test]
    fn test_store_failure_hides_reason() {
        let err = AppError::from(RegistrationError::from(StoreError::Unavailable(
            "password authentication failed".to_string(),
        )));
        let info = err.into_error_info();

        assert_eq!(info.code, "unavailable");
        assert!(!info.message.contains("password"));
    }
}
