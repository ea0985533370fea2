//! Body of `GET /health`.

use serde::Serialize;

/// Overall status plus the store check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: CheckStatus,
}

/// Result of probing one dependency.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

impl HealthResponse {
    /// Builds the response; the service is healthy iff the store check passed.
    pub fn from_store_check(store: CheckStatus) -> Self {
        Self {
            status: if store.is_ok() { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { store },
        }
    }
}
