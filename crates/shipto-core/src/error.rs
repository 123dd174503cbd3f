// ── Core error types ──
//
// User-facing errors from shipto-core. Consumers see the workflow's
// taxonomy (network failure, unsuccessful response, unmet precondition),
// never reqwest or serde errors directly. The `From<shipto_api::Error>`
// impl does the translation.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Network errors ───────────────────────────────────────────────
    #[error("Cannot reach {url}: {reason}")]
    NetworkFailure { url: String, reason: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Response errors ──────────────────────────────────────────────
    #[error("{url} answered with HTTP {status}")]
    UnsuccessfulResponse { url: String, status: u16 },

    #[error("Unexpected response: {message}")]
    InvalidResponse { message: String },

    // ── Workflow errors ──────────────────────────────────────────────
    #[error("{message}")]
    PreconditionUnmet { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn no_address_selected() -> Self {
        Self::PreconditionUnmet {
            message: "No address selected".into(),
        }
    }

    /// `true` for failures that happened before any request was issued.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::PreconditionUnmet { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<shipto_api::Error> for CoreError {
    fn from(err: shipto_api::Error) -> Self {
        match err {
            // A timeout reported by reqwest itself carries no configured
            // limit, so it stays a network failure with reqwest's reason.
            shipto_api::Error::Transport(ref e) => {
                if let Some(status) = e.status() {
                    CoreError::UnsuccessfulResponse {
                        url: e.url().map(ToString::to_string).unwrap_or_default(),
                        status: status.as_u16(),
                    }
                } else {
                    CoreError::NetworkFailure {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                }
            }
            shipto_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            shipto_api::Error::CannotBeABase(url) => CoreError::Config {
                message: format!("URL cannot carry a path: {url}"),
            },
            shipto_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            shipto_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            shipto_api::Error::Status { url, status, .. } => {
                CoreError::UnsuccessfulResponse { url, status }
            }
            shipto_api::Error::Deserialization { message, body: _ } => {
                CoreError::InvalidResponse { message }
            }
        }
    }
}
