use thiserror::Error;

/// Top-level error type for the `shipto-api` crate.
///
/// Covers every failure mode of the three endpoints: transport,
/// non-success status, and undecodable bodies. `shipto-core` maps these
/// into the workflow's error taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing or construction error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("URL cannot be used as a base: {0}")]
    CannotBeABase(String),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Response ────────────────────────────────────────────────────
    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Map a `reqwest` send failure, promoting timeouts when the client
    /// knows its configured limit.
    pub(crate) fn from_send(err: reqwest::Error, timeout: Option<std::time::Duration>) -> Self {
        match timeout {
            Some(limit) if err.is_timeout() => Self::Timeout {
                timeout_secs: limit.as_secs(),
            },
            _ => Self::Transport(err),
        }
    }
}
