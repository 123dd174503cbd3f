//! Configuration for the shipto workflow.
//!
//! TOML file + `SHIPTO_` environment layering, and translation to
//! `shipto_core::WorkflowConfig`. Command-line overrides are applied by the
//! caller through [`EndpointOverrides`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use shipto_core::{Endpoints, TaskTemplate, TlsVerification, WorkflowConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no {name} endpoint configured (set [endpoints].{name} or pass --{name}-url)")]
    MissingEndpoint { name: String },

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub http: HttpConfig,

    /// Overrides for the fixed task fields.
    #[serde(default)]
    pub task: TaskTemplate,
}

/// The three collaborator URLs, unparsed.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EndpointsConfig {
    pub directory: Option<String>,
    pub detail: Option<String>,
    pub task: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Accept invalid certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Path to an extra CA certificate (PEM).
    pub ca_cert: Option<PathBuf>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            insecure: false,
            ca_cert: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// Endpoint URLs given on the command line; each wins over the file.
#[derive(Debug, Clone, Default)]
pub struct EndpointOverrides {
    pub directory: Option<String>,
    pub detail: Option<String>,
    pub task: Option<String>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "shipto", "shipto").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("shipto");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load from the canonical config path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` + environment. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SHIPTO_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Build the runtime config, applying command-line overrides.
    pub fn to_workflow_config(
        &self,
        overrides: &EndpointOverrides,
    ) -> Result<WorkflowConfig, ConfigError> {
        let endpoints = Endpoints {
            directory: resolve_endpoint(
                "directory",
                overrides.directory.as_deref(),
                self.endpoints.directory.as_deref(),
            )?,
            detail: resolve_endpoint(
                "detail",
                overrides.detail.as_deref(),
                self.endpoints.detail.as_deref(),
            )?,
            task: resolve_endpoint(
                "task",
                overrides.task.as_deref(),
                self.endpoints.task.as_deref(),
            )?,
        };

        if self.http.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "http.timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        let tls = if self.http.insecure {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.http.ca_cert {
            TlsVerification::CustomCa(ca_path.clone())
        } else {
            TlsVerification::SystemDefaults
        };

        Ok(WorkflowConfig {
            endpoints,
            tls,
            timeout: Duration::from_secs(self.http.timeout),
            template: self.task.clone(),
        })
    }
}

fn resolve_endpoint(
    name: &str,
    flag: Option<&str>,
    file: Option<&str>,
) -> Result<Url, ConfigError> {
    let raw = flag
        .or(file)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingEndpoint { name: name.into() })?;

    let url: Url = raw.parse().map_err(|e| ConfigError::Validation {
        field: format!("endpoints.{name}"),
        reason: format!("invalid URL '{raw}': {e}"),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Validation {
            field: format!("endpoints.{name}"),
            reason: format!("expected http or https, got '{other}'"),
        }),
    }
}
