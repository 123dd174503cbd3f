// ── Runtime workflow configuration ──
//
// These types describe where the three endpoints live and how to reach
// them. They never touch disk: shipto-config (or a test) constructs a
// `WorkflowConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::task::TaskTemplate;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed staging endpoints).
    DangerAcceptInvalid,
}

/// The three collaborator URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// `GET` returns the full customer list.
    pub directory: Url,
    /// Base for `GET <detail>/<id>`.
    pub detail: Url,
    /// `POST` creates a task.
    pub task: Url,
}

/// Everything the workflow needs to run.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub endpoints: Endpoints,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Fixed fields of every submitted task.
    pub template: TaskTemplate,
}

impl WorkflowConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Config with default TLS, timeout and task template.
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            tls: TlsVerification::default(),
            timeout: Self::DEFAULT_TIMEOUT,
            template: TaskTemplate::default(),
        }
    }

    pub(crate) fn transport(&self) -> shipto_api::TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => shipto_api::TlsMode::System,
            TlsVerification::CustomCa(path) => shipto_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => shipto_api::TlsMode::DangerAcceptInvalid,
        };
        shipto_api::TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
