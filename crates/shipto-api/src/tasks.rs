// Task service HTTP client
//
// A single write endpoint. Any 2xx means the task was created; the
// response body is not interpreted.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::TaskRecord;
use crate::response;
use crate::transport::TransportConfig;

/// Raw HTTP client for the task-creation endpoint.
#[derive(Debug, Clone)]
pub struct TaskClient {
    http: reqwest::Client,
    task_url: Url,
    timeout: Option<Duration>,
}

impl TaskClient {
    pub fn new(task_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            task_url,
            timeout: Some(transport.timeout),
        })
    }

    /// Create a task client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, task_url: Url) -> Self {
        Self {
            http,
            task_url,
            timeout: None,
        }
    }

    /// Create a task.
    ///
    /// `POST {task}` with the record as a JSON body. There is no idempotency
    /// key: posting the same record twice creates two tasks.
    pub async fn create_task(&self, task: &TaskRecord) -> Result<(), Error> {
        let url = self.task_url.clone();
        debug!(title = %task.title, "POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(task)
            .send()
            .await
            .map_err(|e| Error::from_send(e, self.timeout))?;

        response::success_body(resp).await?;
        Ok(())
    }
}
