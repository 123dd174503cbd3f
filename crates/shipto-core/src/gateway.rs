// ── Effect executor ──
//
// Owns the HTTP clients and performs the effects `WorkflowState::apply`
// asks for. Cheap to clone, so a front-end can move a copy into a spawned
// task and send the resulting action back through its channel.

use std::sync::Arc;

use chrono::Utc;
use shipto_api::{DirectoryClient, TaskClient};
use tracing::{debug, warn};

use crate::action::{Effect, WorkflowAction};
use crate::config::WorkflowConfig;
use crate::convert::customers_from_records;
use crate::error::CoreError;
use crate::model::{ContactDetails, Customer, CustomerId};
use crate::task::{Submission, TaskTemplate};

#[derive(Debug, Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

#[derive(Debug)]
struct GatewayInner {
    directory: DirectoryClient,
    tasks: TaskClient,
    template: TaskTemplate,
}

impl Gateway {
    /// Build the HTTP clients described by `config`.
    pub fn new(config: &WorkflowConfig) -> Result<Self, CoreError> {
        let transport = config.transport();
        let directory = DirectoryClient::new(
            config.endpoints.directory.clone(),
            config.endpoints.detail.clone(),
            &transport,
        )?;
        let tasks = TaskClient::new(config.endpoints.task.clone(), &transport)?;
        Ok(Self::from_clients(directory, tasks, config.template.clone()))
    }

    pub fn from_clients(directory: DirectoryClient, tasks: TaskClient, template: TaskTemplate) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                directory,
                tasks,
                template,
            }),
        }
    }

    // ── Operations ───────────────────────────────────────────────────

    pub async fn fetch_directory(&self) -> Result<Vec<Customer>, CoreError> {
        let records = self.inner.directory.list_customers().await?;
        Ok(customers_from_records(records))
    }

    pub async fn contact_details(&self, id: &CustomerId) -> Result<ContactDetails, CoreError> {
        let record = self.inner.directory.customer_detail(id.as_str()).await?;
        Ok(ContactDetails::from(record))
    }

    /// Detail lookup, then task `POST`. Strictly sequential; a failed lookup
    /// means nothing is posted.
    pub async fn submit(&self, submission: &Submission) -> Result<(), CoreError> {
        let contact = self.contact_details(&submission.customer_id).await?;
        let task = self
            .inner
            .template
            .render(&submission.address, &contact, Utc::now());
        debug!(
            customer = %submission.customer_id,
            location = %submission.address.location(),
            "posting task"
        );
        self.inner.tasks.create_task(&task).await?;
        Ok(())
    }

    /// Run one effect to completion and report its outcome as an action.
    pub async fn perform(&self, effect: Effect) -> WorkflowAction {
        match effect {
            Effect::FetchDirectory => match self.fetch_directory().await {
                Ok(customers) => WorkflowAction::DirectoryLoaded(customers),
                Err(e) => {
                    warn!(error = %e, "directory fetch failed");
                    WorkflowAction::DirectoryFailed {
                        message: e.to_string(),
                    }
                }
            },
            Effect::SubmitTask(submission) => match self.submit(&submission).await {
                Ok(()) => WorkflowAction::SubmitSucceeded,
                Err(e) => {
                    warn!(error = %e, customer = %submission.customer_id, "task submit failed");
                    WorkflowAction::SubmitFailed {
                        message: e.to_string(),
                    }
                }
            },
        }
    }
}
