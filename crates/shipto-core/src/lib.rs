// shipto-core: Address workflow state machine between shipto-api and the front-end.

pub mod action;
pub mod config;
pub mod convert;
pub mod error;
pub mod gateway;
pub mod model;
pub mod notice;
pub mod store;
pub mod task;
pub mod workflow;

// ── Primary re-exports ──────────────────────────────────────────────
pub use action::{Effect, WorkflowAction};
pub use config::{Endpoints, TlsVerification, WorkflowConfig};
pub use error::CoreError;
pub use gateway::Gateway;
pub use notice::{Notice, NoticeLevel};
pub use store::{DirectoryStatus, SelectionKey, WorkflowState};
pub use task::{Submission, TaskTemplate};
pub use workflow::AddressWorkflow;

pub use model::{Address, AddressField, ContactDetails, Customer, CustomerId};
