//! UI actions. Everything that changes the app goes through one of these.

use shipto_core::{Notice, WorkflowAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,
    Render,
    Resize(u16, u16),
    ToggleHelp,

    /// Forwarded to `WorkflowState::apply`.
    Workflow(WorkflowAction),

    Notify(Notice),
}

impl From<WorkflowAction> for Action {
    fn from(action: WorkflowAction) -> Self {
        Self::Workflow(action)
    }
}
