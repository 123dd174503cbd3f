// ── Workflow actions and effects ──
//
// Actions are everything that can change `WorkflowState`: user intents from
// the front-end and results coming back from the gateway. Effects are the
// side effects a transition asks for; the gateway turns each one back into
// an action.

use crate::model::{AddressField, Customer};
use crate::task::Submission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowAction {
    // Directory
    LoadDirectory,
    DirectoryLoaded(Vec<Customer>),
    DirectoryFailed { message: String },

    // Search
    SetQuery(String),
    /// Commit the match at this position of the current match set.
    SelectMatch(usize),

    // Selection
    ToggleAddress(usize),

    // Editor
    OpenEditor,
    EditDraft { field: AddressField, value: String },
    SaveDraft,
    CancelDraft,

    // Submit
    Submit,
    SubmitSucceeded,
    SubmitFailed { message: String },
}

/// A side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET` the customer directory.
    FetchDirectory,
    /// Detail lookup, then task `POST`.
    SubmitTask(Submission),
}
