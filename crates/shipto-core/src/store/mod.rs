// ── Workflow state ──
//
// Single-owner state container. Every transition goes through
// `WorkflowState::apply`, which returns the side effect (if any) the
// transition needs.

mod editor;
mod search;
mod selection;
mod workflow_state;

pub use editor::AddressEditor;
pub use search::{SearchState, filter_positions};
pub use selection::{AddressSelection, SelectionKey};
pub use workflow_state::{DirectoryStatus, WorkflowState};
