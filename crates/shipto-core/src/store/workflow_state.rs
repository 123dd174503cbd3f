// ── Reducer-style workflow state ──
//
// Owns the directory, the search, the address selection, the editor, and
// the notice queue. `apply` is the only mutation entry point for the
// front-end; it never performs I/O and instead returns an `Effect`.

use tracing::{debug, info, warn};

use super::editor::AddressEditor;
use super::search::SearchState;
use super::selection::{AddressSelection, SelectionKey};
use crate::action::{Effect, WorkflowAction};
use crate::error::CoreError;
use crate::model::{Address, Customer};
use crate::notice::Notice;
use crate::task::Submission;

/// Lifecycle of the one-per-session directory fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectoryStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    directory: Vec<Customer>,
    directory_status: DirectoryStatus,
    search: SearchState,
    selection: AddressSelection,
    editor: AddressEditor,
    submitting: bool,
    notices: Vec<Notice>,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn customers(&self) -> &[Customer] {
        &self.directory
    }

    pub fn directory_status(&self) -> DirectoryStatus {
        self.directory_status
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.search.is_open()
    }

    /// Current match set, in directory order.
    pub fn matches(&self) -> Vec<&Customer> {
        self.search
            .positions()
            .iter()
            .filter_map(|pos| self.directory.get(*pos))
            .collect()
    }

    /// First entry of the match set: the customer whose addresses are shown
    /// and edited. After a commit it is the only entry.
    pub fn matched_customer(&self) -> Option<&Customer> {
        self.search
            .positions()
            .first()
            .and_then(|pos| self.directory.get(*pos))
    }

    /// The matched customer, but only once a dropdown pick committed it.
    pub fn committed_customer(&self) -> Option<&Customer> {
        let committed = self.search.committed()?;
        self.matched_customer().filter(|c| &c.id == committed)
    }

    pub fn selected_address_index(&self) -> Option<usize> {
        let customer = self.matched_customer()?;
        self.selection.index_for(&SelectionKey::of(customer))
    }

    pub fn selected_address(&self) -> Option<&Address> {
        let index = self.selected_address_index()?;
        self.matched_customer()?.shipping_address.get(index)
    }

    pub fn editor(&self) -> &AddressEditor {
        &self.editor
    }

    pub fn is_loading(&self) -> bool {
        self.directory_status == DirectoryStatus::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain the notice queue.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// What a submit would send right now, or why it cannot run.
    pub fn submission(&self) -> Result<Submission, CoreError> {
        let customer = self
            .committed_customer()
            .ok_or_else(CoreError::no_address_selected)?;
        let address = self
            .selected_address()
            .cloned()
            .ok_or_else(CoreError::no_address_selected)?;
        Ok(Submission {
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            address,
        })
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Apply one action. Returns the side effect the caller must perform,
    /// whose outcome comes back as another action.
    pub fn apply(&mut self, action: WorkflowAction) -> Option<Effect> {
        match action {
            WorkflowAction::LoadDirectory => self.load_directory(),
            WorkflowAction::DirectoryLoaded(customers) => {
                info!(count = customers.len(), "customer directory loaded");
                if customers.is_empty() {
                    self.notices.push(Notice::info("The customer directory is empty"));
                }
                self.directory = customers;
                self.directory_status = DirectoryStatus::Loaded;
                self.search.recompute(&self.directory);
                self.selection.clear();
                None
            }
            WorkflowAction::DirectoryFailed { message } => {
                warn!(%message, "customer directory unavailable");
                self.directory.clear();
                self.directory_status = DirectoryStatus::Failed;
                self.search.recompute(&self.directory);
                self.selection.clear();
                self.notices
                    .push(Notice::error(format!("Failed to fetch customers: {message}")));
                None
            }
            WorkflowAction::SetQuery(query) => {
                self.search.set_query(query, &self.directory);
                self.selection.clear();
                None
            }
            WorkflowAction::SelectMatch(nth) => {
                match self.search.commit(nth, &self.directory) {
                    Some(id) => debug!(customer = %id, "customer committed"),
                    None => debug!(nth, "select ignored, no such match"),
                }
                None
            }
            WorkflowAction::ToggleAddress(index) => {
                self.toggle_address(index);
                None
            }
            WorkflowAction::OpenEditor => {
                self.editor.open();
                None
            }
            WorkflowAction::EditDraft { field, value } => {
                if !self.editor.set(field, value) {
                    debug!(%field, "draft edit ignored, editor closed");
                }
                None
            }
            WorkflowAction::SaveDraft => {
                self.save_draft();
                None
            }
            WorkflowAction::CancelDraft => {
                self.editor.cancel();
                None
            }
            WorkflowAction::Submit => self.submit(),
            WorkflowAction::SubmitSucceeded => {
                info!("task created");
                self.submitting = false;
                self.notices.push(Notice::success("Task created successfully"));
                None
            }
            WorkflowAction::SubmitFailed { message } => {
                warn!(%message, "task submission failed");
                self.submitting = false;
                self.notices
                    .push(Notice::error(format!("Failed to submit task: {message}")));
                None
            }
        }
    }

    fn load_directory(&mut self) -> Option<Effect> {
        if self.directory_status != DirectoryStatus::NotLoaded {
            debug!(status = ?self.directory_status, "directory already requested");
            return None;
        }
        self.directory_status = DirectoryStatus::Loading;
        Some(Effect::FetchDirectory)
    }

    fn toggle_address(&mut self, index: usize) {
        let Some(customer) = self.matched_customer() else {
            debug!(index, "toggle ignored, no matched customer");
            return;
        };
        if index >= customer.shipping_address.len() {
            debug!(index, "toggle ignored, out of range");
            return;
        }
        let key = SelectionKey::of(customer);
        self.selection.select(key, index);
    }

    fn save_draft(&mut self) {
        if !self.editor.is_open() {
            return;
        }
        let draft = self.editor.take();
        let target = self
            .search
            .positions()
            .first()
            .and_then(|pos| self.directory.get_mut(*pos));
        if let Some(customer) = target {
            debug!(customer = %customer.id, "address appended locally");
            customer.push_address(draft);
        } else {
            warn!("address draft discarded, no matched customer");
            self.notices
                .push(Notice::warning("Select a customer before adding an address"));
        }
    }

    fn submit(&mut self) -> Option<Effect> {
        if self.submitting {
            debug!("submit ignored, already in flight");
            return None;
        }
        match self.submission() {
            Ok(submission) => {
                debug!(customer = %submission.customer_id, "submitting task");
                self.submitting = true;
                Some(Effect::SubmitTask(submission))
            }
            Err(e) => {
                warn!(error = %e, "submit precondition unmet");
                self.notices.push(Notice::error(e.to_string()));
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{AddressField, CustomerId};
    use crate::notice::NoticeLevel;
    use pretty_assertions::assert_eq;

    fn addr(line2: &str) -> Address {
        Address {
            line1: "1 Main St".into(),
            line2: line2.into(),
            state: "CA".into(),
            city: "LA".into(),
            pincode: "90001".into(),
        }
    }

    fn loaded() -> WorkflowState {
        let mut state = WorkflowState::new();
        assert_eq!(state.apply(WorkflowAction::LoadDirectory), Some(Effect::FetchDirectory));
        state.apply(WorkflowAction::DirectoryLoaded(vec![
            Customer::new("C1", "Alice", vec![addr("Apt 2"), addr("Apt 9")]),
            Customer::new("C2", "Alina", vec![addr("Unit 4")]),
            Customer::new("C3", "Bob", vec![]),
        ]));
        state
    }

    fn committed(query: &str, nth: usize) -> WorkflowState {
        let mut state = loaded();
        state.apply(WorkflowAction::SetQuery(query.into()));
        state.apply(WorkflowAction::SelectMatch(nth));
        state
    }

    fn names(state: &WorkflowState) -> Vec<&str> {
        state.matches().iter().map(|c| c.name.as_str()).collect()
    }

    // ── Directory ────────────────────────────────────────────────────

    #[test]
    fn directory_is_fetched_once() {
        let mut state = loaded();
        assert_eq!(state.apply(WorkflowAction::LoadDirectory), None);
        assert_eq!(state.directory_status(), DirectoryStatus::Loaded);
    }

    #[test]
    fn empty_directory_raises_info_notice() {
        let mut state = WorkflowState::new();
        state.apply(WorkflowAction::LoadDirectory);
        state.apply(WorkflowAction::DirectoryLoaded(Vec::new()));

        assert_eq!(state.directory_status(), DirectoryStatus::Loaded);
        let notices = state.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert!(loaded().notices().is_empty());
    }

    #[test]
    fn directory_failure_leaves_list_empty_with_one_notice() {
        let mut state = WorkflowState::new();
        state.apply(WorkflowAction::LoadDirectory);
        state.apply(WorkflowAction::DirectoryFailed {
            message: "HTTP 500".into(),
        });

        assert!(state.customers().is_empty());
        let notices = state.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);

        state.apply(WorkflowAction::SetQuery("ali".into()));
        assert!(state.matches().is_empty());
        assert!(state.notices().is_empty());
    }

    #[test]
    fn query_typed_while_loading_is_matched_on_arrival() {
        let mut state = WorkflowState::new();
        state.apply(WorkflowAction::LoadDirectory);
        state.apply(WorkflowAction::SetQuery("bo".into()));
        assert!(state.matches().is_empty());

        state.apply(WorkflowAction::DirectoryLoaded(vec![Customer::new("C3", "Bob", vec![])]));

        assert_eq!(names(&state), vec!["Bob"]);
    }

    // ── Search ───────────────────────────────────────────────────────

    #[test]
    fn query_filters_and_opens_dropdown() {
        let mut state = loaded();
        state.apply(WorkflowAction::SetQuery("ALI".into()));
        assert_eq!(names(&state), vec!["Alice", "Alina"]);
        assert!(state.is_dropdown_open());

        state.apply(WorkflowAction::SetQuery(String::new()));
        assert!(state.matches().is_empty());
        assert!(!state.is_dropdown_open());
    }

    #[test]
    fn select_collapses_to_one_and_hides_dropdown() {
        let state = committed("ali", 1);
        assert_eq!(names(&state), vec!["Alina"]);
        assert_eq!(state.query(), "Alina");
        assert!(!state.is_dropdown_open());
        assert_eq!(
            state.committed_customer().map(|c| &c.id),
            Some(&CustomerId::from("C2"))
        );
    }

    #[test]
    fn editing_query_after_commit_clears_commit_and_selection() {
        let mut state = committed("ali", 0);
        state.apply(WorkflowAction::ToggleAddress(1));
        assert_eq!(state.selected_address_index(), Some(1));

        state.apply(WorkflowAction::SetQuery("Alic".into()));

        assert!(state.committed_customer().is_none());
        assert_eq!(state.selected_address_index(), None);
        assert!(state.is_dropdown_open());
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn toggle_is_single_select() {
        let mut state = committed("alice", 0);
        state.apply(WorkflowAction::ToggleAddress(0));
        assert_eq!(state.selected_address_index(), Some(0));
        state.apply(WorkflowAction::ToggleAddress(1));
        assert_eq!(state.selected_address_index(), Some(1));
        state.apply(WorkflowAction::ToggleAddress(1));
        assert_eq!(state.selected_address_index(), Some(1));
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut state = committed("alice", 0);
        state.apply(WorkflowAction::ToggleAddress(0));
        state.apply(WorkflowAction::ToggleAddress(7));
        assert_eq!(state.selected_address_index(), Some(0));
    }

    #[test]
    fn toggle_without_match_is_ignored() {
        let mut state = loaded();
        state.apply(WorkflowAction::ToggleAddress(0));
        assert_eq!(state.selected_address_index(), None);
    }

    // ── Editor ───────────────────────────────────────────────────────

    #[test]
    fn save_appends_draft_and_resets_editor() {
        let mut state = committed("alice", 0);
        state.apply(WorkflowAction::OpenEditor);
        state.apply(WorkflowAction::EditDraft {
            field: AddressField::Line2,
            value: "Suite 5".into(),
        });
        state.apply(WorkflowAction::EditDraft {
            field: AddressField::City,
            value: "SF".into(),
        });
        state.apply(WorkflowAction::SaveDraft);

        let customer = state.matched_customer().unwrap();
        assert_eq!(customer.shipping_address.len(), 3);
        assert_eq!(
            customer.shipping_address[2],
            Address {
                line2: "Suite 5".into(),
                city: "SF".into(),
                ..Address::default()
            }
        );
        assert!(!state.editor().is_open());
        assert_eq!(state.editor().draft(), &Address::default());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut state = committed("alice", 0);
        state.apply(WorkflowAction::OpenEditor);
        state.apply(WorkflowAction::EditDraft {
            field: AddressField::Pincode,
            value: "1".into(),
        });
        state.apply(WorkflowAction::CancelDraft);

        assert_eq!(state.matched_customer().unwrap().shipping_address.len(), 2);
        assert!(!state.editor().is_open());
        assert_eq!(state.editor().draft(), &Address::default());
    }

    #[test]
    fn edits_while_closed_are_ignored() {
        let mut state = committed("alice", 0);
        state.apply(WorkflowAction::EditDraft {
            field: AddressField::Line1,
            value: "x".into(),
        });
        assert_eq!(state.editor().draft(), &Address::default());
    }

    #[test]
    fn append_invalidates_selection() {
        let mut state = committed("alice", 0);
        state.apply(WorkflowAction::ToggleAddress(0));
        state.apply(WorkflowAction::OpenEditor);
        state.apply(WorkflowAction::SaveDraft);

        assert_eq!(state.selected_address_index(), None);
    }

    #[test]
    fn appended_address_survives_research() {
        let mut state = committed("alice", 0);
        state.apply(WorkflowAction::OpenEditor);
        state.apply(WorkflowAction::SaveDraft);
        state.apply(WorkflowAction::SetQuery("alic".into()));

        assert_eq!(state.matches()[0].shipping_address.len(), 3);
    }

    #[test]
    fn save_without_match_warns() {
        let mut state = loaded();
        state.apply(WorkflowAction::OpenEditor);
        state.apply(WorkflowAction::SaveDraft);

        let notices = state.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert!(!state.editor().is_open());
        assert!(state.customers().iter().all(|c| c.address_version() == 0));
    }

    // ── Submit ───────────────────────────────────────────────────────

    #[test]
    fn submit_without_selection_is_precondition_notice() {
        let mut state = committed("alice", 0);
        assert_eq!(state.apply(WorkflowAction::Submit), None);

        let notices = state.take_notices();
        assert_eq!(notices, vec![Notice::error("No address selected")]);
        assert!(!state.is_submitting());
    }

    #[test]
    fn submit_without_commit_is_precondition_notice() {
        let mut state = loaded();
        state.apply(WorkflowAction::SetQuery("alice".into()));
        state.apply(WorkflowAction::ToggleAddress(0));

        assert_eq!(state.apply(WorkflowAction::Submit), None);
        assert_eq!(state.take_notices().len(), 1);
    }

    #[test]
    fn submit_emits_effect_with_carried_identifier() {
        let mut state = committed("ali", 1);
        state.apply(WorkflowAction::ToggleAddress(0));

        let effect = state.apply(WorkflowAction::Submit);

        assert_eq!(
            effect,
            Some(Effect::SubmitTask(Submission {
                customer_id: CustomerId::from("C2"),
                customer_name: "Alina".into(),
                address: addr("Unit 4"),
            }))
        );
        assert!(state.is_submitting());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut state = committed("alice", 0);
        state.apply(WorkflowAction::ToggleAddress(0));
        assert!(state.apply(WorkflowAction::Submit).is_some());

        assert_eq!(state.apply(WorkflowAction::Submit), None);
        assert!(state.notices().is_empty());

        state.apply(WorkflowAction::SubmitSucceeded);
        assert!(!state.is_submitting());
        assert_eq!(state.take_notices()[0].level, NoticeLevel::Success);
        assert!(state.apply(WorkflowAction::Submit).is_some());
    }

    #[test]
    fn submit_failure_clears_flag_and_notifies() {
        let mut state = committed("alice", 0);
        state.apply(WorkflowAction::ToggleAddress(0));
        state.apply(WorkflowAction::Submit);

        state.apply(WorkflowAction::SubmitFailed {
            message: "HTTP 500".into(),
        });

        assert!(!state.is_submitting());
        let notices = state.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert!(notices[0].message.contains("HTTP 500"));
    }
}
