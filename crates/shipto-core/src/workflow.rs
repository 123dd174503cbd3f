// ── Headless workflow driver ──
//
// Pairs a `WorkflowState` with a `Gateway` and runs every effect inline
// until the state settles. The TUI does the same thing asynchronously
// through its action channel; this driver is for scripted use and tests.

use tracing::debug;

use crate::action::WorkflowAction;
use crate::config::WorkflowConfig;
use crate::error::CoreError;
use crate::gateway::Gateway;
use crate::notice::Notice;
use crate::store::WorkflowState;

#[derive(Debug)]
pub struct AddressWorkflow {
    gateway: Gateway,
    state: WorkflowState,
}

impl AddressWorkflow {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            state: WorkflowState::new(),
        }
    }

    pub fn from_config(config: &WorkflowConfig) -> Result<Self, CoreError> {
        Ok(Self::new(Gateway::new(config)?))
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Apply `action` and perform any effects it chains into.
    pub async fn dispatch(&mut self, action: WorkflowAction) {
        let mut next = self.state.apply(action);
        while let Some(effect) = next {
            debug!(?effect, "performing effect");
            let outcome = self.gateway.perform(effect).await;
            next = self.state.apply(outcome);
        }
    }

    // ── Conveniences ─────────────────────────────────────────────────

    /// Fetch the directory. Only the first call issues a request.
    pub async fn start(&mut self) {
        self.dispatch(WorkflowAction::LoadDirectory).await;
    }

    pub async fn search(&mut self, query: impl Into<String>) {
        self.dispatch(WorkflowAction::SetQuery(query.into())).await;
    }

    pub async fn select(&mut self, nth: usize) {
        self.dispatch(WorkflowAction::SelectMatch(nth)).await;
    }

    pub async fn toggle_address(&mut self, index: usize) {
        self.dispatch(WorkflowAction::ToggleAddress(index)).await;
    }

    pub async fn submit(&mut self) {
        self.dispatch(WorkflowAction::Submit).await;
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.state.take_notices()
    }
}
