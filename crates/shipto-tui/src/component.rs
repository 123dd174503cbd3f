//! Component trait: the building block for every UI element.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use shipto_core::WorkflowState;

use crate::action::Action;

/// Every UI element implements Component.
///
/// Components keep only view-local state (focus, cursors, spinners); the
/// workflow state is owned by the app and lent to each call.
pub trait Component: Send {
    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, key: KeyEvent, state: &WorkflowState) -> Result<Option<Action>>;

    /// Handle text delivered by bracketed paste. Ignored by default.
    fn handle_paste(&mut self, _text: &str, _state: &WorkflowState) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Process a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action, _state: &WorkflowState) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect, state: &WorkflowState);
}
