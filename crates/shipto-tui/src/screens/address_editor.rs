//! Add-address modal. Five free-text fields; Enter saves, Esc cancels.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use strum::IntoEnumIterator;

use shipto_core::{AddressField, WorkflowAction, WorkflowState};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::{centered_rect, input_field, single_line};

pub struct AddressEditorModal {
    active_field: AddressField,
}

impl AddressEditorModal {
    pub fn new() -> Self {
        Self {
            active_field: AddressField::Line1,
        }
    }

    fn edit(&self, state: &WorkflowState, edit: impl FnOnce(&mut String)) -> Option<Action> {
        let current = state.editor().draft().field(self.active_field);
        let mut value = current.to_owned();
        edit(&mut value);
        (value != current).then(|| {
            WorkflowAction::EditDraft {
                field: self.active_field,
                value,
            }
            .into()
        })
    }

    fn placeholder(field: AddressField) -> &'static str {
        match field {
            AddressField::Line1 => "House / building",
            AddressField::Line2 => "Street / area",
            AddressField::State => "State",
            AddressField::City => "City",
            AddressField::Pincode => "Postal code",
        }
    }
}

impl Component for AddressEditorModal {
    fn handle_key_event(&mut self, key: KeyEvent, state: &WorkflowState) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => {
                self.active_field = AddressField::Line1;
                Some(WorkflowAction::CancelDraft.into())
            }
            KeyCode::Enter => {
                self.active_field = AddressField::Line1;
                Some(WorkflowAction::SaveDraft.into())
            }
            KeyCode::Tab | KeyCode::Down => {
                self.active_field = self.active_field.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.active_field = self.active_field.prev();
                None
            }
            KeyCode::Backspace => self.edit(state, |v| {
                v.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit(state, |v| v.push(c))
            }
            _ => None,
        };
        Ok(action)
    }

    /// Pasted text goes into the active field as one line.
    fn handle_paste(&mut self, text: &str, state: &WorkflowState) -> Result<Option<Action>> {
        let pasted = single_line(text);
        Ok(self.edit(state, |v| v.push_str(&pasted)))
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &WorkflowState) {
        let field_count = u16::try_from(AddressField::iter().count()).unwrap_or(u16::MAX);
        let panel = centered_rect(area, 56, field_count * input_field::FIELD_HEIGHT + 5);
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Add Address", theme::title_style()),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(AddressField::iter().map(|_| Constraint::Length(input_field::FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let chunks = Layout::vertical(constraints).split(Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        ));

        let draft = state.editor().draft();
        for (chunk, field) in chunks.iter().skip(1).zip(AddressField::iter()) {
            input_field::render_input_field(
                frame,
                *chunk,
                &format!("  {field}"),
                draft.field(field),
                Self::placeholder(field),
                field == self.active_field,
            );
        }

        if let Some(hints_area) = chunks.last() {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("Tab", theme::key_hint_key()),
                    Span::styled(" next  ", theme::key_hint()),
                    Span::styled("Enter", theme::key_hint_key()),
                    Span::styled(" save  ", theme::key_hint()),
                    Span::styled("Esc", theme::key_hint_key()),
                    Span::styled(" cancel", theme::key_hint()),
                ]))
                .alignment(Alignment::Center),
                *hints_area,
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn open_editor() -> WorkflowState {
        let mut state = WorkflowState::new();
        state.apply(WorkflowAction::OpenEditor);
        state.apply(WorkflowAction::EditDraft {
            field: AddressField::Line2,
            value: "Apt".into(),
        });
        state
    }

    #[test]
    fn typing_edits_active_field() {
        let state = open_editor();
        let mut modal = AddressEditorModal::new();

        modal.handle_key_event(key(KeyCode::Tab), &state).unwrap();
        let action = modal.handle_key_event(key(KeyCode::Char(' ')), &state).unwrap();

        assert_eq!(
            action,
            Some(
                WorkflowAction::EditDraft {
                    field: AddressField::Line2,
                    value: "Apt ".into(),
                }
                .into()
            )
        );
    }

    #[test]
    fn backspace_on_empty_field_is_noop() {
        let state = open_editor();
        let mut modal = AddressEditorModal::new();

        let action = modal.handle_key_event(key(KeyCode::Backspace), &state).unwrap();

        assert_eq!(action, None);
    }

    #[test]
    fn enter_saves_and_resets_focus() {
        let state = open_editor();
        let mut modal = AddressEditorModal::new();
        modal.handle_key_event(key(KeyCode::Up), &state).unwrap();

        let action = modal.handle_key_event(key(KeyCode::Enter), &state).unwrap();

        assert_eq!(action, Some(WorkflowAction::SaveDraft.into()));
        assert_eq!(modal.active_field, AddressField::Line1);
    }

    #[test]
    fn esc_cancels() {
        let state = open_editor();
        let mut modal = AddressEditorModal::new();

        let action = modal.handle_key_event(key(KeyCode::Esc), &state).unwrap();

        assert_eq!(action, Some(WorkflowAction::CancelDraft.into()));
    }

    #[test]
    fn multiline_paste_stays_in_active_field() {
        let state = open_editor();
        let mut modal = AddressEditorModal::new();
        modal.handle_key_event(key(KeyCode::Tab), &state).unwrap();

        let action = modal.handle_paste("-4B\nMG Road\n", &state).unwrap();

        assert_eq!(
            action,
            Some(
                WorkflowAction::EditDraft {
                    field: AddressField::Line2,
                    value: "Apt-4B MG Road".into(),
                }
                .into()
            )
        );
        assert_eq!(modal.active_field, AddressField::Line2);
    }
}
