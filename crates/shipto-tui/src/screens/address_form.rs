//! Address form: customer search and address picking.
//!
//! Three focus zones: the search input, the match dropdown, and the address
//! list. Typing always edits the query; committing a match moves focus to
//! the addresses. `Ctrl+S` submits and `Ctrl+N` opens the add-address modal
//! from anywhere on the form.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

use shipto_core::{Address, DirectoryStatus, WorkflowAction, WorkflowState};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::{centered_rect, input_field, single_line};

/// Most dropdown rows shown at once.
const DROPDOWN_ROWS: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Search,
    Dropdown,
    Addresses,
}

pub struct AddressFormScreen {
    focus: Focus,
    dropdown_cursor: usize,
    address_cursor: usize,
    throbber_state: throbber_widgets_tui::ThrobberState,
}

impl AddressFormScreen {
    pub fn new() -> Self {
        Self {
            focus: Focus::Search,
            dropdown_cursor: 0,
            address_cursor: 0,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    /// `true` while printable keys are text input, so global single-key
    /// shortcuts must not fire.
    pub fn captures_text(&self) -> bool {
        self.focus == Focus::Search
    }

    /// Pull focus and cursors back in range after the state moved under us.
    fn sync(&mut self, state: &WorkflowState) {
        let match_count = state.matches().len();
        if self.focus == Focus::Dropdown && (!state.is_dropdown_open() || match_count == 0) {
            self.focus = Focus::Search;
        }
        self.dropdown_cursor = self.dropdown_cursor.min(match_count.saturating_sub(1));

        let address_count = state
            .matched_customer()
            .map_or(0, |c| c.shipping_address.len());
        self.address_cursor = self.address_cursor.min(address_count.saturating_sub(1));
    }

    fn edit_query(&mut self, state: &WorkflowState, edit: impl FnOnce(&mut String)) -> Option<Action> {
        let mut query = state.query().to_owned();
        edit(&mut query);
        if query == state.query() {
            return None;
        }
        self.focus = Focus::Search;
        self.dropdown_cursor = 0;
        self.address_cursor = 0;
        Some(WorkflowAction::SetQuery(query).into())
    }

    fn handle_search_key(&mut self, key: KeyEvent, state: &WorkflowState) -> Option<Action> {
        let has_matches = state.is_dropdown_open() && !state.matches().is_empty();
        match key.code {
            KeyCode::Char(c) => self.edit_query(state, |q| q.push(c)),
            KeyCode::Backspace => self.edit_query(state, |q| {
                q.pop();
            }),
            KeyCode::Esc => self.edit_query(state, String::clear),
            KeyCode::Down | KeyCode::Enter if has_matches => {
                self.focus = Focus::Dropdown;
                self.dropdown_cursor = 0;
                None
            }
            KeyCode::Tab | KeyCode::Enter | KeyCode::Down if state.matched_customer().is_some() => {
                self.focus = Focus::Addresses;
                None
            }
            _ => None,
        }
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent, state: &WorkflowState) -> Option<Action> {
        let last = state.matches().len().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                if self.dropdown_cursor == 0 {
                    self.focus = Focus::Search;
                } else {
                    self.dropdown_cursor -= 1;
                }
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.dropdown_cursor = (self.dropdown_cursor + 1).min(last);
                None
            }
            KeyCode::Enter => {
                let nth = self.dropdown_cursor;
                self.focus = Focus::Addresses;
                self.address_cursor = 0;
                Some(WorkflowAction::SelectMatch(nth).into())
            }
            KeyCode::Esc => {
                self.focus = Focus::Search;
                None
            }
            KeyCode::Char(c) => self.edit_query(state, |q| q.push(c)),
            KeyCode::Backspace => self.edit_query(state, |q| {
                q.pop();
            }),
            _ => None,
        }
    }

    fn handle_address_key(&mut self, key: KeyEvent, state: &WorkflowState) -> Option<Action> {
        let count = state
            .matched_customer()
            .map_or(0, |c| c.shipping_address.len());
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.address_cursor = self.address_cursor.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.address_cursor = (self.address_cursor + 1).min(count.saturating_sub(1));
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter if count > 0 => {
                Some(WorkflowAction::ToggleAddress(self.address_cursor).into())
            }
            KeyCode::Char('a') => Some(WorkflowAction::OpenEditor.into()),
            KeyCode::Char('s') => Some(WorkflowAction::Submit.into()),
            KeyCode::Char('/') | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => {
                self.focus = Focus::Search;
                None
            }
            _ => None,
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render_panel(frame: &mut Frame, area: Rect) -> Rect {
        let panel = centered_rect(area, 76, 36);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Address Change", theme::title_style()),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default())
            .style(Style::default().bg(theme::BG_DARK));

        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        inner
    }

    fn render_dropdown(&self, frame: &mut Frame, area: Rect, state: &WorkflowState) {
        let active = self.focus == Focus::Dropdown;
        let items: Vec<ListItem> = state
            .matches()
            .into_iter()
            .map(|c| {
                let count = c.shipping_address.len();
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {}", c.name), theme::row()),
                    Span::styled(
                        format!("  {count} address{}", if count == 1 { "" } else { "es" }),
                        theme::key_hint(),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                    .border_type(BorderType::Rounded)
                    .border_style(if active {
                        theme::border_focused()
                    } else {
                        theme::border_default()
                    }),
            )
            .highlight_style(theme::row_selected());

        let mut list_state = ListState::default();
        if active {
            list_state.select(Some(self.dropdown_cursor));
        }
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_addresses(&self, frame: &mut Frame, area: Rect, state: &WorkflowState) {
        let active = self.focus == Focus::Addresses;
        let title = state.matched_customer().map_or_else(
            || " Shipping addresses ".to_owned(),
            |c| format!(" Shipping addresses · {} ", c.name),
        );
        let block = Block::default()
            .title(Span::styled(title, theme::label(active)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if active {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.is_loading() {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label(" Loading customers...")
                .style(theme::label(true))
                .throbber_style(Style::default().fg(theme::SIGNAL_ORANGE));
            frame.render_stateful_widget(throbber, inner, &mut self.throbber_state.clone());
            return;
        }

        let Some(customer) = state.matched_customer() else {
            let hint = if state.directory_status() == DirectoryStatus::Failed {
                " Customer directory unavailable"
            } else {
                " Search for a customer above"
            };
            frame.render_widget(Paragraph::new(Span::styled(hint, theme::placeholder())), inner);
            return;
        };

        if customer.shipping_address.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    " No addresses on file. Press Ctrl+N to add one.",
                    theme::placeholder(),
                )),
                inner,
            );
            return;
        }

        let selected = state.selected_address_index();
        let items: Vec<ListItem> = customer
            .shipping_address
            .iter()
            .enumerate()
            .map(|(i, addr)| address_item(addr, selected == Some(i)))
            .collect();

        let list = List::new(items).highlight_style(theme::row_selected());
        let mut list_state = ListState::default();
        if active {
            list_state.select(Some(self.address_cursor));
        }
        frame.render_stateful_widget(list, inner, &mut list_state);
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect, state: &WorkflowState) {
        if state.is_submitting() {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label(" Submitting task...")
                .style(theme::label(true))
                .throbber_style(Style::default().fg(theme::SIGNAL_ORANGE));
            frame.render_stateful_widget(throbber, area, &mut self.throbber_state.clone());
            return;
        }

        let ready = state.submission().is_ok();
        let style = if ready {
            Style::default()
                .fg(theme::BG_DARK)
                .bg(theme::HARBOR_TEAL)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::key_hint()
        };
        let line = Line::from(vec![
            Span::styled("  Submit  ", style),
            Span::styled("  Ctrl+S", theme::key_hint_key()),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    fn render_key_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.focus {
            Focus::Search => "type to search  ↓ matches  Tab addresses  Esc clear",
            Focus::Dropdown => "↑/↓ move  Enter select  Esc back to search",
            Focus::Addresses => "j/k move  Space select  a add  s submit  / search",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hints, theme::key_hint())).alignment(Alignment::Center),
            area,
        );
    }
}

fn address_item(addr: &Address, checked: bool) -> ListItem<'static> {
    let marker = if checked { "[\u{2713}]" } else { "[ ]" };
    let marker_style = if checked {
        Style::default().fg(theme::SUCCESS_GREEN)
    } else {
        theme::border_default()
    };
    let first = [addr.line1.as_str(), addr.line2.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let second = format!("{}, {} {}", addr.city, addr.state, addr.pincode);
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!(" {marker} "), marker_style),
            Span::styled(first, theme::row()),
        ]),
        Line::from(Span::styled(format!("     {second}"), theme::key_hint())),
    ])
}

// ── Component impl ───────────────────────────────────────────────────

impl Component for AddressFormScreen {
    fn handle_key_event(&mut self, key: KeyEvent, state: &WorkflowState) -> Result<Option<Action>> {
        self.sync(state);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(match key.code {
                KeyCode::Char('s') => Some(WorkflowAction::Submit.into()),
                KeyCode::Char('n') => Some(WorkflowAction::OpenEditor.into()),
                _ => None,
            });
        }

        Ok(match self.focus {
            Focus::Search => self.handle_search_key(key, state),
            Focus::Dropdown => self.handle_dropdown_key(key, state),
            Focus::Addresses => self.handle_address_key(key, state),
        })
    }

    fn handle_paste(&mut self, text: &str, state: &WorkflowState) -> Result<Option<Action>> {
        self.sync(state);
        if self.focus == Focus::Addresses {
            return Ok(None);
        }
        let pasted = single_line(text);
        Ok(self.edit_query(state, |q| q.push_str(&pasted)))
    }

    fn update(&mut self, action: &Action, state: &WorkflowState) -> Result<Option<Action>> {
        if let Action::Tick = action {
            if state.is_loading() || state.is_submitting() {
                self.throbber_state.calc_next();
            }
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &WorkflowState) {
        let inner = Self::render_panel(frame, area);

        let dropdown_height = if state.is_dropdown_open() && !state.matches().is_empty() {
            let rows = u16::try_from(state.matches().len()).unwrap_or(u16::MAX);
            rows.min(DROPDOWN_ROWS) + 1
        } else {
            0
        };

        let layout = Layout::vertical([
            Constraint::Length(1),                           // spacer
            Constraint::Length(input_field::FIELD_HEIGHT),   // search
            Constraint::Length(dropdown_height),             // dropdown
            Constraint::Min(4),                              // addresses
            Constraint::Length(1),                           // submit
            Constraint::Length(1),                           // hints
        ])
        .split(Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        ));

        input_field::render_input_field(
            frame,
            layout[1],
            "  Customer",
            state.query(),
            "Search customers by name",
            self.focus == Focus::Search,
        );

        if dropdown_height > 0 {
            self.render_dropdown(frame, layout[2], state);
        }

        self.render_addresses(frame, layout[3], state);
        self.render_submit(frame, layout[4], state);
        self.render_key_hints(frame, layout[5]);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shipto_core::Customer;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_query(query: &str) -> WorkflowState {
        let mut state = WorkflowState::new();
        state.apply(WorkflowAction::LoadDirectory);
        state.apply(WorkflowAction::DirectoryLoaded(vec![
            Customer::new("C1", "Alice", vec![Address::default(), Address::default()]),
            Customer::new("C2", "Alina", vec![]),
        ]));
        state.apply(WorkflowAction::SetQuery(query.into()));
        state
    }

    #[test]
    fn typing_appends_to_query() {
        let state = state_with_query("al");
        let mut screen = AddressFormScreen::new();

        let action = screen
            .handle_key_event(key(KeyCode::Char('i')), &state)
            .unwrap();

        assert_eq!(action, Some(WorkflowAction::SetQuery("ali".into()).into()));
    }

    #[test]
    fn backspace_on_empty_query_does_nothing() {
        let state = state_with_query("");
        let mut screen = AddressFormScreen::new();

        let action = screen
            .handle_key_event(key(KeyCode::Backspace), &state)
            .unwrap();

        assert_eq!(action, None);
    }

    #[test]
    fn dropdown_enter_commits_highlighted_match() {
        let state = state_with_query("ali");
        let mut screen = AddressFormScreen::new();

        assert_eq!(screen.handle_key_event(key(KeyCode::Down), &state).unwrap(), None);
        assert_eq!(screen.handle_key_event(key(KeyCode::Down), &state).unwrap(), None);
        let action = screen.handle_key_event(key(KeyCode::Enter), &state).unwrap();

        assert_eq!(action, Some(WorkflowAction::SelectMatch(1).into()));
        assert!(!screen.captures_text());
    }

    #[test]
    fn space_toggles_address_under_cursor() {
        let mut state = state_with_query("alice");
        state.apply(WorkflowAction::SelectMatch(0));
        let mut screen = AddressFormScreen::new();

        screen.handle_key_event(key(KeyCode::Tab), &state).unwrap();
        screen.handle_key_event(key(KeyCode::Char('j')), &state).unwrap();
        let action = screen.handle_key_event(key(KeyCode::Char(' ')), &state).unwrap();

        assert_eq!(action, Some(WorkflowAction::ToggleAddress(1).into()));
    }

    #[test]
    fn cursor_clamps_to_address_count() {
        let mut state = state_with_query("alice");
        state.apply(WorkflowAction::SelectMatch(0));
        let mut screen = AddressFormScreen::new();
        screen.handle_key_event(key(KeyCode::Tab), &state).unwrap();

        for _ in 0..5 {
            screen.handle_key_event(key(KeyCode::Down), &state).unwrap();
        }
        let action = screen.handle_key_event(key(KeyCode::Enter), &state).unwrap();

        assert_eq!(action, Some(WorkflowAction::ToggleAddress(1).into()));
    }

    #[test]
    fn ctrl_s_submits_from_search() {
        let state = state_with_query("");
        let mut screen = AddressFormScreen::new();

        let action = screen
            .handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL), &state)
            .unwrap();

        assert_eq!(action, Some(WorkflowAction::Submit.into()));
    }

    #[test]
    fn plain_s_types_while_searching() {
        let state = state_with_query("");
        let mut screen = AddressFormScreen::new();

        let action = screen.handle_key_event(key(KeyCode::Char('s')), &state).unwrap();

        assert_eq!(action, Some(WorkflowAction::SetQuery("s".into()).into()));
    }

    #[test]
    fn paste_extends_query_as_one_line() {
        let state = state_with_query("al");
        let mut screen = AddressFormScreen::new();

        let action = screen.handle_paste("ice\n", &state).unwrap();

        assert_eq!(action, Some(WorkflowAction::SetQuery("alice".into()).into()));
    }

    #[test]
    fn paste_on_address_list_is_ignored() {
        let mut state = state_with_query("alice");
        state.apply(WorkflowAction::SelectMatch(0));
        let mut screen = AddressFormScreen::new();
        screen.handle_key_event(key(KeyCode::Tab), &state).unwrap();

        assert_eq!(screen.handle_paste("Bob", &state).unwrap(), None);
    }
}
