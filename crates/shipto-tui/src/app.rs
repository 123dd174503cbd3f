//! Application core: event loop and workflow dispatch.

use std::time::Instant;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use shipto_core::{DirectoryStatus, Gateway, WorkflowAction, WorkflowState};

use crate::action::Action;
use crate::component::Component;
use crate::effects::spawn_effect;
use crate::event::{Event, EventRates, EventReader};
use crate::notifications::NotificationQueue;
use crate::screens::{AddressEditorModal, AddressFormScreen};
use crate::theme;
use crate::tui::Tui;
use crate::widgets::{centered_rect, toast};

/// Top-level application state and event loop.
pub struct App {
    /// Single owner of the workflow state.
    state: WorkflowState,
    gateway: Gateway,
    form: AddressFormScreen,
    editor: AddressEditorModal,
    running: bool,
    help_visible: bool,
    notifications: NotificationQueue,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(gateway: Gateway) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: WorkflowState::new(),
            gateway,
            form: AddressFormScreen::new(),
            editor: AddressEditorModal::new(),
            running: true,
            help_visible: false,
            notifications: NotificationQueue::default(),
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        let (w, h) = tui.size().unwrap_or((80, 24));
        debug!(width = w, height = h, "terminal ready");

        let mut events = EventReader::new(EventRates::default());

        self.action_tx
            .send(WorkflowAction::LoadDirectory.into())?;

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Paste(text) => {
                    if let Some(action) = self.handle_paste(&text)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                let render = action == Action::Render;
                self.process_action(action)?;
                if render {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Global keys first, then the modal if open, else the form.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        if self.state.editor().is_open() {
            return self.editor.handle_key_event(key, &self.state);
        }

        if !self.form.captures_text() && key.modifiers == KeyModifiers::NONE {
            match key.code {
                KeyCode::Char('q') => return Ok(Some(Action::Quit)),
                KeyCode::Char('?') => return Ok(Some(Action::ToggleHelp)),
                _ => {}
            }
        }

        self.form.handle_key_event(key, &self.state)
    }

    /// Paste goes to whichever text surface is in front.
    fn handle_paste(&mut self, text: &str) -> Result<Option<Action>> {
        if self.help_visible {
            return Ok(None);
        }
        debug!(chars = text.chars().count(), "paste");
        if self.state.editor().is_open() {
            return self.editor.handle_paste(text, &self.state);
        }
        self.form.handle_paste(text, &self.state)
    }

    fn process_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::Resize(w, h) => debug!(width = w, height = h, "resized"),
            Action::Render => {}

            Action::Tick => {
                self.notifications.tick(Instant::now());
                if let Some(follow_up) = self.form.update(&Action::Tick, &self.state)? {
                    self.action_tx.send(follow_up)?;
                }
            }

            Action::Workflow(workflow_action) => {
                if let Some(effect) = self.state.apply(workflow_action) {
                    spawn_effect(self.gateway.clone(), effect, self.action_tx.clone());
                }
                for notice in self.state.take_notices() {
                    self.action_tx.send(Action::Notify(notice))?;
                }
            }

            Action::Notify(notice) => self.notifications.push(notice, Instant::now()),
        }
        Ok(())
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(theme::BG_DARK)), area);

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

        self.form.render(frame, layout[0], &self.state);
        self.render_status_bar(frame, layout[1]);

        if self.state.editor().is_open() {
            self.editor.render(frame, layout[0], &self.state);
        }

        if let Some(notice) = self.notifications.current() {
            toast::render_toast(frame, area, notice);
        }

        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    /// Directory status and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let indicator = match self.state.directory_status() {
            DirectoryStatus::Loaded => Span::styled(
                format!("● {} customers", self.state.customers().len()),
                Style::default().fg(theme::SUCCESS_GREEN),
            ),
            DirectoryStatus::NotLoaded | DirectoryStatus::Loading => {
                Span::styled("◐ loading", Style::default().fg(theme::BUOY_YELLOW))
            }
            DirectoryStatus::Failed => {
                Span::styled("○ directory unavailable", Style::default().fg(theme::ERROR_RED))
            }
        };

        let line = Line::from(vec![
            Span::raw(" "),
            indicator,
            Span::styled(" │ ", theme::key_hint()),
            Span::styled("^S", theme::key_hint_key()),
            Span::styled(" submit  ", theme::key_hint()),
            Span::styled("^N", theme::key_hint_key()),
            Span::styled(" add address  ", theme::key_hint()),
            Span::styled("?", theme::key_hint_key()),
            Span::styled(" help  ", theme::key_hint()),
            Span::styled("^C", theme::key_hint_key()),
            Span::styled(" quit", theme::key_hint()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let help_area = centered_rect(area, 58, 21);
        frame.render_widget(Clear, help_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let entry = |keys: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<10}"), theme::key_hint_key()),
                Span::styled(what, theme::key_hint()),
            ])
        };
        let heading = |title: &'static str| {
            Line::from(Span::styled(format!("  {title}"), Style::default().fg(theme::SKY_BLUE)))
        };

        let help_text = vec![
            Line::from(""),
            heading("Search"),
            entry("type", "Filter customers by name"),
            entry("↓ / Enter", "Move into the matches"),
            entry("Enter", "Select the highlighted customer"),
            entry("Esc", "Clear the query"),
            Line::from(""),
            heading("Addresses"),
            entry("j/k ↑/↓", "Move"),
            entry("Space", "Select address"),
            entry("a  ^N", "Add an address (this session only)"),
            entry("s  ^S", "Submit task"),
            entry("/", "Back to search"),
            Line::from(""),
            heading("Global"),
            entry("?", "This help"),
            entry("q  ^C", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "                    Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
