//! Harbor palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const HARBOR_TEAL: Color = Color::Rgb(94, 234, 212); // #5eead4
pub const SIGNAL_ORANGE: Color = Color::Rgb(251, 146, 60); // #fb923c
pub const BUOY_YELLOW: Color = Color::Rgb(250, 204, 21); // #facc15
pub const SUCCESS_GREEN: Color = Color::Rgb(74, 222, 128); // #4ade80
pub const ERROR_RED: Color = Color::Rgb(248, 113, 113); // #f87171
pub const SKY_BLUE: Color = Color::Rgb(125, 211, 252); // #7dd3fc

// ── Extended Palette ──────────────────────────────────────────────────

pub const FOAM_WHITE: Color = Color::Rgb(203, 213, 225); // #cbd5e1
pub const SLATE_GRAY: Color = Color::Rgb(100, 116, 139); // #64748b
pub const BG_HIGHLIGHT: Color = Color::Rgb(30, 41, 59); // #1e293b
pub const BG_DARK: Color = Color::Rgb(15, 23, 42); // #0f172a

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(HARBOR_TEAL).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel or field.
pub fn border_focused() -> Style {
    Style::default().fg(SIGNAL_ORANGE)
}

pub fn border_default() -> Style {
    Style::default().fg(SLATE_GRAY)
}

pub fn label(active: bool) -> Style {
    if active {
        Style::default().fg(HARBOR_TEAL)
    } else {
        Style::default().fg(FOAM_WHITE)
    }
}

/// Normal list row text.
pub fn row() -> Style {
    Style::default().fg(FOAM_WHITE)
}

/// Row under the cursor of a focused list.
pub fn row_selected() -> Style {
    Style::default()
        .fg(SIGNAL_ORANGE)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Placeholder text for empty lists and inputs.
pub fn placeholder() -> Style {
    Style::default()
        .fg(SLATE_GRAY)
        .add_modifier(Modifier::ITALIC)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(SLATE_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(HARBOR_TEAL).add_modifier(Modifier::BOLD)
}
