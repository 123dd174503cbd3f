//! Labelled single-line text input with a block cursor when active.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::theme;

/// Height the field needs: one label row plus a bordered box.
pub const FIELD_HEIGHT: u16 = 4;

pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    active: bool,
) {
    if area.height < 3 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Span::styled(label, theme::label(active))),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if active {
            theme::border_focused()
        } else {
            theme::border_default()
        });

    let block_area = Rect::new(area.x, area.y + 1, area.width, 3.min(area.height - 1));
    let inner = block.inner(block_area);
    frame.render_widget(block, block_area);

    let text = match (value.is_empty(), active) {
        (true, false) => Span::styled(placeholder, theme::placeholder()),
        (_, true) => Span::styled(format!("{value}\u{2588}"), theme::label(true)),
        (false, false) => Span::styled(value, theme::row()),
    };
    frame.render_widget(Paragraph::new(text), inner);
}
