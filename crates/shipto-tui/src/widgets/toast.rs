//! Notification toast in the bottom-right corner.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use shipto_core::{Notice, NoticeLevel};

use crate::theme;
use crate::widgets::text_width;

pub fn render_toast(frame: &mut Frame, area: Rect, notice: &Notice) {
    let width = text_width(&notice.message)
        .saturating_add(6)
        .clamp(20, 70)
        .min(area.width);
    let height = 3u16.min(area.height);

    let x = area.width.saturating_sub(width + 1);
    let y = area.height.saturating_sub(height + 2); // above status bar
    let toast_area = Rect::new(area.x + x, area.y + y, width, height);

    let (border_color, icon) = match notice.level {
        NoticeLevel::Success => (theme::SUCCESS_GREEN, "✓"),
        NoticeLevel::Error => (theme::ERROR_RED, "✗"),
        NoticeLevel::Warning => (theme::BUOY_YELLOW, "!"),
        NoticeLevel::Info => (theme::SKY_BLUE, "·"),
    };

    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme::BG_DARK));

    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let line = Line::from(vec![
        Span::styled(format!(" {icon} "), Style::default().fg(border_color)),
        Span::styled(notice.message.as_str(), theme::row()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
