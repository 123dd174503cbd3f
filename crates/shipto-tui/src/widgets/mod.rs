//! Small rendering helpers shared by the screens.

pub mod input_field;
pub mod toast;

use ratatui::layout::Rect;

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// Clamp a string's char count into a `u16` width.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

/// Flatten pasted text into one field value: line breaks and tabs become
/// single spaces, other control characters are dropped, and the ends are
/// trimmed.
pub fn single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\n' | '\r' | '\t') {
            if !out.ends_with(' ') && !out.is_empty() {
                out.push(' ');
            }
        } else if !c.is_control() {
            out.push(c);
        }
    }
    out.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(area, 60, 20);
        assert_eq!(r, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn centered_rect_shrinks_on_small_terminals() {
        let area = Rect::new(0, 0, 30, 10);
        let r = centered_rect(area, 60, 20);
        assert_eq!((r.width, r.height), (28, 8));
        assert!(r.x + r.width <= area.width);
    }

    #[test]
    fn single_line_joins_pasted_lines() {
        assert_eq!(single_line("Flat 7\r\nMG Road\n"), "Flat 7 MG Road");
        assert_eq!(single_line("\tPune\u{7}"), "Pune");
        assert_eq!(single_line("\n\n"), "");
    }
}
