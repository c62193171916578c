//! Layout calculations and text helpers for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;
use std::str::FromStr;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout: header, body, optional status line, help bar
pub fn calculate_main_layout(area: Rect, has_status: bool) -> MainLayout {
    let mut constraints = vec![Constraint::Length(4), Constraint::Min(0)];
    if has_status {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (status, help) = if has_status {
        (Some(chunks[2]), chunks[3])
    } else {
        (None, chunks[2])
    };

    MainLayout {
        header: chunks[0],
        body: chunks[1],
        status,
        help,
    }
}

/// Cut `text` to at most `max_width` terminal columns, ending with '…' if cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `text` with spaces to `width` terminal columns
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - current))
}

/// Interpret a department colour hint, falling back to white
pub fn department_color(hint: &str) -> Color {
    Color::from_str(hint.trim()).unwrap_or(Color::White)
}
