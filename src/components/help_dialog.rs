//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Clear the area
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to add a section header
    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    // Helper to add a shortcut line
    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    // Department list
    add_section(&mut lines, "Department List");
    add_shortcut(&mut lines, "j / ↓", "Move to next department");
    add_shortcut(&mut lines, "k / ↑", "Move to previous department");
    add_shortcut(&mut lines, "g / G", "Jump to first / last department");
    add_shortcut(&mut lines, "Enter / l", "Open department schedule");

    // Search
    add_section(&mut lines, "Search");
    add_shortcut(&mut lines, "/", "Search by name or code");
    add_shortcut(&mut lines, "Enter / Esc", "Leave the search box");
    add_shortcut(&mut lines, "Esc", "Clear the search query");

    // Schedule
    add_section(&mut lines, "Department Schedule");
    add_shortcut(&mut lines, "Tab / l / →", "Next day");
    add_shortcut(&mut lines, "S-Tab / h / ←", "Previous day");
    add_shortcut(&mut lines, "1-9", "Jump to day by position");
    add_shortcut(&mut lines, "j / k", "Scroll lectures");
    add_shortcut(&mut lines, "PgDn / PgUp", "Scroll one page");
    add_shortcut(&mut lines, "Ctrl+d / u", "Scroll one page");

    // Navigation
    add_section(&mut lines, "Navigation");
    add_shortcut(&mut lines, "Esc / Bksp", "Go back one level");
    add_shortcut(&mut lines, "H", "Back to department list");

    // General
    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "R", "Reload schedule data");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(dialog.handle_key_event(key).unwrap(), Some(Action::CloseModal));
        }
    }

    #[test]
    fn test_scroll_keys_move_offset() {
        let mut dialog = HelpDialog::default();
        dialog.handle_key_event(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)).unwrap();
        assert_eq!(dialog.scroll_offset, 10);
        dialog.handle_key_event(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)).unwrap();
        assert_eq!(dialog.scroll_offset, 9);
    }

    #[test]
    fn test_help_lists_schedule_shortcuts() {
        let text: Vec<String> = build_help_content()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|l| l.contains("Back to department list")));
        assert!(text.iter().any(|l| l.contains("Reload schedule data")));
    }
}
