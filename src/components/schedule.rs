//! Department schedule component
//!
//! Second-level screen: department banner, day tabs, and the active day's
//! lectures grouped by time slot. Owns only the scroll offset of the lecture
//! list; which day is shown comes from `ScheduleView`.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{department_color, pad_to_width};
use crate::model::{Department, LectureGroup, ScheduleView, TimeSlotStyle};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Tabs},
    Frame,
};

/// Lines moved by PageUp/PageDown
const PAGE_SIZE: u16 = 10;

/// Width of the time label column in group headers
const TIME_LABEL_WIDTH: usize = 11;

/// Department schedule view
#[derive(Default)]
pub struct ScheduleComponent {
    /// Scroll offset of the lecture list
    pub scroll: u16,
    /// Largest useful scroll offset, measured at the last draw
    max_scroll: u16,
}

impl ScheduleComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }
}

impl Component for ScheduleComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Days
            KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextDay),
            KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevDay),
            KeyCode::Char(c @ '1'..='9') => {
                Some(Action::SelectDayIndex(c as usize - '1' as usize))
            }

            // Scrolling
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),

            // Navigation
            KeyCode::Esc | KeyCode::Backspace => Some(Action::GoBack),
            KeyCode::Char('H') | KeyCode::Home => Some(Action::ResetToTop),

            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('R') => Some(Action::ReloadDataset),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1).min(self.max_scroll),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::PageDown => {
                self.scroll = self.scroll.saturating_add(PAGE_SIZE).min(self.max_scroll)
            }
            Action::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_SIZE),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the department table; see draw_department_schedule
        Ok(())
    }
}

/// The day after (or before) `current`, wrapping around.
/// With no current day, forward picks the first and backward the last.
pub fn adjacent_day<'a>(days: &[&'a str], current: Option<&str>, forward: bool) -> Option<&'a str> {
    if days.is_empty() {
        return None;
    }
    let len = days.len();
    let position = current.and_then(|c| days.iter().position(|d| *d == c));

    let idx = match (position, forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    Some(days[idx])
}

/// Colour used for a time slot group
pub fn slot_color(style: TimeSlotStyle) -> Color {
    match style {
        TimeSlotStyle::Morning => Color::Green,
        TimeSlotStyle::LateMorning => Color::LightBlue,
        TimeSlotStyle::Midday => Color::Magenta,
        TimeSlotStyle::Afternoon => Color::Rgb(249, 115, 22),
        TimeSlotStyle::Other => Color::Gray,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the selected department: banner, day tabs, grouped lectures
pub fn draw_department_schedule(
    frame: &mut Frame,
    area: Rect,
    schedule: &mut ScheduleComponent,
    view: &ScheduleView,
    departments: &[Department],
) {
    let Some(dept) = view.selected_department(departments) else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(
                "Department \"{}\" is not in the schedule.",
                view.selected_dept_code().unwrap_or_default()
            ),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    render_banner(frame, chunks[0], dept);
    render_day_tabs(frame, chunks[1], dept, view.selected_day());

    let lines = match view.active_schedule(departments) {
        Some(active) => {
            let groups = view.grouped_lectures(departments);
            build_schedule_lines(&active.day_name, view.lecture_count(departments), &groups)
        }
        None if dept.schedule.is_empty() => vec![empty_line("No days scheduled for this department.")],
        None => vec![empty_line("Please select a day to view the schedule.")],
    };

    render_lecture_lines(frame, chunks[2], schedule, lines);
}

fn empty_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(Color::DarkGray)))
}

fn render_banner(frame: &mut Frame, area: Rect, dept: &Department) {
    let accent = department_color(&dept.color);
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", dept.code),
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            dept.name.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Weekly Academic Plan",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(accent)),
    );
    frame.render_widget(paragraph, area);
}

fn render_day_tabs(frame: &mut Frame, area: Rect, dept: &Department, selected_day: Option<&str>) {
    if dept.schedule.is_empty() {
        return;
    }

    let today = Local::now().format("%A").to_string();
    let days = dept.day_names();
    let titles: Vec<Line> = days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let marker = if day.eq_ignore_ascii_case(&today) { " •" } else { "" };
            Line::from(format!("{} {}{}", i + 1, day, marker))
        })
        .collect();

    let mut tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    // No highlight when the selected day is not one of the tabs
    tabs = match selected_day.and_then(|s| days.iter().position(|d| *d == s)) {
        Some(idx) => tabs.select(idx),
        None => tabs.highlight_style(Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(tabs, area);
}

/// Lines for one day: heading, then each time slot group and its lectures
fn build_schedule_lines(day_name: &str, lecture_count: usize, groups: &[LectureGroup]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                day_name.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} Lectures ", lecture_count),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ),
        ]),
        Line::from(""),
    ];

    if groups.is_empty() {
        lines.push(empty_line(&format!("No lectures scheduled for {}.", day_name)));
        return lines;
    }

    for group in groups {
        let style = TimeSlotStyle::for_slot(group.time);
        let color = slot_color(style);

        lines.push(Line::from(vec![
            Span::styled(
                format!("── {} ", pad_to_width(group.time, TIME_LABEL_WIDTH)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} ", style.label()),
                Style::default().fg(color),
            ),
            Span::styled("──────────────────────", Style::default().fg(Color::DarkGray)),
        ]));

        for lecture in &group.lectures {
            let title = if lecture.title.is_empty() { &lecture.id } else { &lecture.title };
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(color)),
                Span::styled(
                    title.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]));

            let details: Vec<&str> = [lecture.instructor.as_str(), lecture.location.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect();
            if !details.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", details.join(" · ")),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    lines
}

fn render_lecture_lines(
    frame: &mut Frame,
    area: Rect,
    schedule: &mut ScheduleComponent,
    lines: Vec<Line<'static>>,
) {
    let total = lines.len();
    let visible_height = area.height as usize;

    // Clamp scroll offset
    schedule.max_scroll = total.saturating_sub(visible_height) as u16;
    schedule.scroll = schedule.scroll.min(schedule.max_scroll);

    let paragraph = Paragraph::new(lines).scroll((schedule.scroll, 0));
    frame.render_widget(paragraph, area);

    // Render scrollbar if content exceeds visible area
    if total > visible_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible_height)).position(schedule.scroll as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            area,
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Lecture;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn lecture(id: &str, slot: &str, title: &str) -> Lecture {
        Lecture {
            id: id.to_string(),
            time_slot: slot.to_string(),
            title: title.to_string(),
            instructor: "Dr. Salem".to_string(),
            location: String::new(),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_adjacent_day_wraps() {
        let days = ["Sunday", "Monday", "Tuesday"];
        assert_eq!(adjacent_day(&days, Some("Sunday"), true), Some("Monday"));
        assert_eq!(adjacent_day(&days, Some("Tuesday"), true), Some("Sunday"));
        assert_eq!(adjacent_day(&days, Some("Sunday"), false), Some("Tuesday"));
    }

    #[test]
    fn test_adjacent_day_without_selection() {
        let days = ["Sunday", "Monday"];
        assert_eq!(adjacent_day(&days, None, true), Some("Sunday"));
        assert_eq!(adjacent_day(&days, None, false), Some("Monday"));
        assert_eq!(adjacent_day(&days, Some("Friday"), true), Some("Sunday"));
        assert_eq!(adjacent_day(&[], None, true), None);
    }

    #[test]
    fn test_key_mapping() {
        let mut schedule = ScheduleComponent::new();
        assert_eq!(schedule.handle_key_event(key(KeyCode::Tab)).unwrap(), Some(Action::NextDay));
        assert_eq!(schedule.handle_key_event(key(KeyCode::BackTab)).unwrap(), Some(Action::PrevDay));
        assert_eq!(schedule.handle_key_event(key(KeyCode::Char('3'))).unwrap(), Some(Action::SelectDayIndex(2)));
        assert_eq!(schedule.handle_key_event(key(KeyCode::Esc)).unwrap(), Some(Action::GoBack));
        assert_eq!(schedule.handle_key_event(key(KeyCode::Char('H'))).unwrap(), Some(Action::ResetToTop));
        assert_eq!(schedule.handle_key_event(key(KeyCode::Char('0'))).unwrap(), None);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut schedule = ScheduleComponent::new();
        schedule.max_scroll = 3;

        schedule.update(Action::PageDown).unwrap();
        assert_eq!(schedule.scroll, 3);
        schedule.update(Action::ScrollDown).unwrap();
        assert_eq!(schedule.scroll, 3);
        schedule.update(Action::ScrollUp).unwrap();
        assert_eq!(schedule.scroll, 2);
        schedule.update(Action::PageUp).unwrap();
        assert_eq!(schedule.scroll, 0);
    }

    #[test]
    fn test_schedule_lines_follow_group_order() {
        let a = lecture("A", "08:30", "Anatomy");
        let b = lecture("B", "10:30", "");
        let groups = vec![
            LectureGroup { time: "08:30", lectures: vec![&a] },
            LectureGroup { time: "10:30", lectures: vec![&b] },
        ];

        let text: Vec<String> = build_schedule_lines("Sunday", 2, &groups)
            .iter()
            .map(line_text)
            .collect();

        assert!(text[0].contains("Sunday"));
        assert!(text[0].contains("2 Lectures"));
        let morning = text.iter().position(|l| l.contains("08:30") && l.contains("Morning")).unwrap();
        let late = text.iter().position(|l| l.contains("10:30") && l.contains("Late morning")).unwrap();
        assert!(morning < late);
        // Untitled lectures fall back to their id
        assert!(text.iter().any(|l| l == "  • B"));
        assert!(text.iter().any(|l| l.contains("Dr. Salem")));
    }

    #[test]
    fn test_schedule_lines_for_empty_day() {
        let text: Vec<String> = build_schedule_lines("Friday", 0, &[])
            .iter()
            .map(line_text)
            .collect();
        assert!(text.iter().any(|l| l == "No lectures scheduled for Friday."));
    }
}
