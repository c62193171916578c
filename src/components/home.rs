//! Home screen
//!
//! Frames whichever level is active (department list or department schedule)
//! with the faculty header, a status line, and a context-sensitive help bar.

use crate::components::departments::{draw_department_list, DepartmentListComponent};
use crate::components::layout::calculate_main_layout;
use crate::components::schedule::{draw_department_schedule, ScheduleComponent};
use crate::model::{DomainState, ScheduleView, ViewLevel};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Root label of the breadcrumb trail
const ROOT_CRUMB: &str = "Academic Schedule";

/// Context for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub domain: &'a DomainState,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    list: &mut DepartmentListComponent,
    schedule: &mut ScheduleComponent,
    view: &ScheduleView,
    ctx: &HomeRenderContext,
) {
    let departments = &ctx.domain.departments;
    let has_status = ctx.error.is_some() || ctx.status_message.is_some() || !departments.is_empty();
    let layout = calculate_main_layout(area, has_status);

    render_header(frame, layout.header, view, ctx);

    match view.level() {
        ViewLevel::Departments => {
            draw_department_list(frame, layout.body, list, view, departments)
        }
        ViewLevel::Department => {
            draw_department_schedule(frame, layout.body, schedule, view, departments)
        }
    }

    if let Some(status_area) = layout.status {
        render_status_bar(frame, status_area, ctx);
    }
    render_help_bar(frame, layout.help, view, list.search_mode);
}

/// Breadcrumb trail for the current position
pub fn breadcrumb(view: &ScheduleView) -> Vec<String> {
    let mut crumbs = vec![ROOT_CRUMB.to_string()];
    if let Some(code) = view.selected_dept_code() {
        crumbs.push(code.to_string());
        if let Some(day) = view.selected_day() {
            crumbs.push(day.to_string());
        }
    }
    crumbs
}

fn render_header(frame: &mut Frame, area: Rect, view: &ScheduleView, ctx: &HomeRenderContext) {
    let crumbs = breadcrumb(view);
    let last = crumbs.len() - 1;
    let mut trail = Vec::with_capacity(crumbs.len() * 2);
    for (i, crumb) in crumbs.into_iter().enumerate() {
        if i > 0 {
            trail.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if i == last {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        trail.push(Span::styled(crumb, style));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                ctx.title.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                ctx.subtitle.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(trail),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", ctx.domain.source),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!(
                "{} departments · {} lectures",
                ctx.domain.departments.len(),
                ctx.domain.lecture_total()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    // Error message if present
    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!("  Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    // Status message if present
    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!("  {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hint(key: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Help bar spans for the current level and input mode
fn help_spans(view: &ScheduleView, search_mode: bool) -> Vec<Span<'static>> {
    if search_mode {
        return vec![
            key_hint("Esc/Enter", Color::Yellow),
            Span::raw("Done  "),
            key_hint("Bksp", Color::Yellow),
            Span::raw("Delete  "),
            Span::styled(
                format!("Search: {}", view.search_query()),
                Style::default().fg(Color::Cyan),
            ),
        ];
    }

    match view.level() {
        ViewLevel::Departments => {
            let mut spans = vec![
                key_hint("q", Color::Yellow),
                Span::raw("Quit "),
                key_hint("Enter", Color::Green),
                Span::raw("Open "),
                key_hint("/", Color::Cyan),
                Span::raw("Search "),
            ];
            if !view.search_query().is_empty() {
                spans.push(key_hint("Esc", Color::Cyan));
                spans.push(Span::raw("Clear "));
            }
            spans.extend([
                key_hint("R", Color::Magenta),
                Span::raw("Reload "),
                key_hint("?", Color::White),
                Span::raw("Help"),
            ]);
            spans
        }
        ViewLevel::Department => vec![
            key_hint("Esc", Color::Yellow),
            Span::raw("Back "),
            key_hint("H", Color::Yellow),
            Span::raw("Home "),
            key_hint("Tab", Color::Green),
            Span::raw("Next Day "),
            key_hint("1-9", Color::Green),
            Span::raw("Day "),
            key_hint("j/k", Color::Cyan),
            Span::raw("Scroll "),
            key_hint("?", Color::White),
            Span::raw("Help"),
        ],
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect, view: &ScheduleView, search_mode: bool) {
    let paragraph = Paragraph::new(Line::from(help_spans(view, search_mode))).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DaySchedule, Department};

    fn departments() -> Vec<Department> {
        vec![Department {
            code: "RAD".to_string(),
            name: "Radiology".to_string(),
            color: "lightcyan".to_string(),
            schedule: vec![DaySchedule {
                day_name: "Monday".to_string(),
                lectures: vec![],
            }],
        }]
    }

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_breadcrumb_follows_selection() {
        let departments = departments();
        let mut view = ScheduleView::new();
        assert_eq!(breadcrumb(&view), vec!["Academic Schedule"]);

        view.select_department("RAD", &departments);
        assert_eq!(breadcrumb(&view), vec!["Academic Schedule", "RAD", "Monday"]);

        view.go_back();
        assert_eq!(breadcrumb(&view), vec!["Academic Schedule", "RAD"]);
    }

    #[test]
    fn test_help_bar_depends_on_level() {
        let departments = departments();
        let mut view = ScheduleView::new();
        assert!(text(&help_spans(&view, false)).contains("Search"));
        assert!(!text(&help_spans(&view, false)).contains("Clear"));

        view.set_search_query("ra");
        assert!(text(&help_spans(&view, false)).contains("Clear"));
        assert!(text(&help_spans(&view, true)).contains("Search: ra"));

        view.select_department("RAD", &departments);
        assert!(text(&help_spans(&view, false)).contains("Next Day"));
    }
}
