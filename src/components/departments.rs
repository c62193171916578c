//! Department list component
//!
//! Top-level screen: a search box over a list of departments. Owns the list
//! cursor and search-mode flag; the query itself lives in `ScheduleView`.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{department_color, truncate_to_width};
use crate::model::{Department, ScheduleView};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Department list with search
#[derive(Default)]
pub struct DepartmentListComponent {
    /// Cursor into the filtered department list
    pub list_state: ListState,

    /// Whether key presses edit the search query
    pub search_mode: bool,
}

impl DepartmentListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor down, wrapping to the top
    pub fn next(&mut self, count: usize) {
        if count == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Move the cursor up, wrapping to the bottom
    pub fn previous(&mut self, count: usize) {
        if count == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) if i > 0 && i < count => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, count: usize) {
        self.list_state.select(if count == 0 { None } else { Some(0) });
    }

    pub fn select_last(&mut self, count: usize) {
        self.list_state.select(count.checked_sub(1));
    }

    /// Department under the cursor
    pub fn highlighted<'a>(&self, filtered: &[&'a Department]) -> Option<&'a Department> {
        filtered.get(self.list_state.selected()?).copied()
    }

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Key handling while the search box has focus
    pub fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }
}

impl Component for DepartmentListComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.search_mode {
            return self.handle_search_key_event(key);
        }

        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => Some(Action::OpenHighlighted),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('R') => Some(Action::ReloadDataset),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the department table; see draw_department_list
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the search box and the filtered department list
pub fn draw_department_list(
    frame: &mut Frame,
    area: Rect,
    list: &mut DepartmentListComponent,
    view: &ScheduleView,
    departments: &[Department],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_search_box(frame, chunks[0], list.search_mode, view.search_query());

    let filtered = view.filtered_departments(departments);
    if filtered.is_empty() {
        let message = if view.search_query().is_empty() {
            "No departments available.".to_string()
        } else {
            format!("No departments found matching \"{}\"", view.search_query())
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center)
        .block(department_block(0));
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    // Inner width minus borders and the highlight symbol
    let name_width = chunks[1].width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|dept| {
            let accent = department_color(&dept.color);
            let code = format!(" {} ", dept.code);
            let name_room = name_width.saturating_sub(code.chars().count() + 1);
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(
                        code,
                        Style::default()
                            .fg(Color::Black)
                            .bg(accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        truncate_to_width(&dept.name, name_room),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {} Days Scheduled", dept.days_scheduled()),
                    Style::default().fg(Color::DarkGray),
                )),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(department_block(filtered.len()))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list_widget, chunks[1], &mut list.list_state);
}

fn department_block(count: usize) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" Select Department ({}) ", count))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_search_box(frame: &mut Frame, area: Rect, search_mode: bool, query: &str) {
    let content = if query.is_empty() && !search_mode {
        Line::from(Span::styled(
            "Search departments... (press /)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if search_mode { "_" } else { "" };
        Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::Cyan)),
            Span::styled(format!("{}{}", query, cursor), Style::default().fg(Color::White)),
        ])
    };

    let border_color = if search_mode { Color::Cyan } else { Color::DarkGray };
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(paragraph, area);
}
