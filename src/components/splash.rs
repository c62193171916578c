//! Splash screen component
//!
//! Displays the faculty banner briefly before transitioning to the main app.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Accent colour shared by the logo and title
const ACCENT: Color = Color::Rgb(56, 189, 248);

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
    title: String,
    subtitle: String,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new("Academic Schedule", "")
    }
}

impl SplashComponent {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1500),
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    /// Block-letter calendar mark
    fn logo() -> Vec<&'static str> {
        vec![
            "  ╻      ╻  ",
            "┏━┻━━━━━━┻━┓",
            "┃ ▪ ▪ ▪ ▪ ▪┃",
            "┃ ▪ ▪ ▪ ▪ ▪┃",
            "┃ ▪ ▪ ▪    ┃",
            "┗━━━━━━━━━━┛",
        ]
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let bg_black = Color::Rgb(0, 0, 0);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(bg_black)),
            area,
        );

        let logo_lines = Self::logo();
        let logo_height = logo_lines.len() as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(logo_height + 5)) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo: Vec<Line> = logo_lines
            .iter()
            .map(|line| Line::from(Span::styled(*line, Style::default().fg(ACCENT).bg(bg_black))))
            .collect();
        frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), chunks[1]);

        let title = Line::from(Span::styled(
            self.title.clone(),
            Style::default()
                .fg(Color::White)
                .bg(bg_black)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[3]);

        let subtitle = Line::from(vec![
            Span::styled(self.subtitle.clone(), Style::default().fg(ACCENT).bg(bg_black)),
            Span::styled(
                if self.subtitle.is_empty() { "Academic Schedule" } else { " · Academic Schedule" },
                Style::default().fg(Color::DarkGray).bg(bg_black),
            ),
        ]);
        frame.render_widget(Paragraph::new(subtitle).alignment(Alignment::Center), chunks[4]);

        Ok(())
    }
}
