//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App coordinates between components; selection and search rules live in
//! `ScheduleView`, loading rules in the dataset service.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    adjacent_day, draw_home_screen, DepartmentListComponent, HelpDialog, HomeRenderContext,
    QuitDialog, ScheduleComponent, SplashComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::AppMode;
use crate::model::{DomainState, ScheduleView, ViewLevel};
use crate::services::{self, DatasetError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, error, info};
use ratatui::{layout::Rect, Frame};

/// Status bar text for a dataset file that could not be used
fn fallback_message(err: &DatasetError) -> String {
    format!("{} (showing built-in schedule)", err)
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Domain state (the department table)
    pub domain: DomainState,

    /// Selection and search state
    pub view: ScheduleView,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub departments: DepartmentListComponent,
    pub schedule: ScheduleComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app, loading the configured dataset.
    ///
    /// A dataset file that fails to load is shown as an error over the
    /// built-in schedule; only a broken built-in schedule is fatal.
    pub fn new(config: Config) -> Result<App> {
        let dataset_path = config.dataset_path();
        let (domain, load_error) = services::load_with_fallback(dataset_path.as_deref())?;

        let mut app = Self::from_parts(config, domain);
        app.error = load_error.as_ref().map(fallback_message);
        Ok(app)
    }

    /// Create the app around an already loaded department table
    pub fn from_parts(config: Config, domain: DomainState) -> App {
        let mode = if config.show_splash {
            AppMode::Splash
        } else {
            AppMode::Running
        };

        let mut app = App {
            mode,
            domain,
            view: ScheduleView::new(),
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            splash: SplashComponent::new(config.title.clone(), config.subtitle.clone()),
            departments: DepartmentListComponent::new(),
            schedule: ScheduleComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            config,
        };
        app.departments.select_first(app.filtered_count());
        app
    }

    /// Number of departments passing the current search
    fn filtered_count(&self) -> usize {
        self.view.filtered_departments(&self.domain.departments).len()
    }

    /// Replace the search query and put the cursor back on the first match
    fn set_search_query(&mut self, query: String) {
        self.view.set_search_query(query);
        self.departments.select_first(self.filtered_count());
    }

    fn highlighted_code(&self) -> Option<String> {
        let filtered = self.view.filtered_departments(&self.domain.departments);
        self.departments
            .highlighted(&filtered)
            .map(|dept| dept.code.clone())
    }

    /// Day names of the selected department, owned so the view can be mutated
    fn selected_day_names(&self) -> Vec<String> {
        self.view
            .selected_department(&self.domain.departments)
            .map(|dept| dept.day_names().into_iter().map(String::from).collect())
            .unwrap_or_default()
    }

    fn step_day(&self, forward: bool) -> Option<Action> {
        let days = self.selected_day_names();
        let days: Vec<&str> = days.iter().map(String::as_str).collect();
        adjacent_day(&days, self.view.selected_day(), forward)
            .map(|day| Action::SelectDay(day.to_string()))
    }

    /// Reload the dataset from the configured source, keeping the selection
    fn reload_dataset(&mut self) {
        let dataset_path = self.config.dataset_path();
        match services::load_with_fallback(dataset_path.as_deref()) {
            Ok((domain, load_error)) => {
                self.domain = domain;
                self.error = load_error.as_ref().map(fallback_message);
                self.status_message = Some(format!(
                    "Reloaded {} departments from {}",
                    self.domain.departments.len(),
                    self.domain.source
                ));

                let count = self.filtered_count();
                if self.departments.list_state.selected().map_or(true, |i| i >= count) {
                    self.departments.select_first(count);
                }
            }
            Err(e) => {
                error!("Reload failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                self.status_message = None;

                if let Some(modal) = self.modals.top().copied() {
                    self.handle_modal_key_event(modal, key)
                } else {
                    match self.view.level() {
                        ViewLevel::Departments => self.departments.handle_key_event(key),
                        ViewLevel::Department => self.schedule.handle_key_event(key),
                    }
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!("{}", action);
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(action);
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                info!("Quitting");
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Department List (delegate to DepartmentListComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.departments.next(self.filtered_count()),
            Action::PrevItem => self.departments.previous(self.filtered_count()),
            Action::FirstItem => self.departments.select_first(self.filtered_count()),
            Action::LastItem => self.departments.select_last(self.filtered_count()),
            Action::OpenHighlighted => {
                return Ok(self.highlighted_code().map(Action::SelectDepartment));
            }
            Action::SelectDepartment(code) => {
                self.view.select_department(&code, &self.domain.departments);
                self.departments.exit_search_mode();
                self.schedule.reset_scroll();
                info!(
                    "Opened department {} (day: {})",
                    code,
                    self.view.selected_day().unwrap_or("none")
                );
            }

            // ─────────────────────────────────────────────────────────────────
            // Department Schedule
            // ─────────────────────────────────────────────────────────────────
            Action::SelectDay(day) => {
                self.view.select_day(&day);
                self.schedule.reset_scroll();
            }
            Action::SelectDayIndex(index) => {
                return Ok(self
                    .selected_day_names()
                    .into_iter()
                    .nth(index)
                    .map(Action::SelectDay));
            }
            Action::NextDay => return Ok(self.step_day(true)),
            Action::PrevDay => return Ok(self.step_day(false)),
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                self.schedule.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::GoBack => {
                self.view.go_back();
                self.schedule.reset_scroll();
            }
            Action::ResetToTop => {
                self.view.reset_to_top();
                self.schedule.reset_scroll();
            }

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.departments.enter_search_mode(),
            Action::ExitSearchMode => self.departments.exit_search_mode(),
            Action::SearchInput(c) => {
                let mut query = self.view.search_query().to_string();
                query.push(c);
                self.set_search_query(query);
            }
            Action::SearchBackspace => {
                let mut query = self.view.search_query().to_string();
                query.pop();
                self.set_search_query(query);
            }
            Action::ClearSearch => self.set_search_query(String::new()),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                if self.modals.top() != Some(&Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.toggle(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Data
            // ─────────────────────────────────────────────────────────────────
            Action::ReloadDataset => self.reload_dataset(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let ctx = HomeRenderContext {
                    title: &self.config.title,
                    subtitle: &self.config.subtitle,
                    domain: &self.domain,
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                };

                draw_home_screen(
                    frame,
                    area,
                    &mut self.departments,
                    &mut self.schedule,
                    &self.view,
                    &ctx,
                );

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top().copied() {
                    self.draw_modal(frame, area, modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}
