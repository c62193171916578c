//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Department List
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next department
    NextItem,
    /// Move to previous department
    PrevItem,
    /// Jump to first department
    FirstItem,
    /// Jump to last department
    LastItem,
    /// Open the highlighted department
    OpenHighlighted,
    /// Open a department by code
    SelectDepartment(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Department Schedule
    // ─────────────────────────────────────────────────────────────────────────
    /// Select a day by name
    SelectDay(String),
    /// Select the day at a position in the department's schedule
    SelectDayIndex(usize),
    /// Select the following day
    NextDay,
    /// Select the preceding day
    PrevDay,
    /// Scroll the lecture list up one line
    ScrollUp,
    /// Scroll the lecture list down one line
    ScrollDown,
    /// Scroll the lecture list up one page
    PageUp,
    /// Scroll the lecture list down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Step back one level (day, then department)
    GoBack,
    /// Return to the department list
    ResetToTop,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add character to search query
    SearchInput(char),
    /// Remove last character from search query
    SearchBackspace,
    /// Empty the search query
    ClearSearch,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Data
    // ─────────────────────────────────────────────────────────────────────────
    /// Reload the dataset from the configured source
    ReloadDataset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::OpenHighlighted => write!(f, "OpenHighlighted"),
            Action::SelectDepartment(code) => write!(f, "SelectDepartment({})", code),
            Action::SelectDay(day) => write!(f, "SelectDay({})", day),
            Action::SelectDayIndex(idx) => write!(f, "SelectDayIndex({})", idx),
            Action::NextDay => write!(f, "NextDay"),
            Action::PrevDay => write!(f, "PrevDay"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::GoBack => write!(f, "GoBack"),
            Action::ResetToTop => write!(f, "ResetToTop"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::ClearSearch => write!(f, "ClearSearch"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ReloadDataset => write!(f, "ReloadDataset"),
        }
    }
}
