//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod departments;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod schedule;
pub mod splash;

pub use departments::DepartmentListComponent;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeRenderContext};
pub use layout::centered_popup;
pub use quit_dialog::QuitDialog;
pub use schedule::{adjacent_day, ScheduleComponent};
pub use splash::SplashComponent;
