//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Department` / `DaySchedule` / `Lecture` - The static schedule records
//! - `ScheduleView` - Selection and search state plus derived views
//! - `DomainState` - The loaded department table and where it came from
//! - `ModalStack` - Modal overlay management

pub mod domain;
pub mod modal;
pub mod schedule;
pub mod time_slot;
pub mod ui;
pub mod view;

// Re-export commonly used types
pub use domain::{DatasetSource, DomainState};
pub use schedule::{DaySchedule, Department, Lecture};
pub use time_slot::TimeSlotStyle;
pub use view::{LectureGroup, ScheduleView, ViewLevel};
