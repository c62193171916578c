//! Schedule view state - selection, search and the values derived from them
//!
//! `ScheduleView` stores only what the user chose (department code, day name,
//! search text). Everything shown on screen is recomputed from that state and
//! the department table on demand, so lookups that miss simply yield nothing.

use super::schedule::{DaySchedule, Department, Lecture};
use std::collections::BTreeMap;

/// Which screen the current selection describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLevel {
    /// Top-level department list
    Departments,
    /// A department is selected (day tabs + schedule)
    Department,
}

/// Lectures sharing one time slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureGroup<'a> {
    pub time: &'a str,
    pub lectures: Vec<&'a Lecture>,
}

/// Transient navigation and search state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleView {
    selected_dept_code: Option<String>,
    selected_day: Option<String>,
    search_query: String,
}

impl ScheduleView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_dept_code(&self) -> Option<&str> {
        self.selected_dept_code.as_deref()
    }

    pub fn selected_day(&self) -> Option<&str> {
        self.selected_day.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn level(&self) -> ViewLevel {
        if self.selected_dept_code.is_some() {
            ViewLevel::Department
        } else {
            ViewLevel::Departments
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Intents
    // ─────────────────────────────────────────────────────────────────────────

    /// Select a department and jump straight to its first day, if it has one
    pub fn select_department(&mut self, code: &str, departments: &[Department]) {
        self.selected_dept_code = Some(code.to_string());
        self.selected_day = departments
            .iter()
            .find(|d| d.code == code)
            .and_then(|d| d.schedule.first())
            .map(|day| day.day_name.clone());
    }

    /// Select a day by name. Unknown names resolve to no active schedule.
    pub fn select_day(&mut self, day_name: &str) {
        self.selected_day = Some(day_name.to_string());
    }

    /// Step back one level: day, then department, then nothing
    pub fn go_back(&mut self) {
        if self.selected_day.is_some() {
            self.selected_day = None;
        } else if self.selected_dept_code.is_some() {
            self.selected_dept_code = None;
        }
    }

    pub fn reset_to_top(&mut self) {
        self.selected_dept_code = None;
        self.selected_day = None;
    }

    /// Store the query verbatim; case folding happens when filtering
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selected_department<'a>(&self, departments: &'a [Department]) -> Option<&'a Department> {
        let code = self.selected_dept_code.as_deref()?;
        departments.iter().find(|d| d.code == code)
    }

    pub fn active_schedule<'a>(&self, departments: &'a [Department]) -> Option<&'a DaySchedule> {
        let day_name = self.selected_day.as_deref()?;
        self.selected_department(departments)?.day(day_name)
    }

    /// Number of lectures on the active day (0 when nothing is active)
    pub fn lecture_count(&self, departments: &[Department]) -> usize {
        self.active_schedule(departments)
            .map(|s| s.lectures.len())
            .unwrap_or(0)
    }

    /// Active day's lectures bucketed by exact time slot.
    ///
    /// Buckets are ordered by byte-wise comparison of the slot string, which
    /// is chronological only for zero-padded 24-hour labels. Lecture order
    /// inside a bucket follows the schedule.
    pub fn grouped_lectures<'a>(&self, departments: &'a [Department]) -> Vec<LectureGroup<'a>> {
        let Some(schedule) = self.active_schedule(departments) else {
            return Vec::new();
        };

        let mut grouped: BTreeMap<&str, Vec<&Lecture>> = BTreeMap::new();
        for lecture in &schedule.lectures {
            grouped
                .entry(lecture.time_slot.as_str())
                .or_default()
                .push(lecture);
        }

        grouped
            .into_iter()
            .map(|(time, lectures)| LectureGroup { time, lectures })
            .collect()
    }

    /// Departments whose name or code contains the query, case-insensitively
    pub fn filtered_departments<'a>(&self, departments: &'a [Department]) -> Vec<&'a Department> {
        if self.search_query.is_empty() {
            return departments.iter().collect();
        }

        let query = self.search_query.to_lowercase();
        departments
            .iter()
            .filter(|d| d.matches_query(&query))
            .collect()
    }
}
