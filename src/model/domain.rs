//! Domain state - the department table and its provenance

use super::schedule::Department;
use std::fmt;
use std::path::PathBuf;

/// Where the department table was loaded from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSource {
    /// The dataset compiled into the binary
    #[default]
    Embedded,
    /// A file named in the config
    File(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Embedded => write!(f, "built-in schedule"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Domain state containing the static schedule data
#[derive(Debug, Default)]
pub struct DomainState {
    /// All departments, in dataset order
    pub departments: Vec<Department>,

    /// Source of `departments`
    pub source: DatasetSource,
}

impl DomainState {
    pub fn new(departments: Vec<Department>, source: DatasetSource) -> Self {
        Self {
            departments,
            source,
        }
    }

    /// Total number of lectures across all departments and days
    pub fn lecture_total(&self) -> usize {
        self.departments
            .iter()
            .flat_map(|d| d.schedule.iter())
            .map(|day| day.lectures.len())
            .sum()
    }
}
