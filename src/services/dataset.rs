//! Dataset loading and validation
//!
//! The department table is embedded in the binary and can be replaced by a
//! JSON, YAML or CSV file. Every table is checked for the uniqueness the view
//! relies on (department codes, day names per department, lecture ids per day)
//! before it is handed over.

use crate::model::{DatasetSource, DaySchedule, Department, DomainState, Lecture};
use log::{info, warn};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Built-in schedule, compiled into the binary
const EMBEDDED_SCHEDULE: &str = include_str!("../../data/schedule.json");

/// Time slots must start with a zero-padded "HH:MM" to sort chronologically
static TIME_SLOT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}").unwrap());

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML dataset: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid CSV dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported dataset format '{0}' (expected .json, .yaml, .yml or .csv)")]
    UnsupportedFormat(String),

    #[error("duplicate department code '{0}'")]
    DuplicateDepartment(String),

    #[error("department '{department}' lists day '{day}' more than once")]
    DuplicateDay { department: String, day: String },

    #[error("lecture id '{id}' appears more than once on {department}/{day}")]
    DuplicateLecture {
        department: String,
        day: String,
        id: String,
    },
}

/// On-disk dataset formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
    Csv,
}

impl DatasetFormat {
    /// Pick a format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(DatasetFormat::Json),
            "yaml" | "yml" => Ok(DatasetFormat::Yaml),
            "csv" => Ok(DatasetFormat::Csv),
            _ => Err(DatasetError::UnsupportedFormat(ext)),
        }
    }
}

/// One CSV row: a lecture together with its day and department
#[derive(Debug, Deserialize)]
struct CsvRow {
    department_code: String,
    department_name: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    day: String,
    #[serde(default)]
    lecture_id: String,
    #[serde(default)]
    time_slot: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    instructor: String,
    #[serde(default)]
    location: String,
}

/// Parse and validate a dataset from a string
pub fn parse(contents: &str, format: DatasetFormat) -> Result<Vec<Department>, DatasetError> {
    let departments = match format {
        DatasetFormat::Json => serde_json::from_str(contents)?,
        DatasetFormat::Yaml => serde_yaml::from_str(contents)?,
        DatasetFormat::Csv => parse_csv(contents)?,
    };

    validate(&departments)?;
    for warning in time_slot_warnings(&departments) {
        warn!("{}", warning);
    }

    Ok(departments)
}

/// Load the dataset compiled into the binary
pub fn load_embedded() -> Result<Vec<Department>, DatasetError> {
    parse(EMBEDDED_SCHEDULE, DatasetFormat::Json)
}

/// Load a dataset file, choosing the format from its extension
pub fn load_file(path: &Path) -> Result<Vec<Department>, DatasetError> {
    let format = DatasetFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents, format)
}

/// Load the configured dataset, falling back to the embedded one.
///
/// A file that fails to load is reported as the second tuple element; only a
/// broken embedded dataset is an error.
pub fn load_with_fallback(
    path: Option<&Path>,
) -> Result<(DomainState, Option<DatasetError>), DatasetError> {
    if let Some(path) = path {
        match load_file(path) {
            Ok(departments) => {
                info!("Loaded {} departments from {}", departments.len(), path.display());
                let source = DatasetSource::File(path.to_path_buf());
                return Ok((DomainState::new(departments, source), None));
            }
            Err(e) => {
                warn!("Falling back to built-in schedule: {}", e);
                let departments = load_embedded()?;
                return Ok((DomainState::new(departments, DatasetSource::Embedded), Some(e)));
            }
        }
    }

    let departments = load_embedded()?;
    info!("Loaded {} departments from built-in schedule", departments.len());
    Ok((DomainState::new(departments, DatasetSource::Embedded), None))
}

/// Group flat CSV rows into departments and days, in first-appearance order
fn parse_csv(contents: &str) -> Result<Vec<Department>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut departments: Vec<Department> = Vec::new();

    for row in reader.deserialize::<CsvRow>() {
        let row = row?;

        let dept_idx = match departments.iter().position(|d| d.code == row.department_code) {
            Some(idx) => {
                if let Some(warning) = csv_row_conflict(&departments[idx], &row) {
                    warn!("{}", warning);
                }
                idx
            }
            None => {
                departments.push(Department {
                    code: row.department_code.clone(),
                    name: row.department_name.clone(),
                    color: row.color.clone(),
                    schedule: Vec::new(),
                });
                departments.len() - 1
            }
        };
        let dept = &mut departments[dept_idx];

        if row.day.is_empty() {
            continue;
        }

        let day_idx = match dept.schedule.iter().position(|d| d.day_name == row.day) {
            Some(idx) => idx,
            None => {
                dept.schedule.push(DaySchedule {
                    day_name: row.day.clone(),
                    lectures: Vec::new(),
                });
                dept.schedule.len() - 1
            }
        };

        if row.lecture_id.is_empty() {
            continue;
        }

        dept.schedule[day_idx].lectures.push(Lecture {
            id: row.lecture_id,
            time_slot: row.time_slot,
            title: row.title,
            instructor: row.instructor,
            location: row.location,
        });
    }

    Ok(departments)
}

/// Describe a row whose department name or colour disagrees with the first
/// row for the same code. The first row wins.
fn csv_row_conflict(dept: &Department, row: &CsvRow) -> Option<String> {
    let mut conflicts = Vec::new();
    if row.department_name != dept.name {
        conflicts.push(format!("name '{}' (keeping '{}')", row.department_name, dept.name));
    }
    if row.color != dept.color {
        conflicts.push(format!("color '{}' (keeping '{}')", row.color, dept.color));
    }
    if conflicts.is_empty() {
        return None;
    }
    Some(format!(
        "CSV row for department '{}' has a different {}",
        dept.code,
        conflicts.join(" and ")
    ))
}

/// Check the uniqueness assumptions of the department table
pub fn validate(departments: &[Department]) -> Result<(), DatasetError> {
    let mut codes = HashSet::new();
    for dept in departments {
        if !codes.insert(dept.code.as_str()) {
            return Err(DatasetError::DuplicateDepartment(dept.code.clone()));
        }

        let mut days = HashSet::new();
        for day in &dept.schedule {
            if !days.insert(day.day_name.as_str()) {
                return Err(DatasetError::DuplicateDay {
                    department: dept.code.clone(),
                    day: day.day_name.clone(),
                });
            }

            let mut ids = HashSet::new();
            for lecture in &day.lectures {
                if !ids.insert(lecture.id.as_str()) {
                    return Err(DatasetError::DuplicateLecture {
                        department: dept.code.clone(),
                        day: day.day_name.clone(),
                        id: lecture.id.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Describe every time slot that will not sort chronologically
pub fn time_slot_warnings(departments: &[Department]) -> Vec<String> {
    let mut warnings = Vec::new();
    for dept in departments {
        for day in &dept.schedule {
            for lecture in &day.lectures {
                if !TIME_SLOT_REGEX.is_match(&lecture.time_slot) {
                    warnings.push(format!(
                        "{}/{}: lecture '{}' has time slot '{}' (expected zero-padded HH:MM)",
                        dept.code, day.day_name, lecture.id, lecture.time_slot
                    ));
                }
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"[
        {
            "code": "RAD",
            "name": "Radiology",
            "color": "cyan",
            "schedule": [
                {"dayName": "Sunday", "lectures": [
                    {"id": "r1", "timeSlot": "08:30", "title": "Radiographic Anatomy", "instructor": "Dr. Salem", "location": "Hall 2"},
                    {"id": "r2", "timeSlot": "10:30", "title": "Radiation Physics"}
                ]}
            ]
        },
        {"code": "NUT", "name": "Nutrition", "color": "green", "schedule": []}
    ]"#;

    const YAML: &str = r#"
- code: RAD
  name: Radiology
  color: cyan
  schedule:
    - dayName: Sunday
      lectures:
        - id: r1
          timeSlot: "08:30"
          title: Radiographic Anatomy
          instructor: Dr. Salem
          location: Hall 2
        - id: r2
          timeSlot: "10:30"
          title: Radiation Physics
- code: NUT
  name: Nutrition
  color: green
"#;

    const CSV: &str = "\
department_code,department_name,color,day,lecture_id,time_slot,title,instructor,location
RAD,Radiology,cyan,Sunday,r1,08:30,Radiographic Anatomy,Dr. Salem,Hall 2
RAD,Radiology,cyan,Sunday,r2,10:30,Radiation Physics,,
NUT,Nutrition,green,,,,,,
";

    #[test]
    fn test_embedded_dataset_is_valid() {
        let departments = load_embedded().unwrap();
        assert!(!departments.is_empty());
        assert!(time_slot_warnings(&departments).is_empty());
    }

    #[test]
    fn test_formats_produce_same_records() {
        let from_json = parse(JSON, DatasetFormat::Json).unwrap();
        let from_yaml = parse(YAML, DatasetFormat::Yaml).unwrap();
        let from_csv = parse(CSV, DatasetFormat::Csv).unwrap();

        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json, from_csv);
        assert_eq!(from_json[0].schedule[0].lectures[0].location, "Hall 2");
        assert!(from_json[1].schedule.is_empty());
    }

    #[test]
    fn test_csv_day_without_lectures() {
        let csv = "\
department_code,department_name,color,day,lecture_id,time_slot,title,instructor,location
LAB,Laboratory,red,Monday,,,,,
LAB,Laboratory,red,Sunday,l1,12:30,Hematology,,
";
        let departments = parse(csv, DatasetFormat::Csv).unwrap();
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].day_names(), vec!["Monday", "Sunday"]);
        assert!(departments[0].schedule[0].lectures.is_empty());
        assert_eq!(departments[0].schedule[1].lectures.len(), 1);
    }

    #[test]
    fn test_csv_conflicting_department_rows_keep_first() {
        let csv = "\
department_code,department_name,color,day,lecture_id,time_slot,title,instructor,location
LAB,Laboratory,red,Monday,l1,08:30,Hematology,,
LAB,Medical Laboratory,blue,Sunday,l2,12:30,Microbiology,,
";
        let departments = parse(csv, DatasetFormat::Csv).unwrap();
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].name, "Laboratory");
        assert_eq!(departments[0].color, "red");
        assert_eq!(departments[0].day_names(), vec!["Monday", "Sunday"]);
        assert_eq!(departments[0].schedule[1].lectures[0].id, "l2");
    }

    #[test]
    fn test_csv_row_conflict_message() {
        let mut reader = csv::Reader::from_reader(
            "department_code,department_name,color\nLAB,Medical Laboratory,red\n".as_bytes(),
        );
        let row: CsvRow = reader.deserialize().next().unwrap().unwrap();

        let same = Department {
            code: "LAB".to_string(),
            name: "Medical Laboratory".to_string(),
            color: "red".to_string(),
            schedule: vec![],
        };
        assert_eq!(csv_row_conflict(&same, &row), None);

        let renamed = Department {
            name: "Laboratory".to_string(),
            ..same
        };
        let warning = csv_row_conflict(&renamed, &row).unwrap();
        assert!(warning.contains("'LAB'"));
        assert!(warning.contains("name 'Medical Laboratory' (keeping 'Laboratory')"));
        assert!(!warning.contains("color"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DatasetFormat::from_path(Path::new("a.JSON")).unwrap(), DatasetFormat::Json);
        assert_eq!(DatasetFormat::from_path(Path::new("a.yml")).unwrap(), DatasetFormat::Yaml);
        assert_eq!(DatasetFormat::from_path(Path::new("a.csv")).unwrap(), DatasetFormat::Csv);
        assert!(matches!(
            DatasetFormat::from_path(Path::new("a.txt")),
            Err(DatasetError::UnsupportedFormat(ext)) if ext == "txt"
        ));
    }

    #[test]
    fn test_duplicate_department_rejected() {
        let json = r#"[{"code": "RAD", "name": "A"}, {"code": "RAD", "name": "B"}]"#;
        assert!(matches!(
            parse(json, DatasetFormat::Json),
            Err(DatasetError::DuplicateDepartment(code)) if code == "RAD"
        ));
    }

    #[test]
    fn test_duplicate_day_rejected() {
        let json = r#"[{"code": "RAD", "name": "A", "schedule": [
            {"dayName": "Sunday"}, {"dayName": "Sunday"}
        ]}]"#;
        assert!(matches!(
            parse(json, DatasetFormat::Json),
            Err(DatasetError::DuplicateDay { day, .. }) if day == "Sunday"
        ));
    }

    #[test]
    fn test_duplicate_lecture_rejected() {
        let json = r#"[{"code": "RAD", "name": "A", "schedule": [
            {"dayName": "Sunday", "lectures": [
                {"id": "x", "timeSlot": "08:30"}, {"id": "x", "timeSlot": "10:30"}
            ]}
        ]}]"#;
        assert!(matches!(
            parse(json, DatasetFormat::Json),
            Err(DatasetError::DuplicateLecture { id, .. }) if id == "x"
        ));
    }

    #[test]
    fn test_same_lecture_id_on_different_days_is_fine() {
        let json = r#"[{"code": "RAD", "name": "A", "schedule": [
            {"dayName": "Sunday", "lectures": [{"id": "x", "timeSlot": "08:30"}]},
            {"dayName": "Monday", "lectures": [{"id": "x", "timeSlot": "08:30"}]}
        ]}]"#;
        assert!(parse(json, DatasetFormat::Json).is_ok());
    }

    #[test]
    fn test_malformed_time_slots_warn_but_load() {
        let json = r#"[{"code": "RAD", "name": "A", "schedule": [
            {"dayName": "Sunday", "lectures": [
                {"id": "a", "timeSlot": "9:30"},
                {"id": "b", "timeSlot": "08:30-09:30"}
            ]}
        ]}]"#;
        let departments = parse(json, DatasetFormat::Json).unwrap();
        let warnings = time_slot_warnings(&departments);

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'9:30'"));
    }

    #[test]
    fn test_load_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.yaml");
        fs::write(&path, YAML).unwrap();

        let departments = load_file(&path).unwrap();
        assert_eq!(departments.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(load_file(&path), Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_fallback_to_embedded_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let (domain, error) = load_with_fallback(Some(&path)).unwrap();
        assert_eq!(domain.source, DatasetSource::Embedded);
        assert!(!domain.departments.is_empty());
        assert!(matches!(error, Some(DatasetError::Json(_))));
    }

    #[test]
    fn test_configured_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.csv");
        fs::write(&path, CSV).unwrap();

        let (domain, error) = load_with_fallback(Some(&path)).unwrap();
        assert!(error.is_none());
        assert_eq!(domain.source, DatasetSource::File(path.clone()));
        assert_eq!(domain.departments.len(), 2);
    }
}
