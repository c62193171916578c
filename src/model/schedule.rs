//! Data models for the department schedule (departments, days, lectures)

use serde::{Deserialize, Serialize};

/// A single scheduled teaching session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    pub id: String,
    /// Grouping and sort key, expected as zero-padded 24-hour "HH:MM"
    #[serde(alias = "time_slot")]
    pub time_slot: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub location: String,
}

/// The lectures held on one named day for one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    #[serde(alias = "day_name")]
    pub day_name: String,
    #[serde(default)]
    pub lectures: Vec<Lecture>,
}

/// An academic department with its weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub code: String,
    pub name: String,
    /// Presentation hint (a colour name), never interpreted by the view logic
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub schedule: Vec<DaySchedule>,
}

impl Department {
    /// Number of days that have a schedule entry
    pub fn days_scheduled(&self) -> usize {
        self.schedule.len()
    }

    /// Day names in schedule order
    pub fn day_names(&self) -> Vec<&str> {
        self.schedule.iter().map(|d| d.day_name.as_str()).collect()
    }

    /// Find a day by exact name
    pub fn day(&self, day_name: &str) -> Option<&DaySchedule> {
        self.schedule.iter().find(|d| d.day_name == day_name)
    }

    /// Whether the lowercased query is contained in the name or the code
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.code.to_lowercase().contains(query_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture(id: &str, slot: &str) -> Lecture {
        Lecture {
            id: id.to_string(),
            time_slot: slot.to_string(),
            title: String::new(),
            instructor: String::new(),
            location: String::new(),
        }
    }

    #[test]
    fn test_department_deserializes_camel_case() {
        let json = r#"{
            "code": "RAD",
            "name": "Radiology",
            "color": "cyan",
            "schedule": [
                {"dayName": "Sunday", "lectures": [{"id": "r1", "timeSlot": "08:30", "title": "Anatomy"}]}
            ]
        }"#;
        let dept: Department = serde_json::from_str(json).unwrap();

        assert_eq!(dept.code, "RAD");
        assert_eq!(dept.schedule[0].day_name, "Sunday");
        assert_eq!(dept.schedule[0].lectures[0].time_slot, "08:30");
        assert_eq!(dept.schedule[0].lectures[0].instructor, "");
    }

    #[test]
    fn test_snake_case_aliases_accepted() {
        let json = r#"{"day_name": "Monday", "lectures": [{"id": "a", "time_slot": "10:30"}]}"#;
        let day: DaySchedule = serde_json::from_str(json).unwrap();
        assert_eq!(day.day_name, "Monday");
        assert_eq!(day.lectures[0], lecture("a", "10:30"));
    }

    #[test]
    fn test_day_lookup_and_names() {
        let dept = Department {
            code: "LAB".to_string(),
            name: "Medical Laboratory".to_string(),
            color: String::new(),
            schedule: vec![
                DaySchedule { day_name: "Sunday".to_string(), lectures: vec![] },
                DaySchedule { day_name: "Tuesday".to_string(), lectures: vec![lecture("x", "12:30")] },
            ],
        };

        assert_eq!(dept.days_scheduled(), 2);
        assert_eq!(dept.day_names(), vec!["Sunday", "Tuesday"]);
        assert_eq!(dept.day("Tuesday").map(|d| d.lectures.len()), Some(1));
        assert!(dept.day("tuesday").is_none());
    }

    #[test]
    fn test_matches_query_on_name_or_code() {
        let dept = Department {
            code: "DERM".to_string(),
            name: "Dermatology".to_string(),
            color: String::new(),
            schedule: vec![],
        };

        assert!(dept.matches_query("derm"));
        assert!(dept.matches_query("tology"));
        assert!(!dept.matches_query("card"));
    }
}
