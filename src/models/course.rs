use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Graph-safe identifier for a course node
///
/// Built from the raw course code by replacing whitespace, slashes and dashes
/// with `_`, so `"IF 101"`, `"IF-101"` and `"IF/101"` all map to `IF_101`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    /// Normalizes a raw course code into a node identifier
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_label(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Replaces separator characters so a label can serve as a node key
pub fn normalize_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '-' {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Whether a course is required by the curriculum or freely chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseKind {
    Mandatory,
    Elective,
    Other(String),
}

impl CourseKind {
    /// Parses a catalog label, case-insensitively
    ///
    /// Accepts both the English labels and the `WAJIB` / `PILIHAN` labels used
    /// by the source catalog.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "ELECTIVE" | "PILIHAN" => CourseKind::Elective,
            "MANDATORY" | "WAJIB" => CourseKind::Mandatory,
            _ => CourseKind::Other(label.trim().to_string()),
        }
    }
}

/// Weekly meeting slot of a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub day: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ScheduleSlot {
    /// Same day and open-interval overlap; touching endpoints do not overlap
    pub fn overlaps(&self, other: &ScheduleSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

/// A course node in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    /// Code as it appears in the catalog, used to match student history
    pub code: String,
    pub name: String,
    /// Absent when the catalog row had no usable positive credit count
    pub credits: Option<u32>,
    pub program: Option<String>,
    pub kind: CourseKind,
    pub term: Option<String>,
    /// Absent when day or either time was missing or unparseable
    pub schedule: Option<ScheduleSlot>,
}

impl Course {
    pub fn is_elective(&self) -> bool {
        self.kind == CourseKind::Elective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: &str, start: (u32, u32), end: (u32, u32)) -> ScheduleSlot {
        ScheduleSlot {
            day: day.to_string(),
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    #[test]
    fn test_course_id_replaces_separators() {
        assert_eq!(CourseId::normalize("IF 101").as_str(), "IF_101");
        assert_eq!(CourseId::normalize("IF-101").as_str(), "IF_101");
        assert_eq!(CourseId::normalize("IF/101").as_str(), "IF_101");
        assert_eq!(CourseId::normalize("  MATH101 ").as_str(), "MATH101");
    }

    #[test]
    fn test_course_kind_parse() {
        assert_eq!(CourseKind::parse("elective"), CourseKind::Elective);
        assert_eq!(CourseKind::parse("Pilihan"), CourseKind::Elective);
        assert_eq!(CourseKind::parse("WAJIB"), CourseKind::Mandatory);
        assert_eq!(CourseKind::parse("Mandatory"), CourseKind::Mandatory);
        assert_eq!(
            CourseKind::parse("Seminar"),
            CourseKind::Other("Seminar".to_string())
        );
    }

    #[test]
    fn test_slot_overlap_same_day() {
        let a = slot("Monday", (8, 0), (10, 0));
        let b = slot("Monday", (9, 0), (11, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_slot_touching_is_not_overlap() {
        let a = slot("Monday", (8, 0), (10, 0));
        let b = slot("Monday", (10, 0), (12, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_slot_different_day_is_not_overlap() {
        let a = slot("Monday", (8, 0), (10, 0));
        let b = slot("Tuesday", (8, 0), (10, 0));
        assert!(!a.overlaps(&b));
    }
}
