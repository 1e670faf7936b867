use serde::{Deserialize, Serialize};

/// Letter grades that satisfy a prerequisite
pub const PASSING_GRADES: [&str; 5] = ["A", "AB", "B", "BC", "C"];

/// One course the student has already taken, with the grade received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub code: String,
    pub grade: String,
}

impl HistoryEntry {
    pub fn new(code: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            grade: grade.into(),
        }
    }
}

/// Exact membership in the passing set; `"a"` or `"D"` do not pass
pub fn is_passing_grade(grade: &str) -> bool {
    PASSING_GRADES.contains(&grade)
}
