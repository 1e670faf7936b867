use std::collections::HashMap;

use crate::models::HistoryEntry;

/// Grades a student has received, keyed by the submitted course code
///
/// Request-scoped; grades are kept verbatim and codes need not exist in the
/// catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentHistory {
    grades: HashMap<String, String>,
}

impl StudentHistory {
    /// Collapses submitted entries into a code → grade mapping
    ///
    /// A code submitted more than once keeps its last grade.
    pub fn resolve(entries: &[HistoryEntry]) -> Self {
        let grades = entries
            .iter()
            .map(|entry| (entry.code.clone(), entry.grade.clone()))
            .collect();
        Self { grades }
    }

    pub fn grade(&self, code: &str) -> Option<&str> {
        self.grades.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.grades.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_maps_codes_to_grades() {
        let history = StudentHistory::resolve(&[
            HistoryEntry::new("MATH101", "A"),
            HistoryEntry::new("PHYS101", "BC"),
        ]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.grade("MATH101"), Some("A"));
        assert_eq!(history.grade("PHYS101"), Some("BC"));
        assert!(!history.contains("CS101"));
    }

    #[test]
    fn test_last_entry_wins() {
        let history = StudentHistory::resolve(&[
            HistoryEntry::new("MATH101", "D"),
            HistoryEntry::new("MATH101", "B"),
        ]);
        assert_eq!(history.len(), 1);
        assert_eq!(history.grade("MATH101"), Some("B"));
    }

    #[test]
    fn test_unknown_grades_kept_verbatim() {
        let history = StudentHistory::resolve(&[HistoryEntry::new("MATH101", "incomplete")]);
        assert_eq!(history.grade("MATH101"), Some("incomplete"));
    }

    #[test]
    fn test_empty_history() {
        assert!(StudentHistory::resolve(&[]).is_empty());
    }
}
