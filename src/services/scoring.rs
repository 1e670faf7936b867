use crate::{
    models::CourseId,
    services::{graph::CourseGraph, history::StudentHistory},
};

/// Score given to courses that have no prerequisites
pub const NO_PREREQUISITE_SCORE: f64 = 3.0;

/// A prerequisite found in the student's history, with the grade received
#[derive(Debug, Clone, PartialEq)]
pub struct SatisfiedPrerequisite {
    pub code: String,
    pub name: String,
    pub grade: String,
}

/// Desirability of a course for one student
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub value: f64,
    /// In prerequisite edge order
    pub satisfied: Vec<SatisfiedPrerequisite>,
}

/// Grade points for a letter grade, case-insensitive; unknown grades are 0.0
pub fn grade_points(grade: &str) -> f64 {
    match grade.to_uppercase().as_str() {
        "A" => 4.0,
        "AB" => 3.5,
        "B" => 3.0,
        "BC" => 2.5,
        "C" => 2.0,
        _ => 0.0,
    }
}

/// Mean grade points over all prerequisites of `id`
///
/// The divisor is the number of prerequisite edges, not the number found in
/// the history.
pub fn score(graph: &CourseGraph, history: &StudentHistory, id: &CourseId) -> Score {
    let edge_count = graph.prerequisite_count(id);
    if edge_count == 0 {
        return Score {
            value: NO_PREREQUISITE_SCORE,
            satisfied: Vec::new(),
        };
    }

    let mut total = 0.0;
    let mut satisfied = Vec::new();
    for required in graph.prerequisites_of(id) {
        if let Some(grade) = history.grade(&required.code) {
            total += grade_points(grade);
            satisfied.push(SatisfiedPrerequisite {
                code: required.code.clone(),
                name: required.name.clone(),
                grade: grade.to_string(),
            });
        }
    }

    Score {
        value: total / edge_count as f64,
        satisfied,
    }
}
