use crate::{
    models::{is_passing_grade, CourseId},
    services::{graph::CourseGraph, history::StudentHistory},
};

/// A course is eligible when every one of its prerequisites was passed
///
/// Courses without prerequisites are always eligible. Partial satisfaction is
/// not enough.
pub fn is_eligible(graph: &CourseGraph, history: &StudentHistory, id: &CourseId) -> bool {
    graph.prerequisites_of(id).all(|required| {
        history
            .grade(&required.code)
            .is_some_and(is_passing_grade)
    })
}
