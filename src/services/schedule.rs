use chrono::NaiveTime;

use crate::{
    models::{CourseId, ScheduleSlot},
    services::graph::CourseGraph,
};

/// Accepted clock formats, tried in order
const CLOCK_FORMATS: [&str; 2] = ["%I:%M:%S %p", "%H:%M:%S"];

/// Parses a 12-hour (`01:30:00 PM`) or 24-hour (`13:30:00`) clock time
///
/// Returns `None` for anything else; an unparseable time means the course has
/// no slot, never an error.
pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

/// True if any two of `ids` meet on the same day with overlapping times
///
/// Courses without a slot, or unknown to the graph, take no part in the check.
pub fn has_conflict(graph: &CourseGraph, ids: &[&CourseId]) -> bool {
    if ids.len() < 2 {
        return false;
    }

    let slots: Vec<&ScheduleSlot> = ids
        .iter()
        .filter_map(|id| graph.course(id))
        .filter_map(|course| course.schedule.as_ref())
        .collect();

    slots
        .iter()
        .enumerate()
        .any(|(i, a)| slots[i + 1..].iter().any(|b| a.overlaps(b)))
}
