use crate::{
    models::CourseId,
    services::{graph::CourseGraph, schedule::has_conflict, scoring::SatisfiedPrerequisite},
};

/// Credit cap for students at or below [`LOW_GPA_THRESHOLD`]
pub const LOW_GPA_CREDIT_CAP: u32 = 18;
/// Credit cap for everyone else
pub const DEFAULT_CREDIT_CAP: u32 = 24;
pub const LOW_GPA_THRESHOLD: f64 = 2.5;

/// An eligible elective with its score
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: CourseId,
    pub code: String,
    pub credits: u32,
    pub score: f64,
    pub satisfied: Vec<SatisfiedPrerequisite>,
}

/// Outcome of the greedy pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub chosen: Vec<Candidate>,
    pub credits_used: u32,
}

/// The caller's override if given, otherwise 18 for GPA <= 2.5 and 24 above
pub fn credit_cap(gpa: f64, credit_cap_override: Option<u32>) -> u32 {
    credit_cap_override.unwrap_or(if gpa <= LOW_GPA_THRESHOLD {
        LOW_GPA_CREDIT_CAP
    } else {
        DEFAULT_CREDIT_CAP
    })
}

/// Orders candidates by descending score, ties broken by ascending course code
pub fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.code.cmp(&b.code)));
}

/// Greedily admits ranked candidates within `credit_cap`
///
/// Each candidate is accepted only if it fits the remaining budget and does
/// not clash with anything already chosen. There is no backtracking: a
/// rejected candidate is skipped and the walk continues with the next one.
pub fn select(graph: &CourseGraph, ranked: Vec<Candidate>, credit_cap: u32) -> Selection {
    let mut selection = Selection::default();

    for candidate in ranked {
        let fits = selection
            .credits_used
            .checked_add(candidate.credits)
            .is_some_and(|total| total <= credit_cap);
        if !fits {
            continue;
        }

        let tentative: Vec<&CourseId> = selection
            .chosen
            .iter()
            .map(|chosen| &chosen.id)
            .chain(std::iter::once(&candidate.id))
            .collect();
        if has_conflict(graph, &tentative) {
            tracing::debug!(code = %candidate.code, "Skipping candidate with schedule conflict");
            continue;
        }

        selection.credits_used += candidate.credits;
        selection.chosen.push(candidate);
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CatalogSnapshot, CourseRow};

    fn row(code: &str, credits: u32, slot: Option<(&str, &str, &str)>) -> CourseRow {
        let (day, start, end) = match slot {
            Some((day, start, end)) => (Some(day), Some(start), Some(end)),
            None => (None, None, None),
        };
        CourseRow {
            code: Some(code.to_string()),
            credits: Some(credits.to_string()),
            kind: Some("Elective".to_string()),
            day: day.map(str::to_string),
            start_time: start.map(str::to_string),
            end_time: end.map(str::to_string),
            ..Default::default()
        }
    }

    fn candidate(code: &str, credits: u32, score: f64) -> Candidate {
        Candidate {
            id: CourseId::normalize(code),
            code: code.to_string(),
            credits,
            score,
            satisfied: Vec::new(),
        }
    }

    fn codes(selection: &Selection) -> Vec<&str> {
        selection.chosen.iter().map(|c| c.code.as_str()).collect()
    }

    #[test]
    fn test_credit_cap_from_gpa() {
        assert_eq!(credit_cap(2.0, None), 18);
        assert_eq!(credit_cap(2.5, None), 18);
        assert_eq!(credit_cap(2.51, None), 24);
        assert_eq!(credit_cap(3.9, None), 24);
    }

    #[test]
    fn test_credit_cap_override_wins() {
        assert_eq!(credit_cap(3.9, Some(12)), 12);
        assert_eq!(credit_cap(2.0, Some(30)), 30);
        assert_eq!(credit_cap(3.0, Some(0)), 0);
    }

    #[test]
    fn test_rank_descending_with_code_tie_break() {
        let mut candidates = vec![
            candidate("CS300", 3, 3.0),
            candidate("CS200", 3, 3.0),
            candidate("CS400", 3, 4.0),
            candidate("CS100", 3, 2.5),
        ];
        rank(&mut candidates);
        let order: Vec<&str> = candidates.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(order, vec!["CS400", "CS200", "CS300", "CS100"]);
    }

    #[test]
    fn test_select_skips_conflicting_candidate() {
        let graph = CourseGraph::build(&CatalogSnapshot {
            courses: vec![
                row("CS330", 3, Some(("Monday", "08:00:00", "10:00:00"))),
                row("CS340", 3, Some(("Monday", "09:00:00", "11:00:00"))),
                row("CS350", 3, Some(("Monday", "10:00:00", "12:00:00"))),
            ],
            ..Default::default()
        });
        let ranked = vec![
            candidate("CS330", 3, 4.0),
            candidate("CS340", 3, 3.5),
            candidate("CS350", 3, 3.0),
        ];

        let selection = select(&graph, ranked, 24);
        assert_eq!(codes(&selection), vec!["CS330", "CS350"]);
        assert_eq!(selection.credits_used, 6);
    }

    #[test]
    fn test_select_never_exceeds_cap_and_does_not_backtrack() {
        let graph = CourseGraph::build(&CatalogSnapshot {
            courses: vec![
                row("E1", 8, None),
                row("E2", 8, None),
                row("E3", 4, None),
            ],
            ..Default::default()
        });
        let ranked = vec![
            candidate("E1", 8, 4.0),
            candidate("E2", 8, 3.5),
            candidate("E3", 4, 3.0),
        ];

        let selection = select(&graph, ranked, 18);
        assert_eq!(codes(&selection), vec!["E1", "E2"]);
        assert_eq!(selection.credits_used, 16);
    }

    #[test]
    fn test_select_continues_past_oversized_candidate() {
        let graph = CourseGraph::build(&CatalogSnapshot {
            courses: vec![row("BIG", 10, None), row("SMALL", 2, None)],
            ..Default::default()
        });
        let ranked = vec![candidate("BIG", 10, 4.0), candidate("SMALL", 2, 3.0)];

        let selection = select(&graph, ranked, 6);
        assert_eq!(codes(&selection), vec!["SMALL"]);
        assert_eq!(selection.credits_used, 2);
    }

    #[test]
    fn test_select_huge_credit_counts_never_overflow_the_budget() {
        let graph = CourseGraph::build(&CatalogSnapshot {
            courses: vec![row("HUGE", u32::MAX, None), row("CS330", 3, None)],
            ..Default::default()
        });
        let ranked = vec![candidate("HUGE", u32::MAX, 4.0), candidate("CS330", 3, 3.0)];

        let selection = select(&graph, ranked, u32::MAX);
        assert_eq!(codes(&selection), vec!["HUGE"]);
        assert_eq!(selection.credits_used, u32::MAX);
    }

    #[test]
    fn test_select_with_zero_cap_chooses_nothing() {
        let graph = CourseGraph::build(&CatalogSnapshot {
            courses: vec![row("CS330", 3, None)],
            ..Default::default()
        });
        let selection = select(&graph, vec![candidate("CS330", 3, 4.0)], 0);
        assert!(selection.chosen.is_empty());
        assert_eq!(selection.credits_used, 0);
    }
}
