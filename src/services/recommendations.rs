use crate::{
    models::{Recommendation, RecommendationQuery, RecommendationResponse},
    services::{
        graph::CourseGraph,
        history::StudentHistory,
        prerequisites::is_eligible,
        scoring::{score, SatisfiedPrerequisite},
        selector::{credit_cap, rank, select, Candidate},
    },
};

const NO_PREREQUISITE_RATIONALE: &str =
    "Recommended as a relevant elective with no prerequisites.";

/// Generates elective recommendations for one student
///
/// Filters the catalog to electives the student has not taken, keeps those
/// whose prerequisites are all passed, scores them by prerequisite grades and
/// greedily fills the term up to the credit cap without schedule clashes.
pub struct Recommender<'a> {
    graph: &'a CourseGraph,
}

impl<'a> Recommender<'a> {
    pub fn new(graph: &'a CourseGraph) -> Self {
        Self { graph }
    }

    pub fn recommend(&self, query: &RecommendationQuery) -> RecommendationResponse {
        let history = StudentHistory::resolve(&query.history);
        let cap = credit_cap(query.gpa, query.credit_cap_override);

        let mut candidates = self.candidates(&history);
        let candidate_count = candidates.len();
        rank(&mut candidates);

        let selection = select(self.graph, candidates, cap);

        tracing::info!(
            student_id = %query.student_id,
            program = %query.program,
            target_term = %query.target_term,
            history = history.len(),
            credit_cap = cap,
            candidates = candidate_count,
            chosen = selection.chosen.len(),
            credits_used = selection.credits_used,
            "Recommendations computed"
        );

        RecommendationResponse {
            total_recommended_credits: selection.credits_used,
            recommendations: selection
                .chosen
                .iter()
                .filter_map(|candidate| self.recommendation(candidate))
                .collect(),
        }
    }

    /// Untaken, eligible electives with a usable credit count, scored
    fn candidates(&self, history: &StudentHistory) -> Vec<Candidate> {
        self.graph
            .courses()
            .filter(|course| course.is_elective())
            .filter(|course| !history.contains(&course.code))
            .filter(|course| is_eligible(self.graph, history, &course.id))
            .filter_map(|course| {
                let credits = course.credits?;
                let score = score(self.graph, history, &course.id);
                Some(Candidate {
                    id: course.id.clone(),
                    code: course.code.clone(),
                    credits,
                    score: score.value,
                    satisfied: score.satisfied,
                })
            })
            .collect()
    }

    fn recommendation(&self, candidate: &Candidate) -> Option<Recommendation> {
        let course = self.graph.course(&candidate.id)?;

        Some(Recommendation {
            code: course.code.clone(),
            name: course.name.clone(),
            credits: candidate.credits,
            offering_program: course.program.clone(),
            score: round_score(candidate.score),
            rationale: rationale(&candidate.satisfied),
            career_tags: self.graph.career_tags_of(&candidate.id),
        })
    }
}

/// Explains a recommendation in terms of the prerequisites it builds on
pub fn rationale(satisfied: &[SatisfiedPrerequisite]) -> String {
    if satisfied.is_empty() {
        return NO_PREREQUISITE_RATIONALE.to_string();
    }

    let listed: Vec<String> = satisfied
        .iter()
        .map(|prerequisite| format!("{} (Grade: {})", prerequisite.name, prerequisite.grade))
        .collect();
    format!(
        "Recommended because you did well in its prerequisites: {}.",
        listed.join(", ")
    )
}

/// Two decimals, halves rounded to even (2.125 → 2.12, 2.375 → 2.38)
fn round_score(score: f64) -> f64 {
    (score * 100.0).round_ties_even() / 100.0
}
