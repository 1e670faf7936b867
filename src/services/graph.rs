use std::collections::{BTreeMap, HashMap};

use crate::{
    data::{CatalogSnapshot, CatalogSource, CourseRow},
    error::AppResult,
    models::{Course, CourseId, CourseKind, ScheduleSlot},
    services::schedule::parse_clock_time,
};

/// A career label reachable from courses, deduplicated by its key
///
/// The key only folds spaces into `_`; `Data-Scientist` and `Data Scientist`
/// stay distinct tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerTag {
    pub key: String,
    pub label: String,
}

/// Node and edge counts, logged once the graph is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    pub courses: usize,
    pub prerequisite_edges: usize,
    pub career_edges: usize,
    pub career_tags: usize,
}

/// Course catalog plus prerequisite and career relations
///
/// Built once from a [`CatalogSnapshot`] and never mutated afterwards, so a
/// single instance can be shared between concurrent requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CourseGraph {
    courses: BTreeMap<CourseId, Course>,
    /// Outgoing "requires" edges, in first-insertion order
    prerequisites: HashMap<CourseId, Vec<CourseId>>,
    /// Outgoing career edges, pointing at keys of `career_tags`
    careers: HashMap<CourseId, Vec<String>>,
    career_tags: HashMap<String, CareerTag>,
}

impl CourseGraph {
    /// Builds the graph from catalog rows
    ///
    /// Course nodes are created in a first pass so that relation rows can
    /// arrive in any order. Relation rows naming a course that is not in the
    /// catalog are dropped without error, as are course rows without a code.
    pub fn build(snapshot: &CatalogSnapshot) -> Self {
        let mut graph = Self::default();

        for row in &snapshot.courses {
            let Some(course) = course_from_row(row) else {
                tracing::debug!(?row, "Dropping course row without a code");
                continue;
            };
            if graph.courses.contains_key(&course.id) {
                tracing::debug!(id = %course.id, "Dropping duplicate course row");
                continue;
            }
            graph.courses.insert(course.id.clone(), course);
        }

        for row in &snapshot.prerequisites {
            let (Some(course_code), Some(required_code)) =
                (non_empty(&row.course_code), non_empty(&row.required_code))
            else {
                continue;
            };
            let course_id = CourseId::normalize(course_code);
            let required_id = CourseId::normalize(required_code);
            if !graph.courses.contains_key(&course_id) || !graph.courses.contains_key(&required_id) {
                tracing::debug!(course = %course_code, required = %required_code, "Dropping dangling prerequisite");
                continue;
            }

            let edges = graph.prerequisites.entry(course_id).or_default();
            if !edges.contains(&required_id) {
                edges.push(required_id);
            }
        }

        for row in &snapshot.careers {
            let (Some(course_code), Some(label)) = (non_empty(&row.course_code), non_empty(&row.career))
            else {
                continue;
            };
            let course_id = CourseId::normalize(course_code);
            if !graph.courses.contains_key(&course_id) {
                tracing::debug!(course = %course_code, career = %label, "Dropping dangling career link");
                continue;
            }

            let key = career_key(label);
            graph
                .career_tags
                .entry(key.clone())
                .or_insert_with(|| CareerTag {
                    key: key.clone(),
                    label: label.to_string(),
                });

            let edges = graph.careers.entry(course_id).or_default();
            if !edges.contains(&key) {
                edges.push(key);
            }
        }

        graph
    }

    /// Loads a snapshot from `source` and builds the graph
    pub async fn from_source(source: &dyn CatalogSource) -> AppResult<Self> {
        let snapshot = source.load().await?;
        let graph = Self::build(&snapshot);
        let stats = graph.stats();

        tracing::info!(
            source = source.name(),
            courses = stats.courses,
            prerequisite_edges = stats.prerequisite_edges,
            career_edges = stats.career_edges,
            career_tags = stats.career_tags,
            "Course graph built"
        );

        Ok(graph)
    }

    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Looks up a course by its raw catalog code
    pub fn course_by_code(&self, code: &str) -> Option<&Course> {
        self.courses.get(&CourseId::normalize(code))
    }

    /// All courses, ordered by node identifier
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Courses that must be passed before `id` may be taken
    pub fn prerequisites_of(&self, id: &CourseId) -> impl Iterator<Item = &Course> {
        self.prerequisites
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .filter_map(|required| self.courses.get(required))
    }

    pub fn prerequisite_count(&self, id: &CourseId) -> usize {
        self.prerequisites.get(id).map_or(0, Vec::len)
    }

    /// Career labels linked to `id`, in first-insertion order
    pub fn career_tags_of(&self, id: &CourseId) -> Vec<String> {
        self.careers
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .filter_map(|key| self.career_tags.get(key))
            .map(|tag| tag.label.clone())
            .collect()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            courses: self.courses.len(),
            prerequisite_edges: self.prerequisites.values().map(Vec::len).sum(),
            career_edges: self.careers.values().map(Vec::len).sum(),
            career_tags: self.career_tags.len(),
        }
    }
}

fn career_key(label: &str) -> String {
    label.replace(' ', "_")
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn course_from_row(row: &CourseRow) -> Option<Course> {
    let code = non_empty(&row.code)?;

    let schedule = match (
        non_empty(&row.day),
        non_empty(&row.start_time).and_then(parse_clock_time),
        non_empty(&row.end_time).and_then(parse_clock_time),
    ) {
        (Some(day), Some(start), Some(end)) => Some(ScheduleSlot {
            day: day.to_string(),
            start,
            end,
        }),
        _ => None,
    };

    Some(Course {
        id: CourseId::normalize(code),
        code: code.to_string(),
        name: non_empty(&row.name).unwrap_or(code).to_string(),
        credits: non_empty(&row.credits).and_then(parse_credits),
        program: non_empty(&row.program).map(str::to_string),
        kind: non_empty(&row.kind).map_or(CourseKind::Other(String::new()), CourseKind::parse),
        term: non_empty(&row.term).map(str::to_string),
        schedule,
    })
}

/// Positive whole credit counts; `"3"` and `"3.0"` both parse
pub fn parse_credits(raw: &str) -> Option<u32> {
    if let Ok(credits) = raw.parse::<u32>() {
        return Some(credits).filter(|c| *c > 0);
    }

    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value > 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}
