use std::sync::Arc;

use crate::services::CourseGraph;

/// Shared application state
///
/// The course graph is read-only after startup, so handlers share it without
/// any locking.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<CourseGraph>,
}

impl AppState {
    pub fn new(graph: CourseGraph) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }
}
