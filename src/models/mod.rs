pub mod course;
pub mod history;
pub mod recommendation;

pub use course::{normalize_label, Course, CourseId, CourseKind, ScheduleSlot};
pub use history::{is_passing_grade, HistoryEntry, PASSING_GRADES};
pub use recommendation::{Recommendation, RecommendationQuery, RecommendationResponse};
