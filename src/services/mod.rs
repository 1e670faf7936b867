pub mod graph;
pub mod history;
pub mod prerequisites;
pub mod recommendations;
pub mod schedule;
pub mod scoring;
pub mod selector;

pub use graph::{CourseGraph, GraphStats};
pub use history::StudentHistory;
pub use recommendations::Recommender;
