//! Catalog snapshot loading
//!
//! The recommendation graph is built once at startup from three flat tables:
//! courses, prerequisite pairs and career-relevance pairs. A source only has to
//! hand back the rows; all cleanup and dropping of dangling references happens
//! when the graph is built.

use serde::Deserialize;

use crate::error::AppResult;

pub mod csv_source;

pub use csv_source::CsvCatalogSource;

/// One row of the course table
///
/// Every field is optional so that a noisy row still deserializes; rows without
/// a code are dropped when the graph is built.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CourseRow {
    #[serde(default, alias = "kode_matkul")]
    pub code: Option<String>,
    #[serde(default, alias = "nama_matkul")]
    pub name: Option<String>,
    #[serde(default, alias = "sks_matkul")]
    pub credits: Option<String>,
    #[serde(default, alias = "sifat_mk")]
    pub kind: Option<String>,
    #[serde(default, alias = "semester_matkul")]
    pub term: Option<String>,
    #[serde(default, alias = "prodi_matkul")]
    pub program: Option<String>,
    #[serde(default, alias = "hari")]
    pub day: Option<String>,
    #[serde(default, alias = "jam_mulai")]
    pub start_time: Option<String>,
    #[serde(default, alias = "jam_selesai")]
    pub end_time: Option<String>,
}

/// "`course_code` requires `required_code` to have been passed"
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrerequisiteRow {
    #[serde(default, alias = "kode_matkul_relevan")]
    pub course_code: Option<String>,
    #[serde(default, alias = "kode_matkul")]
    pub required_code: Option<String>,
}

impl PrerequisiteRow {
    pub fn new(course_code: &str, required_code: &str) -> Self {
        Self {
            course_code: Some(course_code.to_string()),
            required_code: Some(required_code.to_string()),
        }
    }
}

/// Links a course to a career it is relevant for
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CareerRow {
    #[serde(default, alias = "kode_matkul")]
    pub course_code: Option<String>,
    #[serde(default, alias = "relevansi_karier")]
    pub career: Option<String>,
}

impl CareerRow {
    pub fn new(course_code: &str, career: &str) -> Self {
        Self {
            course_code: Some(course_code.to_string()),
            career: Some(career.to_string()),
        }
    }
}

/// Everything needed to build the course graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub courses: Vec<CourseRow>,
    pub prerequisites: Vec<PrerequisiteRow>,
    pub careers: Vec<CareerRow>,
}

/// Trait for catalog data sources
///
/// Implementations read the three tables once at startup. The returned strings
/// are expected to be trimmed; empty fields are `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load a full snapshot of the catalog tables
    async fn load(&self) -> AppResult<CatalogSnapshot>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}
