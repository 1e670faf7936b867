use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

use super::{CatalogSnapshot, CatalogSource};

/// Loads the catalog tables from three CSV files
#[derive(Debug, Clone)]
pub struct CsvCatalogSource {
    courses_path: PathBuf,
    prerequisites_path: PathBuf,
    careers_path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(
        courses_path: impl Into<PathBuf>,
        prerequisites_path: impl Into<PathBuf>,
        careers_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            courses_path: courses_path.into(),
            prerequisites_path: prerequisites_path.into(),
            careers_path: careers_path.into(),
        }
    }

    async fn read_table<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
        let bytes = tokio::fs::read(path).await?;
        let rows = parse_rows(&bytes, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), rows = rows.len(), "CSV table loaded");
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl CatalogSource for CsvCatalogSource {
    async fn load(&self) -> AppResult<CatalogSnapshot> {
        let courses = Self::read_table(&self.courses_path).await?;
        let prerequisites = Self::read_table(&self.prerequisites_path).await?;
        let careers = Self::read_table(&self.careers_path).await?;

        Ok(CatalogSnapshot {
            courses,
            prerequisites,
            careers,
        })
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}

/// Parses CSV bytes into rows, trimming every field
///
/// A record that cannot be deserialized is skipped with a warning; only an
/// unreadable header fails the whole table.
pub fn parse_rows<T: DeserializeOwned>(bytes: &[u8], table: &str) -> AppResult<Vec<T>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    reader.headers()?;

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => {
                tracing::warn!(table = %table, row = index + 1, error = %e, "Skipping malformed CSV row");
            }
        }
    }

    Ok(rows)
}
