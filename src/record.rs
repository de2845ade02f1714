//! Append-only CSV log of queried words and their translations.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Records every translated query to a flat CSV file.
///
/// The store holds only the path; each call opens the file, appends one
/// row, and closes it again, so no handle outlives a call and concurrent
/// invocations interleave whole rows at worst. Nothing is deduplicated,
/// rewritten, or rotated.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one `(query, translation, date)` row, creating the file and
    /// writing the `query,translation,date` header first when the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be created or written. Callers
    /// treat that as fatal to the recording only: the surrounding query or
    /// action logs the failure and carries on.
    pub fn record(&self, query: &str, translation: &str) -> Result<()> {
        let needs_header = !self.path.exists();

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create record directory: {}", parent.display())
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open record file: {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer
                .write_record(["query", "translation", "date"])
                .context("Failed to write record header")?;
        }

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        writer
            .write_record([query, translation, date.as_str()])
            .context("Failed to append record row")?;

        writer.flush().context("Failed to flush record file")?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store(temp_dir: &TempDir) -> RecordStore {
        RecordStore::new(temp_dir.path().join("record.csv"))
    }

    #[test]
    fn test_first_record_writes_header_then_row() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.record("hello", "你好").unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "query,translation,date");
        assert!(lines[1].starts_with("hello,你好,"));
    }

    #[test]
    fn test_n_records_yield_n_plus_one_lines() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        for i in 0..5 {
            store.record(&format!("word{i}"), "译文").unwrap();
        }

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.lines().count(), 6);
    }

    #[test]
    fn test_append_preserves_existing_rows() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.record("first", "一").unwrap();
        store.record("second", "二").unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("first,一"));
        assert!(content.contains("second,二"));
        // Header appears exactly once, on the first line only.
        assert_eq!(content.matches("query,translation,date").count(), 1);
    }

    #[test]
    fn test_embedded_comma_is_quoted_not_split() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.record("greeting", "你好,哈喽").unwrap();

        let mut reader = csv::Reader::from_path(store.path()).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "greeting");
        assert_eq!(&row[1], "你好,哈喽");
    }

    #[test]
    fn test_date_column_is_a_calendar_date() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.record("hello", "你好").unwrap();

        let mut reader = csv::Reader::from_path(store.path()).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert!(chrono::NaiveDate::parse_from_str(&row[2], "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_missing_parent_directories_are_created() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().join("nested").join("deep").join("record.csv"));

        store.record("hello", "你好").unwrap();

        assert!(store.path().exists());
    }
}
