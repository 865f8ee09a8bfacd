//! Dataset Loader Module
//! Reads the static JSON dataset once and caches it for the process lifetime.

use crate::data::AppPrivacyRecord;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Fixed relative path of the dataset document.
pub const DATASET_PATH: &str = "assets/app_privacy.json";

/// The dataset-unavailable condition. Either way the dataset cannot be
/// rendered and the failure is fatal to the view.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("dataset unavailable: {0}")]
    Read(#[from] std::io::Error),
    #[error("dataset unavailable: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads the app-privacy dataset and holds it immutably thereafter.
pub struct DatasetLoader {
    records: Option<Vec<AppPrivacyRecord>>,
    file_path: PathBuf,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(DATASET_PATH)
    }
}

impl DatasetLoader {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            records: None,
            file_path: file_path.into(),
        }
    }

    /// Load the dataset, preserving source order.
    ///
    /// The first successful call reads and parses the file; later calls
    /// return the cached list without touching storage. There is no
    /// invalidation hook since the dataset does not change at runtime.
    /// Individual records are not validated here: missing fields surface
    /// later as placeholder display values.
    pub fn load(&mut self) -> Result<&[AppPrivacyRecord], LoaderError> {
        if self.records.is_none() {
            let text = fs::read_to_string(&self.file_path)?;
            let records: Vec<AppPrivacyRecord> = serde_json::from_str(&text)?;
            tracing::info!(
                path = %self.file_path.display(),
                records = records.len(),
                "dataset loaded"
            );
            self.records = Some(records);
        }
        Ok(self.records.as_deref().unwrap_or_default())
    }

    /// Get the cached records; empty before the first successful `load`.
    pub fn records(&self) -> &[AppPrivacyRecord] {
        self.records.as_deref().unwrap_or_default()
    }

    pub fn record_count(&self) -> usize {
        self.records().len()
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dataset(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "privacylens_{}_{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_preserves_source_order() {
        let path = temp_dataset(
            "order",
            r#"[{"app_id":"b"},{"app_id":"a"},{"app_id":"c"}]"#,
        );
        let mut loader = DatasetLoader::new(&path);
        let ids: Vec<String> = loader
            .load()
            .unwrap()
            .iter()
            .map(|r| r.app_id.clone())
            .collect();
        assert_eq!(ids, ["b", "a", "c"]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn load_caches_for_process_lifetime() {
        let path = temp_dataset("cache", r#"[{"app_id":"whatsapp"}]"#);
        let mut loader = DatasetLoader::new(&path);
        assert_eq!(loader.load().unwrap().len(), 1);

        // The file is gone; a second load must serve the cached list.
        fs::remove_file(&path).unwrap();
        assert_eq!(loader.load().unwrap().len(), 1);
        assert_eq!(loader.record_count(), 1);
    }

    #[test]
    fn missing_file_is_dataset_unavailable() {
        let mut loader = DatasetLoader::new("/nonexistent/privacylens.json");
        let err = loader.load().unwrap_err();
        assert!(matches!(err, LoaderError::Read(_)));
        assert!(err.to_string().starts_with("dataset unavailable"));
    }

    #[test]
    fn non_list_document_is_dataset_unavailable() {
        let path = temp_dataset("shape", r#"{"app_id":"whatsapp"}"#);
        let mut loader = DatasetLoader::new(&path);
        assert!(matches!(loader.load(), Err(LoaderError::Json(_))));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn records_is_empty_before_load() {
        let loader = DatasetLoader::default();
        assert!(loader.records().is_empty());
        assert_eq!(loader.record_count(), 0);
        assert_eq!(loader.file_path(), &PathBuf::from(DATASET_PATH));
    }
}
