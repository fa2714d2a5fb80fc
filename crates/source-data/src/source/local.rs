//! Local data directory source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;

use crate::errors::SourceError;
use crate::models::{FetchOrigin, RawRecord};

use super::{decode_records, DataSource};

const SOURCE_ID: &str = "LOCAL";

/// Reads `{dir}/{filename}` from disk, same JSON-array contract as the remote.
pub struct LocalFileSource {
    dir: PathBuf,
}

impl LocalFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl DataSource for LocalFileSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    fn origin(&self) -> FetchOrigin {
        FetchOrigin::Local
    }

    async fn fetch(&self, filename: &str) -> Result<Vec<RawRecord>, SourceError> {
        let path = self.dir.join(filename.trim_start_matches('/'));
        debug!("Reading local dataset {}", path.display());

        let body = tokio::fs::read(&path)
            .await
            .map_err(|e| SourceError::io(path.display().to_string(), e.to_string()))?;

        decode_records(filename, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_dataset_from_dir() {
        let tmp = tempdir().unwrap();
        std::fs::write(
            tmp.path().join("restaurants.json"),
            r#"[{"name":"Bab Al Bahr","cuisine":"بحري","date":"2024-03-02"}]"#,
        )
        .unwrap();

        let source = LocalFileSource::new(tmp.path());
        assert_eq!(source.dir(), tmp.path());
        let records = source.fetch("restaurants.json").await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["cuisine"], "بحري");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let tmp = tempdir().unwrap();
        let source = LocalFileSource::new(tmp.path());

        let err = source.fetch("missing.json").await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("beaches.json"), "not json").unwrap();

        let source = LocalFileSource::new(tmp.path());
        let err = source.fetch("beaches.json").await.unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }
}
