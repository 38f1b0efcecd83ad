use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::core::export::{ExportError, FileStore};

/// Reads and writes real files through `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

/// Creates every missing directory above `path`. Bare file names need nothing.
pub async fn ensure_parent_dir(path: &Path) -> Result<(), ExportError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .await
            .map_err(|e| ExportError::io(parent, e)),
        _ => Ok(()),
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn read(&self, path: &Path) -> Result<Option<Vec<u8>>, ExportError> {
        match fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ExportError::io(path, e)),
        }
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), ExportError> {
        ensure_parent_dir(path).await?;
        fs::write(path, contents.as_bytes())
            .await
            .map_err(|e| ExportError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new();

        let result = store.read(&dir.path().join("nope.json")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_write_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets").join("deep").join("output.csv");
        let store = LocalFileStore::new();

        store.write(&path, "a,b\n1,2").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,2");
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");
        std::fs::write(&path, "old,content,that,is,longer").unwrap();
        let store = LocalFileStore::new();

        store.write(&path, "név,ár\n1,2").await.unwrap();

        let bytes = store.read(&path).await.unwrap().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "név,ár\n1,2");
    }

    #[tokio::test]
    async fn test_ensure_parent_dir_accepts_bare_file_name() {
        ensure_parent_dir(Path::new("output.csv")).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_parent_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokens").join("credentials.json");

        ensure_parent_dir(&path).await.unwrap();
        ensure_parent_dir(&path).await.unwrap();

        assert!(dir.path().join("tokens").is_dir());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_credentials_materialized_on_disk_once() {
        use crate::core::config::ExportConfig;
        use crate::core::export::export_models::CredentialsStatus;
        use crate::core::export::ExportPipeline;
        use crate::infra::google::{DriveClient, ServiceAccountAuth};

        let dir = TempDir::new().unwrap();
        let key_file = dir.path().join("tokens").join("credentials.json");
        let config = ExportConfig {
            key_file: key_file.clone(),
            output_file: dir.path().join("assets").join("output.csv"),
            file_id: "some-file-id".to_string(),
            verbose: false,
            project_name: "test-project".to_string(),
            project_id: "test-project-123".to_string(),
            client_id: "client_id".to_string(),
            private_key_id: "private_key_id".to_string(),
            private_key: "private_key\\nlinebreak".to_string(),
        };
        let client = reqwest::Client::new();
        let pipeline = ExportPipeline::new(
            ServiceAccountAuth::new(client.clone()),
            DriveClient::new(client),
            LocalFileStore::new(),
        );

        let first = pipeline.materialize_credentials(&config).await.unwrap();
        let written = std::fs::read_to_string(&key_file).unwrap();
        let modified = std::fs::metadata(&key_file).unwrap().modified().unwrap();
        let second = pipeline.materialize_credentials(&config).await.unwrap();

        assert_eq!(first, CredentialsStatus::Created);
        assert_eq!(second, CredentialsStatus::Reused);
        assert!(written.contains("\"service_account\""));
        assert_eq!(std::fs::read_to_string(&key_file).unwrap(), written);
        assert_eq!(
            std::fs::metadata(&key_file).unwrap().modified().unwrap(),
            modified
        );
    }
}
