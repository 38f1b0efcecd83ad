use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::export_models::{AccessToken, ExportRequest, ExportStage};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not render service account key")]
    Credentials(#[from] serde_json::Error),
    #[error("Authorization failed: {0}")]
    Auth(String),
    #[error("Drive API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("HTTP error: {0}")]
    Http(String),
}

impl ExportError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A pipeline failure tagged with the step it happened in.
#[derive(Debug, thiserror::Error)]
#[error("Export failed while {stage}")]
pub struct RunError {
    pub stage: ExportStage,
    #[source]
    pub source: ExportError,
}

/// Turns a credentials file into a bearer token.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authorize(&self, key_file: &Path) -> Result<AccessToken, ExportError>;
}

/// Downloads a hosted file in another format.
#[async_trait]
pub trait SheetExporter: Send + Sync {
    async fn export(
        &self,
        token: &AccessToken,
        request: &ExportRequest,
    ) -> Result<String, ExportError>;
}

/// Local file access used for the credentials file and the CSV output.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Returns `None` when nothing exists at `path`.
    async fn read(&self, path: &Path) -> Result<Option<Vec<u8>>, ExportError>;

    /// Writes UTF-8 text, replacing any existing file and creating parent
    /// directories as needed.
    async fn write(&self, path: &Path, contents: &str) -> Result<(), ExportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_run_error_chain_prints_each_cause_once() {
        let err = RunError {
            stage: ExportStage::Writing,
            source: ExportError::io(
                Path::new("/nope/out.csv"),
                std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
            ),
        };

        let rendered = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(
            rendered,
            "Export failed while writing: IO error at /nope/out.csv: denied"
        );
    }

    #[test]
    fn test_credentials_error_keeps_serde_cause_in_chain() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause = serde_err.to_string();
        let err = RunError {
            stage: ExportStage::MaterializingCredentials,
            source: ExportError::from(serde_err),
        };

        let rendered = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(
            rendered,
            format!(
                "Export failed while materializing credentials: Could not render service account key: {}",
                cause
            )
        );
    }
}
