use sha2::{Digest, Sha256};

use super::export_models::{
    CredentialsStatus, ExportReport, ExportRequest, ExportStage, ServiceAccountKey,
};
use super::export_store::{Authenticator, ExportError, FileStore, RunError, SheetExporter};
use crate::core::config::ExportConfig;

/// Runs one sheet export: credentials, token, download, write.
///
/// Each collaborator sits behind a trait so the sequencing can be tested
/// without touching Google or the real filesystem.
pub struct ExportPipeline<A: Authenticator, X: SheetExporter, F: FileStore> {
    auth: A,
    exporter: X,
    files: F,
}

impl<A, X, F> ExportPipeline<A, X, F>
where
    A: Authenticator,
    X: SheetExporter,
    F: FileStore,
{
    pub fn new(auth: A, exporter: X, files: F) -> Self {
        Self {
            auth,
            exporter,
            files,
        }
    }

    /// Makes sure `config.key_file` holds the key document for `config`.
    ///
    /// The file is compared by SHA-256 digest, so an unchanged file is never
    /// rewritten and a stale one is replaced.
    pub async fn materialize_credentials(
        &self,
        config: &ExportConfig,
    ) -> Result<CredentialsStatus, ExportError> {
        tracing::info!("Looking for keyFile...");

        let rendered = ServiceAccountKey::from_config(config).render()?;
        let wanted = Sha256::digest(rendered.as_bytes());

        let status = match self.files.read(&config.key_file).await? {
            Some(existing) => {
                let current = Sha256::digest(&existing);
                if current == wanted {
                    tracing::info!(path = %config.key_file.display(), "Reusing existing keyFile");
                    return Ok(CredentialsStatus::Reused);
                }
                tracing::info!(
                    current = %format!("{:x}", current),
                    wanted = %format!("{:x}", wanted),
                    "keyFile is out of date. Regenerating from env..."
                );
                CredentialsStatus::Regenerated
            }
            None => {
                tracing::info!("keyFile doesn't exist. Generating from env...");
                CredentialsStatus::Created
            }
        };

        self.files.write(&config.key_file, &rendered).await?;
        tracing::info!("Successfully wrote keyFile to {}", config.key_file.display());

        Ok(status)
    }

    /// Runs every step in order and reports the first failure with its stage.
    pub async fn run(&self, config: &ExportConfig) -> Result<ExportReport, RunError> {
        let credentials = self
            .materialize_credentials(config)
            .await
            .map_err(at(ExportStage::MaterializingCredentials))?;

        tracing::info!("Authorizing...");
        let token = self
            .auth
            .authorize(&config.key_file)
            .await
            .map_err(at(ExportStage::Authorizing))?;

        tracing::info!(file_id = %config.file_id, "Fetching file...");
        let request = ExportRequest::csv(config.file_id.clone());
        let payload = self
            .exporter
            .export(&token, &request)
            .await
            .map_err(at(ExportStage::Exporting))?;

        tracing::info!("Writing file to {}...", config.output_file.display());
        self.files
            .write(&config.output_file, &payload)
            .await
            .map_err(at(ExportStage::Writing))?;

        tracing::info!(bytes = payload.len(), "Success!");

        Ok(ExportReport {
            output_file: config.output_file.clone(),
            bytes_written: payload.len(),
            credentials,
        })
    }
}

fn at(stage: ExportStage) -> impl FnOnce(ExportError) -> RunError {
    move |source| RunError { stage, source }
}
