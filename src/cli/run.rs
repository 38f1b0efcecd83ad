use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use reqwest::Client;

use super::args::Args;
use crate::core::config::{EnvSnapshot, ExportConfig};
use crate::core::export::{ExportPipeline, ExportReport, ExportStage};
use crate::infra::files::LocalFileStore;
use crate::infra::google::{DriveClient, ServiceAccountAuth};

/// Directory of the running executable; relative defaults hang off it.
fn app_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not locate the running executable")?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| anyhow!("Executable path {} has no parent", exe.display()))
}

/// Resolves `args` against the process environment.
pub fn resolve_config(args: Args) -> Result<ExportConfig> {
    resolve_config_with(args, &EnvSnapshot::from_process(), &app_dir()?)
}

fn resolve_config_with(args: Args, env: &EnvSnapshot, app_dir: &Path) -> Result<ExportConfig> {
    ExportConfig::resolve(args.into_options(), env, app_dir)
        .with_context(|| format!("Export failed while {}", ExportStage::Configuring))
}

/// Runs one export with the real Google and filesystem collaborators.
pub async fn run(config: &ExportConfig) -> Result<ExportReport> {
    tracing::debug!(?config, "Resolved configuration");

    let client = Client::new();
    let pipeline = ExportPipeline::new(
        ServiceAccountAuth::new(client.clone()),
        DriveClient::new(client),
        LocalFileStore::new(),
    );

    let report = pipeline.run(config).await?;
    Ok(report)
}
