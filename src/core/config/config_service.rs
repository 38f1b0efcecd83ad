use std::path::Path;

use super::config_models::{
    EnvSnapshot, ExportConfig, ExportOptions, ENV_CLIENT_ID, ENV_PRIVATE_KEY, ENV_PRIVATE_KEY_ID,
    ENV_PROJECT_ID,
};

/// Raised while building an `ExportConfig`, before any file or network I/O.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "GOOGLE_PROJECT_NAME or GOOGLE_PROJECT_ID env variable required. See docs for more details."
    )]
    MissingProjectIdentity,
    #[error("Missing env secrets: {}", .0.join(", "))]
    MissingSecrets(Vec<&'static str>),
}

impl ExportConfig {
    /// Merges caller options with the environment snapshot.
    ///
    /// Relative defaults are anchored at `app_dir`, the directory that holds
    /// the running executable. Either every field is filled in or an error is
    /// returned; nothing here touches the filesystem.
    pub fn resolve(
        options: ExportOptions,
        env: &EnvSnapshot,
        app_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let key_file = options
            .key_file
            .unwrap_or_else(|| app_dir.join("tokens").join("credentials.json"));
        let output_file = options
            .output_file
            .unwrap_or_else(|| app_dir.join("assets").join("output.csv"));
        let verbose = options.verbose.unwrap_or(false);

        let project_name = match (&env.project_name, &env.project_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => derive_project_name(id),
            (None, None) => return Err(ConfigError::MissingProjectIdentity),
        };

        // Fixed order so the error message is stable across runs.
        let required = [
            (ENV_PROJECT_ID, &env.project_id),
            (ENV_PRIVATE_KEY_ID, &env.private_key_id),
            (ENV_PRIVATE_KEY, &env.private_key),
            (ENV_CLIENT_ID, &env.client_id),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingSecrets(missing));
        }

        Ok(Self {
            key_file,
            output_file,
            file_id: options.file_id,
            verbose,
            project_name,
            project_id: env.project_id.clone().unwrap_or_default(),
            client_id: env.client_id.clone().unwrap_or_default(),
            private_key_id: env.private_key_id.clone().unwrap_or_default(),
            private_key: env.private_key.clone().unwrap_or_default(),
        })
    }
}

/// Recovers the project name from a Cloud project id.
///
/// Generated ids look like `<name>-<digits>`, so a numeric tail is dropped
/// (`test-project-123` -> `test-project`). Ids without one keep the text
/// before the first hyphen (`acme-prod` -> `acme`).
pub fn derive_project_name(project_id: &str) -> String {
    if let Some((head, tail)) = project_id.rsplit_once('-') {
        if !head.is_empty() && !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) {
            return head.to_string();
        }
    }

    match project_id.split('-').next() {
        Some(prefix) if !prefix.is_empty() => prefix.to_string(),
        _ => project_id.to_string(),
    }
}
