use std::path::PathBuf;

pub const ENV_PROJECT_NAME: &str = "GOOGLE_PROJECT_NAME";
pub const ENV_PROJECT_ID: &str = "GOOGLE_PROJECT_ID";
pub const ENV_PRIVATE_KEY_ID: &str = "GOOGLE_PRIVATE_KEY_ID";
pub const ENV_PRIVATE_KEY: &str = "GOOGLE_PRIVATE_KEY";
pub const ENV_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";

/// What the caller asks for. Only the spreadsheet id is mandatory.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub file_id: String,
    /// Where the service account JSON lives. Created when missing.
    pub key_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub verbose: Option<bool>,
}

/// The `GOOGLE_*` variables, captured once at startup.
///
/// Empty values are stored as `None` so "set but blank" and "unset" behave
/// the same way during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub project_name: Option<String>,
    pub project_id: Option<String>,
    pub private_key_id: Option<String>,
    pub private_key: Option<String>,
    pub client_id: Option<String>,
}

impl EnvSnapshot {
    /// Reads the process environment. Call after `.env` has been loaded.
    pub fn from_process() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a snapshot from any key lookup (process env, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            project_name: read(ENV_PROJECT_NAME),
            project_id: read(ENV_PROJECT_ID),
            private_key_id: read(ENV_PRIVATE_KEY_ID),
            private_key: read(ENV_PRIVATE_KEY),
            client_id: read(ENV_CLIENT_ID),
        }
    }
}

/// Fully resolved settings for one export run. Never mutated after
/// construction.
#[derive(Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub key_file: PathBuf,
    pub output_file: PathBuf,
    pub file_id: String,
    pub verbose: bool,
    pub project_name: String,
    pub project_id: String,
    pub client_id: String,
    pub private_key_id: String,
    /// Raw value from the environment, `\n` escapes still in place.
    pub private_key: String,
}

impl ExportConfig {
    /// Service account email derived from the project identity.
    pub fn client_email(&self) -> String {
        format!(
            "{}@{}.iam.gserviceaccount.com",
            self.project_name, self.project_id
        )
    }
}

// Hand-written so key material never ends up in logs.
impl std::fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportConfig")
            .field("key_file", &self.key_file)
            .field("output_file", &self.output_file)
            .field("file_id", &self.file_id)
            .field("verbose", &self.verbose)
            .field("project_name", &self.project_name)
            .field("project_id", &self.project_id)
            .field("client_id", &self.client_id)
            .field("private_key_id", &"<redacted>")
            .field("private_key", &"<redacted>")
            .finish()
    }
}
