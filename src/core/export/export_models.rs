use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::config::ExportConfig;

pub const CSV_MIME_TYPE: &str = "text/csv";

const AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const AUTH_PROVIDER_CERT_URL: &str = "https://www.googleapis.com/oauth2/v1/certs";
const CLIENT_CERT_URL_BASE: &str = "https://www.googleapis.com/robot/v1/metadata/x509";
const UNIVERSE_DOMAIN: &str = "googleapis.com";

/// Service account key file, laid out the way the Cloud console exports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub project_id: String,
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    pub client_id: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub auth_provider_x509_cert_url: String,
    pub client_x509_cert_url: String,
    pub universe_domain: String,
}

impl ServiceAccountKey {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            key_type: "service_account".to_string(),
            project_id: config.project_id.clone(),
            private_key_id: config.private_key_id.clone(),
            // Env files usually carry the PEM on one line with literal `\n`.
            private_key: config.private_key.replace("\\n", "\n"),
            client_email: config.client_email(),
            client_id: config.client_id.clone(),
            auth_uri: AUTH_URI.to_string(),
            token_uri: TOKEN_URI.to_string(),
            auth_provider_x509_cert_url: AUTH_PROVIDER_CERT_URL.to_string(),
            client_x509_cert_url: format!(
                "{}/{}%40{}.iam.gserviceaccount.com",
                CLIENT_CERT_URL_BASE, config.project_name, config.project_id
            ),
            universe_domain: UNIVERSE_DOMAIN.to_string(),
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One Drive export call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub file_id: String,
    pub mime_type: String,
}

impl ExportRequest {
    pub fn csv(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            mime_type: CSV_MIME_TYPE.to_string(),
        }
    }
}

/// OAuth2 bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// How the credentials file was handled during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsStatus {
    /// No file existed; a new one was written.
    Created,
    /// File on disk already matched the configuration.
    Reused,
    /// File existed but its content was stale and was overwritten.
    Regenerated,
}

/// Steps of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    Configuring,
    MaterializingCredentials,
    Authorizing,
    Exporting,
    Writing,
    Done,
}

impl fmt::Display for ExportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExportStage::Configuring => "configuring",
            ExportStage::MaterializingCredentials => "materializing credentials",
            ExportStage::Authorizing => "authorizing",
            ExportStage::Exporting => "exporting",
            ExportStage::Writing => "writing",
            ExportStage::Done => "done",
        };
        f.write_str(label)
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub output_file: PathBuf,
    pub bytes_written: usize,
    pub credentials: CredentialsStatus,
}
