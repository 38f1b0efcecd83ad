use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::core::export::{AccessToken, ExportError, ExportRequest, SheetExporter};

const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Minimal Drive v3 client. Only `files.export` is needed.
///
/// See https://developers.google.com/drive/api/guides/manage-downloads
pub struct DriveClient {
    client: Client,
    base_url: String,
}

impl DriveClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: DRIVE_API_BASE.to_string(),
        }
    }

    /// `<base>/files/<file_id>/export`, with the id percent-encoded as one segment.
    fn export_url(&self, file_id: &str) -> Result<Url, ExportError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ExportError::Http(format!("Invalid Drive API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                ExportError::Http(format!("Drive API base URL has no path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["files", file_id, "export"]);
        Ok(url)
    }
}

#[async_trait]
impl SheetExporter for DriveClient {
    async fn export(
        &self,
        token: &AccessToken,
        request: &ExportRequest,
    ) -> Result<String, ExportError> {
        let url = self.export_url(&request.file_id)?;

        tracing::debug!(
            file_id = %request.file_id,
            mime_type = %request.mime_type,
            "Requesting Drive export"
        );

        let response = self
            .client
            .get(url)
            .query(&[("mimeType", request.mime_type.as_str())])
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| ExportError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExportError::Http(e.to_string()))?;

        if !status.is_success() {
            // 404 here usually means the sheet isn't shared with the service account.
            return Err(ExportError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url() {
        let drive = DriveClient::new(Client::new());
        assert_eq!(
            drive.export_url("1abc123xyz").unwrap().as_str(),
            "https://www.googleapis.com/drive/v3/files/1abc123xyz/export"
        );
    }

    #[test]
    fn test_export_url_encodes_file_id() {
        let drive = DriveClient::new(Client::new());
        let url = drive.export_url("a/b c?x#y").unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/drive/v3/files/a%2Fb%20c%3Fx%23y/export"
        );
        assert!(url.query().is_none());
    }
}
