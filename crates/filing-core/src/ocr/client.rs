//! HTTP client for the OCR service.

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};

use super::{OcrPage, OcrResponse, OcrService};
use crate::error::CollaboratorError;

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: String,
}

/// Client for `POST /extract` and `GET /health`.
pub struct HttpOcrClient {
    client: Client,
    base_url: String,
}

impl HttpOcrClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, CollaboratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pull the `detail` message out of an error body, falling back to the raw text.
fn error_detail(body: String) -> String {
    serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.detail)
        .unwrap_or(body)
}

impl OcrService for HttpOcrClient {
    fn extract(&self, filename: &str, data: &[u8]) -> Result<Vec<OcrPage>, CollaboratorError> {
        info!("Sending {} ({} bytes) to OCR service", filename, data.len());

        let part = Part::bytes(data.to_vec())
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self.client.post(self.url("/extract")).multipart(form).send()?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            return Err(CollaboratorError::Rejected(error_detail(response.text().unwrap_or_default())));
        }
        if !status.is_success() {
            return Err(CollaboratorError::Status {
                status: status.as_u16(),
                detail: error_detail(response.text().unwrap_or_default()),
            });
        }

        let body: OcrResponse = response.json()?;
        debug!("OCR service returned {} pages", body.pages.len());
        Ok(body.pages)
    }

    fn health(&self) -> Result<bool, CollaboratorError> {
        let response = self.client.get(self.url("/health")).send()?;
        if !response.status().is_success() {
            return Ok(false);
        }
        let body: HealthResponse = response.json()?;
        Ok(body.status == "healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_url_normalized() {
        let client = HttpOcrClient::new("http://ocr:8000/", 5).unwrap();
        assert_eq!(client.url("/extract"), "http://ocr:8000/extract");
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(error_detail(r#"{"detail":"File must be a PDF"}"#.to_string()), "File must be a PDF");
        assert_eq!(error_detail("boom".to_string()), "boom");
    }

    #[test]
    fn test_unreachable_service() {
        let client = HttpOcrClient::new("http://127.0.0.1:9", 2).unwrap();
        assert!(client.health().is_err());
    }
}
