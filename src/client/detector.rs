//! HTTP client for the floor-plan detector service.

use reqwest::multipart;
use tracing::{info, warn};

use super::error::DetectorError;
use crate::models::AnalysisResult;

/// Client for `POST {base}/detect`. The service accepts a multipart body
/// with the image under the `file` field and answers with the full
/// analysis as JSON.
#[derive(Debug, Clone)]
pub struct DetectorClient {
    base_url: String,
    http: reqwest::Client,
}

impl DetectorClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Send one image for analysis. Non-2xx responses surface as
    /// `DetectorError::Http` with the status.
    pub async fn detect(
        &self,
        image_bytes: Vec<u8>,
        filename: &str,
    ) -> Result<AnalysisResult, DetectorError> {
        let part = multipart::Part::bytes(image_bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);

        info!(url = %format!("{}/detect", self.base_url), file = filename, "sending image for analysis");
        let response = self
            .http
            .post(format!("{}/detect", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "detector rejected the request");
            return Err(DetectorError::Http(status));
        }

        let analysis: AnalysisResult = response.json().await?;
        info!(
            detections = analysis.detections.len(),
            rooms = analysis.rooms.len(),
            "analysis received"
        );
        Ok(analysis)
    }
}
