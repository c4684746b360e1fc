//! HTTP client for the text-to-image drawing generator.

use reqwest::header::ACCEPT;
use tracing::{info, warn};

use super::error::GeneratorError;
use crate::cad::prompt;
use crate::cad::worker::DrawingRenderer;

pub const DEFAULT_GENERATOR_URL: &str = "https://image.pollinations.ai";

/// Client for `GET {base}/prompt/{encoded}?t={millis}`. The timestamp
/// query parameter defeats response caching, so two jobs of the same kind
/// never collide on a cached drawing.
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    base_url: String,
    http: reqwest::Client,
}

impl ImageGenerator {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch one rendered drawing as raw image bytes.
    pub async fn fetch_drawing(&self, request_prompt: &str) -> Result<Vec<u8>, GeneratorError> {
        let encoded = prompt::encode_prompt(request_prompt);
        let timestamp = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let url = format!("{}/prompt/{}?t={}", self.base_url, encoded, timestamp);

        info!(prompt_len = request_prompt.len(), "requesting generated drawing");
        let response = self.http.get(&url).header(ACCEPT, "image/*").send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "generator rejected the request");
            return Err(GeneratorError::Http(status));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(GeneratorError::EmptyPayload);
        }
        Ok(bytes.to_vec())
    }
}

impl DrawingRenderer for ImageGenerator {
    async fn render(&self, prompt: &str) -> anyhow::Result<Vec<u8>> {
        Ok(self.fetch_drawing(prompt).await?)
    }
}
