//! Top-level analysis state: owns the current result, the last error, and
//! the in-flight flag. Detector failures become state here, never panics.

use anyhow::Result;
use tracing::warn;

use crate::client::DetectorClient;
use crate::models::AnalysisResult;

/// Seam between the session and the detector service, so the state
/// machine is testable without a network.
pub trait FloorPlanDetector {
    fn analyze(
        &self,
        image_bytes: Vec<u8>,
        filename: &str,
    ) -> impl Future<Output = Result<AnalysisResult>> + Send;
}

impl FloorPlanDetector for DetectorClient {
    async fn analyze(&self, image_bytes: Vec<u8>, filename: &str) -> Result<AnalysisResult> {
        Ok(self.detect(image_bytes, filename).await?)
    }
}

/// One user session: at most one analysis at a time, replaced wholesale on
/// each new upload.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    analysis: Option<AnalysisResult>,
    error: Option<String>,
    analyzing: bool,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Run one analysis. On success the previous result is replaced; on
    /// failure the result stays unset and the error message is kept for
    /// display. Nothing is retried automatically.
    pub async fn analyze<D: FloorPlanDetector>(
        &mut self,
        detector: &D,
        image_bytes: Vec<u8>,
        filename: &str,
    ) {
        self.analyzing = true;
        self.error = None;

        match detector.analyze(image_bytes, filename).await {
            Ok(result) => {
                self.analysis = Some(result);
            }
            Err(err) => {
                warn!(error = %err, "floor-plan analysis failed");
                self.analysis = None;
                self.error = Some(err.to_string());
            }
        }
        self.analyzing = false;
    }

    /// Drop the current result and error, returning to the pre-analysis
    /// state.
    pub fn reset(&mut self) {
        self.analysis = None;
        self.error = None;
    }
}
