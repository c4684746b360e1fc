//! Sequential execution of the drawing job list.
//!
//! Exactly one request is in flight at any time, with a fixed pacing delay
//! between consecutive requests to respect the generator's shared rate
//! limit. Each job fails independently; a failure never aborts the batch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::jobs::{CadJob, DrawingSettings, ElementSummary, JobStatus, plan_jobs};
use super::prompt;

/// Delay between consecutive generator requests. The first request goes
/// out immediately.
pub const PACING_DELAY: Duration = Duration::from_millis(2000);

/// Seam between the job loop and the image-generation service. The HTTP
/// client implements this; tests substitute doubles.
pub trait DrawingRenderer {
    fn render(&self, prompt: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Owns the job list and the generating flag. Both are mutated only from
/// within `generate`'s sequential loop; `&mut self` makes overlapping runs
/// unrepresentable, and there is deliberately no mid-batch cancellation.
#[derive(Debug, Default)]
pub struct CadSession {
    jobs: Vec<CadJob>,
    generating: bool,
}

impl CadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[CadJob] {
        &self.jobs
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Recompute the job list from the current detections and settings,
    /// discarding any previous run's state, then execute every job in
    /// order. Returns the number of jobs that completed successfully.
    ///
    /// A failed job is marked `Failed` with a readable message and the
    /// loop moves on; the flag clears after the last job no matter how
    /// many failed. Retry is a full regeneration.
    pub async fn generate<R: DrawingRenderer>(
        &mut self,
        renderer: &R,
        settings: &DrawingSettings,
        summary: &ElementSummary,
    ) -> usize {
        self.generating = true;
        self.jobs = plan_jobs(settings, summary);
        info!(jobs = self.jobs.len(), "starting drawing generation");

        let mut completed = 0;
        for i in 0..self.jobs.len() {
            self.jobs[i].status = JobStatus::Loading;

            if i > 0 {
                debug!(delay_ms = PACING_DELAY.as_millis() as u64, "pacing before next request");
                tokio::time::sleep(PACING_DELAY).await;
            }

            let kind = self.jobs[i].kind;
            let request = prompt::build_request_prompt(&self.jobs[i].prompt);
            info!(job = kind.name(), index = i, "requesting drawing");

            self.jobs[i].status = match renderer.render(&request).await {
                Ok(bytes) if bytes.is_empty() => {
                    warn!(job = kind.name(), "generator returned an empty payload");
                    JobStatus::Failed("Received empty image response".to_string())
                }
                Ok(bytes) => match image::load_from_memory(&bytes) {
                    Ok(img) => {
                        completed += 1;
                        info!(job = kind.name(), bytes = bytes.len(), "drawing ready");
                        JobStatus::Done(img)
                    }
                    Err(err) => {
                        warn!(job = kind.name(), error = %err, "drawing decode failed");
                        JobStatus::Failed(format!("Failed to decode image: {err}"))
                    }
                },
                Err(err) => {
                    warn!(job = kind.name(), error = %err, "drawing request failed");
                    JobStatus::Failed(format!("Failed to generate: {err}"))
                }
            };
        }

        self.generating = false;
        completed
    }

    /// Write one finished drawing to `dir` as `{kind}.png`. Only completed
    /// jobs can be exported.
    pub fn export_job(job: &CadJob, dir: &Path) -> Result<PathBuf> {
        let img = job
            .image()
            .with_context(|| format!("{} has not finished generating", job.kind.display_name()))?;
        let path = dir.join(format!("{}.png", job.kind.name()));
        img.save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        Ok(path)
    }
}
