pub mod jobs;
pub mod prompt;
pub mod worker;

pub use jobs::{CadJob, DrawingKind, DrawingSettings, ElementSummary, JobStatus, plan_jobs};
pub use worker::{CadSession, DrawingRenderer, PACING_DELAY};
