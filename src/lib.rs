pub mod cad;
pub mod client;
pub mod models;
pub mod overlay;
pub mod session;

pub use cad::{
    CadJob, CadSession, DrawingKind, DrawingRenderer, DrawingSettings, ElementSummary, JobStatus,
    plan_jobs,
};
pub use client::{DetectorClient, DetectorError, GeneratorError, ImageGenerator};
pub use models::{AnalysisResult, Detection, ImageSize, Rect, Room};
pub use overlay::{OverlayMode, render, view::ViewState};
pub use session::{AnalysisSession, FloorPlanDetector};
