//! Drawing job derivation: detection summary + user settings in, an
//! ordered job list out.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use image::DynamicImage;

use super::prompt;
use crate::models::Detection;

/// The fixed set of drawing types the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingKind {
    CeilingPlan,
    WallElevation,
    DoorElevation,
    WindowElevation,
    BedHeadElevation,
}

impl DrawingKind {
    /// snake_case name, also the export filename stem.
    pub fn name(&self) -> &'static str {
        match self {
            DrawingKind::CeilingPlan => "ceiling_plan",
            DrawingKind::WallElevation => "wall_elevation",
            DrawingKind::DoorElevation => "door_elevation",
            DrawingKind::WindowElevation => "window_elevation",
            DrawingKind::BedHeadElevation => "bed_head_elevation",
        }
    }

    /// Human-readable Title Case name.
    pub fn display_name(&self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Display for DrawingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-tunable generation settings. The wall height is taken as-is; the
/// UI constrains it to [2000, 4000] mm in steps of 50 but out-of-range
/// values just produce unusual prompts.
#[derive(Debug, Clone)]
pub struct DrawingSettings {
    pub wall_height_mm: u32,
    pub include_doors: bool,
    pub include_windows: bool,
    pub include_bed_heads: bool,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            wall_height_mm: 2700,
            include_doors: true,
            include_windows: true,
            include_bed_heads: true,
        }
    }
}

impl DrawingSettings {
    /// Height in meters with two decimals, as embedded in prompts.
    pub fn wall_height_m(&self) -> String {
        format!("{:.2}", self.wall_height_mm as f64 / 1000.0)
    }
}

const FURNITURE_LABELS: &[&str] = &["bed", "sofa", "table", "chair", "toilet", "sink"];

/// Per-label counts and presence flags derived from one detection set.
/// Labels are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ElementSummary {
    pub counts: BTreeMap<String, u32>,
    pub has_door: bool,
    pub has_window: bool,
    pub has_bed: bool,
    pub has_wall: bool,
    pub has_furniture: bool,
}

impl ElementSummary {
    pub fn from_detections(detections: &[Detection]) -> Self {
        let mut summary = Self::default();
        for det in detections {
            let label = det.label.to_ascii_lowercase();
            *summary.counts.entry(label.clone()).or_insert(0) += 1;
            match label.as_str() {
                "door" => summary.has_door = true,
                "window" => summary.has_window = true,
                "bed" => summary.has_bed = true,
                "wall" => summary.has_wall = true,
                _ => {}
            }
            if FURNITURE_LABELS.contains(&label.as_str()) {
                summary.has_furniture = true;
            }
        }
        summary
    }

    pub fn count(&self, label: &str) -> u32 {
        self.counts.get(label).copied().unwrap_or(0)
    }
}

/// Execution state of one drawing job.
#[derive(Debug, Clone, Default)]
pub enum JobStatus {
    #[default]
    Pending,
    Loading,
    Done(DynamicImage),
    Failed(String),
}

/// One unit of work: a drawing type, its template prompt, and its state.
#[derive(Debug, Clone)]
pub struct CadJob {
    pub kind: DrawingKind,
    pub prompt: String,
    pub status: JobStatus,
}

impl CadJob {
    fn new(kind: DrawingKind, prompt: String) -> Self {
        Self {
            kind,
            prompt,
            status: JobStatus::Pending,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.status, JobStatus::Done(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            JobStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        match &self.status {
            JobStatus::Done(img) => Some(img),
            _ => None,
        }
    }
}

/// How many elevations a detected category gets: capped at three, and at
/// least one even when nothing was detected so the category is never empty.
fn elevation_count(detected: bool, count: u32) -> u32 {
    if detected { count.clamp(1, 3) } else { 1 }
}

/// Derive the ordered job list from the current detections and settings.
/// Always computed fresh; a previous run's list is discarded, never merged.
///
/// The include_* toggles gate their whole category: a disabled toggle omits
/// the category's jobs entirely.
pub fn plan_jobs(settings: &DrawingSettings, summary: &ElementSummary) -> Vec<CadJob> {
    let mut jobs = Vec::new();

    jobs.push(CadJob::new(
        DrawingKind::CeilingPlan,
        prompt::CEILING_PLAN_TEMPLATE.to_string(),
    ));

    jobs.push(CadJob::new(
        DrawingKind::WallElevation,
        prompt::wall_elevation_template(&settings.wall_height_m()),
    ));

    if settings.include_doors {
        for _ in 0..elevation_count(summary.has_door, summary.count("door")) {
            jobs.push(CadJob::new(
                DrawingKind::DoorElevation,
                prompt::DOOR_ELEVATION_TEMPLATE.to_string(),
            ));
        }
    }

    if settings.include_windows {
        for _ in 0..elevation_count(summary.has_window, summary.count("window")) {
            jobs.push(CadJob::new(
                DrawingKind::WindowElevation,
                prompt::WINDOW_ELEVATION_TEMPLATE.to_string(),
            ));
        }
    }

    if settings.include_bed_heads {
        jobs.push(CadJob::new(
            DrawingKind::BedHeadElevation,
            prompt::BED_HEAD_ELEVATION_TEMPLATE.to_string(),
        ));
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rect;

    fn det(label: &str) -> Detection {
        Detection {
            label: label.to_string(),
            confidence: 0.9,
            bbox: Rect::new(0.0, 0.0, 10.0, 10.0),
        }
    }

    fn kinds(jobs: &[CadJob]) -> Vec<DrawingKind> {
        jobs.iter().map(|j| j.kind).collect()
    }

    #[test]
    fn no_doors_still_yields_one_door_elevation() {
        let summary = ElementSummary::from_detections(&[]);
        let jobs = plan_jobs(&DrawingSettings::default(), &summary);
        let doors = jobs
            .iter()
            .filter(|j| j.kind == DrawingKind::DoorElevation)
            .count();
        assert_eq!(doors, 1);
    }

    #[test]
    fn door_elevations_cap_at_three() {
        let dets: Vec<Detection> = (0..5).map(|_| det("door")).collect();
        let summary = ElementSummary::from_detections(&dets);
        let jobs = plan_jobs(&DrawingSettings::default(), &summary);
        let doors = jobs
            .iter()
            .filter(|j| j.kind == DrawingKind::DoorElevation)
            .count();
        assert_eq!(doors, 3);
    }

    #[test]
    fn two_doors_no_windows_gives_six_jobs_in_order() {
        let summary = ElementSummary::from_detections(&[det("door"), det("door")]);
        let settings = DrawingSettings {
            wall_height_mm: 2700,
            ..DrawingSettings::default()
        };
        let jobs = plan_jobs(&settings, &summary);
        assert_eq!(
            kinds(&jobs),
            vec![
                DrawingKind::CeilingPlan,
                DrawingKind::WallElevation,
                DrawingKind::DoorElevation,
                DrawingKind::DoorElevation,
                DrawingKind::WindowElevation,
                DrawingKind::BedHeadElevation,
            ]
        );
        assert!(jobs[1].prompt.contains("2.70m height"));
    }

    #[test]
    fn disabled_toggles_omit_their_categories() {
        let summary = ElementSummary::from_detections(&[det("door"), det("window"), det("bed")]);
        let settings = DrawingSettings {
            include_doors: false,
            include_windows: false,
            include_bed_heads: false,
            ..DrawingSettings::default()
        };
        let jobs = plan_jobs(&settings, &summary);
        assert_eq!(
            kinds(&jobs),
            vec![DrawingKind::CeilingPlan, DrawingKind::WallElevation]
        );
    }

    #[test]
    fn summary_flags_and_counts_are_case_insensitive() {
        let summary = ElementSummary::from_detections(&[det("Door"), det("DOOR"), det("Sofa")]);
        assert_eq!(summary.count("door"), 2);
        assert!(summary.has_door);
        assert!(summary.has_furniture);
        assert!(!summary.has_window);
    }

    #[test]
    fn display_name_is_title_case() {
        assert_eq!(DrawingKind::BedHeadElevation.display_name(), "Bed Head Elevation");
        assert_eq!(DrawingKind::CeilingPlan.display_name(), "Ceiling Plan");
    }

    #[test]
    fn wall_height_formats_two_decimals() {
        let settings = DrawingSettings {
            wall_height_mm: 3050,
            ..DrawingSettings::default()
        };
        assert_eq!(settings.wall_height_m(), "3.05");
    }

    #[test]
    fn all_jobs_start_pending() {
        let jobs = plan_jobs(&DrawingSettings::default(), &ElementSummary::default());
        assert!(jobs.iter().all(|j| matches!(j.status, JobStatus::Pending)));
    }
}
