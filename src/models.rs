use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in image pixel coordinates.
///
/// The detector promises `x2 >= x1` and `y2 >= y1` but nothing here relies
/// on it; a malformed rect degrades to zero-size drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rect {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        (self.x2 - self.x1).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.y2 - self.y1).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// One recognized architectural element with its bounding rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
    #[serde(rename = "box")]
    pub bbox: Rect,
}

impl Display for Detection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.1}% at ({:.0}, {:.0})",
            self.label,
            self.confidence * 100.0,
            self.bbox.x1,
            self.bbox.y1
        )
    }
}

/// One segmented enclosed area. Ids are unique within a single analysis only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    /// Pixel-squared area as measured by the detector.
    pub area: f32,
    #[serde(rename = "box")]
    pub bbox: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Full response of one detector call. Replaced wholesale on a new upload,
/// never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub detections: Vec<Detection>,
    pub object_counts: BTreeMap<String, u32>,
    pub rooms: Vec<Room>,
    pub image_size: ImageSize,
}

impl AnalysisResult {
    /// Sum of all object counts.
    pub fn total_objects(&self) -> u32 {
        self.object_counts.values().sum()
    }

    /// Total room area in pixel² units. Accumulated unrounded; round only
    /// at display time.
    pub fn total_room_area(&self) -> f64 {
        self.rooms.iter().map(|r| r.area as f64).sum()
    }

    pub fn count_of(&self, label: &str) -> u32 {
        self.detections
            .iter()
            .filter(|d| d.label.eq_ignore_ascii_case(label))
            .count() as u32
    }

    pub fn has(&self, label: &str) -> bool {
        self.detections
            .iter()
            .any(|d| d.label.eq_ignore_ascii_case(label))
    }

    /// Recompute `object_counts` from the detection list. The detector sends
    /// the histogram precomputed; callers that filter detections locally use
    /// this to keep it consistent.
    pub fn recount(&mut self) {
        let mut counts = BTreeMap::new();
        for det in &self.detections {
            *counts.entry(det.label.clone()).or_insert(0) += 1;
        }
        self.object_counts = counts;
    }

    /// Label histogram as CSV with a `Label,Count` header.
    pub fn counts_csv(&self) -> String {
        let mut csv = String::from("Label,Count\n");
        for (label, count) in &self.object_counts {
            csv.push_str(label);
            csv.push(',');
            csv.push_str(&count.to_string());
            csv.push('\n');
        }
        csv
    }
}
