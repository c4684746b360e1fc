pub mod draw;
pub mod palette;
pub mod text;
pub mod view;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use image::{DynamicImage, RgbaImage};

use crate::models::AnalysisResult;

/// Which view the renderer paints over the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayMode {
    #[default]
    Original,
    Detections,
    Rooms,
}

impl OverlayMode {
    pub fn name(&self) -> &'static str {
        match self {
            OverlayMode::Original => "original",
            OverlayMode::Detections => "detections",
            OverlayMode::Rooms => "rooms",
        }
    }
}

impl Display for OverlayMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OverlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "original" => Ok(OverlayMode::Original),
            "detections" => Ok(OverlayMode::Detections),
            "rooms" => Ok(OverlayMode::Rooms),
            other => Err(format!("unknown overlay mode: {other}")),
        }
    }
}

/// Paint one view onto a fresh canvas sized to the source image's intrinsic
/// dimensions. The image goes down at the origin unscaled; annotations are
/// drawn on top in image pixel coordinates.
///
/// Deterministic: the same mode, image and analysis always reproduce the
/// same pixels.
pub fn render(mode: OverlayMode, image: &DynamicImage, analysis: &AnalysisResult) -> RgbaImage {
    let mut canvas = image.to_rgba8();
    match mode {
        OverlayMode::Original => {}
        OverlayMode::Detections => draw::draw_detections(&mut canvas, &analysis.detections),
        OverlayMode::Rooms => draw::draw_rooms(&mut canvas, &analysis.rooms),
    }
    canvas
}
