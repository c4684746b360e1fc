//! Presentation state for the overlay viewer: current mode, zoom factor
//! and raster export.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use super::OverlayMode;
use crate::models::ImageSize;

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.25;

/// Viewer-local state. Zoom is purely presentational: it scales the
/// displayed size from the top-left and never touches the canvas pixels or
/// the exported resolution.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    mode: OverlayMode,
    zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: OverlayMode::Original,
            zoom: 1.0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: OverlayMode) {
        self.mode = mode;
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn set_zoom(&mut self, factor: f32) {
        self.zoom = factor.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Size the canvas occupies on screen at the current zoom.
    pub fn display_size(&self, intrinsic: ImageSize) -> (u32, u32) {
        (
            (intrinsic.width as f32 * self.zoom).round() as u32,
            (intrinsic.height as f32 * self.zoom).round() as u32,
        )
    }

    /// Suggested filename for exporting the current view.
    pub fn export_filename(&self) -> String {
        format!("floor-plan-{}.png", self.mode)
    }

    /// Encode the canvas pixels to PNG. Always at intrinsic resolution,
    /// regardless of zoom.
    pub fn export_png(&self, canvas: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
        let mut bytes = Vec::new();
        canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}
