//! Font discovery and text drawing for overlay labels.
//!
//! The system font database is queried once per process. When no usable
//! face exists (headless containers, minimal images) label glyphs are
//! skipped and width measurement falls back to a fixed per-character
//! estimate, so tag geometry stays deterministic either way.

use std::sync::OnceLock;

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

fn load_system_font(weight: fontdb::Weight) -> Option<FontVec> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        weight,
        ..fontdb::Query::default()
    };
    let id = db.query(&query)?;
    let (source, index) = db.face_source(id)?;

    let data = match source {
        fontdb::Source::Binary(bytes) => bytes.as_ref().as_ref().to_vec(),
        fontdb::Source::File(path) => std::fs::read(path).ok()?,
        fontdb::Source::SharedFile(path, _) => std::fs::read(path).ok()?,
    };
    FontVec::try_from_vec_and_index(data, index).ok()
}

fn regular_font() -> Option<&'static FontVec> {
    static FONT: OnceLock<Option<FontVec>> = OnceLock::new();
    FONT.get_or_init(|| load_system_font(fontdb::Weight::NORMAL))
        .as_ref()
}

fn bold_font() -> Option<&'static FontVec> {
    static FONT: OnceLock<Option<FontVec>> = OnceLock::new();
    FONT.get_or_init(|| load_system_font(fontdb::Weight::BOLD).or_else(|| load_system_font(fontdb::Weight::NORMAL)))
        .as_ref()
}

/// Pixel width of `text` at the given size. Without a font this estimates
/// 0.6em per character, which keeps tag boxes a sensible size.
pub fn measure_width(text: &str, size: f32) -> u32 {
    match regular_font() {
        Some(font) => text_size(PxScale::from(size), font, text).0,
        None => (text.chars().count() as f32 * size * 0.6).round() as u32,
    }
}

/// Draw `text` at (x, y) top-left. Out-of-bounds glyphs are clipped; a
/// missing font draws nothing.
pub fn draw_label(
    canvas: &mut RgbaImage,
    color: Rgba<u8>,
    x: i32,
    y: i32,
    size: f32,
    bold: bool,
    text: &str,
) {
    let font = if bold { bold_font() } else { regular_font() };
    if let Some(font) = font {
        draw_text_mut(canvas, color, x, y, PxScale::from(size), font, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_width_is_deterministic() {
        let a = measure_width("Door 87.0%", 12.0);
        let b = measure_width("Door 87.0%", 12.0);
        assert_eq!(a, b);
        assert!(a > 0);
    }

    #[test]
    fn longer_text_measures_wider() {
        let short = measure_width("Door", 12.0);
        let long = measure_width("Sliding Door 100.0%", 12.0);
        assert!(long > short);
    }

    #[test]
    fn draw_label_never_panics_off_canvas() {
        let mut canvas = RgbaImage::new(50, 50);
        draw_label(
            &mut canvas,
            Rgba([255, 255, 255, 255]),
            -10,
            -10,
            12.0,
            false,
            "clipped",
        );
    }
}
