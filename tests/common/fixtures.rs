use std::collections::BTreeMap;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use planlens::models::{AnalysisResult, Detection, ImageSize, Rect, Room};

/// Creates a white floor-plan stand-in of the given size.
pub fn white_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([255, 255, 255, 255]),
    ))
}

/// Encodes a tiny valid PNG, as the generator service would return.
pub fn tiny_png_bytes() -> Vec<u8> {
    let img = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode test PNG");
    bytes
}

/// A detection with a fixed confidence at the given box.
pub fn detection(label: &str, x1: f32, y1: f32, x2: f32, y2: f32) -> Detection {
    Detection {
        label: label.to_string(),
        confidence: 0.87,
        bbox: Rect::new(x1, y1, x2, y2),
    }
}

/// Builds a consistent AnalysisResult (histogram recomputed) for the given
/// detections and rooms.
pub fn analysis(detections: Vec<Detection>, rooms: Vec<Room>, size: (u32, u32)) -> AnalysisResult {
    let mut result = AnalysisResult {
        detections,
        object_counts: BTreeMap::new(),
        rooms,
        image_size: ImageSize {
            width: size.0,
            height: size.1,
        },
    };
    result.recount();
    result
}

/// A room with the given id covering the given box.
pub fn room(id: u32, x1: f32, y1: f32, x2: f32, y2: f32) -> Room {
    Room {
        id,
        area: (x2 - x1) * (y2 - y1),
        bbox: Rect::new(x1, y1, x2, y2),
    }
}
