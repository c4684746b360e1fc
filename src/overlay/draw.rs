//! Drawing primitives for the detection and room overlays.

use image::{Pixel, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect as PixelRect;

use super::{palette, text};
use crate::models::{Detection, Rect, Room};

const TAG_HEIGHT: u32 = 20;
const TAG_PADDING: u32 = 10;
const LABEL_SIZE: f32 = 12.0;
const ROOM_LABEL_SIZE: f32 = 16.0;

const ROOM_WASH: Rgba<u8> = Rgba([0x00, 0xff, 0x00, 0x33]);
const ROOM_BORDER: Rgba<u8> = Rgba([0x00, 0xaa, 0x00, 0xff]);
const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const BLACK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);

/// One stroked rectangle per detection, with a solid label tag above its
/// top-left corner. Tags near the top edge draw partially off-canvas; that
/// is deliberate, the clipping silently discards the off-surface rows.
pub fn draw_detections(canvas: &mut RgbaImage, detections: &[Detection]) {
    for det in detections {
        let color = palette::color_for_label(&det.label);
        stroke_rect(canvas, &det.bbox, color);

        let tag_text = format!("{} {:.1}%", det.label, det.confidence * 100.0);
        let tag_width = text::measure_width(&tag_text, LABEL_SIZE) + TAG_PADDING;
        let x = det.bbox.x1.round() as i32;
        let y = det.bbox.y1.round() as i32;

        fill_rect(canvas, x, y - TAG_HEIGHT as i32, tag_width, TAG_HEIGHT, color);
        text::draw_label(canvas, WHITE, x + 5, y - 16, LABEL_SIZE, false, &tag_text);
    }
}

/// Translucent green wash, solid darker-green border and a bold id label
/// per room.
pub fn draw_rooms(canvas: &mut RgbaImage, rooms: &[Room]) {
    for room in rooms {
        wash_rect(canvas, &room.bbox, ROOM_WASH);
        stroke_rect(canvas, &room.bbox, ROOM_BORDER);

        let x = room.bbox.x1.round() as i32;
        let y = room.bbox.y1.round() as i32;
        text::draw_label(
            canvas,
            BLACK,
            x + 10,
            y + 4,
            ROOM_LABEL_SIZE,
            true,
            &format!("Room {}", room.id),
        );
    }
}

/// 2px stroke: two nested 1px hollow rects. Empty rects draw nothing.
fn stroke_rect(canvas: &mut RgbaImage, rect: &Rect, color: Rgba<u8>) {
    let w = rect.width().round() as u32;
    let h = rect.height().round() as u32;
    if w == 0 || h == 0 {
        return;
    }
    let x = rect.x1.round() as i32;
    let y = rect.y1.round() as i32;
    draw_hollow_rect_mut(canvas, PixelRect::at(x, y).of_size(w, h), color);
    if w > 2 && h > 2 {
        draw_hollow_rect_mut(canvas, PixelRect::at(x + 1, y + 1).of_size(w - 2, h - 2), color);
    }
}

/// Opaque fill, clipped to the canvas.
fn fill_rect(canvas: &mut RgbaImage, x: i32, y: i32, w: u32, h: u32, color: Rgba<u8>) {
    if w == 0 || h == 0 {
        return;
    }
    draw_filled_rect_mut(canvas, PixelRect::at(x, y).of_size(w, h), color);
}

/// Alpha-blend a translucent fill over the existing pixels.
fn wash_rect(canvas: &mut RgbaImage, rect: &Rect, color: Rgba<u8>) {
    let x0 = rect.x1.round().max(0.0) as u32;
    let y0 = rect.y1.round().max(0.0) as u32;
    let x1 = (rect.x2.round() as i64).clamp(0, canvas.width() as i64) as u32;
    let y1 = (rect.y2.round() as i64).clamp(0, canvas.height() as i64) as u32;
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.get_pixel_mut(x, y).blend(&color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rect;

    fn white_canvas(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))
    }

    fn det(label: &str, bbox: Rect) -> Detection {
        Detection {
            label: label.to_string(),
            confidence: 0.87,
            bbox,
        }
    }

    #[test]
    fn detection_stroke_uses_palette_color() {
        let mut canvas = white_canvas(200, 200);
        draw_detections(&mut canvas, &[det("Door", Rect::new(50.0, 50.0, 150.0, 150.0))]);
        // Top edge of the box carries the Door color, two pixels thick.
        assert_eq!(*canvas.get_pixel(100, 50), Rgba([0x34, 0x98, 0xdb, 0xff]));
        assert_eq!(*canvas.get_pixel(100, 51), Rgba([0x34, 0x98, 0xdb, 0xff]));
        // Interior untouched.
        assert_eq!(*canvas.get_pixel(100, 100), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn unknown_label_strokes_black() {
        let mut canvas = white_canvas(100, 100);
        draw_detections(&mut canvas, &[det("Fireplace", Rect::new(30.0, 40.0, 70.0, 80.0))]);
        assert_eq!(*canvas.get_pixel(50, 40), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn tag_sits_directly_above_box() {
        let mut canvas = white_canvas(300, 300);
        draw_detections(&mut canvas, &[det("Wall", Rect::new(40.0, 100.0, 200.0, 200.0))]);
        // Tag band occupies y in [80, 100) starting at the box's left edge.
        assert_eq!(*canvas.get_pixel(41, 85), Rgba([0xe7, 0x4c, 0x3c, 0xff]));
        assert_eq!(*canvas.get_pixel(41, 99), Rgba([0xe7, 0x4c, 0x3c, 0xff]));
        // Row above the tag is untouched.
        assert_eq!(*canvas.get_pixel(41, 79), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn tag_above_top_edge_clips_without_panic() {
        let mut canvas = white_canvas(100, 100);
        // Box at the very top: its tag extends above y=0 and must clip.
        draw_detections(&mut canvas, &[det("Door", Rect::new(10.0, 5.0, 60.0, 40.0))]);
        assert_eq!(*canvas.get_pixel(11, 0), Rgba([0x34, 0x98, 0xdb, 0xff]));
    }

    #[test]
    fn zero_size_rect_draws_nothing() {
        let mut canvas = white_canvas(100, 100);
        let before = canvas.clone();
        stroke_rect(&mut canvas, &Rect::new(50.0, 50.0, 40.0, 40.0), BLACK);
        assert_eq!(canvas, before);
    }

    #[test]
    fn room_wash_blends_and_border_is_solid() {
        let mut canvas = white_canvas(200, 200);
        let rooms = vec![Room {
            id: 1,
            area: 10000.0,
            bbox: Rect::new(50.0, 50.0, 150.0, 150.0),
        }];
        draw_rooms(&mut canvas, &rooms);
        // Interior is a green-tinted white, not pure green and not pure white.
        let inside = *canvas.get_pixel(100, 120);
        assert!(inside[1] > inside[0], "green channel should dominate: {inside:?}");
        assert_ne!(inside, Rgba([255, 255, 255, 255]));
        assert_ne!(inside, Rgba([0, 255, 0, 255]));
        // Border color on the bottom edge.
        assert_eq!(*canvas.get_pixel(100, 149), ROOM_BORDER);
    }
}
