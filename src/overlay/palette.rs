use image::Rgba;

/// Unknown labels fall back to black.
pub const FALLBACK_COLOR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);

/// Frozen label → stroke color table. Labels arrive from the detector with
/// this exact casing.
static LABEL_COLORS: &[(&str, Rgba<u8>)] = &[
    ("Wall", Rgba([0xe7, 0x4c, 0x3c, 0xff])),
    ("Door", Rgba([0x34, 0x98, 0xdb, 0xff])),
    ("Window", Rgba([0x9b, 0x59, 0xb6, 0xff])),
    ("Column", Rgba([0xf1, 0xc4, 0x0f, 0xff])),
    ("Stair Case", Rgba([0x1a, 0xbc, 0x9c, 0xff])),
    ("Curtain Wall", Rgba([0xe6, 0x7e, 0x22, 0xff])),
    ("Dimension", Rgba([0x95, 0xa5, 0xa6, 0xff])),
    ("Railing", Rgba([0x2e, 0xcc, 0x71, 0xff])),
    ("Sliding Door", Rgba([0xd3, 0x54, 0x00, 0xff])),
];

pub fn color_for_label(label: &str) -> Rgba<u8> {
    LABEL_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}
