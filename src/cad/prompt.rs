//! Prompt templates and outbound request text for the drawing generator.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Style keywords appended to every request to force monochrome line-art
/// output from the generator.
pub const STYLE_SUFFIX: &str = " technical drawing, CAD style, blueprint, vector art, \
black and white, line art, no colors, no shading, no textures, \
engineering drawing, architectural drawing, \
clean lines, precise measurements, no shadows, no perspective";

pub const CEILING_PLAN_TEMPLATE: &str = "\
2D Reflected Ceiling Plan (RCP) in CAD technical drawing style, black and white line art, \
no colors, no shading, no textures, only black lines on white background, vector-based, showing:
- Ceiling grid with exact dimensions
- Lighting fixtures as simple symbols
- HVAC diffusers and vents as simple shapes
- Smoke detectors and emergency lighting symbols
- Scale 1:50 with dimension lines and annotations
- Simple line weights (thick for walls, thin for details)
- No perspective, no shadows, no colors, no gradients";

pub const DOOR_ELEVATION_TEMPLATE: &str = "\
2D Door Elevation, CAD technical drawing, black lines on white background, \
no colors, no shading, line art only, showing:
- Simple rectangular door shape
- Swing direction with arc
- Door handle and lock details as simple symbols
- Frame and architrave in thin lines
- Clearance zones with dotted lines
- Scale 1:20 with exact dimensions
- No perspective, no shadows, no colors, no textures";

pub const WINDOW_ELEVATION_TEMPLATE: &str = "\
2D Window Elevation, CAD technical drawing, black lines on white background, \
no colors, no shading, line art only, showing:
- Simple rectangular window frame
- Glass panes as thin lines
- Window opening mechanism (if applicable)
- Sill and frame details
- Wall thickness shown in section
- Scale 1:20 with exact dimensions
- No perspective, no shadows, no colors, no textures";

pub const BED_HEAD_ELEVATION_TEMPLATE: &str = "\
2D Bed Head Elevation, CAD technical drawing, black lines on white background, \
no colors, no shading, line art only, showing:
- Simple headboard outline
- Wall surface with exact dimensions
- Electrical outlets as simple symbols
- Light switches and controls
- Nightstand with basic dimensions
- Scale 1:20 with dimension lines
- No perspective, no shadows, no colors, no textures";

/// Wall elevations embed the configured height, in meters with two decimals.
pub fn wall_elevation_template(height_m: &str) -> String {
    format!(
        "2D Wall Elevation, {height_m}m height, CAD technical drawing, black lines on white \
background, no colors, no shading, line art only, showing:
- Simple line drawing of wall elevation
- Floor and ceiling lines with exact dimensions
- Basic wall outline with thickness
- Electrical outlets as simple symbols
- Light switches and controls
- Scale 1:50 with dimension lines
- No perspective, no shadows, no colors, no textures"
    )
}

/// Final request text: template plus the fixed style suffix, with every run
/// of whitespace (newlines included) collapsed to a single space.
pub fn build_request_prompt(template: &str) -> String {
    let mut full = String::with_capacity(template.len() + STYLE_SUFFIX.len());
    full.push_str(template);
    full.push_str(STYLE_SUFFIX);
    full.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Characters left bare in a URL path segment, mirroring JS
/// `encodeURIComponent`.
const PROMPT_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_prompt(prompt: &str) -> String {
    utf8_percent_encode(prompt, PROMPT_SEGMENT).to_string()
}
