//! Cursor-driven HSL color mapping.
//!
//! All bubbles share one hue derived from the cursor position; each
//! bubble gets its own lightness from its screen-space distance to the
//! cursor. Saturation is fixed.

use glam::Vec2;

use crate::constants::LIGHTNESS_FALLOFF_SPAN;

/// Hue in degrees [0, 360) from the combined normalized cursor axes.
pub fn cursor_hue_degrees(ndc: Vec2) -> f32 {
    (((ndc.x + ndc.y + 2.0) / 2.0) * 360.0).rem_euclid(360.0)
}

/// Lightness from screen distance to the cursor: 1 at the cursor,
/// falling linearly to 0 at a quarter of the viewport width.
pub fn lightness_for_distance(px_distance: f32, viewport_width: f32) -> f32 {
    let span = viewport_width * LIGHTNESS_FALLOFF_SPAN;
    if span <= 0.0 {
        return 0.0;
    }
    (1.0 - px_distance / span).clamp(0.0, 1.0)
}

/// Standard HSL to linear RGB conversion (hue in degrees).
pub fn hsl_to_rgb(hue_degrees: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue_degrees.rem_euclid(360.0) / 360.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
