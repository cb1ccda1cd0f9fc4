//! Radar-ping icon composition
//!
//! The icon is two concentric rings, four radial spokes and a center dot,
//! echoing the ping/uptime checks the extension runs. All proportions scale
//! with the icon size so the 16px and 128px renditions stay recognizably the
//! same mark. Rendering is deterministic.

use crate::canvas::{Canvas, Rgba};

/// Extension brand blue (#3B82F6), the flat background of the skia backend
pub const BACKGROUND: Rgba = Rgba::opaque(59, 130, 246);
/// Top row of the built-in backend's background gradient (#60A5FA)
pub const GRADIENT_TOP: Rgba = Rgba::opaque(96, 165, 250);
/// Bottom row of the built-in backend's background gradient (#2563EB)
pub const GRADIENT_BOTTOM: Rgba = Rgba::opaque(37, 99, 235);
/// Rings, spokes and dot are plain white
pub const FOREGROUND: Rgba = Rgba::opaque(255, 255, 255);
/// Semi-transparent white band across the top edge
pub const HIGHLIGHT: Rgba = Rgba::new(255, 255, 255, 64);

/// Icon proportions for one size, all relative to the edge length
#[derive(Debug, Clone, Copy)]
pub struct IconGeometry {
    pub cx: f32,
    pub cy: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub ring_width: f32,
    pub dot_radius: f32,
    pub spoke_width: f32,
    pub highlight_rows: u32,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        let s = size as f32;
        let outer_radius = s * 0.35;
        Self {
            cx: s / 2.0,
            cy: s / 2.0,
            outer_radius,
            inner_radius: outer_radius * 0.6,
            ring_width: (s * 0.08).max(1.0),
            dot_radius: (s * 0.10).max(1.0),
            spoke_width: (s * 0.05).max(1.0),
            highlight_rows: ((s * 0.15) as u32).max(1),
        }
    }

    /// Spoke endpoints at 0, 90, 180 and 270 degrees on the outer ring
    pub fn spoke_endpoints(&self) -> [(f32, f32); 4] {
        [
            (self.cx + self.outer_radius, self.cy),
            (self.cx, self.cy + self.outer_radius),
            (self.cx - self.outer_radius, self.cy),
            (self.cx, self.cy - self.outer_radius),
        ]
    }
}

/// Paint one icon with the built-in backend
///
/// Passes are composited in order: gradient background, ring pattern, glyph
/// (dot plus spokes), top-edge highlight band.
pub fn render_icon(size: u32) -> Canvas {
    let geo = IconGeometry::for_size(size);
    let mut canvas = Canvas::new(size, size);

    canvas.fill_vertical_gradient(GRADIENT_TOP, GRADIENT_BOTTOM);

    canvas.stroke_ring(geo.cx, geo.cy, geo.outer_radius, geo.ring_width, FOREGROUND);
    canvas.stroke_ring(geo.cx, geo.cy, geo.inner_radius, geo.ring_width, FOREGROUND);

    for (ex, ey) in geo.spoke_endpoints() {
        canvas.stroke_segment(geo.cx, geo.cy, ex, ey, geo.spoke_width, FOREGROUND);
    }
    canvas.fill_disc(geo.cx, geo.cy, geo.dot_radius, FOREGROUND);

    canvas.highlight_band(geo.highlight_rows, HIGHLIGHT);

    canvas
}
