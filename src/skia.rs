//! tiny-skia rendering backend
//!
//! Draws the same radar-ping mark as the built-in backend, but with a real
//! rasterizer: anti-aliased stroked circles, radial spokes and a filled
//! center dot over the flat brand-blue background, saved through tiny-skia's
//! own PNG writer.

use thiserror::Error;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::render::{IconGeometry, BACKGROUND, FOREGROUND};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to allocate a {size}x{size} pixmap")]
    Allocation { size: u32 },
    #[error("icon path construction produced no geometry")]
    Path,
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Rasterize one icon size into a pixmap
pub fn render_pixmap(size: u32) -> Result<Pixmap, RenderError> {
    let geo = IconGeometry::for_size(size);
    let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::Allocation { size })?;

    pixmap.fill(Color::from_rgba8(
        BACKGROUND.r,
        BACKGROUND.g,
        BACKGROUND.b,
        BACKGROUND.a,
    ));

    let mut paint = Paint::default();
    paint.set_color_rgba8(FOREGROUND.r, FOREGROUND.g, FOREGROUND.b, FOREGROUND.a);
    paint.anti_alias = true;

    let ring_stroke = Stroke {
        width: geo.ring_width,
        ..Stroke::default()
    };
    for radius in [geo.outer_radius, geo.inner_radius] {
        let ring = PathBuilder::from_circle(geo.cx, geo.cy, radius).ok_or(RenderError::Path)?;
        pixmap.stroke_path(&ring, &paint, &ring_stroke, Transform::identity(), None);
    }

    let mut pb = PathBuilder::new();
    for (ex, ey) in geo.spoke_endpoints() {
        pb.move_to(geo.cx, geo.cy);
        pb.line_to(ex, ey);
    }
    let spokes = pb.finish().ok_or(RenderError::Path)?;
    let spoke_stroke = Stroke {
        width: geo.spoke_width,
        ..Stroke::default()
    };
    pixmap.stroke_path(&spokes, &paint, &spoke_stroke, Transform::identity(), None);

    let dot =
        PathBuilder::from_circle(geo.cx, geo.cy, geo.dot_radius).ok_or(RenderError::Path)?;
    pixmap.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);

    Ok(pixmap)
}

/// Rasterize one icon size and encode it as PNG bytes
pub fn render_png(size: u32) -> Result<Vec<u8>, RenderError> {
    render_pixmap(size)?
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use image::GenericImageView;

    use super::*;

    #[test]
    fn test_pixmap_dimensions() {
        let pixmap = render_pixmap(48).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (48, 48));
    }

    #[test]
    fn test_center_dot_is_white() {
        let pixmap = render_pixmap(128).unwrap();
        let px = pixmap.pixel(64, 64).unwrap();
        assert_eq!((px.red(), px.green(), px.blue()), (255, 255, 255));
    }

    #[test]
    fn test_corner_keeps_background_color() {
        let pixmap = render_pixmap(128).unwrap();
        let px = pixmap.pixel(0, 127).unwrap();
        assert_eq!(
            (px.red(), px.green(), px.blue()),
            (BACKGROUND.r, BACKGROUND.g, BACKGROUND.b)
        );
    }

    #[test]
    fn test_render_png_decodes() {
        let png = render_png(16).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.dimensions(), (16, 16));
    }

    #[test]
    fn test_zero_size_fails() {
        assert!(matches!(
            render_pixmap(0),
            Err(RenderError::Allocation { size: 0 })
        ));
    }
}
