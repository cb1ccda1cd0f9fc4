//! RGBA pixel canvas for the built-in backend
//!
//! Pixels are row-major, top-to-bottom, four bytes per pixel. Shapes are
//! drawn with per-pixel coverage tests against pixel centers, so the output
//! depends only on the canvas size and the drawing constants.

/// A single 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Mutable RGBA pixel grid of a fixed size
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes, row-major RGBA
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba {
        let i = self.index(x, y);
        Rgba::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        )
    }

    /// Overwrite one pixel
    pub fn put(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.index(x, y);
        self.pixels[i] = color.r;
        self.pixels[i + 1] = color.g;
        self.pixels[i + 2] = color.b;
        self.pixels[i + 3] = color.a;
    }

    /// Source-over blend of `color` onto one pixel
    pub fn blend(&mut self, x: u32, y: u32, color: Rgba) {
        match color.a {
            255 => self.put(x, y, color),
            0 => {}
            _ => {
                let dst = self.get(x, y);
                let a = color.a as u32;
                let inv = 255 - a;
                let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv) / 255) as u8;
                self.put(
                    x,
                    y,
                    Rgba::new(
                        mix(color.r, dst.r),
                        mix(color.g, dst.g),
                        mix(color.b, dst.b),
                        (a + dst.a as u32 * inv / 255) as u8,
                    ),
                );
            }
        }
    }

    /// Fill every pixel with a top-to-bottom linear gradient
    pub fn fill_vertical_gradient(&mut self, top: Rgba, bottom: Rgba) {
        for y in 0..self.height {
            let t = if self.height <= 1 {
                0.0
            } else {
                y as f32 / (self.height - 1) as f32
            };
            let row = Rgba::new(
                lerp_channel(top.r, bottom.r, t),
                lerp_channel(top.g, bottom.g, t),
                lerp_channel(top.b, bottom.b, t),
                lerp_channel(top.a, bottom.a, t),
            );
            for x in 0..self.width {
                self.put(x, y, row);
            }
        }
    }

    /// Stroke a circle outline of the given stroke width
    pub fn stroke_ring(&mut self, cx: f32, cy: f32, radius: f32, width: f32, color: Rgba) {
        let half = width / 2.0;
        for y in 0..self.height {
            for x in 0..self.width {
                let d = distance(x, y, cx, cy);
                if (d - radius).abs() <= half {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Fill a solid disc
    pub fn fill_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        for y in 0..self.height {
            for x in 0..self.width {
                if distance(x, y, cx, cy) <= radius {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Stroke a line segment of the given width
    pub fn stroke_segment(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        width: f32,
        color: Rgba,
    ) {
        let half = width / 2.0;
        for y in 0..self.height {
            for x in 0..self.width {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                if segment_distance(px, py, x0, y0, x1, y1) <= half {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Blend a semi-transparent band over the top `rows` rows
    pub fn highlight_band(&mut self, rows: u32, color: Rgba) {
        for y in 0..rows.min(self.height) {
            for x in 0..self.width {
                self.blend(x, y, color);
            }
        }
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

fn distance(x: u32, y: u32, cx: f32, cy: f32) -> f32 {
    let dx = x as f32 + 0.5 - cx;
    let dy = y as f32 + 0.5 - cy;
    (dx * dx + dy * dy).sqrt()
}

fn segment_distance(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - x0) * dx + (py - y0) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let nx = x0 + t * dx - px;
    let ny = y0 + t * dy - py;
    (nx * nx + ny * ny).sqrt()
}
