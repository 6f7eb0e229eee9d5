//! Scene rendering.
//!
//! The editor draws through the [`DrawingSurface`] trait, a small subset of
//! a canvas-like 2D API working in screen pixels. Two backends ship with
//! the crate:
//! - [`RecordingSurface`] records draw calls, for tests and headless hosts
//! - [`PixmapSurface`] rasterizes with tiny-skia and can write PNG files
//!
//! [`render_scene`] paints a whole frame back to front.

mod paint;
mod pixmap;
mod recording;

pub use paint::{render_scene, RenderContext};
pub use pixmap::PixmapSurface;
pub use recording::{DrawCommand, RecordingSurface};

/// RGBA colour; alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').filter(|d| d.is_ascii())?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => None,
        }
    }

    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
}

/// Line style for strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// Dash pattern in pixels; empty for a solid line.
    pub dash: Vec<f64>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: Vec::new(),
        }
    }

    pub fn dashed(color: Color, width: f64, dash: &[f64]) -> Self {
        Self {
            color,
            width,
            dash: dash.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size_px: f64,
    pub bold: bool,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(color: Color, size_px: f64) -> Self {
        Self {
            color,
            size_px,
            bold: false,
            align: TextAlign::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

/// Canvas-like drawing target in screen pixels.
pub trait DrawingSurface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &StrokeStyle);
    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color);
    /// Polyline through `points`, closed back to the first point if `closed`.
    fn stroke_path(&mut self, points: &[(f64, f64)], closed: bool, style: &StrokeStyle);
    /// Circular arc from `start` to `end` radians, clockwise on screen.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64, style: &StrokeStyle);
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color);
    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);
    /// Push the current transform.
    fn save(&mut self);
    /// Pop the last saved transform.
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, radians: f64);
}
