//! Raster backend on tiny-skia.
//!
//! Text is not rasterized; labels only show up in hosts that provide their
//! own font stack.

use std::path::Path;

use anyhow::{anyhow, Context};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform};

use super::{Color, DrawingSurface, StrokeStyle, TextStyle};

pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
    stack: Vec<Transform>,
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    paint.set_color_rgba8(color.r, color.g, color.b, alpha);
    paint.anti_alias = true;
    paint
}

fn stroke_for(style: &StrokeStyle) -> Stroke {
    let mut stroke = Stroke {
        width: style.width as f32,
        ..Default::default()
    };
    if !style.dash.is_empty() {
        stroke.dash = StrokeDash::new(style.dash.iter().map(|d| *d as f32).collect(), 0.0);
    }
    stroke
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> anyhow::Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| anyhow!("invalid pixmap size {}x{}", width, height))?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            stack: Vec::new(),
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Un-premultiplied RGBA at a pixel, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    pub fn encode_png(&self) -> anyhow::Result<Vec<u8>> {
        self.pixmap.encode_png().context("Failed to encode PNG")
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote preview to {}", path.display());
        Ok(())
    }

    fn fill(&mut self, path: &tiny_skia::Path, color: Color) {
        self.pixmap
            .fill_path(path, &paint_for(color), FillRule::Winding, self.transform, None);
    }

    fn stroke(&mut self, path: &tiny_skia::Path, style: &StrokeStyle) {
        self.pixmap
            .stroke_path(path, &paint_for(style.color), &stroke_for(style), self.transform, None);
    }
}

fn polyline(points: &[(f64, f64)], closed: bool) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.0 as f32, first.1 as f32);
    for (x, y) in rest {
        pb.line_to(*x as f32, *y as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

impl DrawingSurface for PixmapSurface {
    fn size(&self) -> (f64, f64) {
        (self.pixmap.width() as f64, self.pixmap.height() as f64)
    }

    fn clear(&mut self, color: Color) {
        let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, alpha));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let Some(rect) = Rect::from_ltrb(
            x.min(x + w) as f32,
            y.min(y + h) as f32,
            x.max(x + w) as f32,
            y.max(y + h) as f32,
        ) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        self.fill(&path, color);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &StrokeStyle) {
        let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
        if let Some(path) = polyline(&corners, true) {
            self.stroke(&path, style);
        }
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
        if points.len() < 3 {
            return;
        }
        if let Some(path) = polyline(points, true) {
            self.fill(&path, color);
        }
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], closed: bool, style: &StrokeStyle) {
        if let Some(path) = polyline(points, closed) {
            self.stroke(&path, style);
        }
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64, style: &StrokeStyle) {
        if radius <= 0.0 {
            return;
        }
        let sweep = end - start;
        let segments = ((sweep.abs() * radius / 4.0).ceil() as usize).clamp(8, 256);
        let points: Vec<(f64, f64)> = (0..=segments)
            .map(|i| {
                let a = start + sweep * i as f64 / segments as f64;
                (cx + radius * a.cos(), cy + radius * a.sin())
            })
            .collect();
        self.stroke_path(&points, false, style);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        if let Some(path) = PathBuilder::from_circle(cx as f32, cy as f32, radius as f32) {
            self.fill(&path, color);
        }
    }

    fn text(&mut self, text: &str, _x: f64, _y: f64, _style: &TextStyle) {
        tracing::trace!("Skipping text {:?} on raster surface", text);
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.pre_translate(dx as f32, dy as f32);
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self
            .transform
            .pre_concat(Transform::from_rotate(radians.to_degrees() as f32));
    }
}
