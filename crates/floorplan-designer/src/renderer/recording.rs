use super::{Color, DrawingSurface, StrokeStyle, TextStyle};

/// One recorded call on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    StrokeRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        style: StrokeStyle,
    },
    FillPolygon {
        points: Vec<(f64, f64)>,
        color: Color,
    },
    StrokePath {
        points: Vec<(f64, f64)>,
        closed: bool,
        style: StrokeStyle,
    },
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
        style: StrokeStyle,
    },
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
}

/// Surface that only records what was drawn.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every text string drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Number of filled polygons in the given colour.
    pub fn polygons_filled_with(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPolygon { color: fill, .. } if *fill == color))
            .count()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokeRect {
            x,
            y,
            w,
            h,
            style: style.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], closed: bool, style: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            closed,
            style: style.clone(),
        });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start,
            end,
            style: style.clone(),
        });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.commands
            .push(DrawCommand::FillCircle { cx, cy, radius, color });
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.commands.push(DrawCommand::Rotate(radians));
    }
}
