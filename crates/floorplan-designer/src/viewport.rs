//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and world
//! coordinates (feet). Screen and world y both grow downward; the world
//! origin sits at the pan offset and one foot spans `scale * zoom` pixels.

use std::fmt;

use floorplan_settings::ViewSettings;

use crate::model::Point;

/// Camera state: pan offset, scale, zoom and canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    offset_x: f64,
    offset_y: f64,
    scale: f64,
    zoom: f64,
    canvas_width: f64,
    canvas_height: f64,
    min_zoom: f64,
    max_zoom: f64,
    min_scale: f64,
    max_scale: f64,
    zoom_step: f64,
}

impl Viewport {
    /// Creates a viewport with default camera settings.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        let mut vp = Self::from_settings(&ViewSettings::default());
        vp.set_canvas_size(canvas_width, canvas_height);
        vp
    }

    /// Creates a viewport from configured defaults and limits.
    pub fn from_settings(settings: &ViewSettings) -> Self {
        Self {
            offset_x: settings.offset_x_px,
            offset_y: settings.offset_y_px,
            scale: settings.scale_px_per_ft,
            zoom: 1.0,
            canvas_width: settings.canvas_width_px,
            canvas_height: settings.canvas_height_px,
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            min_scale: settings.min_scale_px_per_ft,
            max_scale: settings.max_scale_px_per_ft,
            zoom_step: settings.zoom_step,
        }
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the host resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom multiplier (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom, clamped to the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
    }

    /// Zooms in by the keyboard step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.zoom_step);
    }

    /// Zooms out by the keyboard step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / self.zoom_step);
    }

    /// Pixels per foot at zoom 1.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamped to the configured limits.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = scale.clamp(self.min_scale, self.max_scale);
        }
    }

    /// Effective pixels per foot.
    pub fn pixels_per_foot(&self) -> f64 {
        self.scale * self.zoom
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Sets the pan offset.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Pans by a delta in pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Converts pixel coordinates to world coordinates.
    ///
    /// ```text
    /// world_x = (pixel_x - offset_x) / (scale * zoom)
    /// world_y = (pixel_y - offset_y) / (scale * zoom)
    /// ```
    pub fn screen_to_world(&self, sx: f64, sy: f64) -> Point {
        let ppf = self.pixels_per_foot();
        Point::new((sx - self.offset_x) / ppf, (sy - self.offset_y) / ppf)
    }

    /// Converts world coordinates to pixel coordinates.
    pub fn world_to_screen(&self, x_ft: f64, y_ft: f64) -> (f64, f64) {
        let ppf = self.pixels_per_foot();
        (x_ft * ppf + self.offset_x, y_ft * ppf + self.offset_y)
    }

    /// Converts a world length to pixels.
    pub fn length_to_screen(&self, len_ft: f64) -> f64 {
        len_ft * self.pixels_per_foot()
    }

    /// Multiplies the zoom by `factor`, keeping the world point under
    /// (`sx`, `sy`) fixed on screen. Returns false when the zoom was already
    /// at the limit.
    pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) -> bool {
        let old = self.zoom;
        self.set_zoom(old * factor);
        if self.zoom == old {
            return false;
        }
        let ratio = self.zoom / old;
        self.offset_x = sx - (sx - self.offset_x) * ratio;
        self.offset_y = sy - (sy - self.offset_y) * ratio;
        true
    }

    /// Fits a content box (feet) into a viewport (pixels) with padding.
    ///
    /// The zoom is the largest that fits both axes, capped at `max_zoom`, and
    /// the content origin is placed at (`padding`, `padding`). Non-positive
    /// content or available space leaves the viewport untouched and returns
    /// false.
    pub fn fit_to_bounds(
        &mut self,
        content_w_ft: f64,
        content_h_ft: f64,
        viewport_w_px: f64,
        viewport_h_px: f64,
        padding_px: f64,
        max_zoom: f64,
    ) -> bool {
        let avail_w = viewport_w_px - 2.0 * padding_px;
        let avail_h = viewport_h_px - 2.0 * padding_px;
        if content_w_ft <= 0.0 || content_h_ft <= 0.0 || avail_w <= 0.0 || avail_h <= 0.0 {
            return false;
        }

        let zoom_x = avail_w / (content_w_ft * self.scale);
        let zoom_y = avail_h / (content_h_ft * self.scale);
        let zoom = zoom_x.min(zoom_y).min(max_zoom);
        if !zoom.is_finite() || zoom <= 0.0 {
            return false;
        }

        self.zoom = zoom;
        self.offset_x = padding_px;
        self.offset_y = padding_px;
        true
    }

    /// Resets zoom to 1 and the offset to `(x, y)`.
    pub fn reset(&mut self, x: f64, y: f64) {
        self.zoom = 1.0;
        self.set_offset(x, y);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_settings(&ViewSettings::default())
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport(zoom: {:.0}%, scale: {:.1} px/ft, offset: ({:.1}, {:.1}))",
            self.zoom * 100.0,
            self.scale,
            self.offset_x,
            self.offset_y
        )
    }
}
