//! Viewport controls: zoom, pan, scale and fit.

use floorplan_core::event_bus::EditorEvent;

use super::EditorSession;

impl EditorSession {
    /// Fit the whole plot into the canvas.
    pub fn fit_to_plot(&mut self) -> bool {
        let plot = &self.scene.plot;
        let view = &self.config.view;
        let (width, height) = (self.viewport.canvas_width(), self.viewport.canvas_height());
        let fitted = self.viewport.fit_to_bounds(
            plot.plot_length_ft,
            plot.plot_width_ft,
            width,
            height,
            view.fit_padding_px,
            view.fit_max_zoom,
        );
        if fitted {
            self.publish_view();
        }
        fitted
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.publish_view();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.publish_view();
    }

    /// Zoom by `factor` around a screen point.
    pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
        if self.viewport.zoom_at(sx, sy, factor) {
            self.publish_view();
        }
    }

    pub fn pan(&mut self, dx_px: f64, dy_px: f64) {
        self.viewport.pan(dx_px, dy_px);
    }

    /// Set the base scale (px per foot), clamped to the configured range.
    pub fn set_scale(&mut self, px_per_ft: f64) {
        let old = self.viewport.scale();
        self.viewport.set_scale(px_per_ft);
        if self.viewport.scale() != old {
            self.publish_view();
        }
    }

    pub fn resize_canvas(&mut self, width: f64, height: f64) {
        self.viewport.set_canvas_size(width, height);
    }

    fn publish_view(&self) {
        self.publish(EditorEvent::ViewChanged {
            zoom: self.viewport.zoom(),
            scale: self.viewport.scale(),
        });
    }
}
