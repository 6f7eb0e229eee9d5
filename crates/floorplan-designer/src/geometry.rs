//! Geometry kernel.
//!
//! Pure functions over world-space points (feet). Nothing here touches the
//! scene or the viewport, so every function is deterministic and cheap to
//! test in isolation.

use crate::model::Point;

/// Axis-aligned bounding box in feet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Normalized box spanned by two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x_ft.min(b.x_ft),
            min_y: a.y_ft.min(b.y_ft),
            max_x: a.x_ft.max(b.x_ft),
            max_y: a.y_ft.max(b.y_ft),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x_ft >= self.min_x && p.x_ft <= self.max_x && p.y_ft >= self.min_y && p.y_ft <= self.max_y
    }
}

/// Shoelace area; 0 for fewer than three vertices.
pub fn polygon_area(polygon: &[Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let n = polygon.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = polygon[i];
            let b = polygon[(i + 1) % n];
            a.x_ft * b.y_ft - b.x_ft * a.y_ft
        })
        .sum();
    twice.abs() / 2.0
}

/// Even-odd ray casting. Points exactly on an edge may land either way.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let (x, y) = (point.x_ft, point.y_ft);
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].x_ft, polygon[i].y_ft);
        let (xj, yj) = (polygon[j].x_ft, polygon[j].y_ft);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Bounding box of a vertex list; all zeros when empty.
pub fn polygon_bounds(polygon: &[Point]) -> Bounds {
    let Some(first) = polygon.first() else {
        return Bounds::default();
    };
    polygon.iter().skip(1).fold(
        Bounds::new(first.x_ft, first.y_ft, first.x_ft, first.y_ft),
        |b, p| Bounds {
            min_x: b.min_x.min(p.x_ft),
            min_y: b.min_y.min(p.y_ft),
            max_x: b.max_x.max(p.x_ft),
            max_y: b.max_y.max(p.y_ft),
        },
    )
}

/// Centre of the bounding box, used as the label anchor.
pub fn polygon_centroid_of_bounds(polygon: &[Point]) -> Point {
    polygon_bounds(polygon).center()
}

/// Euclidean distance.
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2.x_ft - p1.x_ft).hypot(p2.y_ft - p1.y_ft)
}

/// Parameter of the projection of `point` onto `a→b`, clamped to [0, 1].
/// `None` for a degenerate segment.
fn projection_t(point: Point, a: Point, b: Point) -> Option<f64> {
    let dx = b.x_ft - a.x_ft;
    let dy = b.y_ft - a.y_ft;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return None;
    }
    let t = ((point.x_ft - a.x_ft) * dx + (point.y_ft - a.y_ft) * dy) / len_sq;
    Some(t.clamp(0.0, 1.0))
}

/// Closest point of segment `a→b` to `point`; `a` when the segment is degenerate.
pub fn nearest_point_on_segment(point: Point, a: Point, b: Point) -> Point {
    match projection_t(point, a, b) {
        Some(t) => Point::new(a.x_ft + t * (b.x_ft - a.x_ft), a.y_ft + t * (b.y_ft - a.y_ft)),
        None => a,
    }
}

/// Distance from `point` to segment `a→b`.
pub fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    distance(point, nearest_point_on_segment(point, a, b))
}

/// Direction from `p1` to `p2` in degrees, in (-180, 180].
pub fn angle_between_points(p1: Point, p2: Point) -> f64 {
    (p2.y_ft - p1.y_ft).atan2(p2.x_ft - p1.x_ft).to_degrees()
}

/// Round an angle to the nearest multiple of 45 degrees.
pub fn snap_angle(angle_deg: f64) -> f64 {
    (angle_deg / 45.0).round() * 45.0
}

/// True when the four vertices form an axis-aligned rectangle.
pub fn is_axis_aligned_rectangle(polygon: &[Point]) -> bool {
    if polygon.len() != 4 {
        return false;
    }
    let b = polygon_bounds(polygon);
    if b.width() <= 0.0 || b.height() <= 0.0 {
        return false;
    }
    let on_corner = |p: &Point| {
        (p.x_ft == b.min_x || p.x_ft == b.max_x) && (p.y_ft == b.min_y || p.y_ft == b.max_y)
    };
    if !polygon.iter().all(on_corner) {
        return false;
    }
    // every corner used exactly once
    let corners = [
        Point::new(b.min_x, b.min_y),
        Point::new(b.max_x, b.min_y),
        Point::new(b.max_x, b.max_y),
        Point::new(b.min_x, b.max_y),
    ];
    corners.iter().all(|c| polygon.iter().filter(|p| *p == c).count() == 1)
}
