use floorplan_designer::geometry::{
    distance, distance_to_segment, is_axis_aligned_rectangle, nearest_point_on_segment,
    point_in_polygon, polygon_area, polygon_bounds, polygon_centroid_of_bounds,
};
use floorplan_designer::model::Point;
use proptest::prelude::*;

fn unit_square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]
}

#[test]
fn test_unit_square_area() {
    assert_eq!(polygon_area(&unit_square()), 1.0);
}

#[test]
fn test_area_ignores_winding() {
    let mut square = unit_square();
    square.reverse();
    assert_eq!(polygon_area(&square), 1.0);
}

#[test]
fn test_l_shape_area() {
    let l_shape = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 4.0),
        Point::new(4.0, 4.0),
        Point::new(4.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    assert_eq!(polygon_area(&l_shape), 64.0);
    assert!(point_in_polygon(Point::new(2.0, 8.0), &l_shape));
    assert!(!point_in_polygon(Point::new(8.0, 8.0), &l_shape));
}

#[test]
fn test_degenerate_inputs() {
    let two = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    assert_eq!(polygon_area(&two), 0.0);
    assert!(!point_in_polygon(Point::new(0.5, 0.5), &two));

    let bounds = polygon_bounds(&[]);
    assert_eq!((bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y), (0.0, 0.0, 0.0, 0.0));
}

#[test]
fn test_segment_projection_clamps() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    assert_eq!(nearest_point_on_segment(Point::new(-5.0, 3.0), a, b), a);
    assert_eq!(nearest_point_on_segment(Point::new(4.0, 3.0), a, b), Point::new(4.0, 0.0));
    assert_eq!(distance_to_segment(Point::new(13.0, 4.0), a, b), 5.0);
}

#[test]
fn test_label_anchor_is_bounds_center() {
    let triangle = vec![Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(0.0, 4.0)];
    assert_eq!(polygon_centroid_of_bounds(&triangle), Point::new(3.0, 2.0));
}

#[test]
fn test_rectangle_detection() {
    assert!(is_axis_aligned_rectangle(&unit_square()));
    let rhombus = vec![
        Point::new(1.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(0.0, 1.0),
    ];
    assert!(!is_axis_aligned_rectangle(&rhombus));
}

fn coord() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

proptest! {
    #[test]
    fn degenerate_segment_is_point_distance(px in coord(), py in coord(), ax in coord(), ay in coord()) {
        let p = Point::new(px, py);
        let a = Point::new(ax, ay);
        prop_assert_eq!(distance_to_segment(p, a, a), distance(p, a));
    }

    #[test]
    fn rectangle_area_is_width_times_height(
        x in coord(), y in coord(), w in 0.1..200.0f64, h in 0.1..200.0f64
    ) {
        let rect = vec![
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ];
        let expected = (x + w - x) * (y + h - y);
        prop_assert!((polygon_area(&rect) - expected).abs() < 1e-6 * expected.max(1.0));
    }

    #[test]
    fn rectangle_center_is_inside(
        x in coord(), y in coord(), w in 0.1..200.0f64, h in 0.1..200.0f64
    ) {
        let rect = vec![
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ];
        prop_assert!(point_in_polygon(Point::new(x + w / 2.0, y + h / 2.0), &rect));
        prop_assert!(!point_in_polygon(Point::new(x + w + 1.0, y + h / 2.0), &rect));
    }
}
