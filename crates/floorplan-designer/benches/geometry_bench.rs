use criterion::{black_box, criterion_group, criterion_main, Criterion};

use floorplan_designer::geometry::{distance_to_segment, point_in_polygon, polygon_area};
use floorplan_designer::model::{Element, Room, RoomType};
use floorplan_designer::scene::{HitTolerances, Scene};
use floorplan_designer::Point;

/// Regular polygon with `n` vertices.
fn polygon(n: usize, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = i as f64 / n as f64 * std::f64::consts::TAU;
            Point::new(radius * a.cos(), radius * a.sin())
        })
        .collect()
}

fn bench_kernel(c: &mut Criterion) {
    let poly = polygon(64, 20.0);

    c.bench_function("polygon_area_64", |b| {
        b.iter(|| polygon_area(black_box(&poly)))
    });
    c.bench_function("point_in_polygon_64", |b| {
        b.iter(|| point_in_polygon(black_box(Point::new(3.0, 4.0)), black_box(&poly)))
    });
    c.bench_function("distance_to_segment", |b| {
        b.iter(|| {
            distance_to_segment(
                black_box(Point::new(3.0, 4.0)),
                black_box(Point::new(0.0, 0.0)),
                black_box(Point::new(10.0, 0.0)),
            )
        })
    });
}

fn bench_hit_test(c: &mut Criterion) {
    let mut scene = Scene::default();
    for i in 0..200 {
        let x = (i % 20) as f64 * 5.0;
        let y = (i / 20) as f64 * 5.0;
        let square = vec![
            Point::new(x, y),
            Point::new(x + 4.0, y),
            Point::new(x + 4.0, y + 4.0),
            Point::new(x, y + 4.0),
        ];
        scene.add_element(Element::Room(Room::new(
            format!("Room {}", i + 1),
            RoomType::Other,
            square,
        )));
    }
    let tol = HitTolerances::default();

    c.bench_function("hit_test_200_rooms", |b| {
        b.iter(|| scene.hit_test(black_box(Point::new(2.0, 2.0)), &tol))
    });
}

criterion_group!(benches, bench_kernel, bench_hit_test);
criterion_main!(benches);
