use super::*;
use approx::assert_relative_eq;
use glam::Vec2;

fn square(min: f32, max: f32) -> Shape {
    Shape::polygon(vec![
        Vec2::new(min, min),
        Vec2::new(max, min),
        Vec2::new(max, max),
        Vec2::new(min, max),
    ])
    .expect("Polygon mit Punkten")
}

#[test]
fn test_circle_contains_uses_radius_inclusive() {
    let shape = Shape::circle(Vec2::new(10.0, 10.0), 5.0);
    assert!(shape.contains(Vec2::new(10.0, 10.0)));
    assert!(shape.contains(Vec2::new(15.0, 10.0)));
    assert!(!shape.contains(Vec2::new(15.1, 10.0)));
}

#[test]
fn test_ellipse_contains_normalized() {
    let shape = Shape::ellipse(Vec2::new(50.0, 50.0), 40.0, 10.0);
    assert!(shape.contains(Vec2::new(69.0, 50.0)));
    assert!(!shape.contains(Vec2::new(50.0, 56.0)));
    assert!(shape.contains(Vec2::new(50.0, 54.0)));
}

#[test]
fn test_ellipse_radius_is_half_of_larger_extent() {
    let Shape::Ellipse { radius, .. } = Shape::ellipse(Vec2::ZERO, 12.0, 30.0) else {
        panic!("Ellipse erwartet");
    };
    assert_relative_eq!(radius, 15.0);
}

#[test]
fn test_degenerate_ellipse_never_contains() {
    let shape = Shape::ellipse(Vec2::new(5.0, 5.0), 0.0, 10.0);
    assert!(!shape.contains(Vec2::new(5.0, 5.0)));
}

#[test]
fn test_polygon_ray_casting() {
    let shape = square(0.0, 10.0);
    assert!(shape.contains(Vec2::new(5.0, 5.0)));
    assert!(!shape.contains(Vec2::new(11.0, 5.0)));
    assert!(!shape.contains(Vec2::new(-0.5, 5.0)));

    // Konkaves L: Aussparung oben rechts
    let l_shape = Shape::polygon(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(4.0, 4.0),
        Vec2::new(10.0, 4.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ])
    .expect("Polygon");
    assert!(l_shape.contains(Vec2::new(2.0, 2.0)));
    assert!(!l_shape.contains(Vec2::new(7.0, 2.0)));
    assert!(l_shape.contains(Vec2::new(7.0, 7.0)));
}

#[test]
fn test_single_point_polygon_contains_nothing() {
    let shape = Shape::polygon(vec![Vec2::new(3.0, 3.0)]).expect("Polygon");
    assert!(!shape.contains(Vec2::new(3.0, 3.0)));
    assert!(Shape::polygon(Vec::new()).is_none());
}

#[test]
fn test_hit_test_prefers_newest_shape() {
    let mut set = AnnotationSet::new();
    set.push(Annotation::new(Shape::circle(Vec2::new(10.0, 10.0), 20.0)));
    set.push(Annotation::new(Shape::circle(Vec2::new(15.0, 10.0), 20.0)));
    set.push(Annotation::new(Shape::circle(Vec2::new(200.0, 200.0), 5.0)));

    assert_eq!(set.hit_test(Vec2::new(12.0, 10.0)), Some(1));
    assert_eq!(set.hit_test(Vec2::new(-8.0, 10.0)), Some(0));
    assert_eq!(set.hit_test(Vec2::new(100.0, 100.0)), None);
}

#[test]
fn test_hit_test_is_idempotent() {
    let mut set = AnnotationSet::new();
    set.push(Annotation::new(Shape::ellipse(Vec2::new(30.0, 30.0), 20.0, 10.0)));
    set.push(Annotation::new(square(25.0, 35.0)));

    let point = Vec2::new(31.0, 31.0);
    let first = set.hit_test(point);
    let second = set.hit_test(point);
    assert_eq!(first, second);
    assert_eq!(first, Some(1));
}

#[test]
fn test_next_sequence_number_fills_gaps() {
    let mut set = AnnotationSet::new();
    assert_eq!(set.next_sequence_number(), 1);

    set.push(Annotation::new(Shape::circle(Vec2::ZERO, 1.0)).with_number(1));
    set.push(
        Annotation::new(Shape::circle(Vec2::ONE, 1.0))
            .with_number(2)
            .with_number(4),
    );
    assert_eq!(set.next_sequence_number(), 3);

    set.remove(0);
    assert_eq!(set.next_sequence_number(), 1);
}

#[test]
fn test_label_text_joins_sorted_numbers() {
    let annotation = Annotation::new(Shape::circle(Vec2::ZERO, 1.0))
        .with_number(3)
        .with_number(1);
    assert_eq!(annotation.label_text().as_deref(), Some("1, 3"));
    assert!(Annotation::new(Shape::circle(Vec2::ZERO, 1.0))
        .label_text()
        .is_none());
}

#[test]
fn test_color_for_tap_count() {
    assert_eq!(HoldColor::for_tap_count(1), HoldColor::Red);
    assert_eq!(HoldColor::for_tap_count(2), HoldColor::Green);
    assert_eq!(HoldColor::for_tap_count(3), HoldColor::Blue);
    assert_eq!(HoldColor::for_tap_count(7), HoldColor::Blue);
}

#[test]
fn test_polygon_bounds_and_center() {
    let shape = square(2.0, 8.0);
    let (min, max) = shape.bounds();
    assert_eq!(min, Vec2::new(2.0, 2.0));
    assert_eq!(max, Vec2::new(8.0, 8.0));
    assert_eq!(shape.center(), Vec2::new(5.0, 5.0));
    assert_relative_eq!(shape.label_width(), 6.0);
}
