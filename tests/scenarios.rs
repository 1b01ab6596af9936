use approx::assert_abs_diff_eq;
use collision2d::{Circle, Collider, LineSegment, Polygon, RadiusScaling, Transform, Vec2};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn circle_at(x: f64, y: f64, radius: f64) -> Collider {
    Collider::circle(
        Circle::new(Vec2::ZERO, radius, RadiusScaling::Average).unwrap(),
        Transform::from_position(Vec2::new(x, y)),
    )
}

fn rect_at(x: f64, y: f64, width: f64, height: f64) -> Collider {
    Collider::polygon(
        Polygon::rectangle(width, height).unwrap(),
        Transform::from_position(Vec2::new(x, y)),
    )
}

fn move_by(collider: &mut Collider, delta: Vec2) {
    let moved = collider.transform().translated(delta);
    collider.transform_changed(moved);
}

#[test]
fn concentric_circles_collide_and_resolve() {
    init_logging();
    let mut big = circle_at(0.0, 0.0, 1.0);
    let mut small = circle_at(0.0, 0.0, 0.5);

    let collision = big.collides_with(&small).expect("concentric circles collide");
    assert!(collision.first_contains_second);
    assert!(!collision.second_contains_first);
    let mtv_big = collision.minimum_translation_vector;
    assert_abs_diff_eq!(mtv_big.magnitude(), 1.5, epsilon = 1e-9);

    let mtv_small = small
        .collides_with(&big)
        .expect("symmetric")
        .minimum_translation_vector;
    assert_eq!(mtv_small, -mtv_big);

    move_by(&mut big, mtv_big);
    assert!(big.collides_with(&small).is_none());

    move_by(&mut big, -mtv_big);
    move_by(&mut small, mtv_small);
    assert!(small.collides_with(&big).is_none());
    assert!(big.collides_with(&small).is_none());
}

#[test]
fn offset_circles_have_symmetric_mtv() {
    init_logging();
    let a = circle_at(0.5, 0.0, 1.0);
    let b = circle_at(0.0, 0.0, 1.0);
    let ab = a.collides_with(&b).expect("overlapping circles");
    let ba = b.collides_with(&a).expect("overlapping circles");
    assert_abs_diff_eq!(ab.penetration_depth(), ba.penetration_depth(), epsilon = 1e-4);
    assert_abs_diff_eq!(ab.minimum_translation_vector.x, 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(ba.minimum_translation_vector.x, -1.5, epsilon = 1e-9);
    assert!(!ab.first_contains_second && !ab.second_contains_first);
}

#[test]
fn distant_circles_do_not_collide() {
    let a = circle_at(3.0, 3.0, 1.0);
    let b = circle_at(0.0, 0.0, 1.0);
    assert!(a.collides_with(&b).is_none());
    assert!(b.collides_with(&a).is_none());
}

#[test]
fn touching_circles_do_not_collide() {
    let a = circle_at(2.0, 0.0, 1.0);
    let b = circle_at(0.0, 0.0, 1.0);
    assert!(a.collides_with(&b).is_none());
    assert!(b.collides_with(&a).is_none());
}

#[test]
fn ray_hits_rectangle_face() {
    init_logging();
    let rect = rect_at(0.0, 0.0, 2.0, 2.0);
    let ray = LineSegment::new(Vec2::new(0.0, -2.0), Vec2::new(0.0, 1.0), 5.0);
    let hit = rect.is_hit_by(&ray).expect("ray should hit");
    assert_abs_diff_eq!(hit.contact_point.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(hit.contact_point.y, -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(hit.normal.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(hit.normal.y, -1.0, epsilon = 1e-9);
}

#[test]
fn rectangle_contains_smaller_rectangle() {
    let outer = rect_at(0.0, 0.0, 1.0, 1.0);
    let inner = rect_at(0.0, 0.0, 0.5, 0.5);
    let collision = outer.collides_with(&inner).expect("nested rectangles collide");
    assert!(collision.first_contains_second);
    assert!(!collision.second_contains_first);
    assert!(outer.contains_collider(&inner));
}

#[test]
fn same_quad_collides_without_containment() {
    let a = rect_at(0.0, 0.0, 1.0, 1.0);
    let b = rect_at(0.0, 0.0, 1.0, 1.0);
    assert!(!a.contains_collider(&b));
    assert!(!b.contains_collider(&a));
    let collision = a.collides_with(&b).expect("identical rectangles overlap");
    assert!(!collision.first_contains_second);
    assert!(!collision.second_contains_first);
    assert_abs_diff_eq!(collision.penetration_depth(), 1.0, epsilon = 1e-9);
}

#[test]
fn rectangles_sharing_an_edge_do_not_collide() {
    let a = rect_at(0.0, 0.0, 1.0, 1.0);
    let b = rect_at(1.0, 0.3, 1.0, 1.0);
    assert!(a.collides_with(&b).is_none());
    assert!(b.collides_with(&a).is_none());
}

#[test]
fn circle_point_containment_includes_edge() {
    let circle = circle_at(0.0, 0.0, 1.0);
    assert!(circle.contains_point(Vec2::new(0.0, 0.5)));
    assert!(circle.contains_point(Vec2::new(0.0, 1.0)));
}

#[test]
fn queries_see_transform_changes() {
    let mut moving = rect_at(5.0, 0.0, 1.0, 1.0);
    let fixed = circle_at(0.0, 0.0, 1.0);
    assert!(moving.collides_with(&fixed).is_none());
    assert!(!moving.contains_point(Vec2::ZERO));

    moving.transform_changed(Transform::from_position(Vec2::new(0.5, 0.0)));
    assert!(moving.collides_with(&fixed).is_some());
    assert!(moving.contains_point(Vec2::new(0.5, 0.0)));
    assert!(moving.bounding_area().contains_point(Vec2::new(0.9, 0.4)));
}

#[test]
fn rotated_rectangles_resolve_in_one_step() {
    init_logging();
    let mut a = Collider::polygon(
        Polygon::rectangle(2.0, 1.0).unwrap(),
        Transform::new(Vec2::new(0.3, 0.2), 0.6),
    );
    let b = Collider::polygon(
        Polygon::rectangle(1.5, 1.5).unwrap(),
        Transform::new(Vec2::new(1.0, 0.5), -0.3).with_scale(Vec2::new(1.0, 2.0)),
    );
    let mtv = a
        .collides_with(&b)
        .expect("rectangles overlap")
        .minimum_translation_vector;
    move_by(&mut a, mtv);
    assert!(a.collides_with(&b).is_none());
    assert!(b.collides_with(&a).is_none());
}

#[test]
fn resized_circle_is_seen_by_collision() {
    let mut circle = circle_at(0.0, 0.0, 0.5);
    let rect = rect_at(1.0, 0.0, 1.0, 1.0);
    // Touching the rectangle's left edge
    assert!(circle.collides_with(&rect).is_none());
    circle.set_radius(2.0).unwrap();
    let collision = circle.collides_with(&rect).expect("grown circle reaches the rectangle");
    assert!(collision.first_contains_second);
}
