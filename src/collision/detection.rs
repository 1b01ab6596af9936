// Separating Axis Theorem narrow phase for every shape pair.

use std::cmp::Ordering;

use super::containment;
use super::manifold::Collision;
use crate::math::{vec2::Vec2, EPSILON};
use crate::shapes::{Collider, ShapeKind, WorldShape};

/// Tests two colliders for overlap.
///
/// Pairs are always evaluated in one canonical order (circles before
/// polygons, then by id) and reversed afterwards, so swapping the arguments
/// swaps the roles and negates the translation exactly.
pub fn collides_with<'a>(first: &'a Collider, second: &'a Collider) -> Option<Collision<'a>> {
    match evaluation_order(first, second) {
        Ordering::Greater => collides_in_order(second, first).map(Collision::reversed),
        Ordering::Less | Ordering::Equal => collides_in_order(first, second),
    }
}

fn evaluation_order(a: &Collider, b: &Collider) -> Ordering {
    let rank = |collider: &Collider| match collider.kind() {
        ShapeKind::Circle => 0,
        ShapeKind::Polygon => 1,
    };
    rank(a).cmp(&rank(b)).then_with(|| a.id().cmp(&b.id()))
}

fn collides_in_order<'a>(first: &'a Collider, second: &'a Collider) -> Option<Collision<'a>> {
    let minimum_translation_vector = {
        let a = first.world_geometry();
        let b = second.world_geometry();
        if !a.bounds.overlaps(&b.bounds) {
            return None;
        }
        match (&a.shape, &b.shape) {
            (
                WorldShape::Circle { center: center_a, radius: radius_a },
                WorldShape::Circle { center: center_b, radius: radius_b },
            ) => check_circle_circle(*center_a, *radius_a, *center_b, *radius_b),
            (WorldShape::Circle { center, radius }, WorldShape::Polygon { vertices, normals }) => {
                check_circle_polygon(*center, *radius, vertices, normals)
            }
            (
                WorldShape::Polygon { vertices: vertices_a, normals: normals_a },
                WorldShape::Polygon { vertices: vertices_b, normals: normals_b },
            ) => check_polygon_polygon(vertices_a, normals_a, vertices_b, normals_b),
            (WorldShape::Polygon { .. }, WorldShape::Circle { .. }) => {
                unreachable!("circle-polygon pairs are evaluated circle first")
            }
        }
    }?;

    Some(Collision {
        first,
        second,
        minimum_translation_vector,
        first_contains_second: containment::contains_collider(first, second),
        second_contains_first: containment::contains_collider(second, first),
    })
}

/// Checks for overlap between two circles.
/// Returns the translation that pushes circle A out of circle B.
pub fn check_circle_circle(center_a: Vec2, radius_a: f64, center_b: Vec2, radius_b: f64) -> Option<Vec2> {
    let dist_vec = center_b - center_a;
    let radii_sum = radius_a + radius_b;
    let overlap = radii_sum - dist_vec.magnitude();

    // Touching circles do not collide.
    if overlap <= EPSILON {
        return None;
    }

    let normal = dist_vec.try_normalize().unwrap_or_else(|| {
        log::trace!("coincident circle centers at {center_a:?}, using fallback axis");
        Vec2::UP
    });
    Some(-normal * overlap)
}

/// Checks for overlap between a circle and a convex polygon using SAT.
/// Returns the translation that pushes the circle out of the polygon.
pub fn check_circle_polygon(center: Vec2, radius: f64, vertices: &[Vec2], normals: &[Vec2]) -> Option<Vec2> {
    let mut axes = usable_axes(normals);

    // Axis from the circle center to the closest polygon vertex
    let closest_vertex = vertices
        .iter()
        .copied()
        .min_by(|a, b| a.distance_squared(center).total_cmp(&b.distance_squared(center)));
    if let Some(axis) = closest_vertex.and_then(|vertex| (vertex - center).try_normalize()) {
        axes.push(axis);
    }

    minimum_translation(
        &axes,
        |axis| project_circle(center, radius, axis),
        |axis| project_vertices(vertices, axis),
    )
}

/// Checks for overlap between two convex polygons using SAT.
/// Returns the translation that pushes polygon A out of polygon B.
pub fn check_polygon_polygon(
    vertices_a: &[Vec2],
    normals_a: &[Vec2],
    vertices_b: &[Vec2],
    normals_b: &[Vec2],
) -> Option<Vec2> {
    let mut axes: Vec<Vec2> = Vec::with_capacity(normals_a.len() + normals_b.len());
    for normal in usable_axes(normals_a).into_iter().chain(usable_axes(normals_b)) {
        // Parallel edges share a separating axis.
        if axes.iter().all(|axis| axis.cross(normal).abs() > EPSILON) {
            axes.push(normal);
        }
    }

    minimum_translation(
        &axes,
        |axis| project_vertices(vertices_a, axis),
        |axis| project_vertices(vertices_b, axis),
    )
}

/// Edge normals with a direction (zero-length edges give none).
fn usable_axes(normals: &[Vec2]) -> Vec<Vec2> {
    normals
        .iter()
        .copied()
        .filter(|normal| normal.magnitude_squared() > 0.5)
        .collect()
}

/// Runs SAT over `axes`, stopping at the first separating one.
/// Ties between axes keep the earliest.
fn minimum_translation(
    axes: &[Vec2],
    project_a: impl Fn(Vec2) -> (f64, f64),
    project_b: impl Fn(Vec2) -> (f64, f64),
) -> Option<Vec2> {
    let mut best: Option<(Vec2, f64)> = None;
    for &axis in axes {
        let push = separating_push(project_a(axis), project_b(axis))?;
        if best.map_or(true, |(_, best_push)| push.abs() < best_push.abs()) {
            best = Some((axis, push));
        }
    }
    best.map(|(axis, push)| axis * push)
}

/// Signed distance along the axis that moves interval A clear of interval B,
/// or `None` if the intervals are already apart (or only touch).
fn separating_push((min_a, max_a): (f64, f64), (min_b, max_b): (f64, f64)) -> Option<f64> {
    let push_back = max_a - min_b;
    let push_forward = max_b - min_a;
    if push_back <= EPSILON || push_forward <= EPSILON {
        return None;
    }
    // Smaller side wins; this is the side A's interval center lies on.
    if push_back < push_forward {
        Some(-push_back)
    } else {
        Some(push_forward)
    }
}

fn project_circle(center: Vec2, radius: f64, axis: Vec2) -> (f64, f64) {
    let center_proj = center.dot(axis);
    (center_proj - radius, center_proj + radius)
}

fn project_vertices(vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
    vertices.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min_proj, max_proj), vertex| {
        let projection = vertex.dot(axis);
        (min_proj.min(projection), max_proj.max(projection))
    })
}
