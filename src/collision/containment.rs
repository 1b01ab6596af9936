//! "Fully encloses" queries.
//!
//! Everything here is strict: a feature lying on the container's boundary is
//! outside. The one exception is a point tested against a circle, which
//! counts the circle's edge as inside.

use crate::math::{vec2::Vec2, EPSILON};
use crate::shapes::{Collider, WorldShape};

pub fn contains_point(collider: &Collider, point: Vec2) -> bool {
    match &collider.world_geometry().shape {
        WorldShape::Circle { center, radius } => center.distance_squared(point) <= radius * radius,
        WorldShape::Polygon { vertices, normals } => polygon_contains_point(vertices, normals, point),
    }
}

/// True when `inner` lies strictly inside `outer`. A collider never contains itself.
pub fn contains_collider(outer: &Collider, inner: &Collider) -> bool {
    if outer.id() == inner.id() {
        return false;
    }
    let outer_geometry = outer.world_geometry();
    let inner_geometry = inner.world_geometry();
    match (&outer_geometry.shape, &inner_geometry.shape) {
        (
            WorldShape::Circle { center: outer_center, radius: outer_radius },
            WorldShape::Circle { center: inner_center, radius: inner_radius },
        ) => outer_radius - (inner_radius + outer_center.distance(*inner_center)) > EPSILON,
        (WorldShape::Circle { center, radius }, WorldShape::Polygon { vertices, .. }) => vertices
            .iter()
            .all(|vertex| radius - center.distance(*vertex) > EPSILON),
        (WorldShape::Polygon { vertices, normals }, WorldShape::Circle { center, radius }) => {
            polygon_contains_point(vertices, normals, *center)
                && vertices
                    .iter()
                    .zip(normals)
                    .all(|(vertex, normal)| edge_depth(*vertex, *normal, *center) - radius > EPSILON)
        }
        (
            WorldShape::Polygon { vertices, normals },
            WorldShape::Polygon { vertices: inner_vertices, .. },
        ) => inner_vertices
            .iter()
            .all(|point| polygon_contains_point(vertices, normals, *point)),
    }
}

/// Strictly inside every edge's inward half-plane.
fn polygon_contains_point(vertices: &[Vec2], normals: &[Vec2], point: Vec2) -> bool {
    vertices
        .iter()
        .zip(normals)
        .all(|(vertex, normal)| edge_depth(*vertex, *normal, point) > EPSILON)
}

/// Distance of `point` behind the edge through `vertex` with outward `normal`.
fn edge_depth(vertex: Vec2, normal: Vec2, point: Vec2) -> f64 {
    -(point - vertex).dot(normal)
}
