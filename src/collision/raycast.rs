use crate::math::{vec2::Vec2, LineSegment, EPSILON};
use crate::shapes::{Collider, WorldShape};

/// Closest intersection of a ray with a collider.
#[derive(Debug, Clone, Copy)]
pub struct RaycastHit<'a> {
    pub collider: &'a Collider,
    pub contact_point: Vec2,
    /// Unit outward normal of the struck surface.
    pub normal: Vec2,
    /// Distance travelled along the ray before the hit.
    pub distance: f64,
}

/// Casts `ray` against `collider`, returning the closest hit within the ray's length.
pub fn raycast<'a>(collider: &'a Collider, ray: &LineSegment) -> Option<RaycastHit<'a>> {
    if !(ray.distance >= 0.0 && ray.distance.is_finite() && ray.origin.is_finite()) {
        log::trace!("ignoring malformed ray {ray:?}");
        return None;
    }
    let Some(direction) = ray.unit_direction() else {
        log::trace!("ignoring ray with zero direction from {:?}", ray.origin);
        return None;
    };

    let (distance, normal) = match &collider.world_geometry().shape {
        WorldShape::Circle { center, radius } => {
            intersect_circle(ray.origin, direction, ray.distance, *center, *radius)?
        }
        WorldShape::Polygon { vertices, normals } => {
            intersect_polygon(ray.origin, direction, ray.distance, vertices, normals)?
        }
    };

    Some(RaycastHit {
        collider,
        contact_point: ray.origin + direction * distance,
        normal,
        distance,
    })
}

/// Solves |origin + t*direction - center|^2 = radius^2 for the smallest t in [0, max_distance].
fn intersect_circle(
    origin: Vec2,
    direction: Vec2,
    max_distance: f64,
    center: Vec2,
    radius: f64,
) -> Option<(f64, Vec2)> {
    let oc = origin - center;
    // `direction` is unit length, so the quadratic's leading coefficient is 1.
    let half_b = oc.dot(direction);
    let c = oc.magnitude_squared() - radius * radius;

    let discriminant = half_b * half_b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_discriminant = discriminant.sqrt();
    let t1 = -half_b - sqrt_discriminant;
    let t2 = -half_b + sqrt_discriminant;

    // Origin inside the circle: the near root is behind the ray.
    let t = if t1 >= 0.0 {
        t1
    } else if t2 >= 0.0 {
        t2
    } else {
        return None;
    };
    if t > max_distance {
        return None;
    }

    let contact = origin + direction * t;
    let normal = (contact - center).try_normalize()?;
    Some((t, normal))
}

/// Nearest edge crossing. Edges are visited in vertex order and a later edge
/// only wins when it is closer by more than `EPSILON`, so a ray through a
/// shared vertex reports the earlier edge.
fn intersect_polygon(
    origin: Vec2,
    direction: Vec2,
    max_distance: f64,
    vertices: &[Vec2],
    normals: &[Vec2],
) -> Option<(f64, Vec2)> {
    let n = vertices.len();
    let mut closest: Option<(f64, Vec2)> = None;
    for i in 0..n {
        let Some(t) = intersect_edge(origin, direction, vertices[i], vertices[(i + 1) % n]) else {
            continue;
        };
        if t > max_distance {
            continue;
        }
        if closest.map_or(true, |(best_t, _)| t < best_t - EPSILON) {
            closest = Some((t, normals[i]));
        }
    }
    closest
}

/// Ray parameter where the ray crosses the segment `b1`-`b2`, if it does.
/// Parallel and collinear segments never intersect.
fn intersect_edge(origin: Vec2, direction: Vec2, b1: Vec2, b2: Vec2) -> Option<f64> {
    let edge = b2 - b1;
    let delta_start = b1 - origin;

    let denominator = direction.cross(edge);
    if denominator.abs() < EPSILON {
        return None;
    }

    let t = delta_start.cross(edge) / denominator;
    let u = delta_start.cross(direction) / denominator;

    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}
