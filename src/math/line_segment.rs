use crate::math::vec2::Vec2;

/// A ray of finite length used by raycast queries.
///
/// `direction` does not need to be normalized; queries normalize it and
/// treat a zero direction as a miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub origin: Vec2,
    pub direction: Vec2,
    /// Maximum travel along the normalized direction.
    pub distance: f64,
}

impl LineSegment {
    pub fn new(origin: Vec2, direction: Vec2, distance: f64) -> Self {
        Self {
            origin,
            direction,
            distance,
        }
    }

    /// Creates the segment running from `a` to `b`.
    pub fn between(a: Vec2, b: Vec2) -> Self {
        let delta = b - a;
        Self::new(a, delta, delta.magnitude())
    }

    /// Unit direction, or `None` for a zero (or non-finite) direction.
    pub fn unit_direction(&self) -> Option<Vec2> {
        self.direction.try_normalize()
    }

    /// Point at `t` units along the normalized direction.
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.origin + self.direction.normalize() * t
    }

    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.distance)
    }
}
