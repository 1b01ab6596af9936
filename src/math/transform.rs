use super::vec2::Vec2;

/// World placement of the body that owns a collider.
///
/// Local points are scaled, then rotated, then translated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f64, // Angle in radians
    pub scale: Vec2,
}

impl Transform {
    /// Creates a new unscaled transform.
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self {
            position,
            rotation,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Creates an unrotated, unscaled transform at `position`.
    pub fn from_position(position: Vec2) -> Self {
        Self::new(position, 0.0)
    }

    /// Creates an identity transform (no translation, no rotation, unit scale).
    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Returns a copy moved by `delta`.
    pub fn translated(mut self, delta: Vec2) -> Self {
        self.position += delta;
        self
    }

    /// Applies the transform (scale, rotation, then translation) to a point.
    pub fn apply(self, point: Vec2) -> Vec2 {
        point.component_mul(self.scale).rotate(self.rotation) + self.position
    }

    /// Applies the inverse transform to a point.
    /// A zero scale component has no inverse and yields non-finite coordinates.
    pub fn apply_inverse(self, point: Vec2) -> Vec2 {
        let unrotated = (point - self.position).rotate(-self.rotation);
        Vec2::new(unrotated.x / self.scale.x, unrotated.y / self.scale.y)
    }

    /// True when the scale mirrors the local frame, flipping polygon winding.
    pub fn is_mirrored(self) -> bool {
        self.scale.x * self.scale.y < 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
