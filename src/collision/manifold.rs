use crate::math::vec2::Vec2;
use crate::shapes::Collider;

/// Result of a successful collision query between two colliders.
#[derive(Debug, Clone, Copy)]
pub struct Collision<'a> {
    /// The collider the query was made on.
    pub first: &'a Collider,
    pub second: &'a Collider,
    /// Smallest translation of `first` that separates the pair.
    pub minimum_translation_vector: Vec2,
    pub first_contains_second: bool,
    pub second_contains_first: bool,
}

impl<'a> Collision<'a> {
    /// The same contact seen from the other collider.
    pub fn reversed(self) -> Self {
        Collision {
            first: self.second,
            second: self.first,
            minimum_translation_vector: -self.minimum_translation_vector,
            first_contains_second: self.second_contains_first,
            second_contains_first: self.first_contains_second,
        }
    }

    pub fn penetration_depth(&self) -> f64 {
        self.minimum_translation_vector.magnitude()
    }
}
