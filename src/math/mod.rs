pub mod bounding_area;
pub mod line_segment;
pub mod transform;
pub mod vec2;

pub use bounding_area::BoundingArea;
pub use line_segment::LineSegment;
pub use transform::Transform;
pub use vec2::Vec2;

/// Absolute tolerance for touching, strict containment and tie-breaking.
pub const EPSILON: f64 = 1e-9;
