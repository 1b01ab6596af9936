//! 2D collision geometry for circle and convex polygon colliders.
//!
//! A [`Collider`] binds a [`Shape`] to the transform of the body that owns it
//! and answers four kinds of query: bounding area, containment, collision
//! (Separating Axis Theorem with a minimum translation vector) and raycast.

pub mod collision;
pub mod error;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{Collision, RaycastHit};
pub use error::ShapeError;
pub use math::{BoundingArea, LineSegment, Transform, Vec2, EPSILON};
pub use shapes::{Circle, Collider, ColliderId, Polygon, RadiusScaling, Shape, ShapeKind};
