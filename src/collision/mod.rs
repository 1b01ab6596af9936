pub mod containment;
pub mod detection;
pub mod manifold;
pub mod raycast;

// Re-export key types
pub use detection::collides_with;
pub use manifold::Collision;
pub use raycast::{raycast, RaycastHit};
