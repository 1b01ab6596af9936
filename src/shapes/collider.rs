//! A shape bound to the world transform of the body that owns it.
//!
//! World-space geometry is cached per collider and rebuilt on the first query
//! after any mutation or transform-changed notification. The cache lives in a
//! `RefCell`, so a collider can be moved between threads but never shared.

use std::cell::{Ref, RefCell};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::collision::{containment, detection, raycast, Collision, RaycastHit};
use crate::error::ShapeError;
use crate::math::{BoundingArea, LineSegment, Transform, Vec2};
use crate::shapes::polygon::outward_normals;
use crate::shapes::{Circle, Polygon, RadiusScaling, Shape, ShapeKind};

static NEXT_COLLIDER_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique collider identity. Used to order pair evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColliderId(u64);

impl ColliderId {
    fn next() -> Self {
        ColliderId(NEXT_COLLIDER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shape geometry resolved into world space.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldShape {
    Circle {
        center: Vec2,
        radius: f64,
    },
    /// `normals[i]` is the outward unit normal of the edge from
    /// `vertices[i]` to `vertices[i + 1]`.
    Polygon {
        vertices: Vec<Vec2>,
        normals: Vec<Vec2>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldGeometry {
    pub shape: WorldShape,
    pub bounds: BoundingArea,
}

impl WorldGeometry {
    fn build(shape: &Shape, transform: &Transform) -> Self {
        match shape {
            Shape::Circle(circle) => {
                let center = transform.apply(circle.offset());
                let radius = circle.scaled_radius(transform.scale);
                WorldGeometry {
                    shape: WorldShape::Circle { center, radius },
                    bounds: BoundingArea::from_center(center, Vec2::new(radius, radius)),
                }
            }
            Shape::Polygon(polygon) => {
                let offset = polygon.offset();
                let vertices: Vec<Vec2> = polygon
                    .vertices()
                    .iter()
                    .map(|v| transform.apply(*v + offset))
                    .collect();
                // Winding is taken from world space so a mirroring scale keeps normals outward.
                let normals = outward_normals(&vertices);
                let bounds = BoundingArea::from_points(&vertices);
                WorldGeometry {
                    shape: WorldShape::Polygon { vertices, normals },
                    bounds,
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct Collider {
    id: ColliderId,
    shape: Shape,
    transform: Transform,
    cache: RefCell<Option<WorldGeometry>>,
}

impl Collider {
    pub fn new(shape: impl Into<Shape>, transform: Transform) -> Self {
        let shape = shape.into();
        let id = ColliderId::next();
        log::trace!("created {} collider {:?}", shape.kind(), id);
        Self {
            id,
            shape,
            transform,
            cache: RefCell::new(None),
        }
    }

    pub fn circle(circle: Circle, transform: Transform) -> Self {
        Self::new(circle, transform)
    }

    pub fn polygon(polygon: Polygon, transform: Transform) -> Self {
        Self::new(polygon, transform)
    }

    pub fn id(&self) -> ColliderId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Snapshot of the owning body's transform as of the last notification.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Notification from the owning body that its transform changed.
    pub fn transform_changed(&mut self, transform: Transform) {
        self.transform = transform;
        self.invalidate();
    }

    pub fn set_shape(&mut self, shape: impl Into<Shape>) {
        self.shape = shape.into();
        self.invalidate();
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        match &mut self.shape {
            Shape::Circle(circle) => circle.set_offset(offset),
            Shape::Polygon(polygon) => polygon.set_offset(offset),
        }
        self.invalidate();
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.circle_mut()?.set_radius(radius)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_radius_scaling(&mut self, radius_scaling: RadiusScaling) -> Result<(), ShapeError> {
        self.circle_mut()?.set_radius_scaling(radius_scaling);
        self.invalidate();
        Ok(())
    }

    pub fn set_vertices(&mut self, vertices: Vec<Vec2>) -> Result<(), ShapeError> {
        match &mut self.shape {
            Shape::Polygon(polygon) => polygon.set_vertices(vertices)?,
            Shape::Circle(_) => {
                return Err(ShapeError::ShapeMismatch {
                    expected: ShapeKind::Polygon,
                    found: ShapeKind::Circle,
                })
            }
        }
        self.invalidate();
        Ok(())
    }

    fn circle_mut(&mut self) -> Result<&mut Circle, ShapeError> {
        match &mut self.shape {
            Shape::Circle(circle) => Ok(circle),
            Shape::Polygon(_) => Err(ShapeError::ShapeMismatch {
                expected: ShapeKind::Circle,
                found: ShapeKind::Polygon,
            }),
        }
    }

    fn invalidate(&mut self) {
        *self.cache.get_mut() = None;
    }

    /// Whether world geometry is currently cached (false right after a mutation).
    pub fn is_geometry_cached(&self) -> bool {
        self.cache.borrow().is_some()
    }

    /// World-space geometry, rebuilt first if the cache was invalidated.
    ///
    /// The returned borrow must be dropped before mutating the collider.
    pub fn world_geometry(&self) -> Ref<'_, WorldGeometry> {
        if self.cache.borrow().is_none() {
            log::trace!("rebuilding world geometry for collider {:?}", self.id);
            let geometry = WorldGeometry::build(&self.shape, &self.transform);
            *self.cache.borrow_mut() = Some(geometry);
        }
        Ref::map(self.cache.borrow(), |cached| match cached {
            Some(geometry) => geometry,
            None => unreachable!("world geometry populated above"),
        })
    }

    /// World-space axis-aligned bounds.
    pub fn bounding_area(&self) -> BoundingArea {
        self.world_geometry().bounds
    }

    /// Circle center, or polygon centroid, in world space.
    pub fn world_center(&self) -> Vec2 {
        match &self.shape {
            Shape::Circle(_) => match &self.world_geometry().shape {
                WorldShape::Circle { center, .. } => *center,
                WorldShape::Polygon { .. } => unreachable!("circle collider cached polygon geometry"),
            },
            Shape::Polygon(polygon) => self.transform.apply(polygon.centroid()),
        }
    }

    /// Circles include their boundary; polygons exclude it.
    pub fn contains_point(&self, point: Vec2) -> bool {
        containment::contains_point(self, point)
    }

    /// Strict containment of `other`. Never true for the collider itself.
    pub fn contains_collider(&self, other: &Collider) -> bool {
        containment::contains_collider(self, other)
    }

    pub fn collides_with<'a>(&'a self, other: &'a Collider) -> Option<Collision<'a>> {
        detection::collides_with(self, other)
    }

    pub fn is_hit_by(&self, ray: &LineSegment) -> Option<RaycastHit<'_>> {
        raycast::raycast(self, ray)
    }
}

impl Clone for Collider {
    /// The clone is a distinct collider and receives its own id.
    fn clone(&self) -> Self {
        Self {
            id: ColliderId::next(),
            shape: self.shape.clone(),
            transform: self.transform,
            cache: self.cache.clone(),
        }
    }
}
