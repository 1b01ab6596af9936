use std::f64::consts::TAU;

use crate::error::ShapeError;
use crate::math::{vec2::Vec2, EPSILON};

/// Vertex order of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// Winding of a closed vertex loop, from the sign of its shoelace area.
    pub fn of(vertices: &[Vec2]) -> Self {
        if signed_area(vertices) < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

/// Represents a convex polygon shape defined by its vertices in local space.
/// Vertices may be wound either way; normals follow the actual winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    offset: Vec2,
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    ///
    /// Fails for fewer than 3 vertices, non-finite coordinates, zero area,
    /// zero-length edges, or a loop that is not convex.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, ShapeError> {
        validate_vertices(&vertices)?;
        Ok(Polygon {
            offset: Vec2::ZERO,
            vertices,
        })
    }

    /// An axis-aligned `width` x `height` rectangle centered on the body.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, ShapeError> {
        Self::rectangle_at(Vec2::ZERO, width, height)
    }

    /// An axis-aligned rectangle centered on `center` in body space.
    pub fn rectangle_at(center: Vec2, width: f64, height: f64) -> Result<Self, ShapeError> {
        let valid = |d: f64| d > 0.0 && d.is_finite();
        if !valid(width) || !valid(height) {
            log::debug!("rejecting rectangle {width}x{height}");
            return Err(ShapeError::InvalidDimensions { width, height });
        }
        let hw = width / 2.0;
        let hh = height / 2.0;
        let polygon = Polygon::new(vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ])?;
        Ok(polygon.with_offset(center))
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Vertices relative to the offset, in the order they were given.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Replaces the vertex loop. The polygon is unchanged if validation fails.
    pub fn set_vertices(&mut self, vertices: Vec<Vec2>) -> Result<(), ShapeError> {
        validate_vertices(&vertices)?;
        self.vertices = vertices;
        Ok(())
    }

    pub fn winding(&self) -> Winding {
        Winding::of(&self.vertices)
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Calculates the centroid of the polygon in body space (offset included).
    pub fn centroid(&self) -> Vec2 {
        let n = self.vertices.len();
        let mut centroid = Vec2::ZERO;
        let mut signed_area_sum = 0.0;
        let origin = self.vertices[0];

        for i in 1..(n - 1) {
            let v2 = self.vertices[i];
            let v3 = self.vertices[i + 1];

            let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += triangle_signed_area;
            centroid += (origin + v2 + v3) / 3.0 * triangle_signed_area;
        }

        // Validation guarantees a non-zero area.
        centroid / signed_area_sum + self.offset
    }

    /// Returns the outward-facing unit normal of each edge in body space.
    /// Edge `i` runs from vertex `i` to vertex `i + 1`.
    pub fn edge_normals(&self) -> Vec<Vec2> {
        outward_normals(&self.vertices)
    }
}

/// Twice-halved shoelace sum: positive for counter-clockwise loops.
pub(crate) fn signed_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    let mut area = 0.0;
    for i in 0..n {
        area += vertices[i].cross(vertices[(i + 1) % n]);
    }
    area / 2.0
}

/// Outward unit normals for a closed convex loop of either winding.
/// A zero-length edge yields a zero normal.
pub(crate) fn outward_normals(vertices: &[Vec2]) -> Vec<Vec2> {
    let n = vertices.len();
    let winding = Winding::of(vertices);
    let mut normals = Vec::with_capacity(n);
    for i in 0..n {
        let edge = vertices[(i + 1) % n] - vertices[i];
        let normal = match winding {
            Winding::CounterClockwise => -edge.perpendicular(),
            Winding::Clockwise => edge.perpendicular(),
        };
        normals.push(normal.normalize());
    }
    normals
}

fn validate_vertices(vertices: &[Vec2]) -> Result<(), ShapeError> {
    let result = check_vertices(vertices);
    if let Err(err) = &result {
        log::debug!("rejecting polygon with {} vertices: {err}", vertices.len());
    }
    result
}

fn check_vertices(vertices: &[Vec2]) -> Result<(), ShapeError> {
    let n = vertices.len();
    if n < 3 {
        return Err(ShapeError::TooFewVertices { count: n });
    }
    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(ShapeError::NonFiniteVertex { index });
    }
    let area = signed_area(vertices);
    if area.abs() <= EPSILON {
        return Err(ShapeError::DegeneratePolygon);
    }
    if (0..n).any(|i| vertices[i].distance(vertices[(i + 1) % n]) <= EPSILON) {
        return Err(ShapeError::DegeneratePolygon);
    }

    // Every turn must bend the same way as the loop, and the turns must add up
    // to exactly one revolution (rejects self-intersecting stars).
    let orientation = area.signum();
    let mut turning = 0.0;
    for i in 0..n {
        let e1 = vertices[(i + 1) % n] - vertices[i];
        let e2 = vertices[(i + 2) % n] - vertices[(i + 1) % n];
        let cross = e1.cross(e2);
        if cross * orientation < -EPSILON {
            return Err(ShapeError::NotConvex);
        }
        turning += cross.atan2(e1.dot(e2));
    }
    if (turning.abs() - TAU).abs() > 1e-6 {
        return Err(ShapeError::NotConvex);
    }
    Ok(())
}
