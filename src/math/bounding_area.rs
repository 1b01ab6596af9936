// Axis-aligned bounding box consumed by external broad-phase culling.

use crate::math::vec2::Vec2;

/// An axis-aligned box defined by its minimum and maximum corner points.
///
/// Either `min <= max` on both axes, or the box is [`BoundingArea::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingArea {
    /// The box that contains nothing. Identity element for [`BoundingArea::merge`].
    pub const EMPTY: BoundingArea = BoundingArea {
        min: Vec2::new(f64::INFINITY, f64::INFINITY),
        max: Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    };

    /// Creates a new box, reordering the corners so that `min <= max`.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        BoundingArea {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Creates the box centered on `center` reaching `half_extents` in each direction.
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a box that encompasses a set of points; [`BoundingArea::EMPTY`] for none.
    pub fn from_points(points: &[Vec2]) -> Self {
        points.iter().fold(Self::EMPTY, |mut area, point| {
            area.min.x = area.min.x.min(point.x);
            area.min.y = area.min.y.min(point.y);
            area.max.x = area.max.x.max(point.x);
            area.max.y = area.max.y.max(point.y);
            area
        })
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.x - self.min.x
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.y - self.min.y
        }
    }

    /// Center of the box. `None` for the empty box.
    pub fn center(&self) -> Option<Vec2> {
        if self.is_empty() {
            None
        } else {
            Some((self.min + self.max) / 2.0)
        }
    }

    /// Checks if this box overlaps another. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &BoundingArea) -> bool {
        let x_overlap = self.max.x > other.min.x && self.min.x < other.max.x;
        let y_overlap = self.max.y > other.min.y && self.min.y < other.max.y;
        x_overlap && y_overlap
    }

    /// Inclusive point test.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Merges another box into this one, expanding this box to contain both.
    pub fn merge(&mut self, other: &BoundingArea) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    pub fn merged(mut self, other: &BoundingArea) -> Self {
        self.merge(other);
        self
    }
}

impl Default for BoundingArea {
    fn default() -> Self {
        Self::EMPTY
    }
}
