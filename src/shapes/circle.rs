use crate::error::ShapeError;
use crate::math::vec2::Vec2;

/// Which component of the owning transform's scale stretches the radius.
///
/// A circle stays a circle under non-uniform scale; this picks the factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusScaling {
    X,
    Y,
    #[default]
    Average,
}

impl RadiusScaling {
    /// Scale factor applied to the local radius.
    pub fn factor(self, scale: Vec2) -> f64 {
        match self {
            RadiusScaling::X => scale.x.abs(),
            RadiusScaling::Y => scale.y.abs(),
            RadiusScaling::Average => (scale.x.abs() + scale.y.abs()) / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    offset: Vec2,
    radius: f64,
    radius_scaling: RadiusScaling,
}

impl Circle {
    pub fn new(offset: Vec2, radius: f64, radius_scaling: RadiusScaling) -> Result<Self, ShapeError> {
        validate_radius(radius)?;
        Ok(Self {
            offset,
            radius,
            radius_scaling,
        })
    }

    /// Circle centered on the body with average radius scaling.
    pub fn with_radius(radius: f64) -> Result<Self, ShapeError> {
        Self::new(Vec2::ZERO, radius, RadiusScaling::Average)
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn radius_scaling(&self) -> RadiusScaling {
        self.radius_scaling
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    pub fn set_radius_scaling(&mut self, radius_scaling: RadiusScaling) {
        self.radius_scaling = radius_scaling;
    }

    /// Radius after applying the owning transform's scale.
    pub fn scaled_radius(&self, scale: Vec2) -> f64 {
        self.radius * self.radius_scaling.factor(scale)
    }
}

fn validate_radius(radius: f64) -> Result<(), ShapeError> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        log::debug!("rejecting circle radius {radius}");
        Err(ShapeError::InvalidRadius(radius))
    }
}
