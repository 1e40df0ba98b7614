use thiserror::Error;

use super::{BoundingSphere, AABB};

/// Why bounding volumes could not be computed at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("position buffer is empty")]
    Empty,

    #[error("position buffer length {0} is not a multiple of 3")]
    Misaligned(usize),
}

/// Why computed bounding volumes are unusable
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Unsound {
    #[error("bounding sphere radius {radius} is not finite and positive")]
    DegenerateSphere { radius: f64 },

    #[error("bounding box has non-finite corners")]
    NonFiniteBox,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingVolumes {
    pub aabb: AABB,
    pub sphere: BoundingSphere,
}

impl BoundingVolumes {
    /// Requires a finite, strictly positive radius and finite box corners
    pub fn verify(&self) -> Result<(), Unsound> {
        let radius = self.sphere.radius;
        if !self.sphere.is_finite() || radius <= 0.0 {
            return Err(Unsound::DegenerateSphere { radius });
        }
        if !self.aabb.is_finite() {
            return Err(Unsound::NonFiniteBox);
        }
        Ok(())
    }
}

/// Computes the box and sphere enclosing a flat xyz position buffer
pub fn compute_bounding_volumes(positions: &[f32]) -> Result<BoundingVolumes, BoundsError> {
    if positions.is_empty() {
        return Err(BoundsError::Empty);
    }
    if positions.len() % 3 != 0 {
        return Err(BoundsError::Misaligned(positions.len()));
    }

    let aabb = AABB::from_positions(positions);
    let sphere = BoundingSphere::around(&aabb, positions);

    Ok(BoundingVolumes { aabb, sphere })
}
