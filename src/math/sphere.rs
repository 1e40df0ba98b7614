use glam::DVec3;

use super::AABB;

/// Bounding sphere kept in f64 so tiny extents don't square down to zero
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: DVec3,
    pub radius: f64,
}

impl BoundingSphere {
    /// Sphere centred on `bounds` reaching the farthest point of `positions`
    pub fn around(bounds: &AABB, positions: &[f32]) -> BoundingSphere {
        let center = (bounds.min.as_dvec3() + bounds.max.as_dvec3()) * 0.5;
        let max_distance_sq = positions
            .chunks_exact(3)
            .map(|p| center.distance_squared(DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64)))
            .fold(0.0f64, f64::max);

        BoundingSphere {
            center,
            radius: max_distance_sq.sqrt(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}
