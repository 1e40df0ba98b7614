mod aabb;
mod bounds;
mod sphere;

pub use aabb::AABB;
pub use bounds::{compute_bounding_volumes, BoundingVolumes, BoundsError, Unsound};
pub use sphere::BoundingSphere;
