//! Mesh integrity validation.
//!
//! A scene is accepted only when every mesh carries finite attribute data and
//! yields sound bounding volumes. Anything else, including faults inside the
//! bounds computation, collapses into [`Validation::Invalid`] so a corrupt
//! asset can never take the render surface down with it.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};
use thiserror::Error;

use crate::config::ValidatorConfig;
use crate::core::scratch::ScratchTracker;
use crate::geometry::AttributeKind;
use crate::math::{compute_bounding_volumes, BoundingVolumes, BoundsError, Unsound};
use crate::scene::SceneNode;
use crate::traits::{GeometryBuffers, SceneGraph};

/// Why a mesh or scene was refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectReason {
    #[error("scene is missing")]
    MissingScene,

    #[error("non-finite {attribute} scalar {value} at index {index}")]
    NonFinite {
        attribute: AttributeKind,
        index: usize,
        value: f32,
    },

    #[error("bounding box has non-finite corners")]
    NonFiniteBounds,

    #[error("bounding sphere radius {radius} is not finite and positive")]
    DegenerateBounds { radius: f64 },

    #[error("bounding volume computation failed: {0}")]
    BoundsFailure(String),
}

impl From<Unsound> for RejectReason {
    fn from(unsound: Unsound) -> Self {
        match unsound {
            Unsound::DegenerateSphere { radius } => RejectReason::DegenerateBounds { radius },
            Unsound::NonFiniteBox => RejectReason::NonFiniteBounds,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Name of the offending mesh node, if it has one
    pub mesh: Option<String>,
    pub reason: RejectReason,
}

impl Rejection {
    pub fn missing_scene() -> Self {
        Self {
            mesh: None,
            reason: RejectReason::MissingScene,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mesh {
            Some(name) => write!(f, "mesh '{}': {}", name, self.reason),
            None => write!(f, "{}", self.reason),
        }
    }
}

/// Outcome of validating a scene
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<S> {
    Valid(S),
    Invalid(Rejection),
}

impl<S> Validation<S> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn valid(self) -> Option<S> {
        match self {
            Validation::Valid(scene) => Some(scene),
            Validation::Invalid(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(rejection) => Some(rejection),
        }
    }

    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Validation<T> {
        match self {
            Validation::Valid(scene) => Validation::Valid(f(scene)),
            Validation::Invalid(rejection) => Validation::Invalid(rejection),
        }
    }
}

/// Scene copy with every rejected mesh removed
#[derive(Debug, Clone)]
pub struct Pruned {
    pub scene: SceneNode,
    pub removed: Vec<Rejection>,
}

type BoundsFn = fn(&[f32]) -> Result<BoundingVolumes, BoundsError>;

pub struct Validator {
    check_bounds: bool,
    bounds: BoundsFn,
    scratch: ScratchTracker,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("check_bounds", &self.check_bounds)
            .field("scratch", &self.scratch)
            .finish_non_exhaustive()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default())
    }
}

impl Validator {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            check_bounds: config.check_bounds,
            bounds: compute_bounding_volumes,
            scratch: ScratchTracker::new(),
        }
    }

    /// Swaps the bounding volume routine run on each scratch copy
    pub(crate) fn with_bounds_fn(mut self, bounds: BoundsFn) -> Self {
        self.bounds = bounds;
        self
    }

    /// Accepts `scene` only if every mesh in it passes [`Validator::check_mesh`].
    /// Stops at the first rejected mesh.
    pub fn validate<'s, G>(&self, scene: Option<&'s G>) -> Validation<&'s G>
    where
        G: SceneGraph + ?Sized,
    {
        let Some(scene) = scene else {
            warn!("No scene to validate");
            return Validation::Invalid(Rejection::missing_scene());
        };

        for mesh in scene.meshes() {
            debug!("Checking mesh {:?}", mesh.name);
            if let Err(reason) = self.check_mesh(mesh.geometry) {
                let rejection = Rejection {
                    mesh: mesh.name.map(str::to_owned),
                    reason,
                };
                warn!("Scene rejected: {}", rejection);
                return Validation::Invalid(rejection);
            }
        }

        Validation::Valid(scene)
    }

    /// Scalar scan over every present attribute, then the bounds test
    pub fn check_mesh<G>(&self, geometry: &G) -> Result<(), RejectReason>
    where
        G: GeometryBuffers + ?Sized,
    {
        for attribute in AttributeKind::ALL {
            let Some(buffer) = geometry.attribute(attribute) else {
                continue;
            };
            if let Some((index, &value)) = buffer.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(RejectReason::NonFinite {
                    attribute,
                    index,
                    value,
                });
            }
        }

        if self.check_bounds {
            self.check_volumes(geometry.attribute(AttributeKind::Position).unwrap_or(&[]))?;
        }

        Ok(())
    }

    fn check_volumes(&self, positions: &[f32]) -> Result<(), RejectReason> {
        let scratch = self.scratch.acquire(positions);
        let bounds = self.bounds;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| bounds(&scratch)));
        drop(scratch);

        let volumes = match outcome {
            Ok(Ok(volumes)) => volumes,
            Ok(Err(err)) => return Err(RejectReason::BoundsFailure(err.to_string())),
            Err(payload) => return Err(RejectReason::BoundsFailure(panic_message(payload.as_ref()))),
        };

        volumes.verify().map_err(RejectReason::from)
    }

    /// Node-level alternative to [`Validator::validate`]: drops the geometry of
    /// every rejected mesh instead of refusing the whole scene. A mesh node
    /// left without children is removed entirely. `scene` is not modified.
    pub fn prune(&self, scene: &SceneNode) -> Pruned {
        let mut removed = Vec::new();
        let pruned = self
            .prune_node(scene, &mut removed)
            .unwrap_or_else(|| SceneNode {
                name: scene.name.clone(),
                ..SceneNode::default()
            });

        if !removed.is_empty() {
            warn!("Pruned {} corrupt mesh(es)", removed.len());
        }

        Pruned {
            scene: pruned,
            removed,
        }
    }

    fn prune_node(&self, node: &SceneNode, removed: &mut Vec<Rejection>) -> Option<SceneNode> {
        let geometry = match &node.geometry {
            Some(geometry) => match self.check_mesh(geometry) {
                Ok(()) => Some(geometry.clone()),
                Err(reason) => {
                    removed.push(Rejection {
                        mesh: node.name.clone(),
                        reason,
                    });
                    None
                }
            },
            None => None,
        };

        let children: Vec<SceneNode> = node
            .children
            .iter()
            .filter_map(|child| self.prune_node(child, removed))
            .collect();

        if node.geometry.is_some() && geometry.is_none() && children.is_empty() {
            return None;
        }

        Some(SceneNode {
            name: node.name.clone(),
            geometry,
            children,
        })
    }

    /// Scratch copies not yet released; zero whenever no call is in flight
    pub fn outstanding_scratch(&self) -> usize {
        self.scratch.live()
    }

    /// Scratch copies made over this validator's lifetime
    pub fn scratch_copies(&self) -> usize {
        self.scratch.total()
    }
}

/// Validates `scene` with the default configuration
pub fn validate<G>(scene: Option<&G>) -> Validation<&G>
where
    G: SceneGraph + ?Sized,
{
    Validator::default().validate(scene)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic in bounds computation".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;

    #[test]
    fn test_reports_first_non_finite_scalar() {
        let geometry = Geometry::new(vec![0.0, 0.0, 0.0, 1.0, f32::NAN, f32::INFINITY]);
        let reason = Validator::default().check_mesh(&geometry).unwrap_err();

        assert!(matches!(
            reason,
            RejectReason::NonFinite { attribute: AttributeKind::Position, index: 4, .. }
        ));
    }

    #[test]
    fn test_position_scanned_before_uv() {
        let geometry = Geometry::new(vec![f32::NEG_INFINITY, 0.0, 0.0, 1.0, 1.0, 1.0])
            .with_uvs(vec![f32::NAN, 0.0, 0.0, 0.0]);
        let reason = Validator::default().check_mesh(&geometry).unwrap_err();

        assert!(matches!(
            reason,
            RejectReason::NonFinite { attribute: AttributeKind::Position, index: 0, .. }
        ));
    }

    #[test]
    fn test_bounds_skipped_when_disabled() {
        let config = ValidatorConfig {
            check_bounds: false,
            ..ValidatorConfig::default()
        };
        let validator = Validator::new(&config);
        let geometry = Geometry::new(vec![2.0, 2.0, 2.0]);

        assert!(validator.check_mesh(&geometry).is_ok());
        assert_eq!(validator.scratch_copies(), 0);
    }

    #[test]
    fn test_misaligned_positions_fail_bounds() {
        let reason = Validator::default()
            .check_mesh(&Geometry::new(vec![0.0, 1.0, 2.0, 3.0]))
            .unwrap_err();
        assert!(matches!(reason, RejectReason::BoundsFailure(_)));
    }

    fn exploding_bounds(_: &[f32]) -> Result<BoundingVolumes, BoundsError> {
        panic!("bounds exploded")
    }

    fn refusing_bounds(positions: &[f32]) -> Result<BoundingVolumes, BoundsError> {
        Err(BoundsError::Misaligned(positions.len()))
    }

    #[test]
    fn test_panicking_bounds_rejects_and_releases_scratch() {
        let validator = Validator::default().with_bounds_fn(exploding_bounds);
        let scene = SceneNode::mesh("volatile", Geometry::new(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]));

        let result = validator.validate(Some(&scene));

        let rejection = result.rejection().cloned().expect("panic must surface as Invalid");
        assert_eq!(rejection.mesh.as_deref(), Some("volatile"));
        assert_eq!(rejection.reason, RejectReason::BoundsFailure("bounds exploded".to_string()));
        assert_eq!(validator.scratch_copies(), 1);
        assert_eq!(validator.outstanding_scratch(), 0);
    }

    #[test]
    fn test_bounds_error_rejects_and_releases_scratch() {
        let validator = Validator::default().with_bounds_fn(refusing_bounds);
        let reason = validator
            .check_mesh(&Geometry::new(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]))
            .unwrap_err();

        assert_eq!(
            reason,
            RejectReason::BoundsFailure("position buffer length 6 is not a multiple of 3".to_string())
        );
        assert_eq!(validator.outstanding_scratch(), 0);
    }

    #[test]
    fn test_unsound_volumes_map_to_reasons() {
        assert_eq!(
            RejectReason::from(Unsound::DegenerateSphere { radius: 0.0 }),
            RejectReason::DegenerateBounds { radius: 0.0 }
        );
        assert_eq!(RejectReason::from(Unsound::NonFiniteBox), RejectReason::NonFiniteBounds);
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
    }

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection {
            mesh: Some("earth".to_string()),
            reason: RejectReason::DegenerateBounds { radius: 0.0 },
        };
        assert_eq!(
            rejection.to_string(),
            "mesh 'earth': bounding sphere radius 0 is not finite and positive"
        );
    }
}
