use serde::Serialize;
use std::fmt;

use crate::asset::{AssetSlot, AssetState};
use crate::config::FallbackKind;
use crate::math::AABB;
use crate::scene::SceneNode;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Valid,
    Invalid,
}

/// Validation summary for one asset file
#[derive(Clone, Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub status: Status,
    pub meshes: usize,
    pub vertices: usize,
    /// Scene extent as `[min, max]`, only for valid scenes
    pub bounds: Option<[[f32; 3]; 2]>,
    pub reason: Option<String>,
    pub pruned: Vec<String>,
    pub fallback: Option<FallbackKind>,
}

impl FileReport {
    pub fn from_slot(path: impl Into<String>, slot: &AssetSlot) -> Self {
        let mut report = FileReport {
            path: path.into(),
            status: Status::Pending,
            meshes: 0,
            vertices: 0,
            bounds: None,
            reason: None,
            pruned: slot.pruned().iter().map(ToString::to_string).collect(),
            fallback: None,
        };

        match slot.state() {
            AssetState::Loading => {}
            AssetState::Valid(scene) => {
                report.status = Status::Valid;
                report.meshes = scene.mesh_count();
                report.vertices = scene.vertex_count();
                report.bounds = scene_bounds(scene).map(|b| [b.min.to_array(), b.max.to_array()]);
            }
            AssetState::Invalid(rejection) => {
                report.status = Status::Invalid;
                report.reason = Some(rejection.to_string());
                report.fallback = Some(slot.placeholder().kind);
            }
        }

        report
    }

    pub fn is_valid(&self) -> bool {
        self.status == Status::Valid
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::Pending => write!(f, "{}: pending", self.path)?,
            Status::Valid => write!(
                f,
                "{}: valid ({} meshes, {} vertices)",
                self.path, self.meshes, self.vertices
            )?,
            Status::Invalid => write!(
                f,
                "{}: invalid, {} (fallback: {})",
                self.path,
                self.reason.as_deref().unwrap_or("unknown"),
                self.fallback.unwrap_or_default()
            )?,
        }
        for removed in &self.pruned {
            write!(f, "\n  pruned {}", removed)?;
        }
        Ok(())
    }
}

/// Union of all mesh boxes, `None` for a scene without vertices
pub fn scene_bounds(scene: &SceneNode) -> Option<AABB> {
    let bounds = scene
        .traverse()
        .filter_map(|node| node.geometry.as_ref())
        .map(|geometry| AABB::from_positions(&geometry.position))
        .fold(AABB::EMPTY, |acc, aabb| acc.union(&aabb));

    (!bounds.is_empty()).then_some(bounds)
}
