use crate::geometry::AttributeKind;

/// Read-only access to a mesh's attribute buffers
pub trait GeometryBuffers {
    /// Flat scalar buffer for `kind`, `None` when the mesh doesn't carry it
    fn attribute(&self, kind: AttributeKind) -> Option<&[f32]>;
}

/// A mesh visited during scene traversal
pub struct MeshRef<'a, G: ?Sized> {
    pub name: Option<&'a str>,
    pub geometry: &'a G,
}

/// Scene graph abstraction consumed by the validator.
///
/// Implement this for whatever the asset loader produces; the validator only
/// needs to walk meshes and read their buffers.
pub trait SceneGraph {
    type Geometry: GeometryBuffers + ?Sized;

    /// Every mesh in the graph. Order only affects how early validation exits.
    fn meshes(&self) -> Box<dyn Iterator<Item = MeshRef<'_, Self::Geometry>> + '_>;
}
