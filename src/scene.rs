use crate::geometry::{AttributeKind, Geometry};
use crate::traits::{GeometryBuffers, MeshRef, SceneGraph};

/// Node of a loaded scene. A node carrying a geometry is a mesh node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneNode {
    pub name: Option<String>,
    pub geometry: Option<Geometry>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Empty group node
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn mesh(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: Some(name.into()),
            geometry: Some(geometry),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_mesh(&self) -> bool {
        self.geometry.is_some()
    }

    /// Depth-first, pre-order walk over this node and all descendants
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse { stack: vec![self] }
    }

    pub fn mesh_count(&self) -> usize {
        self.traverse().filter(|node| node.is_mesh()).count()
    }

    pub fn vertex_count(&self) -> usize {
        self.traverse()
            .filter_map(|node| node.geometry.as_ref())
            .map(Geometry::vertex_count)
            .sum()
    }
}

pub struct Traverse<'a> {
    stack: Vec<&'a SceneNode>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = &'a SceneNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is visited first
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl GeometryBuffers for Geometry {
    fn attribute(&self, kind: AttributeKind) -> Option<&[f32]> {
        Geometry::attribute(self, kind)
    }
}

impl SceneGraph for SceneNode {
    type Geometry = Geometry;

    fn meshes(&self) -> Box<dyn Iterator<Item = MeshRef<'_, Geometry>> + '_> {
        Box::new(self.traverse().filter_map(|node| {
            node.geometry.as_ref().map(|geometry| MeshRef {
                name: node.name.as_deref(),
                geometry,
            })
        }))
    }
}
