use serde::{Deserialize, Serialize};

/// Vertex attribute buffers a mesh can carry.
///
/// Declaration order is the scan order used by the validator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Position,
    Normal,
    Uv,
}

impl AttributeKind {
    /// All attributes in scan priority order
    pub const ALL: [AttributeKind; 3] = [Self::Position, Self::Normal, Self::Uv];

    /// Number of scalars per vertex
    pub const fn item_size(self) -> usize {
        match self {
            Self::Position | Self::Normal => 3,
            Self::Uv => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Normal => "normal",
            Self::Uv => "uv",
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat, parallel vertex attribute buffers of a single mesh
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub position: Vec<f32>,
    pub normal: Option<Vec<f32>>,
    pub uv: Option<Vec<f32>>,
}

impl Geometry {
    pub fn new(position: Vec<f32>) -> Self {
        Self {
            position,
            normal: None,
            uv: None,
        }
    }

    pub fn with_normals(mut self, normal: Vec<f32>) -> Self {
        self.normal = Some(normal);
        self
    }

    pub fn with_uvs(mut self, uv: Vec<f32>) -> Self {
        self.uv = Some(uv);
        self
    }

    /// Read-only view of an attribute buffer, `None` when absent
    pub fn attribute(&self, kind: AttributeKind) -> Option<&[f32]> {
        match kind {
            AttributeKind::Position => Some(&self.position),
            AttributeKind::Normal => self.normal.as_deref(),
            AttributeKind::Uv => self.uv.as_deref(),
        }
    }

    /// Raw bytes of an attribute buffer, as uploaded to a vertex buffer
    pub fn attribute_bytes(&self, kind: AttributeKind) -> Option<&[u8]> {
        self.attribute(kind).map(bytemuck::cast_slice)
    }

    pub fn vertex_count(&self) -> usize {
        self.position.len() / AttributeKind::Position.item_size()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }
}
