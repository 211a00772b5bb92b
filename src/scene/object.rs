use super::mesh::Mesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

slotmap::new_key_type! {
    /// Unique identifier for an object in the scene.
    pub struct ObjectId;
}

/// The data an object carries.
///
/// Only [`ObjectKind::Mesh`] is polygonal geometry; the hide operations
/// reject every other kind.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectKind {
    Mesh(Mesh),
    Curve,
    Empty,
}

/// A named object in the scene.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Object {
    pub name: String,
    pub kind: ObjectKind,
}

impl Object {
    /// Creates a mesh object.
    #[must_use]
    pub fn mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh(mesh),
        }
    }

    /// Creates an empty (non-geometry) object.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Empty,
        }
    }

    /// Returns the mesh data, if this is a mesh object.
    #[must_use]
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            ObjectKind::Mesh(mesh) => Some(mesh),
            ObjectKind::Curve | ObjectKind::Empty => None,
        }
    }

    /// Returns the mesh data mutably, if this is a mesh object.
    pub fn as_mesh_mut(&mut self) -> Option<&mut Mesh> {
        match &mut self.kind {
            ObjectKind::Mesh(mesh) => Some(mesh),
            ObjectKind::Curve | ObjectKind::Empty => None,
        }
    }
}
