pub mod material;
pub mod mesh;
pub mod object;
pub mod shape_key;

pub use material::{Material, MaterialId};
pub use mesh::{Mesh, Polygon};
pub use object::{Object, ObjectId, ObjectKind};
pub use shape_key::{ShapeKey, ShapeKeys, BASIS_NAME};

use crate::config::HideKeyConfig;
use crate::error::SceneError;
use crate::selector::SelectorState;
use slotmap::{SecondaryMap, SlotMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Central arena that owns objects, materials and per-object selector state.
///
/// Entities reference each other via typed IDs (generational indices), so a
/// stale handle to a removed object resolves to "not found" rather than to
/// whatever reuses its slot.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    objects: SlotMap<ObjectId, Object>,
    materials: SlotMap<MaterialId, Material>,
    selectors: SecondaryMap<ObjectId, SelectorState>,
    active_object: Option<ObjectId>,
    /// Scene-level parameters for hide-key generation.
    pub config: HideKeyConfig,
}

impl Scene {
    /// Creates a new, empty scene with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Material operations ---

    /// Inserts a material and returns its ID.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.insert(material)
    }

    /// Returns the material, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the material is not in the scene.
    pub fn material(&self, id: MaterialId) -> Result<&Material, SceneError> {
        self.materials
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("material".into()))
    }

    // --- Object operations ---

    /// Inserts an object and returns its ID.
    pub fn add_object(&mut self, object: Object) -> ObjectId {
        self.objects.insert(object)
    }

    /// Removes an object together with its selector state.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<Object> {
        self.selectors.remove(id);
        if self.active_object == Some(id) {
            self.active_object = None;
        }
        self.objects.remove(id)
    }

    /// Returns the object, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not in the scene.
    pub fn object(&self, id: ObjectId) -> Result<&Object, SceneError> {
        self.objects
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("object".into()))
    }

    /// Returns the object mutably, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not in the scene.
    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut Object, SceneError> {
        self.objects
            .get_mut(id)
            .ok_or_else(|| SceneError::EntityNotFound("object".into()))
    }

    /// Returns the mesh data of an object.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NotAMesh`] if the object is missing or is not
    /// a mesh.
    pub fn mesh(&self, id: ObjectId) -> Result<&Mesh, SceneError> {
        self.objects
            .get(id)
            .and_then(Object::as_mesh)
            .ok_or(SceneError::NotAMesh)
    }

    /// Returns the mesh data of an object mutably.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NotAMesh`] if the object is missing or is not
    /// a mesh.
    pub fn mesh_mut(&mut self, id: ObjectId) -> Result<&mut Mesh, SceneError> {
        self.objects
            .get_mut(id)
            .and_then(Object::as_mesh_mut)
            .ok_or(SceneError::NotAMesh)
    }

    // --- Active object ---

    #[must_use]
    pub fn active_object(&self) -> Option<ObjectId> {
        self.active_object
    }

    pub fn set_active_object(&mut self, id: Option<ObjectId>) {
        self.active_object = id;
    }

    // --- Selector side table ---

    /// Returns the selector state stored for an object, if any.
    #[must_use]
    pub fn selector(&self, id: ObjectId) -> Option<&SelectorState> {
        self.selectors.get(id)
    }

    /// Returns the selector state stored for an object mutably, if any.
    pub fn selector_mut(&mut self, id: ObjectId) -> Option<&mut SelectorState> {
        self.selectors.get_mut(id)
    }

    /// Installs selector state for an object, replacing any previous state.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not in the scene.
    pub fn set_selector(&mut self, id: ObjectId, state: SelectorState) -> Result<(), SceneError> {
        if !self.objects.contains_key(id) {
            return Err(SceneError::EntityNotFound("object".into()));
        }
        self.selectors.insert(id, state);
        Ok(())
    }
}
