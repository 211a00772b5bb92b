use tracing::debug;

use crate::error::Result;
use crate::scene::{ObjectId, Scene};
use crate::selector::SelectorState;

/// Rebuilds an object's material checklist from its current slot list.
///
/// Previous checkbox choices are discarded; every listed material starts
/// checked.
pub struct RefreshSelector {
    object: ObjectId,
}

impl RefreshSelector {
    /// Creates a new `RefreshSelector` operation.
    #[must_use]
    pub fn new(object: ObjectId) -> Self {
        Self { object }
    }

    /// Executes the refresh and returns the number of listed materials.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NotAMesh`](crate::error::SceneError::NotAMesh)
    /// if the object is missing or is not a mesh. Nothing is changed in that
    /// case.
    pub fn execute(&self, scene: &mut Scene) -> Result<usize> {
        let state = SelectorState::from_mesh(scene.mesh(self.object)?);
        let count = state.len();
        scene.set_selector(self.object, state)?;
        debug!(count, "material list refreshed");
        Ok(count)
    }
}
