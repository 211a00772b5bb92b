use thiserror::Error;

/// Top-level error type for material hide operations.
#[derive(Debug, Error)]
pub enum MaterialHideError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the scene data the operations read and write.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// The target is missing or is not polygonal geometry.
    #[error("Select a mesh object.")]
    NotAMesh,

    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
}

/// Precondition failures of the refresh and generate operations.
///
/// All of these are detected before any mutation begins.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Object already has shape keys. Remove them first (this addon resets the basis).")]
    ExistingShapeKeys,

    #[error("No materials selected for hide.")]
    NoMaterialsSelected,

    #[error("No vertices found for selected materials.")]
    NoAffectedVertices,

    /// The selector no longer matches the mesh's material slots.
    #[error("Material list is out of date ({reason}). Refresh the material list first.")]
    StaleSelector { reason: String },
}

impl MaterialHideError {
    /// Returns `true` if this error is [`SceneError::NotAMesh`].
    #[must_use]
    pub fn is_not_a_mesh(&self) -> bool {
        matches!(self, Self::Scene(SceneError::NotAMesh))
    }
}

/// Convenience type alias for results using [`MaterialHideError`].
pub type Result<T> = std::result::Result<T, MaterialHideError>;
