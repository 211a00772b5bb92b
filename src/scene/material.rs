#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

slotmap::new_key_type! {
    /// Unique identifier for a material in the scene.
    pub struct MaterialId;
}

/// A material that can be assigned to mesh material slots.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    /// Display name.
    pub name: String,
}

impl Material {
    /// Creates a new material with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
