//! Per-object material checklist.
//!
//! A [`SelectorState`] records, for each non-empty material slot of a mesh,
//! the material, the slot index it was read from, and whether faces using it
//! should be hidden. Entries remember their slot index so a later change to
//! the slot list is detected instead of silently shifting which faces are
//! selected.

use std::collections::BTreeSet;

use crate::error::OperationError;
use crate::scene::{MaterialId, Mesh, Scene};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One checkbox of the material checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectorEntry {
    pub material: MaterialId,
    /// Slot the material was found in at refresh time.
    pub slot_index: usize,
    pub use_hide: bool,
}

/// The material checklist of one object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectorState {
    entries: Vec<SelectorEntry>,
}

impl SelectorState {
    /// Builds a fresh checklist from a mesh's material slots.
    ///
    /// Empty slots are skipped; every entry starts checked.
    #[must_use]
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let entries = mesh
            .material_slots
            .iter()
            .enumerate()
            .filter_map(|(slot_index, slot)| {
                slot.map(|material| SelectorEntry {
                    material,
                    slot_index,
                    use_hide: true,
                })
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[SelectorEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the flag for a material, or `None` if it is not listed.
    ///
    /// A material listed in several slots reports its first entry.
    #[must_use]
    pub fn use_hide(&self, material: MaterialId) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.material == material)
            .map(|e| e.use_hide)
    }

    /// Sets the flag on every entry for `material`.
    ///
    /// Returns `false` if the material is not listed.
    pub fn set_use_hide(&mut self, material: MaterialId, use_hide: bool) -> bool {
        let mut found = false;
        for entry in self.entries.iter_mut().filter(|e| e.material == material) {
            entry.use_hide = use_hide;
            found = true;
        }
        found
    }

    /// Slot indices whose faces should be hidden.
    #[must_use]
    pub fn checked_slots(&self) -> BTreeSet<usize> {
        self.entries
            .iter()
            .filter(|e| e.use_hide)
            .map(|e| e.slot_index)
            .collect()
    }

    /// Checks that the checklist still describes the mesh's slot list.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::StaleSelector`] if a recorded slot is gone,
    /// now holds a different material, or a material slot was filled since
    /// the last refresh.
    pub fn validate_against(&self, mesh: &Mesh) -> Result<(), OperationError> {
        for entry in &self.entries {
            match mesh.material_slots.get(entry.slot_index) {
                Some(Some(material)) if *material == entry.material => {}
                Some(_) => {
                    return Err(OperationError::StaleSelector {
                        reason: format!("slot {} changed", entry.slot_index),
                    })
                }
                None => {
                    return Err(OperationError::StaleSelector {
                        reason: format!("slot {} no longer exists", entry.slot_index),
                    })
                }
            }
        }

        let filled = mesh.material_slots.iter().flatten().count();
        if filled != self.entries.len() {
            return Err(OperationError::StaleSelector {
                reason: format!(
                    "{filled} materials assigned, {} listed",
                    self.entries.len()
                ),
            });
        }
        Ok(())
    }

    /// Display rows `(material name, use_hide)` in slot order.
    ///
    /// Materials no longer present in the scene are left out.
    #[must_use]
    pub fn rows(&self, scene: &Scene) -> Vec<(String, bool)> {
        self.entries
            .iter()
            .filter_map(|e| {
                scene
                    .material(e.material)
                    .ok()
                    .map(|m| (m.name.clone(), e.use_hide))
            })
            .collect()
    }
}
