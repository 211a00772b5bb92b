use std::collections::{BTreeSet, HashSet};

use crate::error::{OperationError, Result};
use crate::scene::Mesh;

/// Collects the vertices touched by faces that use any of a set of material
/// slots.
///
/// A vertex is affected if at least one adjacent face qualifies.
pub struct AffectedVertices<'a> {
    slots: &'a BTreeSet<usize>,
}

impl<'a> AffectedVertices<'a> {
    /// Creates a new `AffectedVertices` query for the given slot indices.
    #[must_use]
    pub fn new(slots: &'a BTreeSet<usize>) -> Self {
        Self { slots }
    }

    /// Executes the query, returning sorted vertex indices.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::NoAffectedVertices`] if no face uses the
    /// slots.
    pub fn execute(&self, mesh: &Mesh) -> Result<Vec<usize>> {
        let mut seen = HashSet::new();
        let mut affected: Vec<usize> = mesh
            .faces
            .iter()
            .filter(|face| self.slots.contains(&face.material_index))
            .flat_map(|face| face.vertices.iter().copied())
            .filter(|&vi| seen.insert(vi))
            .collect();

        if affected.is_empty() {
            return Err(OperationError::NoAffectedVertices.into());
        }
        affected.sort_unstable();
        Ok(affected)
    }
}
