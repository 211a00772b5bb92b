use crate::config::CenterMode;
use crate::error::{OperationError, Result, SceneError};
use crate::math::{centroid, scale_toward, Point3};

/// Target positions of a hide key, before they are committed to a mesh.
#[derive(Debug, Clone)]
pub struct ShrinkTarget {
    /// Point the affected vertices move toward.
    pub center: Point3,
    /// Every vertex position, in mesh order; only affected entries differ
    /// from the input.
    pub positions: Vec<Point3>,
}

/// Shrinks a subset of vertices toward a center.
pub struct Shrink<'a> {
    affected: &'a [usize],
    factor: f64,
    center_mode: CenterMode,
}

impl<'a> Shrink<'a> {
    /// Creates a new `Shrink` computation.
    ///
    /// `factor` is expected in `[0, 1]`; callers clamp it beforehand.
    #[must_use]
    pub fn new(affected: &'a [usize], factor: f64, center_mode: CenterMode) -> Self {
        Self {
            affected,
            factor,
            center_mode,
        }
    }

    /// Computes the shrunk copy of `original`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::NoAffectedVertices`] if the affected set is
    /// empty, or [`SceneError::InvalidMesh`] if it names a vertex past the end
    /// of `original`.
    pub fn execute(&self, original: &[Point3]) -> Result<ShrinkTarget> {
        if let Some(&i) = self.affected.iter().find(|&&i| i >= original.len()) {
            return Err(SceneError::InvalidMesh(format!(
                "vertex {i} out of range for {} positions",
                original.len()
            ))
            .into());
        }

        let center = match self.center_mode {
            CenterMode::Centroid => centroid(self.affected.iter().map(|&i| &original[i]))
                .ok_or(OperationError::NoAffectedVertices)?,
            CenterMode::Origin => {
                if self.affected.is_empty() {
                    return Err(OperationError::NoAffectedVertices.into());
                }
                Point3::origin()
            }
        };

        let mut positions = original.to_vec();
        for &i in self.affected {
            positions[i] = scale_toward(&original[i], &center, self.factor);
        }

        Ok(ShrinkTarget { center, positions })
    }
}
