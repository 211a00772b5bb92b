use std::collections::BTreeSet;

use tracing::{debug, info};

use super::affected::AffectedVertices;
use super::live_buffer::LiveBufferGuard;
use super::shrink::Shrink;
use crate::config::HideKeyConfig;
use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::scene::{ObjectId, Scene, BASIS_NAME};

/// Outcome of a successful [`GenerateHideKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedKeys {
    /// Name of the reference key (always `"Basis"`).
    pub basis_name: String,
    /// Name the hide key was stored under.
    pub key_name: String,
    /// Point the affected vertices shrink toward.
    pub center: Point3,
    /// Number of vertices the hide key moves.
    pub affected_count: usize,
}

/// Creates a "Basis" key and a hide key that shrinks every vertex touched by
/// the checked materials toward a center.
///
/// At value 0 the hide key leaves the mesh unchanged; at value 1 the affected
/// vertices sit at `center + (original - center) * shrink_factor`.
///
/// All preconditions are checked before the mesh is touched. The commit
/// temporarily writes the shrunk positions into the live vertex buffer to
/// capture them as the hide key, then restores the original positions. The
/// restore is tied to a scope guard, and the whole sequence runs under the
/// exclusive borrow of the scene.
pub struct GenerateHideKey {
    object: ObjectId,
    config: HideKeyConfig,
}

impl GenerateHideKey {
    /// Creates a new `GenerateHideKey` operation.
    #[must_use]
    pub fn new(object: ObjectId, config: HideKeyConfig) -> Self {
        Self { object, config }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Checked in this order, each before any mutation:
    /// - `NotAMesh` if the object is missing or not a mesh.
    /// - `ExistingShapeKeys` if the mesh already has shape keys.
    /// - `InvalidMesh` if a face references a missing vertex.
    /// - `StaleSelector` if the material list no longer matches the slots.
    /// - `NoMaterialsSelected` if no listed material is checked.
    /// - `NoAffectedVertices` if no face uses a checked material.
    pub fn execute(&self, scene: &mut Scene) -> Result<GeneratedKeys> {
        let mesh = scene.mesh(self.object)?;
        if mesh.has_shape_keys() {
            return Err(OperationError::ExistingShapeKeys.into());
        }
        mesh.validate()?;

        let checked = match scene.selector(self.object) {
            Some(selector) => {
                selector.validate_against(mesh)?;
                selector.checked_slots()
            }
            None => BTreeSet::new(),
        };
        if checked.is_empty() {
            return Err(OperationError::NoMaterialsSelected.into());
        }

        let affected = AffectedVertices::new(&checked).execute(mesh)?;
        let target = Shrink::new(
            &affected,
            self.config.clamped_factor(),
            self.config.center_mode,
        )
        .execute(&mesh.vertices)?;
        debug!(
            slots = checked.len(),
            affected = affected.len(),
            center = ?target.center,
            "hide key target computed"
        );

        let mesh = scene.mesh_mut(self.object)?;
        let key_name = {
            let mut live = LiveBufferGuard::new(mesh);
            live.mesh().shape_key_add(BASIS_NAME);

            live.write_live(&target.positions);
            let key = live.mesh().shape_key_add(self.config.resolved_key_name());
            key.set_value(0.0);
            key.name().to_owned()
        };

        info!(key = %key_name, affected = affected.len(), "hide shape key created");
        Ok(GeneratedKeys {
            basis_name: BASIS_NAME.to_owned(),
            key_name,
            center: target.center,
            affected_count: affected.len(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::CenterMode;
    use crate::error::{MaterialHideError, SceneError};
    use crate::operations::RefreshSelector;
    use crate::scene::{Material, MaterialId, Mesh, Object};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    /// Cube from (0,0,0) to (2,4,6) with every face on slot 0 ("M0").
    fn cube_scene() -> (Scene, ObjectId, MaterialId) {
        let mut scene = Scene::new();
        let m0 = scene.add_material(Material::new("M0"));
        let mesh = Mesh::cuboid(p(0.0, 0.0, 0.0), p(2.0, 4.0, 6.0))
            .with_material_slots(vec![Some(m0)]);
        let cube = scene.add_object(Object::mesh("Cube", mesh));
        RefreshSelector::new(cube).execute(&mut scene).unwrap();
        (scene, cube, m0)
    }

    /// Same cube with the top face (vertices 4-7) moved to slot 1 ("M1").
    fn split_cube_scene() -> (Scene, ObjectId, MaterialId, MaterialId) {
        let mut scene = Scene::new();
        let m0 = scene.add_material(Material::new("M0"));
        let m1 = scene.add_material(Material::new("M1"));
        let mut mesh = Mesh::cuboid(p(0.0, 0.0, 0.0), p(2.0, 4.0, 6.0))
            .with_material_slots(vec![Some(m0), Some(m1)]);
        mesh.faces[1].material_index = 1;
        let cube = scene.add_object(Object::mesh("Cube", mesh));
        RefreshSelector::new(cube).execute(&mut scene).unwrap();
        (scene, cube, m0, m1)
    }

    fn centroid_config(factor: f64) -> HideKeyConfig {
        HideKeyConfig::new()
            .with_shrink_factor(factor)
            .with_center_mode(CenterMode::Centroid)
    }

    #[test]
    fn cube_end_to_end() {
        let (mut scene, cube, _) = cube_scene();
        let original = scene.mesh(cube).unwrap().vertices.clone();

        let result = GenerateHideKey::new(cube, centroid_config(0.01))
            .execute(&mut scene)
            .unwrap();

        let center = p(1.0, 2.0, 3.0);
        assert_relative_eq!(result.center, center, epsilon = 1e-12);
        assert_eq!(result.affected_count, 8);
        assert_eq!(result.key_name, "Hidden");

        let mesh = scene.mesh(cube).unwrap();
        assert_eq!(mesh.vertices, original);

        let keys = mesh.shape_keys().unwrap();
        let names: Vec<_> = keys.keys().iter().map(|k| k.name()).collect();
        assert_eq!(names, ["Basis", "Hidden"]);
        assert_eq!(keys.reference().unwrap().data, original);

        let hidden = keys.key("Hidden").unwrap();
        assert!(hidden.value().abs() < f64::EPSILON);
        for (shrunk, orig) in hidden.data.iter().zip(&original) {
            let expected = center + (orig - center) * 0.01;
            assert_relative_eq!(*shrunk, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn driving_the_key_interpolates_linearly() {
        let (mut scene, cube, _) = cube_scene();
        let original = scene.mesh(cube).unwrap().vertices.clone();
        GenerateHideKey::new(cube, centroid_config(0.0))
            .execute(&mut scene)
            .unwrap();

        let keys = scene.mesh_mut(cube).unwrap().shape_keys_mut().unwrap();
        assert_eq!(keys.evaluate().unwrap(), original);

        keys.key_mut("Hidden").unwrap().set_value(0.5);
        let half = keys.evaluate().unwrap();
        let center = p(1.0, 2.0, 3.0);
        for (h, orig) in half.iter().zip(&original) {
            assert_relative_eq!(*h, center + (orig - center) * 0.5, epsilon = 1e-12);
        }

        keys.key_mut("Hidden").unwrap().set_value(1.0);
        for v in keys.evaluate().unwrap() {
            assert_relative_eq!(v, center, epsilon = 1e-12);
        }
    }

    #[test]
    fn unit_factor_produces_identity_target() {
        let (mut scene, cube, _) = cube_scene();
        let original = scene.mesh(cube).unwrap().vertices.clone();
        GenerateHideKey::new(cube, centroid_config(1.0))
            .execute(&mut scene)
            .unwrap();

        let keys = scene.mesh(cube).unwrap().shape_keys().unwrap();
        assert_eq!(keys.key("Hidden").unwrap().data, original);
    }

    #[test]
    fn origin_mode_and_custom_name() {
        let (mut scene, cube, _) = cube_scene();
        let config = HideKeyConfig::new()
            .with_key_name("  Hide Jacket  ")
            .with_shrink_factor(0.5)
            .with_center_mode(CenterMode::Origin);
        let result = GenerateHideKey::new(cube, config).execute(&mut scene).unwrap();

        assert_eq!(result.key_name, "Hide Jacket");
        assert_eq!(result.center, Point3::origin());
        let keys = scene.mesh(cube).unwrap().shape_keys().unwrap();
        assert_relative_eq!(
            keys.key("Hide Jacket").unwrap().data[6],
            p(1.0, 2.0, 3.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn key_named_basis_is_renamed() {
        let (mut scene, cube, _) = cube_scene();
        let result = GenerateHideKey::new(cube, HideKeyConfig::new().with_key_name("Basis"))
            .execute(&mut scene)
            .unwrap();
        assert_eq!(result.key_name, "Basis.001");
        assert_eq!(scene.mesh(cube).unwrap().shape_keys().unwrap().len(), 2);
    }

    #[test]
    fn partial_material_selection() {
        let (mut scene, cube, m0, _) = split_cube_scene();
        scene.selector_mut(cube).unwrap().set_use_hide(m0, false);
        let original = scene.mesh(cube).unwrap().vertices.clone();

        let result = GenerateHideKey::new(cube, centroid_config(0.0))
            .execute(&mut scene)
            .unwrap();
        assert_eq!(result.affected_count, 4);
        assert_relative_eq!(result.center, p(1.0, 2.0, 6.0), epsilon = 1e-12);

        let hidden = &scene.mesh(cube).unwrap().shape_keys().unwrap().keys()[1];
        for i in 0..4 {
            assert_eq!(hidden.data[i], original[i], "vertex {i} should not move");
        }
        for i in 4..8 {
            assert_relative_eq!(hidden.data[i], result.center, epsilon = 1e-12);
        }
    }

    #[test]
    fn live_buffer_is_flagged_twice() {
        let (mut scene, cube, _) = cube_scene();
        let before = scene.mesh(cube).unwrap().revision();
        GenerateHideKey::new(cube, HideKeyConfig::new())
            .execute(&mut scene)
            .unwrap();
        assert_eq!(scene.mesh(cube).unwrap().revision(), before + 2);
    }

    #[test]
    fn existing_shape_key_blocks_generation() {
        let (mut scene, cube, _) = cube_scene();
        scene.mesh_mut(cube).unwrap().shape_key_add("Smile");
        let before = scene.mesh(cube).unwrap().clone();

        let err = GenerateHideKey::new(cube, HideKeyConfig::new())
            .execute(&mut scene)
            .unwrap_err();
        assert!(matches!(
            err,
            MaterialHideError::Operation(OperationError::ExistingShapeKeys)
        ));

        let after = scene.mesh(cube).unwrap();
        assert_eq!(after.shape_keys().unwrap().len(), 1);
        assert_eq!(after.vertices, before.vertices);
        assert_eq!(after.revision(), before.revision());
    }

    #[test]
    fn nothing_checked_is_rejected() {
        let (mut scene, cube, m0) = cube_scene();
        scene.selector_mut(cube).unwrap().set_use_hide(m0, false);
        let err = GenerateHideKey::new(cube, HideKeyConfig::new())
            .execute(&mut scene)
            .unwrap_err();
        assert!(matches!(
            err,
            MaterialHideError::Operation(OperationError::NoMaterialsSelected)
        ));
        assert!(!scene.mesh(cube).unwrap().has_shape_keys());
    }

    #[test]
    fn missing_selector_counts_as_nothing_checked() {
        let mut scene = Scene::new();
        let cube = scene.add_object(Object::mesh(
            "Cube",
            Mesh::cuboid(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0)),
        ));
        let err = GenerateHideKey::new(cube, HideKeyConfig::new())
            .execute(&mut scene)
            .unwrap_err();
        assert!(matches!(
            err,
            MaterialHideError::Operation(OperationError::NoMaterialsSelected)
        ));
    }

    #[test]
    fn checked_material_without_faces_is_rejected() {
        let (mut scene, cube, m0, _) = split_cube_scene();
        scene.mesh_mut(cube).unwrap().faces[1].material_index = 0;
        scene.selector_mut(cube).unwrap().set_use_hide(m0, false);
        let original = scene.mesh(cube).unwrap().vertices.clone();

        let err = GenerateHideKey::new(cube, HideKeyConfig::new())
            .execute(&mut scene)
            .unwrap_err();
        assert!(matches!(
            err,
            MaterialHideError::Operation(OperationError::NoAffectedVertices)
        ));
        let mesh = scene.mesh(cube).unwrap();
        assert!(!mesh.has_shape_keys());
        assert_eq!(mesh.vertices, original);
    }

    #[test]
    fn stale_selector_is_rejected() {
        let (mut scene, cube, _, m1) = split_cube_scene();
        scene.mesh_mut(cube).unwrap().material_slots = vec![Some(m1)];
        let err = GenerateHideKey::new(cube, HideKeyConfig::new())
            .execute(&mut scene)
            .unwrap_err();
        assert!(matches!(
            err,
            MaterialHideError::Operation(OperationError::StaleSelector { .. })
        ));
    }

    #[test]
    fn non_mesh_object_is_rejected() {
        let mut scene = Scene::new();
        let empty = scene.add_object(Object::empty("Empty"));
        let err = GenerateHideKey::new(empty, HideKeyConfig::new())
            .execute(&mut scene)
            .unwrap_err();
        assert!(matches!(err, MaterialHideError::Scene(SceneError::NotAMesh)));
    }
}
