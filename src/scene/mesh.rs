use super::material::MaterialId;
use super::shape_key::{ShapeKey, ShapeKeys};
use crate::error::SceneError;
use crate::math::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon face of a mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// Indices into [`Mesh::vertices`].
    pub vertices: Vec<usize>,
    /// Index into [`Mesh::material_slots`].
    pub material_index: usize,
}

impl Polygon {
    #[must_use]
    pub fn new(vertices: Vec<usize>, material_index: usize) -> Self {
        Self {
            vertices,
            material_index,
        }
    }
}

/// Polygon mesh data: the live vertex buffer, faces, material slots and
/// shape keys.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh {
    /// Live (displayed) vertex positions.
    pub vertices: Vec<Point3>,
    pub faces: Vec<Polygon>,
    /// Material slots; `None` is an empty slot.
    pub material_slots: Vec<Option<MaterialId>>,
    shape_keys: Option<ShapeKeys>,
    revision: u64,
}

impl Mesh {
    /// Creates a mesh with no material slots and no shape keys.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, faces: Vec<Polygon>) -> Self {
        Self {
            vertices,
            faces,
            ..Self::default()
        }
    }

    /// Creates an axis-aligned box with 8 vertices and 6 quad faces, all
    /// using material slot 0.
    ///
    /// Vertices 0-3 are the `min.z` ring and 4-7 the `max.z` ring, each
    /// counter-clockwise from the `(min.x, min.y)` corner.
    #[must_use]
    pub fn cuboid(min: Point3, max: Point3) -> Self {
        let corner = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
        let vertices = vec![
            corner(min.x, min.y, min.z),
            corner(max.x, min.y, min.z),
            corner(max.x, max.y, min.z),
            corner(min.x, max.y, min.z),
            corner(min.x, min.y, max.z),
            corner(max.x, min.y, max.z),
            corner(max.x, max.y, max.z),
            corner(min.x, max.y, max.z),
        ];
        let faces = [
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [1, 2, 6, 5],
            [2, 3, 7, 6],
            [3, 0, 4, 7],
        ]
        .into_iter()
        .map(|quad| Polygon::new(quad.to_vec(), 0))
        .collect();
        Self::new(vertices, faces)
    }

    /// Replaces the material slot list.
    #[must_use]
    pub fn with_material_slots(mut self, slots: Vec<Option<MaterialId>>) -> Self {
        self.material_slots = slots;
        self
    }

    /// Checks that every face references existing vertices.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidMesh`] naming the first bad face.
    pub fn validate(&self) -> Result<(), SceneError> {
        let count = self.vertices.len();
        for (fi, face) in self.faces.iter().enumerate() {
            if let Some(&vi) = face.vertices.iter().find(|&&vi| vi >= count) {
                return Err(SceneError::InvalidMesh(format!(
                    "face {fi} references vertex {vi}, mesh has {count} vertices"
                )));
            }
        }
        Ok(())
    }

    /// Marks the live vertex buffer as changed.
    pub fn update(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Number of times [`update`](Self::update) has been called.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if the mesh carries any shape-key data.
    #[must_use]
    pub fn has_shape_keys(&self) -> bool {
        self.shape_keys.is_some()
    }

    #[must_use]
    pub fn shape_keys(&self) -> Option<&ShapeKeys> {
        self.shape_keys.as_ref()
    }

    pub fn shape_keys_mut(&mut self) -> Option<&mut ShapeKeys> {
        self.shape_keys.as_mut()
    }

    /// Adds a shape key capturing the current live positions.
    ///
    /// The new key takes the live buffer as-is, never the evaluated mix of
    /// existing keys. The first key added becomes the reference key.
    pub fn shape_key_add(&mut self, name: &str) -> &mut ShapeKey {
        let Self {
            vertices,
            shape_keys,
            ..
        } = self;
        shape_keys.get_or_insert_with(ShapeKeys::default).push(name, vertices)
    }

    /// Drops all shape keys.
    pub fn clear_shape_keys(&mut self) {
        self.shape_keys = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scene::shape_key::BASIS_NAME;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn cuboid_layout() {
        let mesh = Mesh::cuboid(p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.faces.len(), 6);
        assert_eq!(mesh.vertices[6], p(1.0, 2.0, 3.0));
        assert!(mesh.faces.iter().all(|f| f.vertices.len() == 4));
        assert!(mesh.faces.iter().all(|f| f.material_index == 0));
        mesh.validate().unwrap();

        // Every vertex belongs to exactly three faces.
        for vi in 0..8 {
            let uses = mesh.faces.iter().filter(|f| f.vertices.contains(&vi)).count();
            assert_eq!(uses, 3, "vertex {vi}");
        }
    }

    #[test]
    fn validate_rejects_out_of_range_vertex() {
        let mesh = Mesh::new(vec![p(0.0, 0.0, 0.0)], vec![Polygon::new(vec![0, 3], 0)]);
        let err = mesh.validate().unwrap_err();
        assert!(err.to_string().contains("face 0 references vertex 3"));
    }

    #[test]
    fn shape_key_add_captures_live_positions() {
        let mut mesh = Mesh::cuboid(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        assert!(!mesh.has_shape_keys());

        mesh.shape_key_add(BASIS_NAME);
        mesh.vertices[0] = p(-1.0, -1.0, -1.0);
        mesh.shape_key_add("Moved");

        let keys = mesh.shape_keys().unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.reference().unwrap().data[0], p(0.0, 0.0, 0.0));
        assert_eq!(keys.key("Moved").unwrap().data[0], p(-1.0, -1.0, -1.0));

        mesh.clear_shape_keys();
        assert!(!mesh.has_shape_keys());
    }

    #[test]
    fn update_bumps_revision() {
        let mut mesh = Mesh::default();
        assert_eq!(mesh.revision(), 0);
        mesh.update();
        mesh.update();
        assert_eq!(mesh.revision(), 2);
    }
}
