use crate::math::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name given to the reference key of a shape-key stack.
pub const BASIS_NAME: &str = "Basis";

/// A named alternate set of vertex positions.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeKey {
    name: String,
    /// Stored per-vertex positions, in mesh vertex order.
    pub data: Vec<Point3>,
    value: f64,
    slider_min: f64,
    slider_max: f64,
}

impl ShapeKey {
    fn new(name: String, data: Vec<Point3>) -> Self {
        Self {
            name,
            data,
            value: 0.0,
            slider_min: 0.0,
            slider_max: 1.0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current blend weight.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sets the blend weight, clamped to the key's slider range.
    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(self.slider_min, self.slider_max);
    }

    /// Returns the `(min, max)` range [`set_value`](Self::set_value) clamps to.
    #[must_use]
    pub fn slider_range(&self) -> (f64, f64) {
        (self.slider_min, self.slider_max)
    }
}

/// The ordered shape-key stack of a mesh.
///
/// The first key is the reference (basis) key; every other key blends
/// relative to it: `displayed = basis + Σ value * (key - basis)`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeKeys {
    keys: Vec<ShapeKey>,
}

impl ShapeKeys {
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All keys in stack order.
    #[must_use]
    pub fn keys(&self) -> &[ShapeKey] {
        &self.keys
    }

    /// The reference key, if any key exists.
    #[must_use]
    pub fn reference(&self) -> Option<&ShapeKey> {
        self.keys.first()
    }

    /// Looks up a key by exact name.
    #[must_use]
    pub fn key(&self, name: &str) -> Option<&ShapeKey> {
        self.keys.iter().find(|k| k.name == name)
    }

    /// Looks up a key by exact name, mutably.
    pub fn key_mut(&mut self, name: &str) -> Option<&mut ShapeKey> {
        self.keys.iter_mut().find(|k| k.name == name)
    }

    /// Appends a key holding a copy of `positions` and returns it.
    ///
    /// If `name` is already taken, a `.001`, `.002`, ... suffix is added.
    pub fn push(&mut self, name: &str, positions: &[Point3]) -> &mut ShapeKey {
        let name = self.unique_name(name);
        let index = self.keys.len();
        self.keys.push(ShapeKey::new(name, positions.to_vec()));
        &mut self.keys[index]
    }

    fn unique_name(&self, name: &str) -> String {
        if self.key(name).is_none() {
            return name.to_owned();
        }
        (1_u32..)
            .map(|n| format!("{name}.{n:03}"))
            .find(|candidate| self.key(candidate).is_none())
            .unwrap_or_else(|| name.to_owned())
    }

    /// Computes displayed positions from the current key values.
    ///
    /// Returns `None` when the stack is empty.
    #[must_use]
    pub fn evaluate(&self) -> Option<Vec<Point3>> {
        let (basis, rest) = self.keys.split_first()?;
        let mut out = basis.data.clone();
        for key in rest {
            for ((o, b), t) in out.iter_mut().zip(&basis.data).zip(&key.data) {
                let delta: Vector3 = t - b;
                *o += delta * key.value;
            }
        }
        Some(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn duplicate_names_get_numbered_suffix() {
        let mut keys = ShapeKeys::default();
        let pts = [p(0.0, 0.0, 0.0)];
        keys.push(BASIS_NAME, &pts);
        assert_eq!(keys.push(BASIS_NAME, &pts).name(), "Basis.001");
        assert_eq!(keys.push(BASIS_NAME, &pts).name(), "Basis.002");
        assert_eq!(keys.push("Hidden", &pts).name(), "Hidden");
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn set_value_clamps_to_slider_range() {
        let mut keys = ShapeKeys::default();
        let key = keys.push("Hidden", &[]);
        key.set_value(1.5);
        assert_eq!(key.value(), 1.0);
        key.set_value(-0.5);
        assert_eq!(key.value(), 0.0);
    }

    #[test]
    fn evaluate_blends_relative_to_reference() {
        let mut keys = ShapeKeys::default();
        keys.push(BASIS_NAME, &[p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
        keys.push("Target", &[p(0.0, 0.0, 0.0), p(0.0, 4.0, 0.0)]);

        let rest = keys.evaluate().unwrap();
        assert_eq!(rest, keys.reference().unwrap().data);

        keys.key_mut("Target").unwrap().set_value(0.25);
        let mixed = keys.evaluate().unwrap();
        assert_relative_eq!(mixed[1], p(1.5, 1.0, 0.0), epsilon = 1e-12);

        keys.key_mut("Target").unwrap().set_value(1.0);
        let full = keys.evaluate().unwrap();
        assert_relative_eq!(full[1], p(0.0, 4.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn evaluate_empty_stack_is_none() {
        assert!(ShapeKeys::default().evaluate().is_none());
    }
}
