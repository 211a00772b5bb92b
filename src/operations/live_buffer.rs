use crate::math::Point3;
use crate::scene::Mesh;

/// Scope guard over a mesh's live vertex buffer.
///
/// Snapshots the positions on creation and writes them back (flagging the
/// mesh as updated) when dropped, whether the scope ends normally, through
/// `?`, or by unwinding.
pub(crate) struct LiveBufferGuard<'a> {
    mesh: &'a mut Mesh,
    original: Vec<Point3>,
}

impl<'a> LiveBufferGuard<'a> {
    pub(crate) fn new(mesh: &'a mut Mesh) -> Self {
        let original = mesh.vertices.clone();
        Self { mesh, original }
    }

    pub(crate) fn mesh(&mut self) -> &mut Mesh {
        self.mesh
    }

    /// Replaces the live positions and flags the mesh as updated.
    pub(crate) fn write_live(&mut self, positions: &[Point3]) {
        self.mesh.vertices.clear();
        self.mesh.vertices.extend_from_slice(positions);
        self.mesh.update();
    }
}

impl Drop for LiveBufferGuard<'_> {
    fn drop(&mut self) {
        self.mesh.vertices.clone_from(&self.original);
        self.mesh.update();
    }
}
