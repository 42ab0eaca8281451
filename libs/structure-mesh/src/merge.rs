//! # Mesh Concatenation
//!
//! Joins placed meshes into one buffer set without welding.

use crate::mesh::MeshData;
use glam::DMat4;

/// Concatenates meshes after moving each into a shared space.
///
/// Every input is transformed by its matrix, its attributes are appended in
/// order, and its triangles are re-indexed by the number of vertices that
/// precede it. Vertex and triangle counts of the result are the sums of the
/// inputs; coincident vertices are kept apart.
///
/// # Example
///
/// ```rust
/// use structure_mesh::{merge::concat, primitives::build_box};
/// use glam::{DMat4, DVec3};
///
/// let a = build_box(1.0, 1.0, 1.0).unwrap();
/// let b = build_box(1.0, 1.0, 1.0).unwrap();
/// let merged = concat([
///     (&a, DMat4::IDENTITY),
///     (&b, DMat4::from_translation(DVec3::X * 2.0)),
/// ]);
/// assert_eq!(merged.vertex_count(), 48);
/// assert_eq!(merged.triangle(12), [24, 25, 26]);
/// ```
pub fn concat<'a, I>(placed: I) -> MeshData
where
    I: IntoIterator<Item = (&'a MeshData, DMat4)>,
{
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut triangles = Vec::new();

    for (mesh, matrix) in placed {
        let moved = mesh.transformed(&matrix);
        let offset = vertices.len() as u32;

        vertices.extend_from_slice(moved.vertices());
        normals.extend_from_slice(moved.normals());
        uvs.extend_from_slice(moved.uvs());
        triangles.extend(
            moved
                .triangles()
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    MeshData::from_raw(vertices, normals, uvs, triangles)
}
