//! # Mesh Data Structure
//!
//! Flat-shaded mesh representation: positions, normals, UVs and triangles.

use crate::error::MeshError;
use glam::{DMat4, DVec2, DVec3};
use serde::Serialize;

/// An immutable triangle mesh with per-vertex normals and UVs.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the GPU boundary.
///
/// The attribute buffers always have equal length and every triangle index
/// addresses the vertex buffer. A `MeshData` is produced by the primitive
/// builders, by [`crate::merge::concat`], or by [`MeshData::new`] which
/// checks those invariants.
///
/// # Example
///
/// ```rust
/// use structure_mesh::MeshData;
/// use glam::{DVec2, DVec3};
///
/// let mesh = MeshData::new(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![DVec3::Z; 3],
///     vec![DVec2::ZERO, DVec2::X, DVec2::Y],
///     vec![[0, 1, 2]],
/// )
/// .unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshData {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Unit normals, one per vertex
    normals: Vec<DVec3>,
    /// Texture coordinates, one per vertex
    uvs: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Default for MeshData {
    fn default() -> Self {
        Self::empty()
    }
}

impl MeshData {
    /// Creates a mesh from raw buffers, checking lengths and indices.
    pub fn new(
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        uvs: Vec<DVec2>,
        triangles: Vec<[u32; 3]>,
    ) -> Result<Self, MeshError> {
        let mesh = Self::from_raw(vertices, normals, uvs, triangles);
        mesh.validate()?;
        Ok(mesh)
    }

    /// Creates an empty mesh.
    pub fn empty() -> Self {
        Self::from_raw(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    /// Assembles a mesh whose invariants the caller already upholds.
    pub(crate) fn from_raw(
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        uvs: Vec<DVec2>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        Self {
            vertices,
            normals,
            uvs,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of triangle indices (three per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the UVs.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the unnormalized winding normal of a triangle.
    ///
    /// Follows the right-hand rule: counter-clockwise corners, seen from the
    /// front, produce a normal pointing at the viewer. Its length is twice
    /// the triangle's area.
    pub fn winding_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangles[index];
        let v0 = self.vertex(a);
        let v1 = self.vertex(b);
        let v2 = self.vertex(c);
        (v1 - v0).cross(v2 - v0)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Returns a copy with every vertex and normal transformed by a matrix.
    ///
    /// Normals use the inverse transpose so they stay perpendicular under
    /// non-uniform scale. UVs and triangles are copied unchanged.
    pub fn transformed(&self, matrix: &DMat4) -> MeshData {
        let normal_matrix = matrix.inverse().transpose();
        let vertices = self
            .vertices
            .iter()
            .map(|v| matrix.transform_point3(*v))
            .collect();
        let normals = self
            .normals
            .iter()
            .map(|n| normal_matrix.transform_vector3(*n).normalize_or_zero())
            .collect();

        Self::from_raw(vertices, normals, self.uvs.clone(), self.triangles.clone())
    }

    /// Returns a copy translated by an offset.
    pub fn translated(&self, offset: DVec3) -> MeshData {
        self.transformed(&DMat4::from_translation(offset))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Positions, normals and UVs have the same length
    /// - All triangle indices are valid
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.normals.len() != self.vertices.len() || self.uvs.len() != self.vertices.len() {
            return Err(MeshError::LengthMismatch {
                vertices: self.vertices.len(),
                normals: self.normals.len(),
                uvs: self.uvs.len(),
            });
        }

        let vertex_count = self.vertices.len();
        if u32::try_from(vertex_count).is_err() {
            return Err(MeshError::invalid_topology(format!(
                "{vertex_count} vertices cannot be addressed by u32 indices"
            )));
        }

        for (i, tri) in self.triangles.iter().enumerate() {
            if let Some(bad) = tri.iter().find(|&&idx| idx as usize >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {i} references vertex {bad} of {vertex_count}"
                )));
            }
        }

        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten3(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports UVs as a flattened [u, v, u, v, ...] f32 array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> MeshData {
        MeshData::new(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![DVec3::Z; 3],
            vec![DVec2::ZERO, DVec2::X, DVec2::Y],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_mesh_empty() {
        let mesh = MeshData::empty();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_mesh_new_valid() {
        let mesh = triangle();
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_mesh_new_rejects_bad_index() {
        let err = MeshData::new(
            vec![DVec3::ZERO],
            vec![DVec3::Z],
            vec![DVec2::ZERO],
            vec![[0, 1, 2]],
        )
        .unwrap_err();
        assert!(matches!(err, MeshError::InvalidTopology { .. }));
    }

    #[test]
    fn test_mesh_new_rejects_length_mismatch() {
        let err = MeshData::new(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![DVec3::Z; 2],
            vec![DVec2::ZERO; 3],
            vec![[0, 1, 2]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            MeshError::LengthMismatch {
                vertices: 3,
                normals: 2,
                uvs: 3
            }
        );
    }

    #[test]
    fn test_mesh_winding_normal_right_handed() {
        let mesh = triangle();
        let n = mesh.winding_normal(0);
        assert_relative_eq!(n.z, 1.0);
        assert_relative_eq!(n.x, 0.0);
    }

    #[test]
    fn test_mesh_translated_keeps_normals() {
        let mesh = triangle().translated(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
        for n in mesh.normals() {
            assert_relative_eq!(n.z, 1.0);
        }
        assert_eq!(mesh.uvs(), triangle().uvs());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mesh = triangle().translated(DVec3::splat(-1.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -1.0, -1.0));
        assert_eq!(max, DVec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_mesh_f32_exports() {
        let mesh = triangle();
        assert_eq!(mesh.vertices_f32(), vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(mesh.normals_f32().len(), 9);
        assert_eq!(mesh.uvs_f32(), vec![0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
    }
}
