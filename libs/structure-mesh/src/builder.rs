//! # Mesh Builder
//!
//! Accumulates flat-shaded quads into a [`MeshData`].
//!
//! ## Example
//!
//! ```rust
//! use structure_mesh::builder::MeshBuilder;
//! use glam::DVec3;
//!
//! let mut builder = MeshBuilder::with_quads(1);
//! builder.add_quad(
//!     [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
//!     DVec3::Z,
//! );
//! let mesh = builder.build();
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.triangle_count(), 2);
//! ```

use crate::mesh::MeshData;
use config::constants::EPSILON;
use glam::{DVec2, DVec3};

/// UVs applied to every quad: the unit square, corner order a, b, c, d.
pub const QUAD_UVS: [DVec2; 4] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(0.0, 1.0),
];

/// Mesh builder state.
///
/// Every quad gets four vertices of its own, so no vertex is shared between
/// faces and each face keeps a flat normal.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    triangles: Vec<[u32; 3]>,
}

impl MeshBuilder {
    /// Creates a builder with room for `count` quads.
    pub fn with_quads(count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(count * 4),
            normals: Vec::with_capacity(count * 4),
            uvs: Vec::with_capacity(count * 4),
            triangles: Vec::with_capacity(count * 2),
        }
    }

    /// Returns the number of vertices added so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Adds a quad (a, b, c, d) with an explicit flat normal.
    ///
    /// Triangulated as (a, b, c) and (a, c, d).
    pub fn add_quad(&mut self, corners: [DVec3; 4], normal: DVec3) {
        let i = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&corners);
        self.normals.extend_from_slice(&[normal; 4]);
        self.uvs.extend_from_slice(&QUAD_UVS);

        self.triangles.push([i, i + 1, i + 2]);
        self.triangles.push([i, i + 2, i + 3]);
    }

    /// Adds a quad whose normal is derived from its first corner.
    ///
    /// The normal is `normalize((b - a) x (d - a))`. When that cross product
    /// vanishes the quad has no area to orient by, and `fallback` is used.
    /// Returns the normal that was applied.
    pub fn add_oriented_quad(&mut self, corners: [DVec3; 4], fallback: DVec3) -> DVec3 {
        let normal = quad_normal(corners).unwrap_or(fallback);
        self.add_quad(corners, normal);
        normal
    }

    /// Finishes the mesh.
    pub fn build(self) -> MeshData {
        MeshData::from_raw(self.vertices, self.normals, self.uvs, self.triangles)
    }
}

/// Flat normal of a quad from the edges leaving its first corner.
///
/// Returns `None` when the cross product is no longer than [`EPSILON`]
/// (parallel or zero-length edges) or overflows.
pub fn quad_normal(corners: [DVec3; 4]) -> Option<DVec3> {
    let [a, b, _, d] = corners;
    let cross = (b - a).cross(d - a);
    let length = cross.length();
    if length.is_finite() && length > EPSILON {
        Some(cross / length)
    } else {
        None
    }
}
