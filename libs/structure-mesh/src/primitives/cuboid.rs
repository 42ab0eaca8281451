//! # Box Primitive
//!
//! Generates a flat-shaded, axis-aligned rectangular box.

use crate::builder::MeshBuilder;
use crate::error::{require_positive, MeshError};
use crate::mesh::MeshData;
use glam::DVec3;

/// Creates a box centered at the origin.
///
/// # Arguments
///
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
///
/// # Returns
///
/// A mesh with 24 vertices (four per face, none shared) and 12 triangles.
/// Faces are emitted in the order +Z, -Z, -X, +X, +Y, -Y; each carries its
/// axis as a flat normal and the unit square as UVs.
///
/// # Example
///
/// ```rust
/// use structure_mesh::primitives::build_box;
///
/// let mesh = build_box(2.0, 3.0, 4.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.index_count(), 36);
/// ```
pub fn build_box(width: f64, height: f64, depth: f64) -> Result<MeshData, MeshError> {
    require_positive("box", &[("width", width), ("height", height), ("depth", depth)])?;

    let hx = width * 0.5;
    let hy = height * 0.5;
    let hz = depth * 0.5;

    let mut builder = MeshBuilder::with_quads(6);

    // Corners run counter-clockwise seen from outside each face

    // Front (z+)
    builder.add_quad(
        [
            DVec3::new(-hx, -hy, hz),
            DVec3::new(hx, -hy, hz),
            DVec3::new(hx, hy, hz),
            DVec3::new(-hx, hy, hz),
        ],
        DVec3::Z,
    );

    // Back (z-)
    builder.add_quad(
        [
            DVec3::new(hx, -hy, -hz),
            DVec3::new(-hx, -hy, -hz),
            DVec3::new(-hx, hy, -hz),
            DVec3::new(hx, hy, -hz),
        ],
        DVec3::NEG_Z,
    );

    // Left (x-)
    builder.add_quad(
        [
            DVec3::new(-hx, -hy, -hz),
            DVec3::new(-hx, -hy, hz),
            DVec3::new(-hx, hy, hz),
            DVec3::new(-hx, hy, -hz),
        ],
        DVec3::NEG_X,
    );

    // Right (x+)
    builder.add_quad(
        [
            DVec3::new(hx, -hy, hz),
            DVec3::new(hx, -hy, -hz),
            DVec3::new(hx, hy, -hz),
            DVec3::new(hx, hy, hz),
        ],
        DVec3::X,
    );

    // Top (y+)
    builder.add_quad(
        [
            DVec3::new(-hx, hy, hz),
            DVec3::new(hx, hy, hz),
            DVec3::new(hx, hy, -hz),
            DVec3::new(-hx, hy, -hz),
        ],
        DVec3::Y,
    );

    // Bottom (y-)
    builder.add_quad(
        [
            DVec3::new(-hx, -hy, -hz),
            DVec3::new(hx, -hy, -hz),
            DVec3::new(hx, -hy, hz),
            DVec3::new(-hx, -hy, hz),
        ],
        DVec3::NEG_Y,
    );

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::QUAD_UVS;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_counts() {
        let mesh = build_box(8.0, 3.0, 6.0).unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.normals().len(), 24);
        assert_eq!(mesh.uvs().len(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert!(mesh.indices_u32().iter().all(|&i| i < 24));
    }

    #[test]
    fn test_box_centered() {
        let mesh = build_box(2.0, 4.0, 6.0).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_box_face_order_and_normals() {
        let mesh = build_box(1.0, 1.0, 1.0).unwrap();
        let expected = [
            DVec3::Z,
            DVec3::NEG_Z,
            DVec3::NEG_X,
            DVec3::X,
            DVec3::Y,
            DVec3::NEG_Y,
        ];
        for (face, axis) in expected.iter().enumerate() {
            for n in &mesh.normals()[face * 4..face * 4 + 4] {
                assert_eq!(n, axis);
            }
            // Every corner of the face lies on the face plane
            for v in &mesh.vertices()[face * 4..face * 4 + 4] {
                assert_relative_eq!(v.dot(*axis), 0.5);
            }
        }
    }

    #[test]
    fn test_box_winding_matches_face_normal() {
        let mesh = build_box(3.0, 2.0, 5.0).unwrap();
        for t in 0..mesh.triangle_count() {
            let [a, _, _] = mesh.triangle(t);
            let declared = mesh.normals()[a as usize];
            let winding = mesh.winding_normal(t).normalize();
            assert_relative_eq!(winding.dot(declared), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_box_uvs_unit_square_per_face() {
        let mesh = build_box(1.0, 2.0, 3.0).unwrap();
        for face in mesh.uvs().chunks(4) {
            assert_eq!(face, &QUAD_UVS);
        }
    }

    #[test]
    fn test_box_validates() {
        assert!(build_box(1.0, 1.0, 1.0).unwrap().validate().is_ok());
    }

    #[test]
    fn test_box_invalid_size() {
        assert!(build_box(0.0, 10.0, 10.0).is_err());
        assert!(build_box(-5.0, 10.0, 10.0).is_err());
        assert!(build_box(1.0, f64::NAN, 1.0).is_err());
        assert!(build_box(1.0, 1.0, f64::INFINITY).is_err());
    }
}
