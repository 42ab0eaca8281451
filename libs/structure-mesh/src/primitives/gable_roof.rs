//! # Gable Roof Primitive
//!
//! Generates a two-slope roof whose ridge runs along Z at x = 0.
//!
//! The roof is built only from quads:
//!
//! ```text
//!              ridge (y = h)
//!                 /\
//!    left slope  /  \  right slope
//!               /    \
//!   -extW ____ /______\ ____ +extW     y = 0
//!            -halfW  +halfW
//! ```
//!
//! The gable ends are quads with their two top corners collapsed onto the
//! apex, one exactly at the ridge and one [`GABLE_APEX_EPSILON`] below it.
//! This approximates a triangular cap while keeping four vertices per face.

use crate::builder::MeshBuilder;
use crate::error::{require_positive, MeshError};
use crate::mesh::MeshData;
use config::constants::GABLE_APEX_EPSILON;
use glam::DVec3;

/// Number of vertices every gable roof has (six quads).
pub const GABLE_ROOF_VERTEX_COUNT: usize = 24;

/// Creates a gable roof sitting on y = 0.
///
/// # Arguments
///
/// * `house_width` - Wall span along X
/// * `house_depth` - Wall span along Z
/// * `ridge_height` - Height of the ridge above the eaves
/// * `overhang` - Horizontal extension past the walls on every side
///
/// # Returns
///
/// A mesh of six quads in order: right slope, left slope, front cap, back
/// cap, front eave underside, back eave underside. 24 vertices and 12
/// triangles regardless of the dimensions.
///
/// # Example
///
/// ```rust
/// use structure_mesh::primitives::build_gable_roof;
///
/// let roof = build_gable_roof(8.0, 6.0, 2.0, 0.35).unwrap();
/// assert_eq!(roof.vertex_count(), 24);
/// let (_, max) = roof.bounding_box();
/// assert_eq!(max.y, 2.0);
/// ```
pub fn build_gable_roof(
    house_width: f64,
    house_depth: f64,
    ridge_height: f64,
    overhang: f64,
) -> Result<MeshData, MeshError> {
    require_positive(
        "gable roof",
        &[
            ("width", house_width),
            ("depth", house_depth),
            ("ridge height", ridge_height),
        ],
    )?;
    if !overhang.is_finite() || overhang < 0.0 {
        return Err(MeshError::degenerate(format!(
            "gable roof overhang must be finite and non-negative: {overhang}"
        )));
    }

    let half_w = house_width * 0.5;
    let half_d = house_depth * 0.5;
    let ext_w = half_w + overhang;
    let ext_d = half_d + overhang;
    let ridge_y = ridge_height;
    let apex_low = ridge_height - GABLE_APEX_EPSILON;

    let mut builder = MeshBuilder::with_quads(6);

    // Right slope (x+)
    builder.add_oriented_quad(
        [
            DVec3::new(0.0, ridge_y, ext_d),
            DVec3::new(ext_w, 0.0, ext_d),
            DVec3::new(ext_w, 0.0, -ext_d),
            DVec3::new(0.0, ridge_y, -ext_d),
        ],
        DVec3::new(ridge_height, ext_w, 0.0)
            .try_normalize()
            .unwrap_or(DVec3::Y),
    );

    // Left slope (x-)
    builder.add_oriented_quad(
        [
            DVec3::new(-ext_w, 0.0, ext_d),
            DVec3::new(0.0, ridge_y, ext_d),
            DVec3::new(0.0, ridge_y, -ext_d),
            DVec3::new(-ext_w, 0.0, -ext_d),
        ],
        DVec3::new(-ridge_height, ext_w, 0.0)
            .try_normalize()
            .unwrap_or(DVec3::Y),
    );

    // Front cap (z+): the lower apex corner comes first so (a, c, d) keeps
    // the same winding as (a, b, c)
    builder.add_oriented_quad(
        [
            DVec3::new(-half_w, 0.0, ext_d),
            DVec3::new(half_w, 0.0, ext_d),
            DVec3::new(0.0, apex_low, ext_d),
            DVec3::new(0.0, ridge_y, ext_d),
        ],
        DVec3::Z,
    );

    // Back cap (z-)
    builder.add_oriented_quad(
        [
            DVec3::new(half_w, 0.0, -ext_d),
            DVec3::new(-half_w, 0.0, -ext_d),
            DVec3::new(0.0, apex_low, -ext_d),
            DVec3::new(0.0, ridge_y, -ext_d),
        ],
        DVec3::NEG_Z,
    );

    // Front eave underside: from the overhanging edge back to the wall line
    builder.add_oriented_quad(
        [
            DVec3::new(ext_w, 0.0, ext_d),
            DVec3::new(-ext_w, 0.0, ext_d),
            DVec3::new(-half_w, 0.0, half_d),
            DVec3::new(half_w, 0.0, half_d),
        ],
        DVec3::NEG_Y,
    );

    // Back eave underside
    builder.add_oriented_quad(
        [
            DVec3::new(-ext_w, 0.0, -ext_d),
            DVec3::new(ext_w, 0.0, -ext_d),
            DVec3::new(half_w, 0.0, -half_d),
            DVec3::new(-half_w, 0.0, -half_d),
        ],
        DVec3::NEG_Y,
    );

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn roof() -> MeshData {
        build_gable_roof(8.0, 6.0, 2.0, 0.35).unwrap()
    }

    #[test]
    fn test_roof_counts() {
        let mesh = roof();
        assert_eq!(mesh.vertex_count(), GABLE_ROOF_VERTEX_COUNT);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_roof_topology_independent_of_dimensions() {
        let small = build_gable_roof(1.0, 1.0, 0.2, 0.0).unwrap();
        let large = build_gable_roof(40.0, 25.0, 9.0, 1.5).unwrap();
        assert_eq!(small.vertex_count(), large.vertex_count());
        assert_eq!(small.triangles(), large.triangles());
    }

    #[test]
    fn test_roof_ridge_vertices() {
        let mesh = roof();
        let ridge: Vec<_> = mesh.vertices().iter().filter(|v| v.x == 0.0).collect();
        // Two per slope and two per cap
        assert_eq!(ridge.len(), 8);
        for v in &ridge {
            assert!(v.y == 2.0 || v.y == 2.0 - GABLE_APEX_EPSILON, "ridge vertex {v:?}");
        }
        let exact = ridge.iter().filter(|v| v.y == 2.0).count();
        assert_eq!(exact, 6);
    }

    #[test]
    fn test_roof_eave_vertices() {
        let mesh = roof();
        for v in mesh.vertices().iter().filter(|v| v.y == 0.0) {
            let ax = v.x.abs();
            assert!(ax == 4.0 + 0.35 || ax == 4.0, "eave vertex {v:?}");
        }
    }

    #[test]
    fn test_roof_extends_past_footprint() {
        let (min, max) = roof().bounding_box();
        assert_relative_eq!(min.x, -4.35);
        assert_relative_eq!(max.x, 4.35);
        assert_relative_eq!(min.z, -3.35);
        assert_relative_eq!(max.z, 3.35);
        assert_eq!(min.y, 0.0);
        assert_eq!(max.y, 2.0);
    }

    #[test]
    fn test_roof_normals_flat_and_unit() {
        let mesh = roof();
        for quad in mesh.normals().chunks(4) {
            assert!(quad.iter().all(|n| *n == quad[0]));
            assert_relative_eq!(quad[0].length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_roof_face_directions() {
        let mesh = roof();
        let n = |quad: usize| mesh.normals()[quad * 4];
        assert!(n(0).x > 0.0 && n(0).y > 0.0);
        assert!(n(1).x < 0.0 && n(1).y > 0.0);
        assert_eq!(n(2), DVec3::Z);
        assert_eq!(n(3), DVec3::NEG_Z);
        assert_eq!(n(4), DVec3::NEG_Y);
        assert_eq!(n(5), DVec3::NEG_Y);
    }

    #[test]
    fn test_roof_winding_matches_flat_normals() {
        let mesh = roof();
        for t in 0..mesh.triangle_count() {
            let [a, _, _] = mesh.triangle(t);
            let declared = mesh.normals()[a as usize];
            let winding = mesh.winding_normal(t);
            // The sliver triangle of each cap has tiny area; only its sign matters
            assert!(winding.dot(declared) > 0.0, "triangle {t} winds inward");
        }
    }

    #[test]
    fn test_roof_zero_overhang_uses_fallback_normal() {
        let mesh = build_gable_roof(4.0, 4.0, 1.0, 0.0).unwrap();
        for n in &mesh.normals()[16..24] {
            assert_eq!(*n, DVec3::NEG_Y);
        }
    }

    #[test]
    fn test_roof_normals_stay_unit_for_huge_dimensions() {
        let mesh = build_gable_roof(f64::MAX, 1e300, 2.0, 0.35).unwrap();
        for n in mesh.normals() {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        }
        assert_eq!(mesh.normals()[0], DVec3::Y);
    }

    #[test]
    fn test_roof_invalid_dimensions() {
        assert!(build_gable_roof(0.0, 6.0, 2.0, 0.35).is_err());
        assert!(build_gable_roof(8.0, 6.0, -1.0, 0.35).is_err());
        assert!(build_gable_roof(8.0, 6.0, 2.0, -0.1).is_err());
        assert!(build_gable_roof(8.0, 6.0, 2.0, f64::NAN).is_err());
    }
}
