//! # Mesh Merger
//!
//! Collapses a structure's parts into a single `Combined` part.

use crate::material::PartMaterial;
use crate::structure::StructurePart;
use config::constants::COMBINED_PART_NAME;
use glam::{DMat4, DVec3};
use structure_mesh::merge::concat;

/// Merges parts into one part at the structure origin.
///
/// Each part's mesh is moved by its offset, then all meshes are
/// concatenated with re-indexed triangles. The inputs are consumed.
///
/// # Example
///
/// ```rust
/// use structure_gen::{compose, merge_parts, PartMaterial, StructureParameters};
///
/// let composition = compose(&StructureParameters::default(), None).unwrap();
/// let merged = merge_parts(composition.parts, PartMaterial::Placeholder);
/// assert_eq!(merged.name, "Combined");
/// assert_eq!(merged.mesh.vertex_count(), 144);
/// ```
pub fn merge_parts(parts: Vec<StructurePart>, material: PartMaterial) -> StructurePart {
    let mesh = concat(
        parts
            .iter()
            .map(|part| (&part.mesh, DMat4::from_translation(part.offset))),
    );

    log::debug!(
        "Merged {} parts into `{COMBINED_PART_NAME}` ({} vertices, {} triangles)",
        parts.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    StructurePart::new(COMBINED_PART_NAME, DVec3::ZERO, mesh, material)
}
