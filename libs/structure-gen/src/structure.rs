//! # Structure Parts
//!
//! The output of a generation pass: named, positioned meshes and the host
//! nodes that anchor them.

use crate::error::GenerationWarning;
use crate::host::NodeId;
use crate::material::PartMaterial;
use glam::DVec3;
use structure_mesh::MeshData;

/// One positioned piece of the structure.
#[derive(Debug, Clone, PartialEq)]
pub struct StructurePart {
    pub name: String,
    /// Position relative to the structure root (rotation is identity)
    pub offset: DVec3,
    pub mesh: MeshData,
    pub material: PartMaterial,
}

impl StructurePart {
    /// Creates a part.
    pub fn new(name: impl Into<String>, offset: DVec3, mesh: MeshData, material: PartMaterial) -> Self {
        Self {
            name: name.into(),
            offset,
            mesh,
            material,
        }
    }

    /// Returns the mesh moved into structure-local space.
    pub fn placed_mesh(&self) -> MeshData {
        self.mesh.translated(self.offset)
    }
}

/// A part together with the host node created for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedPart {
    pub node: NodeId,
    pub part: StructurePart,
}

/// The live result of the latest generation pass.
///
/// Owned by exactly one [`crate::StructureGenerator`]; replaced wholesale on
/// every regeneration.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedStructure {
    root: NodeId,
    parts: Vec<SpawnedPart>,
    warnings: Vec<GenerationWarning>,
}

impl GeneratedStructure {
    pub(crate) fn new(root: NodeId, parts: Vec<SpawnedPart>, warnings: Vec<GenerationWarning>) -> Self {
        Self {
            root,
            parts,
            warnings,
        }
    }

    /// Returns the root anchor node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the parts with their nodes, in composition order.
    pub fn spawned(&self) -> &[SpawnedPart] {
        &self.parts
    }

    /// Iterates over the parts in composition order.
    pub fn parts(&self) -> impl Iterator<Item = &StructurePart> {
        self.parts.iter().map(|spawned| &spawned.part)
    }

    /// Finds a part by name.
    pub fn part(&self, name: &str) -> Option<&StructurePart> {
        self.parts().find(|part| part.name == name)
    }

    /// Returns the part names in order.
    pub fn part_names(&self) -> Vec<&str> {
        self.parts().map(|part| part.name.as_str()).collect()
    }

    /// Returns the number of parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Returns the total vertex count over all parts.
    pub fn vertex_count(&self) -> usize {
        self.parts().map(|part| part.mesh.vertex_count()).sum()
    }

    /// Returns the total triangle count over all parts.
    pub fn triangle_count(&self) -> usize {
        self.parts().map(|part| part.mesh.triangle_count()).sum()
    }

    /// Returns the warnings raised while generating.
    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }
}
