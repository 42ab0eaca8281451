//! # Primitives
//!
//! Hand-authored meshes for the parts of a structure (box, gable roof).

pub mod cuboid;
pub mod gable_roof;

pub use cuboid::build_box;
pub use gable_roof::{build_gable_roof, GABLE_ROOF_VERTEX_COUNT};
