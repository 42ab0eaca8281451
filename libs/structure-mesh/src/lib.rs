//! # Structure Mesh
//!
//! Raw, flat-shaded mesh data for parametric buildings.
//!
//! ## Architecture
//!
//! ```text
//! dimensions → primitives (box, gable roof) → MeshData
//!                                     MeshData* → merge::concat → MeshData
//! ```
//!
//! ## Conventions
//!
//! - Y is up, the ridge of a gable roof runs along Z
//! - Counter-clockwise winding seen from outside (right-hand rule)
//! - No vertex is shared between faces, so every face keeps a flat normal
//! - Each quad maps the full unit square of texture space
//!
//! ## Usage
//!
//! ```rust
//! use structure_mesh::primitives::{build_box, build_gable_roof};
//!
//! let walls = build_box(8.0, 3.0, 6.0)?;
//! let roof = build_gable_roof(8.0, 6.0, 2.0, 0.35)?;
//! assert_eq!(walls.vertex_count() + roof.vertex_count(), 48);
//! # Ok::<(), structure_mesh::MeshError>(())
//! ```

pub mod builder;
pub mod error;
pub mod merge;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use mesh::MeshData;
pub use primitives::{build_box, build_gable_roof};
