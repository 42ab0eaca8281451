//! # Structure Gen
//!
//! Parametric country-house generator: walls, a gable roof, an optional
//! chimney and an optional porch, built from a handful of numbers.
//!
//! ## Architecture
//!
//! ```text
//! StructureParameters → validate (clamp) → compose → [merge] → SceneHost nodes
//!                                              ↓
//!                                   structure-mesh primitives
//! ```
//!
//! The crate never owns a scene. A host implements [`SceneHost`] (and
//! optionally [`MaterialProvider`]); [`StructureGenerator`] drives a pass
//! against it and keeps the resulting [`GeneratedStructure`]. [`SceneGraph`]
//! is an in-memory host for tools and tests.
//!
//! ## Usage
//!
//! ```rust
//! use structure_gen::{SceneGraph, SceneHost, StructureGenerator, StructureParameters};
//! use glam::DVec3;
//!
//! let mut scene = SceneGraph::new();
//! let anchor = scene.create_node("House", scene.root(), DVec3::ZERO);
//! let mut generator = StructureGenerator::new(anchor);
//!
//! let params = generator.validate(&StructureParameters {
//!     merge_output: true,
//!     ..Default::default()
//! });
//! let house = generator.regenerate(&mut scene, &params)?;
//! assert_eq!(house.part_names(), vec!["Combined"]);
//! # Ok::<(), structure_gen::GenerationError>(())
//! ```

pub mod composer;
pub mod error;
pub mod generator;
pub mod host;
pub mod material;
pub mod merger;
pub mod params;
pub mod preview;
pub mod scene;
pub mod structure;

pub use composer::{compose, Composition};
pub use error::{GenerationError, GenerationWarning};
pub use generator::{GeneratorOptions, StructureGenerator};
pub use host::{DestroyMode, NodeId, SceneHost};
pub use material::{MaterialError, MaterialHandle, MaterialLibrary, MaterialProvider, PartMaterial, Rgba};
pub use merger::merge_parts;
pub use params::{ChimneyParameters, PorchParameters, StructureParameters};
pub use preview::{preview_outline, PreviewBox, PreviewOutline};
pub use scene::{SceneGraph, SceneNode};
pub use structure::{GeneratedStructure, SpawnedPart, StructurePart};
