//! # Structure Generator
//!
//! Owns the live [`GeneratedStructure`] and rebuilds it on request.
//!
//! A pass always destroys the previous structure before composing the next
//! one, so at most one generated subtree hangs under the anchor at any
//! time. The generator never decides how nodes die: it picks a
//! [`DestroyMode`] from the host's simulation state and the host does the
//! rest.
//!
//! ## Example
//!
//! ```rust
//! use structure_gen::{SceneGraph, SceneHost, StructureGenerator, StructureParameters};
//! use glam::DVec3;
//!
//! let mut scene = SceneGraph::new();
//! let anchor = scene.create_node("House", scene.root(), DVec3::ZERO);
//!
//! let mut generator = StructureGenerator::new(anchor);
//! let params = generator.validate(&StructureParameters::default());
//! let structure = generator.regenerate(&mut scene, &params).unwrap();
//! assert_eq!(structure.part_count(), 6);
//! ```

use crate::composer::compose;
use crate::error::GenerationError;
use crate::host::{DestroyMode, NodeId, SceneHost};
use crate::material::{resolve_material, MaterialProvider};
use crate::merger::merge_parts;
use crate::params::StructureParameters;
use crate::structure::{GeneratedStructure, SpawnedPart};
use config::constants::{COMBINED_PART_NAME, DEFAULT_COLOR, ROOT_NODE_NAME};
use glam::DVec3;
use log::{debug, trace, warn};
use std::fmt;

/// Runtime switches for a [`StructureGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Rebuild whenever the host reports an edited parameter set
    pub auto_regenerate: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            auto_regenerate: true,
        }
    }
}

/// Lifecycle manager for one generated structure.
pub struct StructureGenerator {
    anchor: NodeId,
    materials: Option<Box<dyn MaterialProvider>>,
    options: GeneratorOptions,
    current: Option<GeneratedStructure>,
}

impl fmt::Debug for StructureGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructureGenerator")
            .field("anchor", &self.anchor)
            .field("has_materials", &self.materials.is_some())
            .field("options", &self.options)
            .field("current", &self.current.as_ref().map(GeneratedStructure::root))
            .finish()
    }
}

impl StructureGenerator {
    /// Creates a generator that builds under `anchor`, without materials.
    pub fn new(anchor: NodeId) -> Self {
        Self {
            anchor,
            materials: None,
            options: GeneratorOptions::default(),
            current: None,
        }
    }

    /// Injects the material provider.
    pub fn with_materials(mut self, provider: impl MaterialProvider + 'static) -> Self {
        self.materials = Some(Box::new(provider));
        self
    }

    /// Replaces the runtime options.
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the node the structure is built under.
    pub fn anchor(&self) -> NodeId {
        self.anchor
    }

    /// Returns the runtime options.
    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    /// Returns the live structure, if any.
    pub fn current(&self) -> Option<&GeneratedStructure> {
        self.current.as_ref()
    }

    /// Clamps every parameter into its bound and logs each correction.
    ///
    /// Never rebuilds; pass the result to [`Self::regenerate`].
    pub fn validate(&self, params: &StructureParameters) -> StructureParameters {
        let (fixed, warnings) = params.clamped();
        for warning in &warnings {
            warn!("{warning}");
        }
        fixed
    }

    /// Destroys the previous structure and builds a new one.
    ///
    /// Besides the structure this generator owns, a stale root left under
    /// the anchor by an earlier session is removed too.
    ///
    /// # Errors
    ///
    /// Fails only for parameters that were not validated. The previous
    /// structure is gone at that point and [`Self::current`] is `None`.
    pub fn regenerate<H>(
        &mut self,
        host: &mut H,
        params: &StructureParameters,
    ) -> Result<&GeneratedStructure, GenerationError>
    where
        H: SceneHost + ?Sized,
    {
        let mode = DestroyMode::for_host(host.is_simulating());
        self.destroy_previous(host, mode);

        let composition = compose(params, self.materials.as_deref())?;
        let mut warnings = composition.warnings;

        let parts = if params.merge_output {
            let material = resolve_material(
                self.materials.as_deref(),
                COMBINED_PART_NAME,
                DEFAULT_COLOR,
                &mut warnings,
            );
            vec![merge_parts(composition.parts, material)]
        } else {
            composition.parts
        };

        let root = host.create_node(ROOT_NODE_NAME, self.anchor, DVec3::ZERO);
        let spawned: Vec<SpawnedPart> = parts
            .into_iter()
            .map(|part| {
                let node = host.create_node(&part.name, root, part.offset);
                trace!("Spawned `{}` as {node:?} at {}", part.name, part.offset);
                SpawnedPart { node, part }
            })
            .collect();

        let structure = GeneratedStructure::new(root, spawned, warnings);
        debug!(
            "Generated {} parts ({} vertices, {} triangles) under {:?}, previous destroyed {:?}",
            structure.part_count(),
            structure.vertex_count(),
            structure.triangle_count(),
            self.anchor,
            mode
        );

        Ok(self.current.insert(structure))
    }

    /// Destroys the live structure without building a new one.
    ///
    /// Returns false if there was nothing to destroy.
    pub fn clear<H>(&mut self, host: &mut H) -> bool
    where
        H: SceneHost + ?Sized,
    {
        let Some(previous) = self.current.take() else {
            return false;
        };
        let mode = DestroyMode::for_host(host.is_simulating());
        debug!("Clearing structure {:?} ({mode:?})", previous.root());
        host.destroy_node(previous.root(), mode);
        true
    }

    /// Entry point for the host's editing surface.
    ///
    /// Validates the edited parameters and, when
    /// [`GeneratorOptions::auto_regenerate`] is on, rebuilds with them.
    /// Returns the corrected parameters for the host to store back.
    pub fn on_parameters_edited<H>(
        &mut self,
        host: &mut H,
        params: &StructureParameters,
    ) -> Result<StructureParameters, GenerationError>
    where
        H: SceneHost + ?Sized,
    {
        let fixed = self.validate(params);
        if self.options.auto_regenerate {
            self.regenerate(host, &fixed)?;
        }
        Ok(fixed)
    }

    fn destroy_previous<H>(&mut self, host: &mut H, mode: DestroyMode)
    where
        H: SceneHost + ?Sized,
    {
        if let Some(previous) = self.current.take() {
            host.destroy_node(previous.root(), mode);
        }
        // Deferred destruction hides the node from lookups, so this only
        // finds roots this generator does not know about
        let mut last = None;
        while let Some(stale) = host.find_child(self.anchor, ROOT_NODE_NAME) {
            if last == Some(stale) {
                warn!("Host still reports destroyed node {stale:?}, giving up on stale roots");
                break;
            }
            debug!("Removing stale structure {stale:?} under {:?}", self.anchor);
            host.destroy_node(stale, mode);
            last = Some(stale);
        }
    }
}
