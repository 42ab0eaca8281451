//! # Generation Errors and Warnings
//!
//! A generation pass over validated parameters cannot fail. Problems that
//! do not stop the pass are reported as [`GenerationWarning`]s, logged when
//! raised and kept on the resulting structure.

use crate::material::MaterialError;
use structure_mesh::MeshError;
use thiserror::Error;

/// Errors that abort a generation pass.
///
/// Only reachable when unvalidated parameters reach the composer.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A primitive rejected its dimensions
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

/// Non-fatal problems found while validating or generating.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerationWarning {
    /// A parameter was outside its bound and has been replaced
    #[error("Invalid parameter `{field}`: {given} replaced by {clamped}")]
    InvalidParameter {
        field: &'static str,
        given: f64,
        clamped: f64,
    },

    /// Well-defined dimensions that will look wrong
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// No material provider was injected
    #[error("No material provider, `{part}` uses the placeholder material")]
    MissingMaterialProvider { part: String },

    /// The provider could not supply a material
    #[error("Material for `{part}` unavailable, using the placeholder: {source}")]
    MaterialUnavailable {
        part: String,
        #[source]
        source: MaterialError,
    },
}

impl GenerationWarning {
    /// Creates a degenerate geometry warning.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Logs the warning and records it.
    pub(crate) fn emit(self, sink: &mut Vec<GenerationWarning>) {
        log::warn!("{self}");
        sink.push(self);
    }
}
