//! # Mesh Errors
//!
//! Error types for mesh construction.

use thiserror::Error;

/// Errors that can occur while building or assembling mesh data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Dimensions that cannot produce a solid (zero, negative or non-finite)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Triangle indices that do not address the vertex buffer
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Attribute buffers of different lengths
    #[error("Attribute length mismatch: {vertices} vertices, {normals} normals, {uvs} uvs")]
    LengthMismatch {
        vertices: usize,
        normals: usize,
        uvs: usize,
    },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

/// Rejects any dimension that is not a finite, strictly positive number.
///
/// `what` names the primitive in the error message.
pub(crate) fn require_positive(what: &str, dims: &[(&str, f64)]) -> Result<(), MeshError> {
    for (name, value) in dims {
        if !value.is_finite() || *value <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "{what} {name} must be positive and finite: {value}"
            )));
        }
    }
    Ok(())
}
