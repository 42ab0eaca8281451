//! # Materials
//!
//! The generator never picks shaders itself. It asks an injected
//! [`MaterialProvider`] for a material of a given color and stores the
//! returned handle on each part. When no provider is available, or the
//! provider fails, the part falls back to [`PartMaterial::Placeholder`] and
//! the pass carries on.

use crate::error::GenerationWarning;
use std::cell::RefCell;
use thiserror::Error;

/// Linear RGBA color.
pub type Rgba = [f32; 4];

/// Opaque handle to a host-side material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u64);

/// The material a part is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartMaterial {
    /// Supplied by the material provider
    Provided(MaterialHandle),
    /// Default unshaded appearance chosen by the host
    Placeholder,
}

impl PartMaterial {
    /// Returns the provider handle, if any.
    pub fn handle(&self) -> Option<MaterialHandle> {
        match self {
            PartMaterial::Provided(handle) => Some(*handle),
            PartMaterial::Placeholder => None,
        }
    }
}

/// Errors a provider may report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MaterialError {
    /// The requested shader or material template does not exist
    #[error("Shader not found: {0}")]
    ShaderNotFound(String),

    /// Any other provider failure
    #[error("Material provider failed: {0}")]
    Failed(String),
}

/// Host capability that turns a color into a material handle.
pub trait MaterialProvider {
    fn provide(&self, color: Rgba) -> Result<MaterialHandle, MaterialError>;
}

impl<F> MaterialProvider for F
where
    F: Fn(Rgba) -> Result<MaterialHandle, MaterialError>,
{
    fn provide(&self, color: Rgba) -> Result<MaterialHandle, MaterialError> {
        self(color)
    }
}

/// In-memory provider that hands out one handle per distinct color.
///
/// Useful for headless hosts: parts sharing a color share a handle.
///
/// # Example
///
/// ```rust
/// use structure_gen::material::{MaterialLibrary, MaterialProvider};
///
/// let library = MaterialLibrary::default();
/// let a = library.provide([1.0, 0.0, 0.0, 1.0]).unwrap();
/// let b = library.provide([1.0, 0.0, 0.0, 1.0]).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(library.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MaterialLibrary {
    colors: RefCell<Vec<Rgba>>,
}

impl MaterialLibrary {
    /// Returns the number of distinct materials handed out.
    pub fn len(&self) -> usize {
        self.colors.borrow().len()
    }

    /// Returns true if no material has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.colors.borrow().is_empty()
    }

    /// Returns the color a handle was created for.
    pub fn color(&self, handle: MaterialHandle) -> Option<Rgba> {
        self.colors.borrow().get(handle.0 as usize).copied()
    }
}

impl MaterialProvider for MaterialLibrary {
    fn provide(&self, color: Rgba) -> Result<MaterialHandle, MaterialError> {
        let mut colors = self.colors.borrow_mut();
        let index = match colors.iter().position(|c| *c == color) {
            Some(index) => index,
            None => {
                colors.push(color);
                colors.len() - 1
            }
        };
        Ok(MaterialHandle(index as u64))
    }
}

/// Asks the provider for a part's material, degrading to the placeholder.
pub(crate) fn resolve_material(
    provider: Option<&dyn MaterialProvider>,
    part: &str,
    color: Rgba,
    warnings: &mut Vec<GenerationWarning>,
) -> PartMaterial {
    let Some(provider) = provider else {
        GenerationWarning::MissingMaterialProvider {
            part: part.to_string(),
        }
        .emit(warnings);
        return PartMaterial::Placeholder;
    };

    match provider.provide(color) {
        Ok(handle) => PartMaterial::Provided(handle),
        Err(source) => {
            GenerationWarning::MaterialUnavailable {
                part: part.to_string(),
                source,
            }
            .emit(warnings);
            PartMaterial::Placeholder
        }
    }
}
