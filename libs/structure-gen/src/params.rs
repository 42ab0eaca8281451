//! # Structure Parameters
//!
//! The numeric configuration a host stores for one generator, and the
//! clamping rules that bring it back into range.

use crate::error::GenerationWarning;
use config::constants::*;
use serde::{Deserialize, Serialize};

/// Dimensions of the whole house. All lengths in meters.
///
/// Missing fields deserialize to the preset country house.
///
/// # Example
///
/// ```rust
/// use structure_gen::StructureParameters;
///
/// let params = StructureParameters { width: 0.3, ..Default::default() };
/// let (fixed, warnings) = params.clamped();
/// assert_eq!(fixed.width, 1.0);
/// assert_eq!(warnings.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureParameters {
    /// Extent along X
    pub width: f64,
    /// Extent along Z
    pub depth: f64,
    /// Height of the walls (Y)
    pub wall_height: f64,
    /// Ridge height above the wall top
    pub roof_height: f64,
    /// Horizontal roof extension past the walls
    pub roof_overhang: f64,
    pub chimney: ChimneyParameters,
    pub porch: PorchParameters,
    /// Replace the parts with a single `Combined` part
    pub merge_output: bool,
}

/// Optional chimney block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChimneyParameters {
    pub enabled: bool,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Center offset along X as a fraction of the house width
    pub x_offset_fraction: f64,
    /// Center offset along Z as a fraction of the house depth
    pub z_offset_fraction: f64,
}

/// Optional front porch: a slab and two posts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PorchParameters {
    pub enabled: bool,
    /// Distance the slab projects in front of the house
    pub depth: f64,
    /// Slab thickness
    pub height: f64,
    /// Post cross-section
    pub post_size: f64,
    /// Post distance from the side walls
    pub post_inset: f64,
}

impl Default for StructureParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            depth: DEFAULT_DEPTH,
            wall_height: DEFAULT_WALL_HEIGHT,
            roof_height: DEFAULT_ROOF_HEIGHT,
            roof_overhang: DEFAULT_ROOF_OVERHANG,
            chimney: ChimneyParameters::default(),
            porch: PorchParameters::default(),
            merge_output: false,
        }
    }
}

impl Default for ChimneyParameters {
    fn default() -> Self {
        Self {
            enabled: true,
            width: DEFAULT_CHIMNEY_WIDTH,
            depth: DEFAULT_CHIMNEY_DEPTH,
            height: DEFAULT_CHIMNEY_HEIGHT,
            x_offset_fraction: DEFAULT_CHIMNEY_X_OFFSET,
            z_offset_fraction: DEFAULT_CHIMNEY_Z_OFFSET,
        }
    }
}

impl Default for PorchParameters {
    fn default() -> Self {
        Self {
            enabled: true,
            depth: DEFAULT_PORCH_DEPTH,
            height: DEFAULT_PORCH_HEIGHT,
            post_size: DEFAULT_PORCH_POST_SIZE,
            post_inset: DEFAULT_PORCH_POST_INSET,
        }
    }
}

impl StructureParameters {
    /// Returns a copy with every field inside its bound.
    ///
    /// Values below a minimum are raised to it, values outside a range are
    /// clamped to the nearest end, and non-finite values fall back to the
    /// field's default. Disabled blocks are clamped too, so enabling them
    /// later needs no second pass. One warning is returned per changed
    /// field.
    pub fn clamped(&self) -> (Self, Vec<GenerationWarning>) {
        let mut c = Clamp::default();
        let chimney = &self.chimney;
        let porch = &self.porch;

        let fixed = Self {
            width: c.within(
                "width",
                self.width,
                MIN_BODY_DIMENSION,
                MAX_BODY_DIMENSION,
                DEFAULT_WIDTH,
            ),
            depth: c.within(
                "depth",
                self.depth,
                MIN_BODY_DIMENSION,
                MAX_BODY_DIMENSION,
                DEFAULT_DEPTH,
            ),
            wall_height: c.within(
                "wall_height",
                self.wall_height,
                MIN_BODY_DIMENSION,
                MAX_BODY_DIMENSION,
                DEFAULT_WALL_HEIGHT,
            ),
            roof_height: c.within(
                "roof_height",
                self.roof_height,
                MIN_ROOF_HEIGHT,
                MAX_ROOF_HEIGHT,
                DEFAULT_ROOF_HEIGHT,
            ),
            roof_overhang: c.within(
                "roof_overhang",
                self.roof_overhang,
                0.0,
                MAX_ROOF_OVERHANG,
                DEFAULT_ROOF_OVERHANG,
            ),
            chimney: ChimneyParameters {
                enabled: chimney.enabled,
                width: c.at_least(
                    "chimney.width",
                    chimney.width,
                    MIN_CHIMNEY_SECTION,
                    DEFAULT_CHIMNEY_WIDTH,
                ),
                depth: c.at_least(
                    "chimney.depth",
                    chimney.depth,
                    MIN_CHIMNEY_SECTION,
                    DEFAULT_CHIMNEY_DEPTH,
                ),
                height: c.at_least(
                    "chimney.height",
                    chimney.height,
                    MIN_CHIMNEY_HEIGHT,
                    DEFAULT_CHIMNEY_HEIGHT,
                ),
                x_offset_fraction: c.within(
                    "chimney.x_offset_fraction",
                    chimney.x_offset_fraction,
                    -MAX_CHIMNEY_OFFSET_FRACTION,
                    MAX_CHIMNEY_OFFSET_FRACTION,
                    DEFAULT_CHIMNEY_X_OFFSET,
                ),
                z_offset_fraction: c.within(
                    "chimney.z_offset_fraction",
                    chimney.z_offset_fraction,
                    -MAX_CHIMNEY_OFFSET_FRACTION,
                    MAX_CHIMNEY_OFFSET_FRACTION,
                    DEFAULT_CHIMNEY_Z_OFFSET,
                ),
            },
            porch: PorchParameters {
                enabled: porch.enabled,
                depth: c.at_least("porch.depth", porch.depth, MIN_PORCH_DEPTH, DEFAULT_PORCH_DEPTH),
                height: c.at_least(
                    "porch.height",
                    porch.height,
                    MIN_PORCH_HEIGHT,
                    DEFAULT_PORCH_HEIGHT,
                ),
                post_size: c.at_least(
                    "porch.post_size",
                    porch.post_size,
                    MIN_PORCH_POST_SIZE,
                    DEFAULT_PORCH_POST_SIZE,
                ),
                post_inset: c.at_least(
                    "porch.post_inset",
                    porch.post_inset,
                    MIN_PORCH_POST_INSET,
                    DEFAULT_PORCH_POST_INSET,
                ),
            },
            merge_output: self.merge_output,
        };

        (fixed, c.warnings)
    }

    /// Returns true if [`clamped`](Self::clamped) would change nothing.
    pub fn is_valid(&self) -> bool {
        self.clamped().1.is_empty()
    }
}

/// Collects a warning for every value it has to change.
#[derive(Default)]
struct Clamp {
    warnings: Vec<GenerationWarning>,
}

impl Clamp {
    fn at_least(&mut self, field: &'static str, value: f64, min: f64, fallback: f64) -> f64 {
        let fixed = if value.is_finite() { value.max(min) } else { fallback };
        self.record(field, value, fixed)
    }

    fn within(&mut self, field: &'static str, value: f64, min: f64, max: f64, fallback: f64) -> f64 {
        let fixed = if value.is_finite() {
            value.clamp(min, max)
        } else {
            fallback
        };
        self.record(field, value, fixed)
    }

    fn record(&mut self, field: &'static str, given: f64, clamped: f64) -> f64 {
        // NaN never equals itself, so a replaced NaN is always reported
        if given != clamped {
            self.warnings.push(GenerationWarning::InvalidParameter {
                field,
                given,
                clamped,
            });
        }
        clamped
    }
}
