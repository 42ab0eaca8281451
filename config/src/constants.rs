//! # Configuration Constants
//!
//! Centralized constants for the structure generator. All lengths are in
//! meters; the house stands on y = 0 with its ridge running along Z.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Bounds**: Minimum and maximum values enforced by validation
//! - **Defaults**: The preset country house
//! - **Construction**: Fixed ratios used when placing parts
//! - **Appearance**: Colors requested from the material provider
//! - **Naming**: Node and part names

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// A quad whose edge cross product is no longer than this has no area to
/// orient by.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Vertical gap between the two collapsed apex corners of a gable cap.
///
/// The cap is a quad whose top two corners meet at the ridge; one of them
/// sits this far below the apex so the quad keeps four distinct vertices.
///
/// # Example
///
/// ```rust
/// use config::constants::GABLE_APEX_EPSILON;
///
/// let ridge = 2.0;
/// let lower_apex = ridge - GABLE_APEX_EPSILON;
/// assert!(ridge - lower_apex < 1e-3);
/// ```
pub const GABLE_APEX_EPSILON: f64 = 1e-4;

// =============================================================================
// BOUND CONSTANTS
// =============================================================================

/// Minimum width, depth and wall height of the house body.
pub const MIN_BODY_DIMENSION: f64 = 1.0;

/// Maximum width, depth and wall height of the house body.
///
/// Keeps every derived length far from overflow when normals are computed.
pub const MAX_BODY_DIMENSION: f64 = 500.0;

/// Minimum ridge height above the wall top.
pub const MIN_ROOF_HEIGHT: f64 = 0.2;

/// Maximum ridge height above the wall top.
pub const MAX_ROOF_HEIGHT: f64 = 100.0;

/// Maximum horizontal roof overhang past the walls.
///
/// The minimum is zero (flush eaves).
pub const MAX_ROOF_OVERHANG: f64 = 1.5;

/// Minimum chimney width and depth.
pub const MIN_CHIMNEY_SECTION: f64 = 0.2;

/// Minimum chimney height.
pub const MIN_CHIMNEY_HEIGHT: f64 = 0.1;

/// Bound on the chimney offset fractions, applied symmetrically.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_CHIMNEY_OFFSET_FRACTION;
///
/// let offset: f64 = 0.9;
/// let clamped = offset.clamp(-MAX_CHIMNEY_OFFSET_FRACTION, MAX_CHIMNEY_OFFSET_FRACTION);
/// assert_eq!(clamped, 0.45);
/// ```
pub const MAX_CHIMNEY_OFFSET_FRACTION: f64 = 0.45;

/// Minimum porch depth (distance the slab projects from the front wall).
pub const MIN_PORCH_DEPTH: f64 = 0.2;

/// Minimum porch slab thickness.
pub const MIN_PORCH_HEIGHT: f64 = 0.05;

/// Minimum porch post cross-section.
pub const MIN_PORCH_POST_SIZE: f64 = 0.08;

/// Minimum inset of the porch posts from the side walls.
pub const MIN_PORCH_POST_INSET: f64 = 0.3;

// =============================================================================
// DEFAULT CONSTANTS (preset country house)
// =============================================================================

/// Default house width (X).
pub const DEFAULT_WIDTH: f64 = 8.0;
/// Default house depth (Z).
pub const DEFAULT_DEPTH: f64 = 6.0;
/// Default wall height (Y).
pub const DEFAULT_WALL_HEIGHT: f64 = 3.0;
/// Default ridge height above the walls.
pub const DEFAULT_ROOF_HEIGHT: f64 = 2.0;
/// Default roof overhang.
pub const DEFAULT_ROOF_OVERHANG: f64 = 0.35;

/// Default chimney width.
pub const DEFAULT_CHIMNEY_WIDTH: f64 = 0.6;
/// Default chimney depth.
pub const DEFAULT_CHIMNEY_DEPTH: f64 = 0.6;
/// Default chimney height.
pub const DEFAULT_CHIMNEY_HEIGHT: f64 = 1.2;
/// Default chimney X offset as a fraction of the house width.
pub const DEFAULT_CHIMNEY_X_OFFSET: f64 = -0.25;
/// Default chimney Z offset as a fraction of the house depth.
pub const DEFAULT_CHIMNEY_Z_OFFSET: f64 = 0.15;

/// Default porch depth.
pub const DEFAULT_PORCH_DEPTH: f64 = 1.8;
/// Default porch slab thickness.
pub const DEFAULT_PORCH_HEIGHT: f64 = 0.25;
/// Default porch post cross-section.
pub const DEFAULT_PORCH_POST_SIZE: f64 = 0.12;
/// Default porch post inset from the side walls.
pub const DEFAULT_PORCH_POST_INSET: f64 = 0.6;

// =============================================================================
// CONSTRUCTION CONSTANTS
// =============================================================================

/// Extra height added to the chimney box so its base stays inside the roof.
pub const CHIMNEY_HEIGHT_PAD: f64 = 0.05;

/// Fraction of the roof height at which the chimney center is placed.
///
/// # Example
///
/// ```rust
/// use config::constants::CHIMNEY_ROOF_FRACTION;
///
/// let (wall_height, roof_height) = (3.0, 2.0);
/// let y = wall_height + roof_height * CHIMNEY_ROOF_FRACTION;
/// assert!((y - 4.2).abs() < 1e-12);
/// ```
pub const CHIMNEY_ROOF_FRACTION: f64 = 0.6;

/// Amount the porch slab is narrower than the house.
pub const PORCH_SLAB_INSET: f64 = 0.2;

/// Porch post height as a fraction of the wall height.
pub const PORCH_POST_HEIGHT_FRACTION: f64 = 0.8;

/// Margin added around the footprint by the preview ground plate.
pub const PREVIEW_GROUND_MARGIN: f64 = 2.0;

/// Thickness of the preview ground plate.
pub const PREVIEW_GROUND_THICKNESS: f64 = 0.002;

// =============================================================================
// APPEARANCE CONSTANTS
// =============================================================================

/// Default RGBA color, used for merged output.
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

/// Whitewashed wall color.
pub const WALL_COLOR: [f32; 4] = [0.93, 0.9, 0.82, 1.0];

/// Weathered shingle roof color.
pub const ROOF_COLOR: [f32; 4] = [0.45, 0.2, 0.15, 1.0];

/// Brick chimney color.
pub const CHIMNEY_COLOR: [f32; 4] = [0.55, 0.3, 0.25, 1.0];

/// Timber porch color.
pub const PORCH_COLOR: [f32; 4] = [0.5, 0.38, 0.25, 1.0];

// =============================================================================
// NAMING CONSTANTS
// =============================================================================

/// Name of the root node that anchors a generated structure.
pub const ROOT_NODE_NAME: &str = "Generated_CountryHouse";

/// Name of the single part produced by merging.
pub const COMBINED_PART_NAME: &str = "Combined";

/// Name of the wall body part.
pub const WALLS_PART_NAME: &str = "Walls";

/// Name of the roof part.
pub const ROOF_PART_NAME: &str = "Roof";

/// Name of the chimney part.
pub const CHIMNEY_PART_NAME: &str = "Chimney";

/// Name of the porch slab part.
pub const PORCH_SLAB_PART_NAME: &str = "PorchSlab";

/// Name of the porch post on the -X side.
pub const PORCH_POST_LEFT_PART_NAME: &str = "PorchPost_L";

/// Name of the porch post on the +X side.
pub const PORCH_POST_RIGHT_PART_NAME: &str = "PorchPost_R";
