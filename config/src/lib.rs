//! # Config Crate
//!
//! Centralized configuration constants for the structure generator.
//! Parameter bounds, preset defaults and the construction ratios used by the
//! composer are defined here so the mesh and generator crates never carry
//! their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_BODY_DIMENSION, DEFAULT_WIDTH};
//!
//! // Clamp a user supplied width to the declared minimum
//! let user_width: f64 = 0.3;
//! let width = user_width.max(MIN_BODY_DIMENSION);
//! assert_eq!(width, 1.0);
//! assert!(DEFAULT_WIDTH >= MIN_BODY_DIMENSION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Metric Units**: Every length is in meters
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
