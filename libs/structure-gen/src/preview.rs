//! # Preview Outline
//!
//! Cheap selection outline for an editing surface. Computed from the
//! parameters alone, without building any mesh.

use crate::params::StructureParameters;
use config::constants::{PREVIEW_GROUND_MARGIN, PREVIEW_GROUND_THICKNESS};
use glam::DVec3;

/// An axis-aligned box given by center and full size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewBox {
    pub center: DVec3,
    pub size: DVec3,
}

impl PreviewBox {
    /// Returns the minimum and maximum corners.
    pub fn corners(&self) -> (DVec3, DVec3) {
        let half = self.size * 0.5;
        (self.center - half, self.center + half)
    }
}

/// Outline shapes, relative to the structure root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOutline {
    /// Thin plate just below the ground, wider than the footprint
    pub ground: PreviewBox,
    /// The wall body
    pub body: PreviewBox,
    /// Back and front eave lines at ridge height
    pub gable_lines: [(DVec3, DVec3); 2],
}

/// Computes the preview outline for a parameter set.
pub fn preview_outline(params: &StructureParameters) -> PreviewOutline {
    let ground = PreviewBox {
        center: DVec3::new(0.0, -PREVIEW_GROUND_THICKNESS * 0.5, 0.0),
        size: DVec3::new(
            params.width + PREVIEW_GROUND_MARGIN,
            PREVIEW_GROUND_THICKNESS,
            params.depth + PREVIEW_GROUND_MARGIN,
        ),
    };

    let body = PreviewBox {
        center: DVec3::new(0.0, params.wall_height * 0.5, 0.0),
        size: DVec3::new(params.width, params.wall_height, params.depth),
    };

    let ridge_y = params.wall_height + params.roof_height;
    let ext_w = params.width * 0.5 + params.roof_overhang;
    let ext_d = params.depth * 0.5 + params.roof_overhang;
    let line = |z: f64| (DVec3::new(-ext_w, ridge_y, z), DVec3::new(ext_w, ridge_y, z));

    PreviewOutline {
        ground,
        body,
        gable_lines: [line(-ext_d), line(ext_d)],
    }
}
