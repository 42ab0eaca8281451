//! # Structure Composer
//!
//! Arranges primitive builds into the parts of a country house.
//!
//! ## Layout
//!
//! ```text
//!  y
//!  ^        Chimney
//!  |     __/\__|
//!  |    /  Roof \
//!  |   |--------|
//!  |   | Walls  |  PorchPost
//!  +---+--------+--|----> z (front)
//!                PorchSlab
//! ```
//!
//! The walls stand on y = 0, the roof sits on the wall top and the porch
//! projects from the +Z face. Parts are placed independently: the chimney
//! deliberately pierces the roof and nothing resolves overlap.

use crate::error::GenerationWarning;
use crate::material::{resolve_material, MaterialProvider};
use crate::params::StructureParameters;
use crate::structure::StructurePart;
use config::constants::{
    CHIMNEY_COLOR, CHIMNEY_HEIGHT_PAD, CHIMNEY_PART_NAME, CHIMNEY_ROOF_FRACTION, PORCH_COLOR,
    PORCH_POST_HEIGHT_FRACTION, PORCH_POST_LEFT_PART_NAME, PORCH_POST_RIGHT_PART_NAME,
    PORCH_SLAB_INSET, PORCH_SLAB_PART_NAME, ROOF_COLOR, ROOF_PART_NAME, WALLS_PART_NAME, WALL_COLOR,
};
use glam::DVec3;
use structure_mesh::{build_box, build_gable_roof, MeshError};

/// Parts produced by [`compose`] and the warnings raised on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub parts: Vec<StructurePart>,
    pub warnings: Vec<GenerationWarning>,
}

/// Builds every part described by the parameters, in order: walls, roof,
/// chimney, porch slab, left post, right post.
///
/// Expects validated parameters; see [`StructureParameters::clamped`].
/// Visually odd combinations are logged as warnings and built anyway.
///
/// # Errors
///
/// Returns the primitive's error if a dimension is not positive, which
/// cannot happen for clamped parameters.
pub fn compose(
    params: &StructureParameters,
    materials: Option<&dyn MaterialProvider>,
) -> Result<Composition, MeshError> {
    let mut warnings = Vec::new();
    let mut parts = Vec::with_capacity(6);

    let mut part = |name: &str, offset: DVec3, mesh, color, warnings: &mut Vec<_>| {
        let material = resolve_material(materials, name, color, warnings);
        parts.push(StructurePart::new(name, offset, mesh, material));
    };

    check_roof(params, &mut warnings);

    part(
        WALLS_PART_NAME,
        DVec3::new(0.0, params.wall_height * 0.5, 0.0),
        build_box(params.width, params.wall_height, params.depth)?,
        WALL_COLOR,
        &mut warnings,
    );

    part(
        ROOF_PART_NAME,
        DVec3::new(0.0, params.wall_height, 0.0),
        build_gable_roof(params.width, params.depth, params.roof_height, params.roof_overhang)?,
        ROOF_COLOR,
        &mut warnings,
    );

    if params.chimney.enabled {
        check_chimney(params, &mut warnings);
        let chimney = &params.chimney;
        part(
            CHIMNEY_PART_NAME,
            chimney_offset(params),
            build_box(chimney.width, chimney.height + CHIMNEY_HEIGHT_PAD, chimney.depth)?,
            CHIMNEY_COLOR,
            &mut warnings,
        );
    }

    if params.porch.enabled {
        check_porch(params, &mut warnings);
        let porch = &params.porch;

        part(
            PORCH_SLAB_PART_NAME,
            DVec3::new(0.0, porch.height * 0.5, (params.depth + porch.depth) * 0.5),
            build_box(params.width - PORCH_SLAB_INSET, porch.height, porch.depth)?,
            PORCH_COLOR,
            &mut warnings,
        );

        let post_height = params.wall_height * PORCH_POST_HEIGHT_FRACTION;
        let post_x = params.width * 0.5 - porch.post_inset;
        let post_z = params.depth * 0.5 + porch.depth - porch.post_size * 0.5;

        for (name, x) in [
            (PORCH_POST_LEFT_PART_NAME, -post_x),
            (PORCH_POST_RIGHT_PART_NAME, post_x),
        ] {
            part(
                name,
                DVec3::new(x, post_height * 0.5, post_z),
                build_box(porch.post_size, post_height, porch.post_size)?,
                PORCH_COLOR,
                &mut warnings,
            );
        }
    }

    log::debug!(
        "Composed {} parts ({} vertices)",
        parts.len(),
        parts.iter().map(|p| p.mesh.vertex_count()).sum::<usize>()
    );

    Ok(Composition { parts, warnings })
}

/// Center of the chimney box relative to the structure root.
///
/// The center sits at [`CHIMNEY_ROOF_FRACTION`] of the roof height above the
/// wall top.
pub fn chimney_offset(params: &StructureParameters) -> DVec3 {
    DVec3::new(
        params.chimney.x_offset_fraction * params.width,
        params.wall_height + params.roof_height * CHIMNEY_ROOF_FRACTION,
        params.chimney.z_offset_fraction * params.depth,
    )
}

/// Height of the outer roof surface above the wall top at a given x.
fn roof_surface(params: &StructureParameters, x: f64) -> f64 {
    let ext_w = params.width * 0.5 + params.roof_overhang;
    (params.roof_height * (1.0 - x.abs() / ext_w)).max(0.0)
}

fn check_roof(params: &StructureParameters, warnings: &mut Vec<GenerationWarning>) {
    if params.roof_overhang == 0.0 {
        GenerationWarning::degenerate("roof overhang is zero, eave undersides collapse to lines")
            .emit(warnings);
    }
}

fn check_chimney(params: &StructureParameters, warnings: &mut Vec<GenerationWarning>) {
    let chimney = &params.chimney;

    if chimney.width >= params.width || chimney.depth >= params.depth {
        GenerationWarning::degenerate(format!(
            "chimney {}x{} is as large as the house {}x{}",
            chimney.width, chimney.depth, params.width, params.depth
        ))
        .emit(warnings);
    }

    let center = chimney_offset(params);
    let ext_w = params.width * 0.5 + params.roof_overhang;
    let ext_d = params.depth * 0.5 + params.roof_overhang;
    if center.x.abs() + chimney.width * 0.5 > ext_w || center.z.abs() + chimney.depth * 0.5 > ext_d {
        GenerationWarning::degenerate("chimney footprint extends past the roof edge").emit(warnings);
    }

    let half_height = (chimney.height + CHIMNEY_HEIGHT_PAD) * 0.5;
    let surface = params.wall_height + roof_surface(params, center.x);
    if center.y + half_height <= surface {
        GenerationWarning::degenerate(format!(
            "chimney top {:.3} is buried under the roof surface {:.3}",
            center.y + half_height,
            surface
        ))
        .emit(warnings);
    } else if center.y - half_height >= surface {
        GenerationWarning::degenerate(format!(
            "chimney base {:.3} floats above the roof surface {:.3}",
            center.y - half_height,
            surface
        ))
        .emit(warnings);
    }
}

fn check_porch(params: &StructureParameters, warnings: &mut Vec<GenerationWarning>) {
    let porch = &params.porch;

    if porch.post_inset >= params.width * 0.5 {
        GenerationWarning::degenerate(format!(
            "porch post inset {} reaches past the center of a {} wide house",
            porch.post_inset, params.width
        ))
        .emit(warnings);
    } else if porch.post_inset < porch.post_size * 0.5 {
        GenerationWarning::degenerate("porch posts stick out past the side walls").emit(warnings);
    }

    if porch.post_size > porch.depth {
        GenerationWarning::degenerate(format!(
            "porch posts ({}) are thicker than the porch is deep ({})",
            porch.post_size, porch.depth
        ))
        .emit(warnings);
    }
}
