use approx::assert_relative_eq;
use config::constants::ROOT_NODE_NAME;
use glam::DVec3;
use structure_gen::{
    GeneratorOptions, MaterialLibrary, MaterialProvider, NodeId, PartMaterial, Rgba, SceneGraph,
    SceneHost, StructureGenerator, StructureParameters,
};
use std::rc::Rc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scene_with_anchor(name: &str) -> (SceneGraph, NodeId) {
    let mut scene = SceneGraph::new();
    let anchor = scene.create_node(name, scene.root(), DVec3::ZERO);
    (scene, anchor)
}

fn assert_vec_eq(got: DVec3, want: DVec3) {
    assert_relative_eq!(got.x, want.x, epsilon = 1e-9);
    assert_relative_eq!(got.y, want.y, epsilon = 1e-9);
    assert_relative_eq!(got.z, want.z, epsilon = 1e-9);
}

#[test]
fn default_house_parts_and_offsets() {
    init_logging();
    let (mut scene, anchor) = scene_with_anchor("House");
    let mut generator = StructureGenerator::new(anchor);
    let params = generator.validate(&StructureParameters::default());
    let house = generator.regenerate(&mut scene, &params).unwrap();

    assert_eq!(
        house.part_names(),
        vec!["Walls", "Roof", "Chimney", "PorchSlab", "PorchPost_L", "PorchPost_R"]
    );
    assert_vec_eq(house.part("Walls").unwrap().offset, DVec3::new(0.0, 1.5, 0.0));
    assert_vec_eq(house.part("Roof").unwrap().offset, DVec3::new(0.0, 3.0, 0.0));
    assert_vec_eq(house.part("Chimney").unwrap().offset, DVec3::new(-2.0, 4.2, 0.9));
    assert!(house.warnings().iter().all(|w| matches!(
        w,
        structure_gen::GenerationWarning::MissingMaterialProvider { .. }
    )));
}

#[test]
fn merged_house_is_one_part() {
    init_logging();
    let (mut scene, anchor) = scene_with_anchor("House");
    let mut generator = StructureGenerator::new(anchor);
    let params = StructureParameters {
        merge_output: true,
        ..Default::default()
    };
    let house = generator.regenerate(&mut scene, &params).unwrap();

    assert_eq!(house.part_count(), 1);
    let combined = house.part("Combined").unwrap();
    assert_eq!(combined.offset, DVec3::ZERO);
    assert_eq!(combined.mesh.vertex_count(), 24 * 5 + 24);
    assert_eq!(combined.mesh.triangle_count(), 12 * 6);
    assert!(combined
        .mesh
        .indices_u32()
        .iter()
        .all(|&i| (i as usize) < combined.mesh.vertex_count()));
    assert!(combined.mesh.validate().is_ok());
}

#[test]
fn regeneration_is_idempotent() {
    init_logging();
    let (mut scene, anchor) = scene_with_anchor("House");
    let mut generator = StructureGenerator::new(anchor);
    let params = StructureParameters::default();

    let first: Vec<_> = generator
        .regenerate(&mut scene, &params)
        .unwrap()
        .parts()
        .map(|part| (part.name.clone(), part.placed_mesh()))
        .collect();
    let second = generator.regenerate(&mut scene, &params).unwrap();

    assert_eq!(second.part_count(), first.len());
    for ((name, mesh), part) in first.iter().zip(second.parts()) {
        assert_eq!(name, &part.name);
        let placed = part.placed_mesh();
        assert_eq!(mesh.vertex_count(), placed.vertex_count());
        assert_eq!(mesh.triangles(), placed.triangles());
        for (a, b) in mesh.vertices().iter().zip(placed.vertices()) {
            assert!(a.distance(*b) < 1e-5);
        }
    }
}

#[test]
fn destruction_is_deferred_while_simulating() {
    init_logging();
    let (mut scene, anchor) = scene_with_anchor("House");
    let mut generator = StructureGenerator::new(anchor);
    let params = StructureParameters::default();

    scene.set_simulating(true);
    let old_root = generator.regenerate(&mut scene, &params).unwrap().root();
    let new_root = generator.regenerate(&mut scene, &params).unwrap().root();

    // The old subtree survives until the host synchronizes
    assert!(scene.contains(old_root));
    assert_eq!(scene.pending_count(), 7);
    assert_eq!(scene.find_child(anchor, ROOT_NODE_NAME), Some(new_root));

    assert_eq!(scene.flush_deferred(), 7);
    assert!(!scene.contains(old_root));
    assert_eq!(scene.children(anchor), &[new_root]);
}

#[test]
fn destruction_is_immediate_while_editing() {
    init_logging();
    let (mut scene, anchor) = scene_with_anchor("House");
    let mut generator = StructureGenerator::new(anchor);
    let params = StructureParameters::default();

    let old_root = generator.regenerate(&mut scene, &params).unwrap().root();
    generator.regenerate(&mut scene, &params).unwrap();

    assert!(!scene.contains(old_root));
    assert_eq!(scene.pending_count(), 0);
}

#[test]
fn validation_clamps_out_of_range_fields() {
    init_logging();
    let generator = StructureGenerator::new(NodeId(0));
    let mut params = StructureParameters {
        width: 0.3,
        ..Default::default()
    };
    params.chimney.x_offset_fraction = 0.9;

    let fixed = generator.validate(&params);
    assert_eq!(fixed.width, 1.0);
    assert_eq!(fixed.chimney.x_offset_fraction, 0.45);
    assert!(fixed.is_valid());
}

#[test]
fn missing_provider_uses_placeholder() {
    init_logging();
    let (mut scene, anchor) = scene_with_anchor("House");
    let mut generator = StructureGenerator::new(anchor);
    let house = generator
        .regenerate(&mut scene, &StructureParameters::default())
        .unwrap();

    assert!(house.parts().all(|part| part.material == PartMaterial::Placeholder));
    assert_eq!(house.warnings().len(), house.part_count());
}

#[test]
fn provider_materials_are_shared_by_color() {
    init_logging();
    let (mut scene, anchor) = scene_with_anchor("House");
    let library = Rc::new(MaterialLibrary::default());
    let shared = Rc::clone(&library);
    let mut generator =
        StructureGenerator::new(anchor).with_materials(move |color: Rgba| shared.provide(color));
    let house = generator
        .regenerate(&mut scene, &StructureParameters::default())
        .unwrap();

    assert!(house.warnings().is_empty());
    assert_eq!(library.len(), 4);
    let slab = house.part("PorchSlab").unwrap().material;
    assert_eq!(house.part("PorchPost_L").unwrap().material, slab);
    assert_ne!(house.part("Walls").unwrap().material, slab);
}

#[test]
fn new_generator_removes_stale_root() {
    init_logging();
    let (mut scene, anchor) = scene_with_anchor("House");
    let stale = StructureGenerator::new(anchor)
        .regenerate(&mut scene, &StructureParameters::default())
        .unwrap()
        .root();

    let mut generator = StructureGenerator::new(anchor);
    let fresh = generator
        .regenerate(&mut scene, &StructureParameters::default())
        .unwrap()
        .root();

    assert!(!scene.contains(stale));
    assert_eq!(scene.children(anchor), &[fresh]);
}

#[test]
fn edits_without_auto_regenerate_only_validate() {
    init_logging();
    let (mut scene, anchor) = scene_with_anchor("House");
    let mut generator = StructureGenerator::new(anchor).with_options(GeneratorOptions {
        auto_regenerate: false,
    });
    let edited = StructureParameters {
        roof_overhang: 4.0,
        ..Default::default()
    };

    let fixed = generator.on_parameters_edited(&mut scene, &edited).unwrap();
    assert_eq!(fixed.roof_overhang, 1.5);
    assert!(generator.current().is_none());
    assert!(scene.children(anchor).is_empty());
}

#[test]
fn generators_under_different_anchors_are_independent() {
    init_logging();
    let mut scene = SceneGraph::new();
    let left = scene.create_node("Left", scene.root(), DVec3::new(-20.0, 0.0, 0.0));
    let right = scene.create_node("Right", scene.root(), DVec3::new(20.0, 0.0, 0.0));
    let mut a = StructureGenerator::new(left);
    let mut b = StructureGenerator::new(right);
    let params = StructureParameters::default();

    let a_root = a.regenerate(&mut scene, &params).unwrap().root();
    let b_root = b.regenerate(&mut scene, &params).unwrap().root();
    a.regenerate(&mut scene, &params).unwrap();
    assert!(!scene.contains(a_root));
    assert!(scene.contains(b_root));

    assert!(a.clear(&mut scene));
    assert!(scene.children(left).is_empty());
    assert_eq!(scene.children(right), &[b_root]);
}
