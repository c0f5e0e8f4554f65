use proptest::prelude::*;
use strata_blocks::material::MaterialCatalog;
use strata_blocks::registry::BlockRegistry;
use strata_blocks::types::{Block, FaceRole, MaterialId};

#[test]
fn embedded_palette_order_is_stable() {
    let reg = BlockRegistry::embedded().expect("embedded registry");
    assert_eq!(reg.materials.get_id("grass_side"), Some(MaterialId(0)));
    assert_eq!(reg.materials.get_id("grass_top"), Some(MaterialId(1)));
    assert_eq!(reg.materials.get_id("dirt"), Some(MaterialId(2)));
    assert_eq!(reg.materials.get_id("cobble_stone"), Some(MaterialId(3)));
    assert_eq!(reg.materials.len(), 4);
}

#[test]
fn embedded_blocks_and_solidity() {
    let reg = BlockRegistry::embedded().expect("embedded registry");
    assert_eq!(reg.id_by_name("air"), Some(0));
    assert_eq!(reg.id_by_name("grass"), Some(1));
    assert_eq!(reg.id_by_name("cobblestone"), Some(2));

    assert!(!reg.is_solid(Block::AIR));
    assert!(reg.is_solid(Block::new(1)));
    assert!(reg.is_solid(Block::new(2)));
    // Codes with no registry entry are still solid blocks
    assert!(reg.is_solid(Block::new(99)));
}

#[test]
fn grass_material_per_role() {
    let reg = BlockRegistry::embedded().expect("embedded registry");
    let grass = Block::new(1);
    assert_eq!(reg.material_for_face(grass, FaceRole::Side), MaterialId(0));
    assert_eq!(reg.material_for_face(grass, FaceRole::Top), MaterialId(1));
    assert_eq!(reg.material_for_face(grass, FaceRole::Bottom), MaterialId(2));
    // No `all` selector on grass, so the catch-all role takes the fallback
    assert_eq!(reg.material_for_face(grass, FaceRole::All), MaterialId(3));
}

#[test]
fn cobble_and_unknown_use_generic_material() {
    let reg = BlockRegistry::embedded().expect("embedded registry");
    for role in [FaceRole::All, FaceRole::Top, FaceRole::Bottom, FaceRole::Side] {
        assert_eq!(reg.material_for_face(Block::new(2), role), MaterialId(3));
        assert_eq!(reg.material_for_face(Block::new(7), role), MaterialId(3));
    }
}

#[test]
fn from_configs_rejects_misnumbered_block() {
    let materials = MaterialCatalog::from_toml_str(
        r#"
        [[materials]]
        key = "stone"
        textures = ["assets/blocks/stone.png"]
    "#,
    )
    .unwrap();
    let cfg = toml::from_str(
        r#"
        unknown_material = "stone"

        [[blocks]]
        name = "air"
        id = 0
        solid = false

        [[blocks]]
        name = "stone"
        id = 5
    "#,
    )
    .unwrap();
    assert!(BlockRegistry::from_configs(materials, cfg).is_err());
}

#[test]
fn from_configs_rejects_unknown_material_key() {
    let materials = MaterialCatalog::from_toml_str(
        r#"
        [[materials]]
        key = "stone"
        textures = ["assets/blocks/stone.png"]
    "#,
    )
    .unwrap();
    let cfg = toml::from_str(
        r#"
        unknown_material = "stone"

        [[blocks]]
        name = "painted"
        [blocks.materials]
        top = "no_such_key"
    "#,
    )
    .unwrap();
    assert!(BlockRegistry::from_configs(materials, cfg).is_err());
}

#[test]
fn material_tint_defaults_to_white() {
    let catalog = MaterialCatalog::from_toml_str(
        r#"
        [[materials]]
        key = "plain"
        textures = ["assets/blocks/plain.png"]

        [[materials]]
        key = "shaded"
        textures = ["assets/blocks/shaded.png"]
        tint = [128, 160, 96, 255]
    "#,
    )
    .unwrap();
    let plain = catalog.get(MaterialId(0)).unwrap();
    assert_eq!(plain.tint, [255, 255, 255, 255]);
    let shaded = catalog.get(MaterialId(1)).unwrap();
    assert_eq!(shaded.tint, [128, 160, 96, 255]);
}

proptest! {
    // material_for_face is total: any block code and role resolves to an
    // index inside the catalog.
    #[test]
    fn material_lookup_always_in_palette(id in 0u16..=u16::MAX, role_ix in 0usize..4) {
        let reg = BlockRegistry::embedded().expect("embedded registry");
        let role = [FaceRole::All, FaceRole::Top, FaceRole::Bottom, FaceRole::Side][role_ix];
        let mid = reg.material_for_face(Block::new(id), role);
        prop_assert!((mid.0 as usize) < reg.materials.len());
    }
}
