use ar_core::{vec3_attr, Catalog, CatalogError};
use glam::Vec3;

#[test]
fn builtin_catalog_has_both_sofas_in_order() {
    let catalog = Catalog::builtin();
    let keys: Vec<&str> = catalog.entries().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["cannoli", "bellagio"]);
    assert_eq!(catalog.index_of("bellagio"), Some(1));
    assert!(catalog.get("bellagio").unwrap().asset_path.ends_with(".glb"));
    assert!(!catalog.contains("sofa"));
}

#[test]
fn json_entries_default_scale_and_position() {
    let catalog = Catalog::from_json(
        r#"[{"id": "a", "name": "A", "description": "", "price": "1", "model": "/a.glb"}]"#,
    )
    .unwrap();
    let a = catalog.get("a").unwrap();
    assert_eq!(a.initial_scale, Vec3::ONE);
    assert_eq!(a.initial_position, Vec3::ZERO);
}

#[test]
fn serialized_entry_uses_api_field_names() {
    let catalog = Catalog::builtin();
    let json = serde_json::to_value(catalog.first()).unwrap();
    assert_eq!(json["id"], "cannoli");
    assert_eq!(json["model"], "/models/cannoli-sofa.glb");
    assert_eq!(json["scale"], serde_json::json!([1.0, 1.0, 1.0]));
    assert!(json.get("key").is_none());
}

#[test]
fn empty_catalog_is_rejected() {
    assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
}

#[test]
fn duplicate_keys_are_rejected() {
    let json = r#"[
        {"id": "a", "name": "A", "description": "", "price": "1", "model": "/a.glb"},
        {"id": "a", "name": "A2", "description": "", "price": "2", "model": "/a2.glb"}
    ]"#;
    match Catalog::from_json(json) {
        Err(CatalogError::DuplicateKey(k)) => assert_eq!(k, "a"),
        other => panic!("expected duplicate key error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(
        Catalog::from_json("{not json"),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn vec3_attr_uses_space_separated_components() {
    assert_eq!(vec3_attr(Vec3::ONE), "1 1 1");
    assert_eq!(vec3_attr(Vec3::new(-2.5, 0.0, 90.0)), "-2.5 0 90");
}
