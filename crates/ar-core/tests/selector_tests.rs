mod common;

use ar_core::{Catalog, Viewer, ViewerError};
use common::{make_viewer, RecordingDisplay};
use glam::Vec3;

const SHOWROOM_JSON: &str = r#"[
    {"id": "cannoli", "name": "Cannoli Sofa", "description": "soft lines", "price": "150,000 ₽",
     "model": "/models/cannoli-sofa.glb", "scale": [0.5, 0.5, 0.5], "position": [0.0, -1.0, -3.0]},
    {"id": "bellagio", "name": "Bellagio Sofa", "description": "geometric", "price": "180,000 ₽",
     "model": "/models/bellagio-sofa.glb"},
    {"id": "ottoman", "name": "Ottoman", "description": "small", "price": "20,000 ₽",
     "model": "/models/ottoman.glb", "position": [1.0, 0.0, -2.0]}
]"#;

fn showroom_viewer() -> Viewer<RecordingDisplay> {
    let catalog = Catalog::from_json(SHOWROOM_JSON).expect("valid catalog");
    Viewer::new(catalog, RecordingDisplay::default())
}

#[test]
fn load_selects_entry_and_resets_transform() {
    let mut viewer = showroom_viewer();
    let keys: Vec<String> = viewer.catalog().entries().iter().map(|e| e.key.clone()).collect();
    for key in keys {
        viewer.load(&key).unwrap();
        let entry = viewer.catalog().get(&key).unwrap().clone();
        let state = viewer.state();
        assert_eq!(state.selected_key.as_deref(), Some(key.as_str()));
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.rotation, Vec3::ZERO);
        assert_eq!(state.position, entry.initial_position);
    }
}

#[test]
fn load_pushes_asset_metadata_and_transform() {
    let mut viewer = showroom_viewer();
    viewer.load("cannoli").unwrap();

    let display = viewer.display();
    assert_eq!(display.asset_paths, vec!["/models/cannoli-sofa.glb".to_string()]);
    assert_eq!(
        display.metadata,
        vec![(
            "Cannoli Sofa".to_string(),
            "soft lines".to_string(),
            "150,000 ₽".to_string()
        )]
    );
    let t = display.last_transform().unwrap();
    assert_eq!(t.position, Vec3::new(0.0, -1.0, -3.0));
    assert_eq!(t.rotation, Vec3::ZERO);
    // declared entry scale times the unit user scale
    assert_eq!(t.scale, Vec3::splat(0.5));
}

#[test]
fn load_unknown_key_leaves_everything_untouched() {
    let mut viewer = make_viewer();
    viewer.load("bellagio").unwrap();
    let before = viewer.state().clone();
    let calls = viewer.display().call_count();

    let err = viewer.load("chesterfield").unwrap_err();
    assert_eq!(err, ViewerError::KeyNotFound("chesterfield".to_string()));
    assert_eq!(viewer.state(), &before);
    assert_eq!(viewer.display().call_count(), calls);
}

#[test]
fn load_unknown_key_before_first_load_keeps_selection_empty() {
    let mut viewer = make_viewer();
    assert!(viewer.load("").is_err());
    assert_eq!(viewer.state().selected_key, None);
    assert_eq!(viewer.display().call_count(), 0);
}

#[test]
fn cycle_next_without_selection_loads_first_entry() {
    let mut viewer = make_viewer();
    viewer.cycle_next().unwrap();
    assert_eq!(viewer.state().selected_key.as_deref(), Some("cannoli"));
}

#[test]
fn cycle_next_from_last_wraps_to_first() {
    let mut viewer = make_viewer();
    viewer.load("bellagio").unwrap();
    viewer.cycle_next().unwrap();
    assert_eq!(viewer.state().selected_key.as_deref(), Some("cannoli"));
}

#[test]
fn cycle_next_catalog_len_times_returns_to_start() {
    let mut viewer = showroom_viewer();
    let len = viewer.catalog().len();
    for start in ["cannoli", "bellagio", "ottoman"] {
        viewer.load(start).unwrap();
        let mut seen = Vec::new();
        for _ in 0..len {
            viewer.cycle_next().unwrap();
            seen.push(viewer.state().selected_key.clone().unwrap());
        }
        assert_eq!(seen.last().map(String::as_str), Some(start));
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), len, "every entry visited once");
    }
}

#[test]
fn cycle_next_follows_catalog_order() {
    let mut viewer = showroom_viewer();
    viewer.load("cannoli").unwrap();
    viewer.cycle_next().unwrap();
    assert_eq!(viewer.state().selected_key.as_deref(), Some("bellagio"));
    viewer.cycle_next().unwrap();
    assert_eq!(viewer.state().selected_key.as_deref(), Some("ottoman"));
    assert_eq!(viewer.state().position, Vec3::new(1.0, 0.0, -2.0));
}

#[test]
fn reset_restores_identity_and_keeps_selection() {
    let mut viewer = showroom_viewer();
    viewer.load("cannoli").unwrap();
    let assets_before = viewer.display().asset_paths.len();

    viewer.reset();

    let state = viewer.state();
    assert_eq!(state.selected_key.as_deref(), Some("cannoli"));
    assert_eq!(state.position, Vec3::ZERO);
    assert_eq!(state.rotation, Vec3::ZERO);
    assert_eq!(state.scale, 1.0);
    // no asset re-fetch
    assert_eq!(viewer.display().asset_paths.len(), assets_before);
    assert_eq!(viewer.display().last_transform().unwrap().position, Vec3::ZERO);
}

#[test]
fn reset_before_any_load_is_harmless() {
    let mut viewer = make_viewer();
    viewer.reset();
    assert_eq!(viewer.state().selected_key, None);
    assert_eq!(viewer.display().last_transform().unwrap().scale, Vec3::ONE);
}

#[test]
fn toggle_info_flips_panel_visibility() {
    let mut viewer = make_viewer();
    assert!(viewer.info_visible());
    assert!(!viewer.toggle_info());
    assert!(viewer.toggle_info());
    assert_eq!(viewer.display().info_visible, vec![false, true]);
}
