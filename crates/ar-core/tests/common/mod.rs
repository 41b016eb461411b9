#![allow(dead_code)]
use ar_core::{Catalog, SceneDisplay, Transform, Viewer};

/// Display double that records every call for later inspection.
#[derive(Default, Debug)]
pub struct RecordingDisplay {
    pub asset_paths: Vec<String>,
    pub transforms: Vec<Transform>,
    pub metadata: Vec<(String, String, String)>,
    pub info_visible: Vec<bool>,
}

impl RecordingDisplay {
    pub fn call_count(&self) -> usize {
        self.asset_paths.len()
            + self.transforms.len()
            + self.metadata.len()
            + self.info_visible.len()
    }

    pub fn last_transform(&self) -> Option<&Transform> {
        self.transforms.last()
    }
}

impl SceneDisplay for RecordingDisplay {
    fn set_asset_path(&mut self, path: &str) {
        self.asset_paths.push(path.to_string());
    }

    fn set_transform(&mut self, transform: &Transform) {
        self.transforms.push(*transform);
    }

    fn set_metadata_text(&mut self, name: &str, description: &str, price: &str) {
        self.metadata
            .push((name.to_string(), description.to_string(), price.to_string()));
    }

    fn set_info_visible(&mut self, visible: bool) {
        self.info_visible.push(visible);
    }
}

pub fn make_viewer() -> Viewer<RecordingDisplay> {
    Viewer::new(Catalog::builtin(), RecordingDisplay::default())
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
