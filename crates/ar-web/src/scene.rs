use crate::constants::{DESCRIPTION_ID, INFO_PANEL_ID, MODEL_ENTITY_ID, NAME_ID, PRICE_ID};
use crate::dom;
use ar_core::{vec3_attr, SceneDisplay, Transform};
use web_sys as web;

/// Display layer backed by the A-Frame entity and the info panel markup.
pub struct DomScene {
    document: web::Document,
}

impl DomScene {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn model_entity(&self) -> Option<web::Element> {
        self.document.get_element_by_id(MODEL_ENTITY_ID)
    }
}

impl SceneDisplay for DomScene {
    fn set_asset_path(&mut self, path: &str) {
        if let Some(el) = self.model_entity() {
            let _ = el.set_attribute("gltf-model", path);
        }
    }

    fn set_transform(&mut self, transform: &Transform) {
        if let Some(el) = self.model_entity() {
            let _ = el.set_attribute("position", &vec3_attr(transform.position));
            let _ = el.set_attribute("rotation", &vec3_attr(transform.rotation));
            let _ = el.set_attribute("scale", &vec3_attr(transform.scale));
        }
    }

    fn set_metadata_text(&mut self, name: &str, description: &str, price: &str) {
        dom::set_text(&self.document, NAME_ID, name);
        dom::set_text(&self.document, DESCRIPTION_ID, description);
        dom::set_text(&self.document, PRICE_ID, &format!("Price: {price}"));
    }

    fn set_info_visible(&mut self, visible: bool) {
        dom::set_visible(&self.document, INFO_PANEL_ID, visible);
    }
}
