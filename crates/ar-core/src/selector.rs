use crate::catalog::{Catalog, CatalogEntry};
use crate::constants::ORIGIN;
use crate::display::{SceneDisplay, Transform};
use crate::error::ViewerError;
use crate::state::ViewerState;
use glam::Vec3;

/// Loads and cycles catalog entries into a [`ViewerState`].
pub struct ModelSelector {
    catalog: Catalog,
}

impl ModelSelector {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_entry(&self, state: &ViewerState) -> Option<&CatalogEntry> {
        state
            .selected_key
            .as_deref()
            .and_then(|k| self.catalog.get(k))
    }

    pub fn load<D: SceneDisplay + ?Sized>(
        &self,
        key: &str,
        state: &mut ViewerState,
        display: &mut D,
    ) -> Result<(), ViewerError> {
        let Some(entry) = self.catalog.get(key) else {
            log::warn!("[viewer] unknown model '{}'", key);
            return Err(ViewerError::KeyNotFound(key.to_string()));
        };

        state.selected_key = Some(entry.key.clone());
        state.reset_transform(entry.initial_position);

        display.set_metadata_text(&entry.display_name, &entry.description, &entry.price);
        display.set_asset_path(&entry.asset_path);
        display.set_transform(&self.transform(state));

        log::info!("[viewer] loaded model {}", entry.display_name);
        Ok(())
    }

    pub fn cycle_next<D: SceneDisplay + ?Sized>(
        &self,
        state: &mut ViewerState,
        display: &mut D,
    ) -> Result<(), ViewerError> {
        let next = match state
            .selected_key
            .as_deref()
            .and_then(|k| self.catalog.index_of(k))
        {
            Some(i) => (i + 1) % self.catalog.len(),
            None => 0,
        };
        let key = match self.catalog.entry_at(next) {
            Some(e) => e.key.clone(),
            None => self.catalog.first().key.clone(),
        };
        self.load(&key, state, display)
    }

    /// Put the model back at the origin with no rotation and unit scale.
    /// The asset itself is left alone.
    pub fn reset<D: SceneDisplay + ?Sized>(&self, state: &mut ViewerState, display: &mut D) {
        state.reset_transform(ORIGIN);
        display.set_transform(&self.transform(state));
        log::info!("[viewer] transform reset");
    }

    /// Transform to hand to the display for the current state.
    pub fn transform(&self, state: &ViewerState) -> Transform {
        let base_scale = self
            .selected_entry(state)
            .map(|e| e.initial_scale)
            .unwrap_or(Vec3::ONE);
        Transform {
            position: state.position,
            rotation: state.rotation,
            scale: base_scale * state.scale,
        }
    }
}
