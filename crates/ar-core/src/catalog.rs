//! Furniture catalog shared by the server API and the in-browser viewer.
//!
//! A catalog is a fixed, ordered list of entries with unique keys. Order only
//! matters when cycling through models in the viewer.

use crate::error::CatalogError;
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "id")]
    pub key: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub description: String,
    pub price: String,
    #[serde(rename = "model")]
    pub asset_path: String,
    #[serde(rename = "scale", default = "unit_scale")]
    pub initial_scale: Vec3,
    #[serde(rename = "position", default)]
    pub initial_position: Vec3,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, e) in entries.iter().enumerate() {
            if entries[..i].iter().any(|prev| prev.key == e.key) {
                return Err(CatalogError::DuplicateKey(e.key.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The demo showroom: two sofas.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CatalogEntry {
                    key: "cannoli".into(),
                    display_name: "Cannoli Sofa".into(),
                    description: "Elegant modern sofa with soft, flowing lines".into(),
                    price: "150,000 ₽".into(),
                    asset_path: "/models/cannoli-sofa.glb".into(),
                    initial_scale: Vec3::ONE,
                    initial_position: Vec3::ZERO,
                },
                CatalogEntry {
                    key: "bellagio".into(),
                    display_name: "Bellagio Sofa".into(),
                    description: "Contemporary sofa with geometric forms".into(),
                    price: "180,000 ₽".into(),
                    asset_path: "/models/bellagio-sofa.glb".into(),
                    initial_scale: Vec3::ONE,
                    initial_position: Vec3::ZERO,
                },
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn entry_at(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn first(&self) -> &CatalogEntry {
        // non-empty by construction
        &self.entries[0]
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
