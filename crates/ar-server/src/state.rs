use std::{fs::read_to_string, sync::Arc};

use anyhow::Context;
use ar_core::Catalog;

use super::config::ServerConfig;

pub struct AppState {
    pub catalog: Catalog,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> anyhow::Result<Arc<Self>> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let json = read_to_string(path)
                    .with_context(|| format!("reading catalog {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("parsing catalog {}", path.display()))?
            }
            None => Catalog::builtin(),
        };
        log::info!("[server] catalog loaded with {} entries", catalog.len());

        Ok(Arc::new(Self { catalog, config }))
    }
}
