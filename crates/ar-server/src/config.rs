use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::anyhow;

pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: String,
    pub public_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            port: try_load("PORT", "3000")?,
            bind_addr: try_load("BIND_ADDR", "0.0.0.0")?,
            public_dir: try_load("PUBLIC_DIR", "public")?,
            catalog_path: env::var("CATALOG_PATH").ok().map(PathBuf::from),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_addr: "0.0.0.0".to_string(),
            public_dir: PathBuf::from("public"),
            catalog_path: None,
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            log::info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| anyhow!("invalid {key} value: {e}"))
}
