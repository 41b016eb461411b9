use thiserror::Error;

/// Non-fatal outcomes reported by the viewer. State is always left valid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    #[error("no catalog entry with key '{0}'")]
    KeyNotFound(String),

    #[error("pinch with zero finger distance; scale update skipped")]
    DegenerateGesture,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog has no entries")]
    Empty,

    #[error("duplicate catalog key '{0}'")]
    DuplicateKey(String),

    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
}
