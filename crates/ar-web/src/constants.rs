// Element ids the page markup must provide.

// Scene
pub const MODEL_ENTITY_ID: &str = "furniture-model"; // a-entity carrying gltf-model/position/rotation/scale

// Info panel
pub const INFO_PANEL_ID: &str = "info-panel";
pub const NAME_ID: &str = "furniture-name";
pub const DESCRIPTION_ID: &str = "furniture-description";
pub const PRICE_ID: &str = "furniture-price";

// Controls
pub const RESET_BUTTON_ID: &str = "reset-button";
pub const NEXT_BUTTON_ID: &str = "change-button";
pub const INFO_BUTTON_ID: &str = "info-button";

// Loading overlay
pub const LOADING_ID: &str = "loading";

// Catalog source, relative to the page origin
pub const CATALOG_URL: &str = "/api/furniture";
