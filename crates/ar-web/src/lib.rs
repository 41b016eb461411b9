#![cfg(target_arch = "wasm32")]
use ar_core::{Catalog, Viewer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod input;
mod overlay;
mod route;
mod scene;

use constants::{CATALOG_URL, MODEL_ENTITY_ID};
use scene::DomScene;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ar-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn fetch_catalog(window: &web::Window) -> anyhow::Result<Catalog> {
    let js_err = |e: JsValue| anyhow::anyhow!("{:?}", e);

    let resp: web::Response = JsFuture::from(window.fetch_with_str(CATALOG_URL))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("{} returned {}", CATALOG_URL, resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("catalog body is not text"))?;
    Ok(Catalog::from_json(&text)?)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    document
        .get_element_by_id(MODEL_ENTITY_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MODEL_ENTITY_ID))?;

    let catalog = match fetch_catalog(&window).await {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[viewer] catalog fetch failed ({}); using built-in catalog", e);
            Catalog::builtin()
        }
    };
    log::info!("[viewer] catalog with {} models", catalog.len());

    let viewer = Rc::new(RefCell::new(Viewer::new(
        catalog,
        DomScene::new(document.clone()),
    )));

    events::wire_model_status(&document);

    // Start on the model named in the URL, else the first one
    let requested = dom::current_path();
    {
        let mut v = viewer.borrow_mut();
        let loaded = requested
            .as_deref()
            .and_then(route::model_key_from_path)
            .map(|key| v.load(key).is_ok())
            .unwrap_or(false);
        if !loaded {
            v.cycle_next()?;
        }
    }

    events::wire_buttons(&document, &viewer);
    events::wire_touch_handlers(&document, viewer);

    Ok(())
}
