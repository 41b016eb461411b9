use crate::constants::{INFO_BUTTON_ID, MODEL_ENTITY_ID, NEXT_BUTTON_ID, RESET_BUTTON_ID};
use crate::dom;
use crate::input;
use crate::overlay;
use crate::scene::DomScene;
use ar_core::Viewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedViewer = Rc<RefCell<Viewer<DomScene>>>;

const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

pub fn wire_touch_handlers(document: &web::Document, viewer: SharedViewer) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(touch) = input::touch_input(&ev) else {
            return;
        };
        if input::should_block_browser_gesture(&touch) {
            ev.prevent_default();
        }
        if let Err(e) = viewer.borrow_mut().handle_touch(&touch) {
            log::debug!("[gesture] {}", e);
        }
    }) as Box<dyn FnMut(_)>);

    // non-passive so two-finger moves can cancel page zoom
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    for name in TOUCH_EVENTS {
        _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            closure.as_ref().unchecked_ref(),
            &options,
        );
    }
    closure.forget();
}

pub fn wire_buttons(document: &web::Document, viewer: &SharedViewer) {
    let v = viewer.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        v.borrow_mut().reset();
    });

    let v = viewer.clone();
    dom::add_click_listener(document, NEXT_BUTTON_ID, move || {
        if let Err(e) = v.borrow_mut().cycle_next() {
            log::warn!("[viewer] {}", e);
        }
    });

    let v = viewer.clone();
    dom::add_click_listener(document, INFO_BUTTON_ID, move || {
        v.borrow_mut().toggle_info();
    });
}

/// A-Frame reports glTF loading through events on the entity itself.
pub fn wire_model_status(document: &web::Document) {
    let doc = document.clone();
    dom::add_element_listener(document, MODEL_ENTITY_ID, "model-loaded", move || {
        overlay::hide(&doc);
    });

    let doc = document.clone();
    dom::add_element_listener(document, MODEL_ENTITY_ID, "model-error", move || {
        log::error!("[viewer] failed to load 3D model");
        overlay::show_message(&doc, "Loading failed", "Could not load the 3D model");
    });
}
