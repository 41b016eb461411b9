use crate::constants::LOADING_ID;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Replace the loading overlay content with a message and make it visible.
#[inline]
pub fn show_message(document: &web::Document, title: &str, detail: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        el.set_inner_html(&format!("<h2>{title}</h2><p>{detail}</p>"));
        let _ = el.set_attribute("style", "");
    }
}
