use super::TrailWiring;
use crate::dom;
use crate::particles;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hides the indicator while the pointer is outside the page and restores it
/// on re-entry. Live particles are untouched; they expire on their own.
pub fn wire_enter_leave(document: &web::Document, cursor: &web::HtmlElement) {
    let cursor_leave = cursor.clone();
    let leave = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::set_opacity(&cursor_leave, 0.0);
    }) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback("pointerleave", leave.as_ref().unchecked_ref());
    leave.forget();

    let cursor_enter = cursor.clone();
    let enter = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::set_opacity(&cursor_enter, 1.0);
    }) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback("pointerenter", enter.as_ref().unchecked_ref());
    enter.forget();
}

pub fn wire_unload(w: &TrailWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        particles::teardown(&w.engine, &w.dom);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
