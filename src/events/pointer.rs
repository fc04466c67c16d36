use super::TrailWiring;
use crate::dom;
use crate::particles;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every pointer move repositions the indicator and fires one burst at the
/// new position; the continuous frame loop fills the gaps between events.
pub fn wire_pointermove(w: &TrailWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = ev.client_x() as f64;
        let y = ev.client_y() as f64;

        w.engine.borrow_mut().set_pointer(x, y);
        dom::set_position(&w.cursor, x, y);
        particles::spawn_burst_at(&w.engine, &w.dom, x, y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
