use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Moves the persistent cursor indicator; the page CSS centers it on (x, y).
#[inline]
pub fn set_position(el: &web::HtmlElement, x: f64, y: f64) {
    let style = el.style();
    _ = style.set_property("left", &format!("{x}px"));
    _ = style.set_property("top", &format!("{y}px"));
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, opacity: f64) {
    _ = el.style().set_property("opacity", &format!("{opacity}"));
}
