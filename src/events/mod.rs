use crate::core::TrailEngine;
use crate::particles::TrailDom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod lifecycle;
mod pointer;

pub use lifecycle::{wire_enter_leave, wire_unload};
pub use pointer::wire_pointermove;

/// Shared handles every trail event handler closes over.
#[derive(Clone)]
pub struct TrailWiring {
    pub engine: Rc<RefCell<TrailEngine>>,
    pub dom: Rc<RefCell<TrailDom>>,
    pub cursor: web::HtmlElement,
}

pub fn wire_trail_handlers(w: &TrailWiring) {
    wire_pointermove(w);
    if let Some(doc) = crate::dom::window_document() {
        wire_enter_leave(&doc, &w.cursor);
    }
    wire_unload(w);
}
