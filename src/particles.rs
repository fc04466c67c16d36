use crate::constants::PARTICLE_CLASS;
use crate::core::{gradient_css, ParticleSpec, TrailEngine};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the trail: the container plus a map from particle id to its
/// live node, so teardown can remove whatever is still on screen.
pub struct TrailDom {
    document: web::Document,
    container: web::Element,
    nodes: FnvHashMap<u64, web::Element>,
}

impl TrailDom {
    pub fn new(document: web::Document, container: web::Element) -> Self {
        Self {
            document,
            container,
            nodes: FnvHashMap::default(),
        }
    }

    fn build_node(&self, spec: &ParticleSpec) -> Option<web::Element> {
        let el = self.document.create_element("div").ok()?;
        let mut class = PARTICLE_CLASS.to_string();
        if let Some(extra) = spec.size.css_class() {
            class.push(' ');
            class.push_str(extra);
        }
        el.set_class_name(&class);
        let style = format!(
            "left:{:.1}px;top:{:.1}px;animation-duration:{:.3}s;background:{}",
            spec.x,
            spec.y,
            spec.duration_sec,
            gradient_css(&spec.stops)
        );
        _ = el.set_attribute("style", &style);
        Some(el)
    }
}

/// Spawns one burst at (x, y): registers ids with the engine, realizes the
/// nodes, and schedules a one-shot expiry timer per particle.
pub fn spawn_burst_at(
    engine: &Rc<RefCell<TrailEngine>>,
    dom: &Rc<RefCell<TrailDom>>,
    x: f64,
    y: f64,
) {
    let burst = engine
        .borrow_mut()
        .spawn_burst(x, y, js_sys::Date::now());

    for spec in burst {
        let id = spec.id;
        {
            let mut d = dom.borrow_mut();
            let el = match d.build_node(&spec) {
                Some(el) => el,
                None => {
                    engine.borrow_mut().expire(id);
                    continue;
                }
            };
            if d.container.append_child(&el).is_err() {
                engine.borrow_mut().expire(id);
                continue;
            }
            d.nodes.insert(id, el);
        }

        let engine_t = engine.clone();
        let dom_t = dom.clone();
        let cb = Closure::once_into_js(move || {
            // The node may already be gone after teardown; both removals
            // tolerate the handle being absent.
            if let Some(el) = dom_t.borrow_mut().nodes.remove(&id) {
                el.remove();
            }
            engine_t.borrow_mut().expire(id);
        });
        let timeout_ms = (spec.duration_sec * 1000.0) as i32;
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.unchecked_ref(),
                timeout_ms,
            );
        }
    }
}

/// Removes every live particle node and empties the active set. Pending
/// expiry timers then fire as no-ops. Safe to call more than once.
pub fn teardown(engine: &Rc<RefCell<TrailEngine>>, dom: &Rc<RefCell<TrailDom>>) {
    let mut d = dom.borrow_mut();
    for (_, el) in d.nodes.drain() {
        el.remove();
    }
    let removed = engine.borrow_mut().teardown();
    if !removed.is_empty() {
        log::info!("[trail] teardown removed {} live particles", removed.len());
    }
}
