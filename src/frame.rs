use crate::core::{SpawnThrottle, TrailEngine};
use crate::particles::{self, TrailDom};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<TrailEngine>>,
    pub dom: Rc<RefCell<TrailDom>>,
    pub throttle: SpawnThrottle,
}

impl FrameContext {
    /// Continuous trail: at most one burst per throttle window, spawned at
    /// the last known pointer position (which may lag the true pointer by up
    /// to a frame; the trail shape depends on that).
    pub fn frame(&mut self) {
        if self.throttle.ready(js_sys::Date::now()) {
            let (x, y) = self.engine.borrow().pointer();
            particles::spawn_burst_at(&self.engine, &self.dom, x, y);
        }
    }
}

/// Runs `frame` on every animation frame for the lifetime of the page.
/// There is no cancellation path; only a reload stops the loop.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
