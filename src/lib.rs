#![cfg(target_arch = "wasm32")]
use crate::constants::{CURSOR_SELECTOR, TRAIL_CONTAINER_SELECTOR};
use crate::core::{SpawnThrottle, TrailEngine};
use crate::particles::TrailDom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod particles;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trail-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn query_html_element(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let cursor = query_html_element(&document, CURSOR_SELECTOR)?;
    let container: web::Element = query_html_element(&document, TRAIL_CONTAINER_SELECTOR)?.into();

    // Seed from the wall clock; the trail only needs variety, not
    // reproducibility.
    let engine = Rc::new(RefCell::new(TrailEngine::new(js_sys::Date::now() as u64)));
    let trail_dom = Rc::new(RefCell::new(TrailDom::new(document.clone(), container)));

    events::wire_trail_handlers(&events::TrailWiring {
        engine: engine.clone(),
        dom: trail_dom.clone(),
        cursor,
    });

    // Video overlay runs beside the trail, never in its way.
    overlay::wire(&document);

    // Continuous trail driven by requestAnimationFrame.
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        dom: trail_dom,
        throttle: SpawnThrottle::default(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
