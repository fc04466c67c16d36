use crate::constants::{OVERLAY_ACTIVE_CLASS, OVERLAY_VIDEO_ID, VIDEO_BUTTON_ID, VIDEO_OVERLAY_ID};
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fullscreen video overlay. Entirely independent of the trail manager: any
/// failure here is logged and contained, and the trail keeps running
/// underneath the overlay.
pub fn wire(document: &web::Document) {
    let overlay = match document.get_element_by_id(VIDEO_OVERLAY_ID) {
        Some(el) => el,
        None => {
            log::warn!("[overlay] missing #{VIDEO_OVERLAY_ID}; video overlay disabled");
            return;
        }
    };
    let video = match document
        .get_element_by_id(OVERLAY_VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
    {
        Some(v) => v,
        None => {
            log::warn!("[overlay] missing #{OVERLAY_VIDEO_ID} video; video overlay disabled");
            return;
        }
    };

    wire_activate(document, &overlay, &video);
    wire_ended(document, &overlay, &video);
}

// Activate: flash the overlay in, request fullscreen, start playback.
fn wire_activate(document: &web::Document, overlay: &web::Element, video: &web::HtmlVideoElement) {
    let overlay = overlay.clone();
    let video = video.clone();
    dom::add_click_listener(document, VIDEO_BUTTON_ID, move || {
        _ = overlay.class_list().add_1(OVERLAY_ACTIVE_CLASS);

        if let Err(e) = overlay.request_fullscreen() {
            log::warn!("[overlay] fullscreen request rejected: {:?}", e);
        }

        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[overlay] playback rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[overlay] play failed: {:?}", e),
        }
    });
}

// Playback ended: restore the page, reset the video, leave fullscreen.
fn wire_ended(document: &web::Document, overlay: &web::Element, video: &web::HtmlVideoElement) {
    let overlay = overlay.clone();
    let video_reset = video.clone();
    let document = document.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        _ = overlay.class_list().remove_1(OVERLAY_ACTIVE_CLASS);
        _ = video_reset.pause();
        video_reset.set_current_time(0.0);
        if document.fullscreen_element().is_some() {
            document.exit_fullscreen();
        }
    }) as Box<dyn FnMut()>);
    _ = video.add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
    closure.forget();
}
