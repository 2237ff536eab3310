use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::HtmlElement;

use super::dom::{by_id, listen, prefers_reduced_motion, query, scroll_y, set_style, viewport_height};
use super::page::Page;
use crate::config::{HERO_ID, HERO_PARALLAX, NAV_PROGRESS};
use crate::scroll::{parallax_frame, progress_width, scroll_progress};

pub(super) fn install(page: &Rc<Page>) -> Result<(), JsValue> {
    let hero = by_id::<HtmlElement>(&page.document, HERO_ID);
    let layer = query::<HtmlElement>(&page.document, HERO_PARALLAX);
    if let (Some(hero), Some(layer)) = (hero, layer) {
        install_parallax(page, hero, layer)?;
    }

    if let Some(bar) = query::<HtmlElement>(&page.document, NAV_PROGRESS) {
        let document = page.document.clone();
        listen(&page.window, "scroll", move |_| {
            let height = document
                .document_element()
                .map(|root| root.scroll_height() as f64)
                .unwrap_or(0.0);
            let percent = scroll_progress(scroll_y(), height, viewport_height());
            set_style(&bar, "width", &progress_width(percent));
        })?;
    }
    Ok(())
}

/// Moves the hero layer at most once per animation frame while scrolling.
fn install_parallax(page: &Rc<Page>, hero: HtmlElement, layer: HtmlElement) -> Result<(), JsValue> {
    let frame = {
        let page = page.clone();
        Closure::wrap(Box::new(move || {
            let transform = parallax_frame(
                &page.parallax_gate,
                prefers_reduced_motion(),
                scroll_y(),
                hero.offset_height() as f64,
            );
            if let Some(transform) = transform {
                set_style(&layer, "transform", &transform);
            }
        }) as Box<dyn FnMut()>)
    };

    let handler = page.clone();
    listen(&page.window, "scroll", move |_| {
        if !handler.parallax_gate.try_begin() {
            return;
        }
        let requested = handler
            .window
            .request_animation_frame(frame.as_ref().unchecked_ref());
        if let Err(e) = requested {
            handler.parallax_gate.end();
            log::warn!("parallax frame not scheduled: {:?}", e);
        }
    })
}
