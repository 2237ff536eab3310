use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MouseEvent};

use super::dom::{by_id, listen, prefers_reduced_motion, query, set_style};
use super::page::Page;
use crate::config::{HERO_ID, HERO_VISUAL, TILT_X_VAR, TILT_Y_VAR};
use crate::tilt::{Bounds, Tilt};

/// Tilts the hero visual toward the pointer. Decided once: with reduced
/// motion requested at startup the listeners are never attached.
pub(super) fn install(page: &Rc<Page>) -> Result<(), JsValue> {
    let hero = by_id::<HtmlElement>(&page.document, HERO_ID);
    let visual = query::<HtmlElement>(&page.document, HERO_VISUAL);
    let (Some(hero), Some(visual)) = (hero, visual) else {
        return Ok(());
    };
    if prefers_reduced_motion() {
        return Ok(());
    }

    {
        let hero_box = hero.clone();
        let visual = visual.clone();
        listen(&hero, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = hero_box.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let tilt = Tilt::at(event.client_x() as f64, event.client_y() as f64, bounds);
            apply(&visual, tilt);
        })?;
    }

    listen(&hero, "mouseleave", move |_| apply(&visual, Tilt::RESET))
}

fn apply(visual: &HtmlElement, tilt: Tilt) {
    set_style(visual, TILT_X_VAR, &tilt.x_css());
    set_style(visual, TILT_Y_VAR, &tilt.y_css());
}
