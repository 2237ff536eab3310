//! Animate-On-Scroll hookup. The library is loaded by the page itself; when
//! its global is missing this does nothing.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use super::dom::{listen, prefers_reduced_motion};
use crate::config::AosOptions;

pub(super) fn init(window: &Window) -> Result<(), JsValue> {
    let aos = Reflect::get(window, &JsValue::from_str("AOS"))?;
    if aos.is_undefined() || aos.is_null() {
        return Ok(());
    }

    let options = serde_wasm_bindgen::to_value(&AosOptions::new(prefers_reduced_motion()))?;
    method(&aos, "init")?.call1(&aos, &options)?;

    // Element positions shift once images and fonts finish loading.
    listen(window, "load", move |_| {
        let refreshed = method(&aos, "refreshHard").and_then(|f| f.call0(&aos));
        if let Err(e) = refreshed {
            log::warn!("AOS.refreshHard failed: {:?}", e);
        }
    })
}

fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
    Reflect::get(target, &JsValue::from_str(name))?.dyn_into::<Function>()
}
