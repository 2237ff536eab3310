// Page behaviour logic lives in plain modules so it can be tested on the
// host; the DOM wiring is only compiled when targeting wasm32.

pub mod config;
pub mod counter;
pub mod form;
pub mod nav;
pub mod scroll;
pub mod tilt;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    mod aos;
    mod counter;
    mod dom;
    mod extras;
    mod form;
    mod nav;
    mod page;
    mod scroll;
    mod tilt;
    mod visibility;

    pub use counter::{animate, locale_formatter};
    pub use dom::prefers_reduced_motion;
    pub use page::Page;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        console_log::init_with_level(level).ok();
        log::info!("expo site starting");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if document.ready_state() == "loading" {
            let doc = document.clone();
            dom::listen(&document, "DOMContentLoaded", move |_| {
                if let Err(e) = Page::install(&doc) {
                    log::error!("page setup failed: {:?}", e);
                }
            })?;
        } else {
            Page::install(&document)?;
        }
        Ok(())
    }
}
