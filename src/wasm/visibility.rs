use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::counter::animate;
use super::dom::{by_id, query_all};
use super::page::Page;
use crate::config::{COUNTERS, METRICS_ID, SECTIONS};
use crate::visibility::{ObserverOptions, METRICS_OBSERVER, SECTIONS_OBSERVER};

/// Calls `on_enter` for every observed element that starts intersecting.
/// The observer stays attached for the life of the page.
pub fn observe<F>(
    targets: &[Element],
    options: ObserverOptions,
    mut on_enter: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(&IntersectionObserverEntry) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: JsValue| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_enter(&entry);
            }
        }
    }) as Box<dyn FnMut(Array, JsValue)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}

pub(super) fn install_metrics(page: &Rc<Page>) -> Result<(), JsValue> {
    let Some(container) = by_id::<Element>(&page.document, METRICS_ID) else {
        return Ok(());
    };
    let counters = query_all(&page.document, COUNTERS)?;
    if counters.is_empty() {
        return Ok(());
    }
    *page.counters.borrow_mut() = counters;

    let handler = page.clone();
    observe(&[container], METRICS_OBSERVER, move |_| handler.metrics_entered())?;
    Ok(())
}

pub(super) fn install_sections(page: &Rc<Page>) -> Result<(), JsValue> {
    let sections = query_all(&page.document, SECTIONS)?;
    if sections.is_empty() {
        return Ok(());
    }
    let handler = page.clone();
    observe(&sections, SECTIONS_OBSERVER, move |entry| {
        handler.section_entered(&entry.target())
    })?;
    Ok(())
}

impl Page {
    /// Starts every counter the first time the metrics block comes into
    /// view. Later entries do nothing.
    pub fn metrics_entered(&self) {
        if !self.metrics.trip() {
            return;
        }
        let counters = self.counters.borrow();
        log::debug!("animating {} counters", counters.len());
        for el in counters.iter() {
            if let Err(e) = animate(el.clone()) {
                log::warn!("counter animation failed: {:?}", e);
            }
        }
    }
}
