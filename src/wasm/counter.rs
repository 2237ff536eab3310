use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Intl, Object};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element};

use crate::config::{COUNTER_ATTR, SUFFIX_ATTR};
use crate::counter::{group_thousands, Counter};

/// Formats numbers with the browser's default locale, e.g. "1,234" or
/// "1.234".
pub fn locale_formatter() -> impl Fn(u64) -> String {
    let format: Function = Intl::NumberFormat::new(&Array::new(), &Object::new()).format();
    move |value| {
        format
            .call1(&JsValue::UNDEFINED, &JsValue::from_f64(value as f64))
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_else(|| group_thousands(value))
    }
}

/// Counts `el` up to its `data-counter` value over the counter duration.
///
/// Each call runs its own animation-frame chain; nothing stops two chains
/// on the same element.
pub fn animate(el: Element) -> Result<(), JsValue> {
    let counter = Counter::from_attributes(
        el.get_attribute(COUNTER_ATTR).as_deref(),
        el.get_attribute(SUFFIX_ATTR).as_deref(),
    );
    let format = locale_formatter();
    let win = window().ok_or("no window")?;
    // Without a performance clock the first frame's timestamp is the origin.
    let mut start = win.performance().map(|p| p.now());

    // `f` holds the frame closure so it can request itself again. It is
    // taken out once the counter reaches its target, which frees it.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let origin = *start.get_or_insert(now);
        let frame = counter.frame_with(now - origin, &format);
        el.set_text_content(Some(&frame.text));

        if frame.finished {
            let _ = f.borrow_mut().take();
            return;
        }

        let requested = match (window(), f.borrow().as_ref()) {
            (Some(w), Some(next)) => w.request_animation_frame(next.as_ref().unchecked_ref()),
            _ => Err(JsValue::from_str("no window")),
        };
        if let Err(e) = requested {
            log::warn!("counter frame not scheduled: {:?}", e);
        }
    }) as Box<dyn FnMut(f64)>));

    let scheduled = match g.borrow().as_ref() {
        Some(first) => win.request_animation_frame(first.as_ref().unchecked_ref()),
        None => Err(JsValue::from_str("counter closure missing")),
    };
    if scheduled.is_err() {
        let _ = g.borrow_mut().take();
    }
    scheduled.map(|_| ())
}
