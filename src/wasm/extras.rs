use wasm_bindgen::JsValue;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::dom::{by_id, listen, query_all};
use crate::config::{ANCHORS, ORB_CLASSES, ORB_SECTIONS, YEAR_ID};
use crate::nav::fragment_target;

/// Prepends the two decorative orbs to every main section.
pub(super) fn add_section_orbs(document: &Document) -> Result<(), JsValue> {
    let [class_a, class_b] = ORB_CLASSES;
    for section in query_all(document, ORB_SECTIONS)? {
        let orb_a = document.create_element("div")?;
        let orb_b = document.create_element("div")?;
        orb_a.set_class_name(class_a);
        orb_b.set_class_name(class_b);
        section.prepend_with_node_2(&orb_a, &orb_b)?;
    }
    Ok(())
}

pub(super) fn set_footer_year(document: &Document) {
    if let Some(el) = by_id::<Element>(document, YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

/// Smooth-scrolls in-page anchors to their target. Links whose target is
/// missing keep the browser's default behaviour.
pub(super) fn install_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    for anchor in query_all(document, ANCHORS)? {
        let document = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_target(&href).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}
