use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Element;

use super::dom::{listen, query_in, viewport_width};
use super::page::Page;
use crate::config::{ACTIVE_CLASS, IN_VIEW_CLASS, NAV_ICON, NAV_OPEN_CLASS};
use crate::nav::NavState;
use crate::visibility::active_links;

pub(super) fn install(page: &Rc<Page>) -> Result<(), JsValue> {
    if let Some(toggle) = &page.nav_toggle {
        let page = page.clone();
        listen(toggle, "click", move |_| page.toggle_nav())?;
    }

    for link in &page.nav_links {
        let page = page.clone();
        listen(link, "click", move |_| page.close_nav())?;
    }

    let handler = page.clone();
    listen(&page.window, "resize", move |_| {
        handler.handle_resize(viewport_width())
    })?;
    Ok(())
}

impl Page {
    /// Opens or closes the mobile menu.
    pub fn toggle_nav(&self) {
        let state = {
            let mut nav = self.nav.borrow_mut();
            nav.toggle();
            *nav
        };
        self.render_nav(state);
    }

    /// Closes the menu and resets the icon.
    pub fn close_nav(&self) {
        let state = {
            let mut nav = self.nav.borrow_mut();
            nav.close();
            *nav
        };
        self.render_nav(state);
    }

    /// Closes an open menu once the viewport is wider than the breakpoint.
    pub fn handle_resize(&self, viewport_width: f64) {
        let changed = self.nav.borrow_mut().resized(viewport_width);
        if changed {
            let state = *self.nav.borrow();
            self.render_nav(state);
        }
    }

    /// Marks `section` as seen and moves the active marker to the nav links
    /// pointing at it.
    pub fn section_entered(&self, section: &Element) {
        warn_on_err("could not mark section", section.class_list().add_1(IN_VIEW_CLASS));
        let id = match section.get_attribute("id") {
            Some(id) if !id.is_empty() => id,
            _ => return,
        };
        let hrefs: Vec<Option<String>> = self
            .nav_links
            .iter()
            .map(|link| link.get_attribute("href"))
            .collect();
        let flags = active_links(hrefs.iter().map(|h| h.as_deref()), &id);
        for (link, active) in self.nav_links.iter().zip(flags) {
            let result = link
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, active)
                .map(|_| ());
            warn_on_err("could not update nav link", result);
        }
    }

    fn render_nav(&self, state: NavState) {
        if let Some(body) = &self.body {
            let result = body
                .class_list()
                .toggle_with_force(NAV_OPEN_CLASS, state.is_open())
                .map(|_| ());
            warn_on_err("could not update body class", result);
        }
        let Some(toggle) = &self.nav_toggle else {
            return;
        };
        warn_on_err(
            "could not set aria-expanded",
            toggle.set_attribute("aria-expanded", state.aria_expanded()),
        );
        if let Some(icon) = query_in::<Element>(toggle, NAV_ICON) {
            let shown = state.icon();
            let classes = icon.class_list();
            warn_on_err("could not show menu icon", classes.add_1(shown.class()));
            warn_on_err(
                "could not hide menu icon",
                classes.remove_1(shown.other().class()),
            );
        }
    }
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{}: {:?}", what, e);
    }
}
