use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{HtmlButtonElement, HtmlFormElement};

use super::dom::{listen, query, query_in, set_style};
use super::page::Page;
use crate::config::{CONTACT_FORM, SUBMIT_BUTTON};
use crate::form::{FormEvent, ACK_HOLD_MS, SEND_DELAY_MS};

pub(super) fn install(page: &Rc<Page>) -> Result<(), JsValue> {
    let Some(form) = query::<HtmlFormElement>(&page.document, CONTACT_FORM) else {
        return Ok(());
    };
    let page = page.clone();
    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();
        page.submit_form(&form);
    })
}

impl Page {
    /// Runs the fake send cycle for `form`. Ignored while a previous cycle
    /// is still showing.
    pub fn submit_form(self: &Rc<Self>, form: &HtmlFormElement) {
        let button = query_in::<HtmlButtonElement>(form, SUBMIT_BUTTON);
        let label = button.as_ref().and_then(|b| b.text_content());
        if !self.submission.borrow_mut().submit(label) {
            log::debug!("submit ignored, previous message still in flight");
            return;
        }
        self.render_button(button.as_ref());

        let page = self.clone();
        let form = form.clone();
        Timeout::new(SEND_DELAY_MS, move || {
            page.submission.borrow_mut().apply(FormEvent::Delivered);
            page.render_button(button.as_ref());
            form.reset();

            Timeout::new(ACK_HOLD_MS, move || {
                page.submission.borrow_mut().apply(FormEvent::AckExpired);
                page.render_button(button.as_ref());
            })
            .forget();
        })
        .forget();
    }

    fn render_button(&self, button: Option<&HtmlButtonElement>) {
        let Some(button) = button else {
            return;
        };
        let submission = self.submission.borrow();
        let view = submission.view();
        button.set_text_content(Some(view.label));
        button.set_disabled(view.disabled);
        if let Some(background) = view.background {
            set_style(button, "background", background);
        }
    }
}
