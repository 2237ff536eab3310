use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element, HtmlElement, Window};

use super::{aos, dom, extras, form, nav, scroll, tilt, visibility};
use crate::config::{NAV_LINKS, NAV_TOGGLE, READY_CLASS};
use crate::form::{FormPhase, Submission};
use crate::nav::NavState;
use crate::scroll::FrameGate;
use crate::visibility::Latch;

/// Owns the page's mutable UI state. Built once at startup; every event
/// handler holds an `Rc` to it.
pub struct Page {
    pub(super) window: Window,
    pub(super) document: Document,
    pub(super) body: Option<HtmlElement>,
    pub(super) nav: RefCell<NavState>,
    pub(super) nav_toggle: Option<HtmlElement>,
    pub(super) nav_links: Vec<Element>,
    pub(super) counters: RefCell<Vec<Element>>,
    pub(super) metrics: Latch,
    pub(super) parallax_gate: FrameGate,
    pub(super) submission: RefCell<Submission>,
}

impl Page {
    fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            window: window().ok_or("no window")?,
            document: document.clone(),
            body: document.body(),
            nav: RefCell::new(NavState::default()),
            nav_toggle: dom::query(document, NAV_TOGGLE),
            nav_links: dom::query_all(document, NAV_LINKS)?,
            counters: RefCell::new(Vec::new()),
            metrics: Latch::new(),
            parallax_gate: FrameGate::new(),
            submission: RefCell::new(Submission::default()),
        })
    }

    /// Wires every page behaviour to `document`. Features whose elements
    /// are missing are skipped.
    pub fn install(document: &Document) -> Result<Rc<Page>, JsValue> {
        let page = Rc::new(Page::new(document)?);

        if let Some(body) = &page.body {
            body.class_list().add_1(READY_CLASS)?;
        }
        extras::add_section_orbs(document)?;
        aos::init(&page.window)?;
        scroll::install(&page)?;
        tilt::install(&page)?;
        visibility::install_metrics(&page)?;
        form::install(&page)?;
        extras::set_footer_year(document);
        extras::install_smooth_scroll(document)?;
        visibility::install_sections(&page)?;
        nav::install(&page)?;

        log::debug!(
            "page installed: {} nav links, {} counters",
            page.nav_links.len(),
            page.counters.borrow().len()
        );
        Ok(page)
    }

    pub fn is_nav_open(&self) -> bool {
        self.nav.borrow().is_open()
    }

    pub fn metrics_fired(&self) -> bool {
        self.metrics.is_tripped()
    }

    pub fn form_phase(&self) -> FormPhase {
        self.submission.borrow().phase()
    }
}
