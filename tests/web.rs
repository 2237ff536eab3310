#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use expo_wasm::form::{FormPhase, SENDING_LABEL, SENT_LABEL};
use expo_wasm::wasm::{animate, locale_formatter, prefers_reduced_motion, Page};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r##"
  <nav>
    <div class="nav-progress"></div>
    <button class="nav-toggle" aria-expanded="false"><i class="bi bi-list"></i></button>
    <a class="nav-link" href="#a">A</a>
    <a class="nav-link" href="#b">B</a>
    <a class="nav-link" href="#c">C</a>
  </nav>
  <header id="hero" class="hero" style="display: block; width: 400px; height: 200px">
    <div class="hero-parallax"></div>
    <div class="hero-visual"></div>
  </header>
  <main>
    <section id="a"></section>
    <section id="b"></section>
    <section id="c"></section>
    <section id="impact-metrics"><span id="count" data-counter="1234" data-suffix="+">0</span></section>
    <form class="contact-form">
      <input id="name" name="name">
      <button class="btn-submit" type="submit">Send Message</button>
    </form>
  </main>
  <span id="year"></span>
"##;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn install_fixture() -> (Document, Rc<Page>) {
    let document = document();
    let body = document.body().unwrap();
    body.set_class_name("");
    body.set_inner_html(FIXTURE);
    let page = Page::install(&document).expect("page install");
    (document, page)
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> T {
    document
        .get_element_by_id(id)
        .expect("fixture element")
        .dyn_into::<T>()
        .unwrap()
}

fn select<T: JsCast>(document: &Document, selector: &str) -> T {
    document
        .query_selector(selector)
        .unwrap()
        .expect("fixture element")
        .dyn_into::<T>()
        .unwrap()
}

#[wasm_bindgen_test]
fn install_marks_page_and_decorates_sections() {
    let (document, _page) = install_fixture();
    let body = document.body().unwrap();
    assert!(body.class_list().contains("js-ready"));

    let section: Element = by_id(&document, "a");
    let first = section.first_element_child().unwrap();
    assert_eq!(first.class_name(), "section-orb orb-a");

    let year: Element = by_id(&document, "year");
    let text = year.text_content().unwrap();
    assert_eq!(text.len(), 4);
}

#[wasm_bindgen_test]
fn toggle_click_keeps_icon_in_sync() {
    let (document, page) = install_fixture();
    let toggle: HtmlElement = select(&document, ".nav-toggle");
    let icon: Element = select(&document, ".nav-toggle .bi");
    let body = document.body().unwrap();

    toggle.click();
    assert!(page.is_nav_open());
    assert!(body.class_list().contains("nav-open"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(icon.class_list().contains("bi-x"));
    assert!(!icon.class_list().contains("bi-list"));

    toggle.click();
    assert!(!page.is_nav_open());
    assert!(icon.class_list().contains("bi-list"));
    assert!(!icon.class_list().contains("bi-x"));
}

#[wasm_bindgen_test]
fn nav_link_click_closes_menu() {
    let (document, page) = install_fixture();
    let toggle: HtmlElement = select(&document, ".nav-toggle");
    let link: HtmlElement = select(&document, ".nav-link[href='#b']");

    toggle.click();
    link.click();
    assert!(!page.is_nav_open());
    assert!(!document.body().unwrap().class_list().contains("nav-open"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn wide_resize_closes_menu_without_click() {
    let (document, page) = install_fixture();
    let icon: Element = select(&document, ".nav-toggle .bi");

    page.toggle_nav();
    page.handle_resize(600.0);
    assert!(page.is_nav_open());

    page.handle_resize(1024.0);
    assert!(!page.is_nav_open());
    assert!(icon.class_list().contains("bi-list"));
    assert!(!icon.class_list().contains("bi-x"));
}

#[wasm_bindgen_test]
fn entering_section_moves_active_link() {
    let (document, page) = install_fixture();
    let a: Element = by_id(&document, "a");
    let b: Element = by_id(&document, "b");

    page.section_entered(&a);
    page.section_entered(&b);

    assert!(a.class_list().contains("in-view"));
    assert!(b.class_list().contains("in-view"));
    for (href, active) in [("#a", false), ("#b", true), ("#c", false)] {
        let link: Element = select(&document, &format!(".nav-link[href='{href}']"));
        assert_eq!(link.class_list().contains("active"), active, "{href}");
    }
}

#[wasm_bindgen_test(async)]
async fn counter_reaches_exact_target() {
    let (document, _page) = install_fixture();
    let el: Element = by_id(&document, "count");
    animate(el.clone()).unwrap();
    TimeoutFuture::new(2300).await;
    let expected = format!("{}+", locale_formatter()(1234));
    assert_eq!(el.text_content().as_deref(), Some(expected.as_str()));
}

#[wasm_bindgen_test]
fn metrics_latch_only_trips_once() {
    let (_document, page) = install_fixture();
    assert!(!page.metrics_fired());
    page.metrics_entered();
    page.metrics_entered();
    assert!(page.metrics_fired());
}

#[wasm_bindgen_test(async)]
async fn contact_form_runs_fake_send_cycle() {
    let (document, page) = install_fixture();
    let form: HtmlFormElement = select(&document, ".contact-form");
    let button: HtmlButtonElement = select(&document, ".btn-submit");
    let name: HtmlInputElement = by_id(&document, "name");
    name.set_value("Amani");

    button.style().set_property("background", "navy").unwrap();

    page.submit_form(&form);
    assert_eq!(page.form_phase(), FormPhase::Sending);
    assert_eq!(button.text_content().as_deref(), Some(SENDING_LABEL));
    assert!(button.disabled());
    assert_ne!(button.style().get_property_value("background").unwrap(), "");

    // Ignored while in flight.
    page.submit_form(&form);
    assert_eq!(page.form_phase(), FormPhase::Sending);

    TimeoutFuture::new(1000).await;
    assert_eq!(page.form_phase(), FormPhase::Sent);
    assert_eq!(button.text_content().as_deref(), Some(SENT_LABEL));
    assert_eq!(name.value(), "");

    TimeoutFuture::new(3200).await;
    assert_eq!(page.form_phase(), FormPhase::Idle);
    assert_eq!(button.text_content().as_deref(), Some("Send Message"));
    assert!(!button.disabled());
    assert_eq!(button.style().get_property_value("background").unwrap(), "");
}

#[wasm_bindgen_test]
fn locale_formatter_groups_like_the_browser() {
    let expected = js_sys::Number::from(1234567.0).to_locale_string("default");
    assert_eq!(locale_formatter()(1234567), String::from(expected));
    assert_eq!(locale_formatter()(0), "0");
}

fn mouse_event(kind: &str, client_x: f64, client_y: f64) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_client_x(client_x as i32);
    init.set_client_y(client_y as i32);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

fn tilt_vars(visual: &HtmlElement) -> (String, String) {
    let style = visual.style();
    (
        style.get_property_value("--tilt-x").unwrap(),
        style.get_property_value("--tilt-y").unwrap(),
    )
}

#[wasm_bindgen_test]
fn pointer_tilts_hero_and_leave_resets() {
    let (document, _page) = install_fixture();
    let hero: HtmlElement = by_id(&document, "hero");
    let visual: HtmlElement = select(&document, ".hero-visual");
    let rect = hero.get_bounding_client_rect();

    hero.dispatch_event(&mouse_event("mousemove", rect.left() + 1.0, rect.top() + 1.0))
        .unwrap();
    let (x, y) = tilt_vars(&visual);
    if prefers_reduced_motion() {
        assert_eq!((x.as_str(), y.as_str()), ("", ""));
        return;
    }
    assert!(x.ends_with("deg") && x != "0deg", "tilt-x was {x:?}");
    assert!(y.ends_with("deg") && y != "0deg", "tilt-y was {y:?}");
    assert!(x.starts_with('-'));
    assert!(!y.starts_with('-'));

    hero.dispatch_event(&mouse_event("mouseleave", 0.0, 0.0)).unwrap();
    assert_eq!(tilt_vars(&visual), ("0deg".to_string(), "0deg".to_string()));
}

#[wasm_bindgen_test(async)]
async fn scroll_updates_progress_bar_and_parallax() {
    let (document, _page) = install_fixture();
    let bar: HtmlElement = select(&document, ".nav-progress");
    let layer: HtmlElement = select(&document, ".hero-parallax");

    let window = web_sys::window().unwrap();
    window
        .dispatch_event(&Event::new("scroll").unwrap())
        .unwrap();

    let width = bar.style().get_property_value("width").unwrap();
    assert!(width.ends_with('%'), "progress width was {width:?}");

    // The parallax update runs on the next animation frame.
    TimeoutFuture::new(200).await;
    let transform = layer.style().get_property_value("transform").unwrap();
    if prefers_reduced_motion() {
        assert_eq!(transform, "");
    } else {
        assert!(transform.contains("scale(1.1)"), "transform was {transform:?}");
    }
}
