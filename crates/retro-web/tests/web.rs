//! Browser tests for the DOM bindings
//!
//! Run with `wasm-pack test --headless --chrome crates/retro-web`.

use std::rc::Rc;

use retro_desktop::{
    Attachment, DesktopError, DragConfig, MomentumConfig, Surface, TargetKey, TargetKind, Vec2,
    ZOrder,
};
use retro_web::{read_config, DomSurface, DragHost};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, HtmlElement, MouseEvent, MouseEventInit, Touch, TouchEvent, TouchEventInit, TouchInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn element(id: &str) -> HtmlElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    el.set_id(id);
    let style = el.style();
    style.set_property("position", "absolute").unwrap();
    style.set_property("width", "50px").unwrap();
    style.set_property("height", "50px").unwrap();
    style.set_property("right", "10%").unwrap();
    style.set_property("transform", "translate(5px, 5px)").unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn place_makes_left_top_authoritative() {
    let el = element("surface-place");
    let mut surface = DomSurface::new(el.clone());
    surface.place(Vec2::new(40.0, 60.0));
    surface.set_z_index(7);

    let style = el.style();
    assert_eq!(style.get_property_value("left").unwrap(), "40px");
    assert_eq!(style.get_property_value("top").unwrap(), "60px");
    assert_eq!(style.get_property_value("right").unwrap(), "auto");
    assert_eq!(style.get_property_value("transform").unwrap(), "none");
    assert_eq!(style.get_property_value("z-index").unwrap(), "7");

    let bounds = surface.bounds();
    assert!((bounds.width - 50.0).abs() < 0.001);
    assert!(surface.viewport().width > 0.0);
    el.remove();
}

#[wasm_bindgen_test]
fn attach_is_idempotent_and_sets_z() {
    let el = element("host-attach");
    let host = DragHost::new(DragConfig::default(), ZOrder::default());
    host.install().unwrap();

    let key = TargetKey::whole("host-attach");
    let first = host
        .attach(key.clone(), TargetKind::Window, Some(el.clone()), Some(el.clone()))
        .unwrap();
    let second = host
        .attach(key.clone(), TargetKind::Window, Some(el.clone()), Some(el.clone()))
        .unwrap();

    assert!(matches!(first, Attachment::Attached(_)));
    assert_eq!(second, Attachment::AlreadyAttached(first.id()));
    assert_eq!(host.count(), 1);
    assert_eq!(el.style().get_property_value("z-index").unwrap(), "1");

    assert_eq!(host.detach(&key), Some(first.id()));
    assert_eq!(host.count(), 0);
    el.remove();
}

#[wasm_bindgen_test]
fn missing_handle_is_reported() {
    let el = element("host-missing");
    let host = DragHost::new(DragConfig::default(), ZOrder::default());
    let err = host
        .attach(TargetKey::new("host-missing", "header"), TargetKind::Window, Some(el.clone()), None)
        .unwrap_err();
    assert!(matches!(err, DesktopError::MissingElement { .. }));
    assert_eq!(host.count(), 0);
    el.remove();
}

#[wasm_bindgen_test]
fn config_defaults_without_block() {
    let config = read_config();
    assert!((config.drag.momentum.friction - 0.9).abs() < 0.001);
}

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A 50x50 element pinned at `(left, top)`
fn positioned(id: &str, left: i32, top: i32) -> HtmlElement {
    let el: HtmlElement = doc().create_element("div").unwrap().dyn_into().unwrap();
    el.set_id(id);
    let style = el.style();
    style.set_property("position", "absolute").unwrap();
    style.set_property("left", &format!("{}px", left)).unwrap();
    style.set_property("top", &format!("{}px", top)).unwrap();
    style.set_property("width", "50px").unwrap();
    style.set_property("height", "50px").unwrap();
    doc().body().unwrap().append_child(&el).unwrap();
    el
}

fn child(parent: &HtmlElement, tag: &str, id: &str) -> HtmlElement {
    let el: HtmlElement = doc().create_element(tag).unwrap().dyn_into().unwrap();
    if !id.is_empty() {
        el.set_id(id);
    }
    parent.append_child(&el).unwrap();
    el
}

fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

/// `None` where the browser has no `Touch` constructor (desktop Firefox)
fn touch(kind: &str, target: &HtmlElement, x: f64, y: f64) -> Option<TouchEvent> {
    let point = TouchInit::new(0, target);
    point.set_client_x(x as i32);
    point.set_client_y(y as i32);
    let point = Touch::new(&point).ok()?;
    let points = js_sys::Array::of1(&point);

    let init = TouchEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_changed_touches(&points);
    if kind == "touchend" {
        init.set_touches(&js_sys::Array::new());
    } else {
        init.set_touches(&points);
    }
    TouchEvent::new_with_event_init_dict(kind, &init).ok()
}

fn style(el: &HtmlElement, prop: &str) -> String {
    el.style().get_property_value(prop).unwrap()
}

fn left_px(el: &HtmlElement) -> f64 {
    style(el, "left").trim_end_matches("px").parse().unwrap()
}

fn without_momentum() -> DragConfig {
    DragConfig {
        momentum: MomentumConfig {
            enabled: false,
            ..MomentumConfig::default()
        },
        ..DragConfig::default()
    }
}

fn host_with(el: &HtmlElement, config: DragConfig) -> (Rc<DragHost>, u64) {
    let host = DragHost::new(config, ZOrder::default());
    host.install().unwrap();
    let key = TargetKey::whole(el.id());
    let first = host
        .attach(key.clone(), TargetKind::Window, Some(el.clone()), Some(el.clone()))
        .unwrap();
    (host, first.id())
}

async fn wait_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mouse_drag_keeps_grab_offset_after_double_attach() {
    let el = positioned("drag-mouse", 100, 100);
    let (host, id) = host_with(&el, without_momentum());
    let again = host
        .attach(TargetKey::whole("drag-mouse"), TargetKind::Window, Some(el.clone()), Some(el.clone()))
        .unwrap();
    assert_eq!(again, Attachment::AlreadyAttached(id));

    el.dispatch_event(&mouse("mousedown", 110, 110)).unwrap();
    assert!(host.is_dragging(id));
    // One promotion: a duplicated handle listener would promote again
    assert_eq!(style(&el, "z-index"), "2");

    doc().dispatch_event(&mouse("mousemove", 150, 140)).unwrap();
    assert_eq!(style(&el, "left"), "140px");
    assert_eq!(style(&el, "top"), "130px");
    assert_eq!(style(&el, "transform"), "none");

    doc().dispatch_event(&mouse("mouseup", 150, 140)).unwrap();
    assert!(!host.is_dragging(id));
    doc().dispatch_event(&mouse("mousemove", 300, 300)).unwrap();
    assert_eq!(style(&el, "left"), "140px");

    // Overlays stack above the most recently raised window
    assert_eq!(host.overlay_z(), 3);
    el.remove();
}

#[wasm_bindgen_test]
fn press_on_nested_control_does_not_drag() {
    let el = positioned("drag-control", 100, 100);
    let button = child(&el, "button", "");
    let close = child(&el, "div", "close-button");
    let icon = child(&close, "span", "");
    let label = child(&el, "span", "");
    let (host, id) = host_with(&el, without_momentum());

    for target in [&button, &icon] {
        target.dispatch_event(&mouse("mousedown", 110, 110)).unwrap();
        assert!(!host.is_dragging(id));
        assert_eq!(style(&el, "z-index"), "1");
    }
    doc().dispatch_event(&mouse("mousemove", 200, 200)).unwrap();
    assert_eq!(style(&el, "left"), "100px");

    // Plain content inside the handle still starts a drag
    label.dispatch_event(&mouse("mousedown", 110, 110)).unwrap();
    assert!(host.is_dragging(id));
    assert_eq!(style(&el, "z-index"), "2");
    doc().dispatch_event(&mouse("mouseup", 110, 110)).unwrap();
    el.remove();
}

#[wasm_bindgen_test]
fn touch_move_cancels_scrolling_only_past_slop() {
    let el = positioned("drag-touch", 100, 100);
    let (host, id) = host_with(&el, without_momentum());

    let Some(start) = touch("touchstart", &el, 110.0, 110.0) else {
        el.remove();
        return;
    };
    el.dispatch_event(&start).unwrap();
    assert!(host.is_dragging(id));

    let near = touch("touchmove", &el, 112.0, 111.0).unwrap();
    doc().dispatch_event(&near).unwrap();
    assert!(!near.default_prevented());
    assert_eq!(style(&el, "left"), "102px");

    let far = touch("touchmove", &el, 120.0, 110.0).unwrap();
    doc().dispatch_event(&far).unwrap();
    assert!(far.default_prevented());
    assert_eq!(style(&el, "left"), "110px");

    // A mouse move does not steer a touch session
    doc().dispatch_event(&mouse("mousemove", 300, 300)).unwrap();
    assert_eq!(style(&el, "left"), "110px");

    let end = touch("touchend", &el, 120.0, 110.0).unwrap();
    doc().dispatch_event(&end).unwrap();
    assert!(!host.is_dragging(id));
    el.remove();
}

#[wasm_bindgen_test]
async fn release_coasts_until_next_press() {
    let el = positioned("drag-coast", 100, 100);
    let (host, id) = host_with(&el, DragConfig::default());

    el.dispatch_event(&mouse("mousedown", 110, 110)).unwrap();
    doc().dispatch_event(&mouse("mousemove", 130, 110)).unwrap();
    doc().dispatch_event(&mouse("mouseup", 130, 110)).unwrap();
    assert_eq!(style(&el, "left"), "120px");

    wait_ms(200).await;
    let coasted = left_px(&el);
    assert!(coasted > 130.0, "left was {}", coasted);

    // Pressing again stops the coast where it is
    el.dispatch_event(&mouse("mousedown", 150, 110)).unwrap();
    assert!(host.is_dragging(id));
    let held = left_px(&el);
    wait_ms(100).await;
    assert!((left_px(&el) - held).abs() < 0.001);

    doc().dispatch_event(&mouse("mouseup", 150, 110)).unwrap();
    el.remove();
}
