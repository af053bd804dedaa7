//! DOM binding for the drag registry
//!
//! Handles receive `mousedown`/`touchstart`; moves and releases are routed
//! from document-level listeners to whichever controllers are mid-drag.
//! Coasting runs on `requestAnimationFrame`, one pending frame per target.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use retro_desktop::{
    Attachment, DesktopError, DragConfig, DragRegistry, DragResponse, PointerEvent, PointerPhase,
    PointerSource, TargetId, TargetKey, TargetKind, ZOrder,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent, TouchEvent};

use crate::console::warn;
use crate::dom::{document, Listener};
use crate::surface::DomSurface;

/// Listeners and animation state for one attached target
struct Binding {
    _listeners: Vec<Listener>,
    frame: Closure<dyn FnMut(f64)>,
    pending: Cell<Option<i32>>,
}

impl Binding {
    fn cancel_frame(&self) {
        if let (Some(handle), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        self.cancel_frame();
    }
}

/// Owner of every drag controller on the page
pub struct DragHost {
    registry: RefCell<DragRegistry<DomSurface>>,
    bindings: RefCell<HashMap<TargetId, Binding>>,
    document_listeners: RefCell<Vec<Listener>>,
}

impl DragHost {
    pub fn new(config: DragConfig, zorder: ZOrder) -> Rc<Self> {
        Rc::new(Self {
            registry: RefCell::new(DragRegistry::new(config, zorder)),
            bindings: RefCell::new(HashMap::new()),
            document_listeners: RefCell::new(Vec::new()),
        })
    }

    /// Install the document-level move/release listeners. Idempotent.
    pub fn install(self: &Rc<Self>) -> Result<(), DesktopError> {
        if !self.document_listeners.borrow().is_empty() {
            return Ok(());
        }
        let doc = document()?;
        let routes: [(&'static str, PointerPhase); 5] = [
            ("mousemove", PointerPhase::Move),
            ("mouseup", PointerPhase::End),
            ("touchmove", PointerPhase::Move),
            ("touchend", PointerPhase::End),
            ("touchcancel", PointerPhase::Cancel),
        ];
        let listeners = routes
            .into_iter()
            .map(|(event_type, phase)| {
                let host = Rc::downgrade(self);
                let route = move |event: Event| {
                    if let Some(host) = host.upgrade() {
                        host.route(&event, phase);
                    }
                };
                // touchmove must be able to cancel page scrolling
                if event_type == "touchmove" {
                    Listener::active(&doc, event_type, route)
                } else {
                    Listener::new(&doc, event_type, route)
                }
            })
            .collect();
        *self.document_listeners.borrow_mut() = listeners;
        Ok(())
    }

    /// Attach a controller to `element`, dragged by `handle`.
    ///
    /// Either element being absent is a [`DesktopError::MissingElement`].
    /// Re-attaching an attached key installs nothing.
    pub fn attach(
        self: &Rc<Self>,
        key: TargetKey,
        kind: TargetKind,
        element: Option<HtmlElement>,
        handle: Option<HtmlElement>,
    ) -> Result<Attachment, DesktopError> {
        let surface = match (&element, &handle) {
            (Some(element), Some(_)) => Some(DomSurface::new(element.clone())),
            _ => None,
        };
        let attachment = self.registry.borrow_mut().attach(key, kind, surface)?;
        if let (Attachment::Attached(id), Some(handle)) = (attachment, handle) {
            self.bind(id, handle);
        }
        Ok(attachment)
    }

    /// Remove a target's controller and listeners
    pub fn detach(&self, key: &TargetKey) -> Option<TargetId> {
        let id = self.registry.borrow_mut().detach(key)?;
        self.bindings.borrow_mut().remove(&id);
        Some(id)
    }

    /// Bring a target to the front
    pub fn raise(&self, id: TargetId) -> Option<i32> {
        self.registry.borrow_mut().raise(id)
    }

    /// Take a fresh top z-index for a transient overlay such as a dropdown
    pub fn overlay_z(&self) -> i32 {
        self.registry.borrow().zorder().promote(TargetKind::Window)
    }

    /// Whether a target has an active drag session
    pub fn is_dragging(&self, id: TargetId) -> bool {
        self.registry.borrow().get(id).is_some_and(|c| c.is_dragging())
    }

    pub fn id_of(&self, key: &TargetKey) -> Option<TargetId> {
        self.registry.borrow().id_of(key)
    }

    pub fn count(&self) -> usize {
        self.registry.borrow().len()
    }

    fn bind(self: &Rc<Self>, id: TargetId, handle: HtmlElement) {
        let listeners = ["mousedown", "touchstart"]
            .into_iter()
            .map(|event_type| {
                let host = Rc::downgrade(self);
                let handle_el = handle.clone();
                Listener::new(&handle, event_type, move |event: Event| {
                    if let Some(host) = host.upgrade() {
                        host.start(id, &event, &handle_el);
                    }
                })
            })
            .collect();

        let host: Weak<Self> = Rc::downgrade(self);
        let frame = Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(host) = host.upgrade() {
                host.on_frame(id);
            }
        }) as Box<dyn FnMut(f64)>);

        self.bindings.borrow_mut().insert(
            id,
            Binding {
                _listeners: listeners,
                frame,
                pending: Cell::new(None),
            },
        );
    }

    fn start(&self, id: TargetId, event: &Event, handle: &HtmlElement) {
        let Some(pointer) = pointer_event(event, PointerPhase::Start) else {
            return;
        };
        let on_control = is_on_control(event, handle, self.registry.borrow().config());
        let response = self.registry.borrow_mut().dispatch(id, pointer.on_control(on_control));
        if let DragResponse::Started { .. } = response {
            self.cancel_frame(id);
        }
    }

    fn route(&self, event: &Event, phase: PointerPhase) {
        let Some(pointer) = pointer_event(event, phase) else {
            return;
        };
        let active: Vec<TargetId> = {
            let registry = self.registry.borrow();
            registry
                .dragging()
                .filter(|&id| {
                    registry
                        .get(id)
                        .and_then(|c| c.session())
                        .is_some_and(|s| s.source == pointer.source)
                })
                .collect()
        };
        for id in active {
            let response = self.registry.borrow_mut().dispatch(id, pointer);
            if response.prevent_scroll() {
                event.prevent_default();
            }
            if response.needs_frames() {
                self.request_frame(id);
            }
        }
    }

    fn on_frame(&self, id: TargetId) {
        if let Some(binding) = self.bindings.borrow().get(&id) {
            binding.pending.set(None);
        }
        let frame = self.registry.borrow_mut().tick(id);
        if frame.is_moving() {
            self.request_frame(id);
        }
    }

    fn request_frame(&self, id: TargetId) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let bindings = self.bindings.borrow();
        let Some(binding) = bindings.get(&id) else {
            return;
        };
        binding.cancel_frame();
        match window.request_animation_frame(binding.frame.as_ref().unchecked_ref()) {
            Ok(handle) => binding.pending.set(Some(handle)),
            Err(e) => warn(&format!("[desktop] requestAnimationFrame failed: {:?}", e)),
        }
    }

    fn cancel_frame(&self, id: TargetId) {
        if let Some(binding) = self.bindings.borrow().get(&id) {
            binding.cancel_frame();
        }
    }
}

/// Translate a mouse or touch event. Releases without a touch point still
/// produce an event; the controller ignores their position.
fn pointer_event(event: &Event, phase: PointerPhase) -> Option<PointerEvent> {
    read_pointer(event, phase).map(|pointer| pointer.at(event.time_stamp()))
}

fn read_pointer(event: &Event, phase: PointerPhase) -> Option<PointerEvent> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(PointerEvent::new(
            phase,
            PointerSource::Mouse,
            mouse.client_x() as f32,
            mouse.client_y() as f32,
        ));
    }
    let touch_event = event.dyn_ref::<TouchEvent>()?;
    let touch = match phase {
        PointerPhase::Start | PointerPhase::Move => touch_event.touches().get(0),
        PointerPhase::End | PointerPhase::Cancel => touch_event.changed_touches().get(0),
    };
    match touch {
        Some(t) => Some(PointerEvent::new(
            phase,
            PointerSource::Touch,
            t.client_x() as f32,
            t.client_y() as f32,
        )),
        None if matches!(phase, PointerPhase::End | PointerPhase::Cancel) => {
            Some(PointerEvent::new(phase, PointerSource::Touch, 0.0, 0.0))
        }
        None => None,
    }
}

/// Whether the event target, or an ancestor up to the handle, is a control
pub(crate) fn is_on_control(event: &Event, handle: &HtmlElement, config: &DragConfig) -> bool {
    let mut node = event.target().and_then(|t| t.dyn_into::<Element>().ok());
    while let Some(el) = node {
        if config.is_control(&el.tag_name(), &el.id()) {
            return true;
        }
        if el.is_same_node(Some(handle.as_ref())) {
            break;
        }
        node = el.parent_element();
    }
    false
}
