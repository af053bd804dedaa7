//! Keyed container of drag controllers
//!
//! The registry owns one [`DragController`] per attached `(element, handle)`
//! pair. It exists so that attaching the same pair twice is a no-op and so the
//! browser layer can route events by id. The only state shared between
//! controllers is the [`ZOrder`] counter.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::config::DragConfig;
use crate::error::DesktopError;
use crate::input::{CoastFrame, DragController, DragResponse, PointerEvent};
use crate::surface::Surface;
use crate::zorder::{TargetKind, ZOrder};

/// Stable identifier of an attached target
pub type TargetId = u64;

/// Identity of a draggable target: its container and its handle.
///
/// The handle may equal the element (desktop icons).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetKey {
    pub element: String,
    pub handle: String,
}

impl TargetKey {
    pub fn new(element: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            handle: handle.into(),
        }
    }

    /// Key for an element that is its own handle
    pub fn whole(element: impl Into<String>) -> Self {
        let element = element.into();
        Self {
            handle: element.clone(),
            element,
        }
    }
}

/// Outcome of an attach request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attachment {
    /// A new controller was created; the caller installs listeners
    Attached(TargetId),
    /// The pair was already attached; nothing changed
    AlreadyAttached(TargetId),
}

impl Attachment {
    #[inline]
    pub fn id(self) -> TargetId {
        match self {
            Attachment::Attached(id) | Attachment::AlreadyAttached(id) => id,
        }
    }

    /// Check if listeners must be installed
    #[inline]
    pub fn is_new(self) -> bool {
        matches!(self, Attachment::Attached(_))
    }
}

/// Drag controllers keyed by target
pub struct DragRegistry<S: Surface> {
    config: Rc<DragConfig>,
    zorder: ZOrder,
    controllers: BTreeMap<TargetId, DragController<S>>,
    keys: HashMap<TargetKey, TargetId>,
    next_id: TargetId,
}

impl<S: Surface> DragRegistry<S> {
    /// Create an empty registry sharing `zorder` with every controller
    pub fn new(config: DragConfig, zorder: ZOrder) -> Self {
        Self {
            config: Rc::new(config),
            zorder,
            controllers: BTreeMap::new(),
            keys: HashMap::new(),
            next_id: 1,
        }
    }

    /// Attach a controller to `key`.
    ///
    /// `surface` is `None` when the browser layer could not resolve the
    /// container or the handle; that is reported as
    /// [`DesktopError::MissingElement`] and nothing is registered. An already
    /// attached key returns its existing id without touching the surface.
    pub fn attach(
        &mut self,
        key: TargetKey,
        kind: TargetKind,
        surface: Option<S>,
    ) -> Result<Attachment, DesktopError> {
        if let Some(&id) = self.keys.get(&key) {
            return Ok(Attachment::AlreadyAttached(id));
        }
        let surface = surface.ok_or_else(|| DesktopError::missing(&key.element, &key.handle))?;

        let id = self.next_id;
        self.next_id += 1;
        let controller = DragController::attach(surface, kind, self.config.clone(), self.zorder.clone());
        self.controllers.insert(id, controller);
        self.keys.insert(key, id);
        Ok(Attachment::Attached(id))
    }

    /// Drop the controller for `key`, returning its id
    pub fn detach(&mut self, key: &TargetKey) -> Option<TargetId> {
        let id = self.keys.remove(key)?;
        self.controllers.remove(&id);
        Some(id)
    }

    /// Route a pointer event to one controller
    pub fn dispatch(&mut self, id: TargetId, event: PointerEvent) -> DragResponse {
        match self.controllers.get_mut(&id) {
            Some(controller) => controller.handle(event),
            None => DragResponse::Ignored,
        }
    }

    /// Advance one coasting frame for one controller
    pub fn tick(&mut self, id: TargetId) -> CoastFrame {
        match self.controllers.get_mut(&id) {
            Some(controller) => controller.tick(),
            None => CoastFrame::Stopped,
        }
    }

    /// Bring one target to the front; `None` if it is not attached
    pub fn raise(&mut self, id: TargetId) -> Option<i32> {
        self.controllers.get_mut(&id).map(|c| c.raise())
    }

    /// Ids of controllers that are mid-drag
    pub fn dragging(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.controllers
            .iter()
            .filter(|(_, c)| c.is_dragging())
            .map(|(&id, _)| id)
    }

    pub fn get(&self, id: TargetId) -> Option<&DragController<S>> {
        self.controllers.get(&id)
    }

    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut DragController<S>> {
        self.controllers.get_mut(&id)
    }

    /// Id attached to `key`, if any
    pub fn id_of(&self, key: &TargetKey) -> Option<TargetId> {
        self.keys.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Shared z-order service
    pub fn zorder(&self) -> &ZOrder {
        &self.zorder
    }

    /// Drag settings shared by every controller
    pub fn config(&self) -> &DragConfig {
        &self.config
    }
}
