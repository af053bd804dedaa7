//! In-memory surface that records every style write.

use std::cell::RefCell;
use std::rc::Rc;

use crate::math::{Rect, Size, Vec2};
use crate::surface::Surface;

#[derive(Debug)]
struct State {
    rect: Rect,
    viewport: Size,
    scroll: Vec2,
    placements: Vec<Vec2>,
    z_writes: Vec<i32>,
}

/// In-memory [`Surface`] for tests.
///
/// Clones share state, so a test can keep one handle while the controller
/// owns another and inspect what the controller wrote.
#[derive(Clone, Debug)]
pub struct MemorySurface {
    state: Rc<RefCell<State>>,
}

impl MemorySurface {
    /// Element at `rect` inside a viewport of `viewport`
    pub fn new(rect: Rect, viewport: Size) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                rect,
                viewport,
                scroll: Vec2::ZERO,
                placements: Vec::new(),
                z_writes: Vec::new(),
            })),
        }
    }

    /// Current element rect
    pub fn rect(&self) -> Rect {
        self.state.borrow().rect
    }

    /// Current element origin
    pub fn position(&self) -> Vec2 {
        self.state.borrow().rect.position()
    }

    /// Every origin passed to `place`, in order
    pub fn placements(&self) -> Vec<Vec2> {
        self.state.borrow().placements.clone()
    }

    /// Every z-index written, in order
    pub fn z_writes(&self) -> Vec<i32> {
        self.state.borrow().z_writes.clone()
    }

    /// Last z-index written, if any
    pub fn z_index(&self) -> Option<i32> {
        self.state.borrow().z_writes.last().copied()
    }

    /// Simulate page scroll: bounds report the origin minus `scroll`, like
    /// `getBoundingClientRect` on a document-positioned element
    pub fn set_scroll(&self, scroll: Vec2) {
        self.state.borrow_mut().scroll = scroll;
    }

    /// Simulate a window resize
    pub fn set_viewport(&self, viewport: Size) {
        self.state.borrow_mut().viewport = viewport;
    }
}

impl Surface for MemorySurface {
    fn bounds(&self) -> Rect {
        let state = self.state.borrow();
        Rect::new(
            state.rect.x - state.scroll.x,
            state.rect.y - state.scroll.y,
            state.rect.width,
            state.rect.height,
        )
    }

    fn viewport(&self) -> Size {
        self.state.borrow().viewport
    }

    fn place(&mut self, origin: Vec2) {
        let mut state = self.state.borrow_mut();
        state.rect.x = origin.x;
        state.rect.y = origin.y;
        state.placements.push(origin);
    }

    fn set_z_index(&mut self, z: i32) {
        self.state.borrow_mut().z_writes.push(z);
    }
}
