//! Unified pointer events
//!
//! Mouse and touch listeners both translate into a [`PointerEvent`], so the
//! controller never branches on the browser event type.

use crate::math::Vec2;

/// Where in an interaction an event falls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// mousedown / touchstart
    Start,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    End,
    /// touchcancel
    Cancel,
}

/// Input device that produced the event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// A device-independent pointer event in viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Vec2,
    pub phase: PointerPhase,
    pub source: PointerSource,
    /// The event target is an interactive control nested under the handle
    pub on_control: bool,
    /// Event timestamp (ms, same clock for every event of a session)
    pub time_ms: f64,
}

impl PointerEvent {
    /// Build an event from raw client coordinates
    pub fn new(phase: PointerPhase, source: PointerSource, x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            phase,
            source,
            on_control: false,
            time_ms: 0.0,
        }
    }

    /// Mouse press at `(x, y)`
    pub fn mouse_down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Start, PointerSource::Mouse, x, y)
    }

    /// Mouse move to `(x, y)`
    pub fn mouse_move(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, PointerSource::Mouse, x, y)
    }

    /// Mouse release at `(x, y)`
    pub fn mouse_up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::End, PointerSource::Mouse, x, y)
    }

    /// Touch start at `(x, y)`
    pub fn touch_start(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Start, PointerSource::Touch, x, y)
    }

    /// Touch move to `(x, y)`
    pub fn touch_move(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, PointerSource::Touch, x, y)
    }

    /// Touch end at `(x, y)`
    pub fn touch_end(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::End, PointerSource::Touch, x, y)
    }

    /// Stamp the event with its time
    pub fn at(mut self, time_ms: f64) -> Self {
        self.time_ms = time_ms;
        self
    }

    /// Mark the event as landing on an embedded control
    pub fn on_control(mut self, on_control: bool) -> Self {
        self.on_control = on_control;
        self
    }
}
