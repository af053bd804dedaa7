//! Per-element drag state machine

use std::rc::Rc;

use crate::config::{DragConfig, PositionPolicy};
use crate::math::Vec2;
use crate::surface::Surface;
use crate::zorder::{TargetKind, ZOrder, BACKGROUND_Z};
use super::{CoastFrame, DragResponse, DragSession, Momentum, PointerEvent, PointerPhase};

/// Controller phase
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Dragging(DragSession),
    /// Coasting from the last placed origin
    Coasting { momentum: Momentum, origin: Vec2 },
}

/// Drag controller for one element.
///
/// Owns its [`Surface`] and a clone of the shared [`ZOrder`] service. At most
/// one session is active at a time; coasting and dragging are mutually
/// exclusive phases, so starting a drag always ends any coast.
pub struct DragController<S: Surface> {
    surface: S,
    kind: TargetKind,
    config: Rc<DragConfig>,
    zorder: ZOrder,
    phase: Phase,
}

impl<S: Surface> DragController<S> {
    /// Take control of `surface` and write its initial z-index
    pub fn attach(mut surface: S, kind: TargetKind, config: Rc<DragConfig>, zorder: ZOrder) -> Self {
        let z = zorder.promote(kind);
        surface.set_z_index(z);
        Self {
            surface,
            kind,
            config,
            zorder,
            phase: Phase::Idle,
        }
    }

    /// Check if a session is active
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Check if the element is coasting after release
    #[inline]
    pub fn is_coasting(&self) -> bool {
        matches!(self.phase, Phase::Coasting { .. })
    }

    /// Active session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            Phase::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Handle one pointer event
    pub fn handle(&mut self, event: PointerEvent) -> DragResponse {
        match event.phase {
            PointerPhase::Start => self.start(event),
            PointerPhase::Move => self.drag_to(event),
            PointerPhase::End | PointerPhase::Cancel => self.release(event),
        }
    }

    /// Advance coasting by one animation frame.
    ///
    /// Frames build on the last written origin, not on measured bounds, so
    /// page scroll never leaks into the element position.
    pub fn tick(&mut self) -> CoastFrame {
        let Phase::Coasting { mut momentum, origin } = self.phase else {
            return CoastFrame::Stopped;
        };

        match momentum.step() {
            Some(delta) => {
                let placed = self.place(origin + delta);
                self.phase = Phase::Coasting {
                    momentum,
                    origin: placed,
                };
                CoastFrame::Moved(placed)
            }
            None => {
                self.phase = Phase::Idle;
                CoastFrame::Stopped
            }
        }
    }

    /// Bring a window to the front without starting a session.
    ///
    /// Background targets keep [`BACKGROUND_Z`] and the counter is untouched.
    pub fn raise(&mut self) -> i32 {
        if self.kind.is_background() {
            return BACKGROUND_Z;
        }
        let z = self.zorder.promote(self.kind);
        self.surface.set_z_index(z);
        z
    }

    /// Stop coasting; returns whether a coast was running
    pub fn cancel_momentum(&mut self) -> bool {
        if self.is_coasting() {
            self.phase = Phase::Idle;
            true
        } else {
            false
        }
    }

    fn start(&mut self, event: PointerEvent) -> DragResponse {
        if event.on_control || self.is_dragging() {
            return DragResponse::Ignored;
        }
        let cancelled_momentum = self.cancel_momentum();

        let origin = self.surface.bounds().position();
        let z_index = self.raise();

        self.phase = Phase::Dragging(DragSession::new(event.position, origin, event.source, event.time_ms));
        DragResponse::Started {
            z_index,
            cancelled_momentum,
        }
    }

    fn drag_to(&mut self, event: PointerEvent) -> DragResponse {
        let Phase::Dragging(mut session) = self.phase else {
            return DragResponse::Ignored;
        };

        let prevent_scroll = session.track(event.position, event.time_ms, self.config.touch_slop);
        let position = self.place(session.target_origin(event.position));
        session.origin = position;
        self.phase = Phase::Dragging(session);

        DragResponse::Moved {
            position,
            prevent_scroll,
        }
    }

    fn release(&mut self, event: PointerEvent) -> DragResponse {
        let Phase::Dragging(session) = self.phase else {
            return DragResponse::Ignored;
        };

        let momentum = &self.config.momentum;
        let velocity = session.release_velocity(event.time_ms, momentum.release_window_ms);
        let coasting = momentum.enabled && !velocity.is_zero();
        self.phase = if coasting {
            Phase::Coasting {
                momentum: Momentum::new(velocity, momentum),
                origin: session.origin,
            }
        } else {
            Phase::Idle
        };

        DragResponse::Released { coasting }
    }

    /// Apply the position policy and write the origin
    fn place(&mut self, origin: Vec2) -> Vec2 {
        let origin = match self.config.position_policy {
            PositionPolicy::Clamped => self
                .surface
                .bounds()
                .clamp_origin(origin, self.surface.viewport()),
            PositionPolicy::Free => origin,
        };
        self.surface.place(origin);
        origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rect, Size};
    use crate::testing::MemorySurface;

    fn window(config: DragConfig) -> (DragController<MemorySurface>, MemorySurface, ZOrder) {
        let surface = MemorySurface::new(Rect::new(100.0, 100.0, 50.0, 50.0), Size::new(800.0, 600.0));
        let zorder = ZOrder::default();
        let controller = DragController::attach(surface.clone(), TargetKind::Window, Rc::new(config), zorder.clone());
        (controller, surface, zorder)
    }

    #[test]
    fn test_attach_writes_initial_z() {
        let (_, surface, zorder) = window(DragConfig::default());
        assert_eq!(surface.z_writes(), vec![1]);
        assert_eq!(zorder.peek(), 2);
    }

    #[test]
    fn test_start_promotes_before_move() {
        let (mut c, surface, _) = window(DragConfig::default());
        let r = c.handle(PointerEvent::mouse_down(110.0, 110.0));
        assert_eq!(r, DragResponse::Started { z_index: 2, cancelled_momentum: false });
        assert_eq!(surface.z_index(), Some(2));
        assert!(surface.placements().is_empty());
    }

    #[test]
    fn test_move_without_session_is_ignored() {
        let (mut c, surface, _) = window(DragConfig::default());
        assert_eq!(c.handle(PointerEvent::mouse_move(300.0, 300.0)), DragResponse::Ignored);
        assert_eq!(c.handle(PointerEvent::mouse_up(300.0, 300.0)), DragResponse::Ignored);
        assert!(surface.placements().is_empty());
    }

    #[test]
    fn test_control_target_never_starts() {
        let (mut c, surface, _) = window(DragConfig::default());
        let r = c.handle(PointerEvent::mouse_down(110.0, 110.0).on_control(true));
        assert_eq!(r, DragResponse::Ignored);
        assert!(!c.is_dragging());
        assert_eq!(surface.z_writes(), vec![1]);
    }

    #[test]
    fn test_second_start_is_ignored() {
        let (mut c, _, _) = window(DragConfig::default());
        c.handle(PointerEvent::mouse_down(110.0, 110.0));
        assert_eq!(c.handle(PointerEvent::touch_start(120.0, 120.0)), DragResponse::Ignored);
        assert!(c.is_dragging());
    }

    #[test]
    fn test_move_applies_grab_offset() {
        let (mut c, surface, _) = window(DragConfig::default());
        c.handle(PointerEvent::mouse_down(125.0, 125.0));
        c.handle(PointerEvent::mouse_move(200.0, 300.0));
        let p = surface.position();
        assert!((p.x - 175.0).abs() < 0.001);
        assert!((p.y - 275.0).abs() < 0.001);
    }

    #[test]
    fn test_free_policy_leaves_viewport() {
        let config = DragConfig {
            position_policy: PositionPolicy::Free,
            ..DragConfig::default()
        };
        let (mut c, surface, _) = window(config);
        c.handle(PointerEvent::mouse_down(125.0, 125.0));
        c.handle(PointerEvent::mouse_move(-100.0, 900.0));
        let p = surface.position();
        assert!((p.x + 125.0).abs() < 0.001);
        assert!((p.y - 875.0).abs() < 0.001);
    }

    #[test]
    fn test_release_without_velocity_does_not_coast() {
        let (mut c, _, _) = window(DragConfig::default());
        c.handle(PointerEvent::mouse_down(125.0, 125.0));
        assert_eq!(c.handle(PointerEvent::mouse_up(125.0, 125.0)), DragResponse::Released { coasting: false });
        assert!(!c.is_coasting());
        assert_eq!(c.tick(), CoastFrame::Stopped);
    }

    #[test]
    fn test_momentum_disabled() {
        let mut config = DragConfig::default();
        config.momentum.enabled = false;
        let (mut c, _, _) = window(config);
        c.handle(PointerEvent::mouse_down(125.0, 125.0));
        c.handle(PointerEvent::mouse_move(145.0, 125.0));
        assert_eq!(c.handle(PointerEvent::mouse_up(145.0, 125.0)), DragResponse::Released { coasting: false });
    }

    #[test]
    fn test_touch_cancel_starts_coasting() {
        let (mut c, _, _) = window(DragConfig::default());
        c.handle(PointerEvent::touch_start(125.0, 125.0));
        c.handle(PointerEvent::touch_move(135.0, 125.0));
        let cancel = PointerEvent::new(PointerPhase::Cancel, crate::input::PointerSource::Touch, 135.0, 125.0);
        assert!(c.handle(cancel).needs_frames());
        assert!(c.is_coasting());
    }

    #[test]
    fn test_new_start_cancels_coasting() {
        let (mut c, surface, _) = window(DragConfig::default());
        c.handle(PointerEvent::mouse_down(125.0, 125.0));
        c.handle(PointerEvent::mouse_move(145.0, 125.0));
        c.handle(PointerEvent::mouse_up(145.0, 125.0));
        assert!(c.tick().is_moving());

        let r = c.handle(PointerEvent::mouse_down(150.0, 130.0));
        assert!(matches!(r, DragResponse::Started { cancelled_momentum: true, .. }));

        let placed = surface.placements().len();
        assert_eq!(c.tick(), CoastFrame::Stopped);
        assert_eq!(surface.placements().len(), placed);
    }

    #[test]
    fn test_coasting_is_clamped() {
        let (mut c, surface, _) = window(DragConfig::default());
        c.handle(PointerEvent::mouse_down(125.0, 125.0));
        c.handle(PointerEvent::mouse_move(800.0, 125.0));
        c.handle(PointerEvent::mouse_move(840.0, 125.0));
        c.handle(PointerEvent::mouse_up(840.0, 125.0));
        while c.tick().is_moving() {}
        for p in surface.placements() {
            assert!(p.x >= 0.0 && p.x <= 750.0);
        }
        assert!((surface.position().x - 750.0).abs() < 0.001);
    }

    #[test]
    fn test_hold_before_release_does_not_coast() {
        let (mut c, _, _) = window(DragConfig::default());
        c.handle(PointerEvent::mouse_down(125.0, 125.0).at(0.0));
        c.handle(PointerEvent::mouse_move(145.0, 125.0).at(16.0));
        let r = c.handle(PointerEvent::mouse_up(145.0, 125.0).at(400.0));
        assert_eq!(r, DragResponse::Released { coasting: false });
        assert!(!c.is_coasting());
    }

    #[test]
    fn test_quick_release_coasts() {
        let (mut c, _, _) = window(DragConfig::default());
        c.handle(PointerEvent::mouse_down(125.0, 125.0).at(0.0));
        c.handle(PointerEvent::mouse_move(145.0, 125.0).at(16.0));
        let r = c.handle(PointerEvent::mouse_up(145.0, 125.0).at(24.0));
        assert_eq!(r, DragResponse::Released { coasting: true });
    }

    #[test]
    fn test_coasting_ignores_scroll_offset() {
        let (mut c, surface, _) = window(DragConfig::default());
        c.handle(PointerEvent::mouse_down(125.0, 125.0));
        c.handle(PointerEvent::mouse_move(145.0, 125.0));
        c.handle(PointerEvent::mouse_up(145.0, 125.0));

        // Bounds now report viewport coordinates shifted by the scroll
        surface.set_scroll(Vec2::new(0.0, 300.0));
        let CoastFrame::Moved(first) = c.tick() else {
            panic!("expected a coasting frame");
        };
        assert!((first.x - 138.0).abs() < 0.001);
        assert!((first.y - 100.0).abs() < 0.001);

        let CoastFrame::Moved(second) = c.tick() else {
            panic!("expected a coasting frame");
        };
        assert!((second.x - 154.2).abs() < 0.001);
        assert!((second.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_raise_without_session() {
        let (mut c, surface, _) = window(DragConfig::default());
        assert_eq!(c.raise(), 2);
        assert!(!c.is_dragging());
        assert_eq!(surface.z_writes(), vec![1, 2]);
    }

    #[test]
    fn test_background_start_keeps_zero() {
        let surface = MemorySurface::new(Rect::new(10.0, 10.0, 40.0, 40.0), Size::new(800.0, 600.0));
        let zorder = ZOrder::default();
        let mut c = DragController::attach(surface.clone(), TargetKind::Background, Rc::new(DragConfig::default()), zorder.clone());
        let r = c.handle(PointerEvent::mouse_down(20.0, 20.0));
        assert_eq!(r, DragResponse::Started { z_index: 0, cancelled_momentum: false });
        assert_eq!(surface.z_writes(), vec![0]);
        assert_eq!(zorder.peek(), 1);
        assert_eq!(c.raise(), BACKGROUND_Z);
        assert_eq!(surface.z_writes(), vec![0]);
    }
}
