//! Release momentum integrator

use crate::config::MomentumConfig;
use crate::math::Vec2;

/// Post-release coasting state.
///
/// Each [`step`](Momentum::step) is one animation frame: velocity is decayed
/// by the friction factor, then returned as the displacement for that frame.
/// Once both components drop below the stop speed the step yields `None` and
/// the element stays where it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Momentum {
    velocity: Vec2,
    friction: f32,
    stop_speed: f32,
}

impl Momentum {
    /// Start coasting from a release velocity (px/frame)
    pub fn new(velocity: Vec2, config: &MomentumConfig) -> Self {
        Self {
            velocity,
            friction: config.friction,
            stop_speed: config.stop_speed,
        }
    }

    /// Current velocity
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Advance one frame; `None` means coasting is over
    pub fn step(&mut self) -> Option<Vec2> {
        self.velocity = self.velocity * self.friction;
        if self.velocity.below(self.stop_speed) {
            self.velocity = Vec2::ZERO;
            None
        } else {
            Some(self.velocity)
        }
    }
}
