use glam::Vec2;

use crate::api::types::Viewport;
use crate::core::rng::Rng;

pub const STAR_MIN_OPACITY: f32 = 0.2;
pub const STAR_MAX_OPACITY: f32 = 1.0;

/// A twinkling night-sky star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Radius in pixels.
    pub size: f32,
    /// Always within [STAR_MIN_OPACITY, STAR_MAX_OPACITY].
    pub opacity: f32,
    /// Opacity change per tick.
    pub twinkle_speed: f32,
    /// +1.0 while brightening, -1.0 while dimming.
    pub twinkle_direction: f32,
}

impl Star {
    pub fn spawn(rng: &mut Rng, viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(
                rng.range(0.0, viewport.width),
                rng.range(0.0, viewport.height),
            ),
            size: rng.range(0.5, 2.5),
            opacity: rng.range(STAR_MIN_OPACITY, STAR_MAX_OPACITY),
            twinkle_speed: rng.range(0.01, 0.03),
            twinkle_direction: if rng.chance(0.5) { 1.0 } else { -1.0 },
        }
    }

    /// Triangle-wave twinkle: the direction flips at either bound, the value never resets.
    pub fn advanced(&self) -> Self {
        let mut opacity = self.opacity + self.twinkle_speed * self.twinkle_direction;
        let mut twinkle_direction = self.twinkle_direction;

        if opacity >= STAR_MAX_OPACITY {
            opacity = STAR_MAX_OPACITY;
            twinkle_direction = -1.0;
        } else if opacity <= STAR_MIN_OPACITY {
            opacity = STAR_MIN_OPACITY;
            twinkle_direction = 1.0;
        }

        Self {
            opacity,
            twinkle_direction,
            ..*self
        }
    }
}
