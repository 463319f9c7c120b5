use glam::Vec2;

use crate::api::types::Viewport;
use crate::core::rng::Rng;

/// Horizontal distance past either edge at which a bird wraps around.
pub const BIRD_WRAP_MARGIN: f32 = 50.0;
/// Wing phase advance per tick (radians).
pub const WING_PHASE_STEP: f32 = 0.2;
/// Initial horizontal gap between consecutive birds.
const BIRD_STAGGER: f32 = 100.0;

/// A flapping day-sky bird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub pos: Vec2,
    /// Pixels per tick, always rightwards.
    pub speed: f32,
    /// Monotonic accumulator; only its sine is ever used.
    pub wing_phase: f32,
}

impl Bird {
    /// Birds start off-screen to the left, staggered by index so they enter one by one.
    pub fn spawn(rng: &mut Rng, viewport: Viewport, index: usize) -> Self {
        Self {
            pos: Vec2::new(
                -BIRD_WRAP_MARGIN - index as f32 * BIRD_STAGGER,
                rng.range(50.0, viewport.height * 0.5 + 50.0),
            ),
            speed: rng.range(0.5, 2.0),
            wing_phase: 0.0,
        }
    }

    pub fn advanced(&self, viewport: Viewport) -> Self {
        let mut x = self.pos.x + self.speed;
        if x > viewport.width + BIRD_WRAP_MARGIN {
            x = -BIRD_WRAP_MARGIN;
        }
        Self {
            pos: Vec2::new(x, self.pos.y),
            wing_phase: self.wing_phase + WING_PHASE_STEP,
            ..*self
        }
    }

    /// Vertical wing-tip displacement, in [-10, 10].
    pub fn wing_offset(&self) -> f32 {
        self.wing_phase.sin() * 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flies_and_flaps() {
        let b = Bird {
            pos: Vec2::new(10.0, 100.0),
            speed: 1.5,
            wing_phase: 0.0,
        };
        let next = b.advanced(Viewport::new(800.0, 600.0));
        assert_eq!(next.pos, Vec2::new(11.5, 100.0));
        assert!((next.wing_phase - WING_PHASE_STEP).abs() < 1e-6);
    }

    #[test]
    fn wraps_and_still_flaps() {
        let b = Bird {
            pos: Vec2::new(849.0, 100.0),
            speed: 2.0,
            wing_phase: 1.0,
        };
        let next = b.advanced(Viewport::new(800.0, 600.0));
        assert_eq!(next.pos.x, -BIRD_WRAP_MARGIN);
        assert_eq!(next.pos.y, 100.0);
        assert!((next.wing_phase - 1.2).abs() < 1e-6);
    }

    #[test]
    fn staggered_spawn() {
        let mut rng = Rng::new(5);
        let vp = Viewport::new(800.0, 600.0);
        for i in 0..6 {
            let b = Bird::spawn(&mut rng, vp, i);
            assert_eq!(b.pos.x, -50.0 - i as f32 * 100.0);
            assert!(b.pos.y >= 50.0 && b.pos.y < 350.0);
            assert!(b.speed >= 0.5 && b.speed < 2.0);
            assert_eq!(b.wing_phase, 0.0);
        }
    }

    #[test]
    fn wing_offset_bounded() {
        let mut b = Bird {
            pos: Vec2::ZERO,
            speed: 1.0,
            wing_phase: 0.0,
        };
        for _ in 0..200 {
            b = b.advanced(Viewport::new(100.0, 100.0));
            assert!(b.wing_offset().abs() <= 10.0);
        }
    }
}
