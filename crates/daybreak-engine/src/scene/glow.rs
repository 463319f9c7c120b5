use std::f32::consts::TAU;

/// Moon glow phase advance per tick (radians).
pub const MOON_GLOW_STEP: f32 = 0.02;
/// Sun glow phase advance per tick (radians).
pub const SUN_GLOW_STEP: f32 = 0.03;

/// Oscillator phases driving the moon and sun glow pulse. Both stay in [0, 2π).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlowPhases {
    pub moon: f32,
    pub sun: f32,
}

impl GlowPhases {
    pub fn advanced(&self) -> Self {
        Self {
            moon: wrap_phase(self.moon + MOON_GLOW_STEP),
            sun: wrap_phase(self.sun + SUN_GLOW_STEP),
        }
    }

    /// Moon glow strength, in [0.6, 1.0].
    pub fn moon_intensity(&self) -> f32 {
        self.moon.sin() * 0.2 + 0.8
    }

    /// Sun glow strength, in [0.4, 1.0].
    pub fn sun_intensity(&self) -> f32 {
        self.sun.sin() * 0.3 + 0.7
    }
}

fn wrap_phase(phase: f32) -> f32 {
    let wrapped = phase.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for values just below it.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distance between two angles on the circle.
    fn circular_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn steps_by_fixed_amounts() {
        let g = GlowPhases::default().advanced();
        assert!((g.moon - MOON_GLOW_STEP).abs() < 1e-7);
        assert!((g.sun - SUN_GLOW_STEP).abs() < 1e-7);
    }

    #[test]
    fn stays_in_range_forever() {
        let mut g = GlowPhases::default();
        for _ in 0..100_000 {
            g = g.advanced();
            assert!(g.moon >= 0.0 && g.moon < TAU, "moon = {}", g.moon);
            assert!(g.sun >= 0.0 && g.sun < TAU, "sun = {}", g.sun);
        }
    }

    #[test]
    fn wraps_past_tau() {
        let g = GlowPhases {
            moon: TAU - 0.01,
            sun: TAU - 0.01,
        }
        .advanced();
        assert!((g.moon - 0.01).abs() < 1e-5, "moon = {}", g.moon);
        assert!((g.sun - 0.02).abs() < 1e-5, "sun = {}", g.sun);
    }

    #[test]
    fn sun_completes_a_cycle() {
        let start = GlowPhases::default();
        let ticks = (TAU / SUN_GLOW_STEP).round() as usize; // 209
        let mut g = start;
        for _ in 0..ticks {
            g = g.advanced();
        }
        assert!(
            circular_distance(g.sun, start.sun) <= SUN_GLOW_STEP,
            "sun drifted to {}",
            g.sun
        );
    }

    #[test]
    fn intensities_bounded() {
        let mut g = GlowPhases::default();
        for _ in 0..1000 {
            g = g.advanced();
            let m = g.moon_intensity();
            let s = g.sun_intensity();
            assert!((0.6 - 1e-6..=1.0 + 1e-6).contains(&m));
            assert!((0.4 - 1e-6..=1.0 + 1e-6).contains(&s));
        }
    }
}
