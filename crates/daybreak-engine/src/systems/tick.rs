//! Tick Updater: one simulation step as a pure snapshot transition.

use crate::api::types::Viewport;
use crate::scene::SceneState;

/// Produce the next scene snapshot. The input is left untouched.
///
/// `viewport` is the size read this frame; wraparound uses it, so clouds and
/// birds follow the window as it resizes.
pub fn tick(state: &SceneState, viewport: Viewport) -> SceneState {
    SceneState {
        stars: state.stars.iter().map(|s| s.advanced()).collect(),
        clouds: state.clouds.iter().map(|c| c.advanced(viewport)).collect(),
        birds: state.birds.iter().map(|b| b.advanced(viewport)).collect(),
        glow: state.glow.advanced(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::BackgroundConfig;
    use crate::core::rng::Rng;
    use crate::scene::{STAR_MAX_OPACITY, STAR_MIN_OPACITY, BIRD_WRAP_MARGIN, WING_PHASE_STEP};
    use std::f32::consts::TAU;

    fn seeded(viewport: Viewport, seed: u64) -> SceneState {
        SceneState::seed(&BackgroundConfig::default(), viewport, &mut Rng::new(seed))
    }

    #[test]
    fn input_snapshot_is_not_mutated() {
        let vp = Viewport::new(800.0, 600.0);
        let state = seeded(vp, 1);
        let before = state.clone();
        let next = tick(&state, vp);
        assert_eq!(state, before);
        assert_ne!(next, before);
    }

    #[test]
    fn large_viewport_hundred_ticks() {
        let vp = Viewport::new(1920.0, 1080.0);
        let mut state = seeded(vp, 2024);
        let max_width = state.max_cloud_width();

        for _ in 0..100 {
            state = tick(&state, vp);
        }

        assert_eq!(state.stars.len(), 80);
        for s in &state.stars {
            assert!(
                s.opacity >= STAR_MIN_OPACITY && s.opacity <= STAR_MAX_OPACITY,
                "opacity {}",
                s.opacity
            );
        }
        for c in &state.clouds {
            assert!(
                c.pos.x >= -max_width && c.pos.x <= 1920.0 + max_width,
                "cloud x {}",
                c.pos.x
            );
        }
    }

    #[test]
    fn star_bounds_hold_for_long_runs() {
        let vp = Viewport::new(640.0, 480.0);
        let mut state = seeded(vp, 77);
        for _ in 0..5_000 {
            state = tick(&state, vp);
            assert!(state
                .stars
                .iter()
                .all(|s| (STAR_MIN_OPACITY..=STAR_MAX_OPACITY).contains(&s.opacity)));
        }
    }

    #[test]
    fn cloud_wrap_is_exact() {
        let vp = Viewport::new(800.0, 600.0);
        let mut state = seeded(vp, 3);
        for _ in 0..20_000 {
            let next = tick(&state, vp);
            for (before, after) in state.clouds.iter().zip(&next.clouds) {
                if before.pos.x + before.speed > vp.width + before.width {
                    assert_eq!(after.pos.x, -before.width);
                } else {
                    assert_eq!(after.pos.x, before.pos.x + before.speed);
                }
            }
            state = next;
        }
    }

    #[test]
    fn bird_wrap_and_flap_are_independent() {
        let vp = Viewport::new(800.0, 600.0);
        let mut state = seeded(vp, 4);
        let mut wrapped = 0;
        for _ in 0..5_000 {
            let next = tick(&state, vp);
            for (before, after) in state.birds.iter().zip(&next.birds) {
                if before.pos.x + before.speed > vp.width + BIRD_WRAP_MARGIN {
                    assert_eq!(after.pos.x, -BIRD_WRAP_MARGIN);
                    wrapped += 1;
                }
                assert_eq!(after.wing_phase, before.wing_phase + WING_PHASE_STEP);
            }
            state = next;
        }
        assert!(wrapped > 0, "no bird ever crossed the right edge");
    }

    #[test]
    fn shrinking_viewport_wraps_on_next_tick() {
        let wide = Viewport::new(1920.0, 1080.0);
        let mut state = seeded(wide, 5);
        for c in &mut state.clouds {
            c.pos.x = 1500.0;
        }
        let narrow = Viewport::new(800.0, 600.0);
        let next = tick(&state, narrow);
        for c in &next.clouds {
            assert_eq!(c.pos.x, -c.width);
        }
    }

    #[test]
    fn phases_stay_in_range() {
        let vp = Viewport::new(800.0, 600.0);
        let mut state = seeded(vp, 6);
        for _ in 0..10_000 {
            state = tick(&state, vp);
            assert!(state.glow.moon >= 0.0 && state.glow.moon < TAU);
            assert!(state.glow.sun >= 0.0 && state.glow.sun < TAU);
        }
    }
}
