//! Scene State Store: the animated entity populations and glow oscillators.

mod bird;
mod cloud;
mod glow;
mod star;
mod state;

pub use bird::{Bird, BIRD_WRAP_MARGIN, WING_PHASE_STEP};
pub use cloud::{Cloud, CLOUD_PUFFS};
pub use glow::{GlowPhases, MOON_GLOW_STEP, SUN_GLOW_STEP};
pub use star::{Star, STAR_MAX_OPACITY, STAR_MIN_OPACITY};
pub use state::SceneState;
