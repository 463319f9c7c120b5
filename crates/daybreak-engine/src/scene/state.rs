use crate::api::config::BackgroundConfig;
use crate::api::types::Viewport;
use crate::core::rng::Rng;
use crate::scene::{Bird, Cloud, GlowPhases, Star};

/// Snapshot of every animated entity plus the glow oscillators.
///
/// Seeded once per mount, then replaced wholesale each tick by
/// [`crate::systems::tick::tick`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneState {
    pub stars: Vec<Star>,
    pub clouds: Vec<Cloud>,
    pub birds: Vec<Bird>,
    pub glow: GlowPhases,
}

impl SceneState {
    /// Populate every entity from independent uniform draws sized to `viewport`.
    pub fn seed(config: &BackgroundConfig, viewport: Viewport, rng: &mut Rng) -> Self {
        let stars = (0..config.star_count)
            .map(|_| Star::spawn(rng, viewport))
            .collect();
        let clouds = (0..config.cloud_count)
            .map(|_| Cloud::spawn(rng, viewport))
            .collect();
        let birds = (0..config.bird_count)
            .map(|i| Bird::spawn(rng, viewport, i))
            .collect();
        Self {
            stars,
            clouds,
            birds,
            glow: GlowPhases::default(),
        }
    }

    /// Widest cloud in the scene, or 0 when there are none.
    pub fn max_cloud_width(&self) -> f32 {
        self.clouds.iter().map(|c| c.width).fold(0.0, f32::max)
    }
}
