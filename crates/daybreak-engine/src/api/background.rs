use crate::api::config::BackgroundConfig;
use crate::api::host::FrameHost;
use crate::api::types::{Theme, Viewport};
use crate::core::rng::Rng;
use crate::renderer::traits::DrawSurface;
use crate::scene::SceneState;
use crate::systems::render::render_frame;
use crate::systems::tick::tick;

/// What a frame callback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Scene advanced one tick and a full frame was painted.
    Drawn,
    /// The host asked not to render on this device; nothing changed.
    Hidden,
    /// No drawing surface was available; nothing changed.
    NoSurface,
}

/// The day/night ambient background.
///
/// Seeded once at construction, then driven by the host's frame callback:
/// each [`frame`](Self::frame) runs one tick followed by one full redraw.
pub struct AmbientBackground {
    state: SceneState,
    frames: u64,
}

impl AmbientBackground {
    /// Seed a fresh scene sized to `viewport`.
    pub fn new(config: &BackgroundConfig, viewport: Viewport, rng: &mut Rng) -> Self {
        let state = SceneState::seed(config, viewport, rng);
        log::info!(
            "ambient background seeded: {} stars, {} clouds, {} birds at {}x{}",
            state.stars.len(),
            state.clouds.len(),
            state.birds.len(),
            viewport.width,
            viewport.height
        );
        Self { state, frames: 0 }
    }

    /// Wrap an existing scene, e.g. one restored for inspection.
    pub fn from_state(state: SceneState) -> Self {
        Self { state, frames: 0 }
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frame callback body.
    ///
    /// A missing surface or a host that says not to render skips the whole
    /// frame: no tick, no draw calls, no error. The next callback tries again.
    pub fn frame(&mut self, host: &dyn FrameHost, surface: Option<&mut dyn DrawSurface>) -> FrameOutcome {
        let Some(surface) = surface else {
            log::trace!("frame skipped: no drawing surface");
            return FrameOutcome::NoSurface;
        };
        if !host.should_render() {
            log::trace!("frame skipped: rendering disabled on this device");
            return FrameOutcome::Hidden;
        }

        let viewport = host.viewport();
        let theme = Theme::from_dark(host.is_dark_theme());

        self.state = tick(&self.state, viewport);
        render_frame(surface, &self.state, viewport, theme);
        self.frames += 1;
        FrameOutcome::Drawn
    }
}
