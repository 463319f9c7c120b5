pub mod api;
pub mod core;
pub mod renderer;
pub mod scene;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::background::{AmbientBackground, FrameOutcome};
pub use api::config::BackgroundConfig;
pub use api::host::{DeviceProfile, FrameHost, FrameScheduler, StaticHost};
pub use api::types::{Theme, Viewport};
pub use crate::core::rng::Rng;
pub use renderer::color::Color;
pub use renderer::paint::{ColorStop, Paint};
pub use renderer::recording::{DrawCommand, RecordingSurface};
pub use renderer::traits::{DrawSurface, LineCap, SkyLayer, Stroke};
pub use scene::{Bird, Cloud, GlowPhases, SceneState, Star};
pub use systems::render::render_frame;
pub use systems::tick::tick;

#[cfg(feature = "vectors")]
pub use renderer::vector::{LayerBatch, TessellatedSurface, VectorVertex};
