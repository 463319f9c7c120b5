//! Surface that records draw calls instead of rasterizing them.

use glam::Vec2;

use super::paint::Paint;
use super::traits::{DrawSurface, SkyLayer, Stroke};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width: f32, height: f32 },
    Clear,
    FillRect { origin: Vec2, size: Vec2, paint: Paint },
    FillCircle { center: Vec2, radius: f32, paint: Paint },
    FillPolygon { points: Vec<Vec2>, paint: Paint },
    StrokeQuadratic { from: Vec2, ctrl: Vec2, to: Vec2, stroke: Stroke },
}

impl DrawCommand {
    /// Whether the command puts pixels on the surface.
    pub fn is_draw(&self) -> bool {
        !matches!(self, DrawCommand::Resize { .. } | DrawCommand::Clear)
    }

    /// Highest alpha the command can paint with (0 for non-draw commands).
    pub fn max_alpha(&self) -> f32 {
        match self {
            DrawCommand::Resize { .. } | DrawCommand::Clear => 0.0,
            DrawCommand::FillRect { paint, .. }
            | DrawCommand::FillCircle { paint, .. }
            | DrawCommand::FillPolygon { paint, .. } => paint.max_alpha(),
            DrawCommand::StrokeQuadratic { stroke, .. } => stroke.color.a,
        }
    }
}

/// Records every call together with the layer active at the time.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    layer: SkyLayer,
    commands: Vec<(SkyLayer, DrawCommand)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[(SkyLayer, DrawCommand)] {
        &self.commands
    }

    /// Number of drawing commands (resize/clear excluded).
    pub fn draw_count(&self) -> usize {
        self.commands.iter().filter(|(_, c)| c.is_draw()).count()
    }

    /// Number of drawing commands issued on `layer`.
    pub fn count_in(&self, layer: SkyLayer) -> usize {
        self.commands
            .iter()
            .filter(|(l, c)| *l == layer && c.is_draw())
            .count()
    }

    /// Layers that received drawing commands, in first-use order without repeats.
    pub fn layers(&self) -> Vec<SkyLayer> {
        let mut out: Vec<SkyLayer> = Vec::new();
        for (layer, cmd) in &self.commands {
            if cmd.is_draw() && !out.contains(layer) {
                out.push(*layer);
            }
        }
        out
    }

    /// Drawing commands issued on `layer`, in order.
    pub fn in_layer(&self, layer: SkyLayer) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |(l, c)| *l == layer && c.is_draw())
            .map(|(_, c)| c)
    }

    /// Forget everything recorded.
    pub fn reset(&mut self) {
        self.layer = SkyLayer::default();
        self.commands.clear();
    }

    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push((self.layer, cmd));
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self) {
        self.push(DrawCommand::Clear);
    }

    fn set_layer(&mut self, layer: SkyLayer) {
        self.layer = layer;
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        self.push(DrawCommand::FillRect {
            origin,
            size,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        self.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            paint: paint.clone(),
        });
    }

    fn stroke_quadratic(&mut self, from: Vec2, ctrl: Vec2, to: Vec2, stroke: &Stroke) {
        self.push(DrawCommand::StrokeQuadratic {
            from,
            ctrl,
            to,
            stroke: *stroke,
        });
    }
}
