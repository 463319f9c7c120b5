//! Drawing-surface capability the renderer paints onto.
//!
//! The browser bridge implements this over a Canvas2D context; the engine
//! ships a recording surface (inspection and tests) and, with the `vectors`
//! feature, a lyon tessellating surface that produces a GPU-ready vertex buffer.

use glam::Vec2;

use super::color::Color;
use super::paint::Paint;

/// Logical draw layer, ordered back-to-front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SkyLayer {
    #[default]
    Sky,
    Stars,
    Moon,
    Sun,
    Birds,
    Clouds,
}

/// Line end style for strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    /// Canvas `lineCap` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Stroke style for outlines and curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub cap: LineCap,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// A 2D drawing target. Coordinates are pixels, y pointing down.
pub trait DrawSurface {
    /// Match the backing store to the viewport. Called at the start of every frame.
    fn resize(&mut self, width: f32, height: f32);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Mark the layer subsequent calls belong to. Surfaces may ignore it.
    fn set_layer(&mut self, _layer: SkyLayer) {}

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Fill a closed polygon. Fewer than three points draws nothing.
    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint);

    /// Stroke a quadratic Bézier curve from `from` to `to`.
    fn stroke_quadratic(&mut self, from: Vec2, ctrl: Vec2, to: Vec2, stroke: &Stroke);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_are_back_to_front() {
        assert!(SkyLayer::Sky < SkyLayer::Stars);
        assert!(SkyLayer::Stars < SkyLayer::Moon);
        assert!(SkyLayer::Moon < SkyLayer::Sun);
        assert!(SkyLayer::Sun < SkyLayer::Birds);
        assert!(SkyLayer::Birds < SkyLayer::Clouds);
    }

    #[test]
    fn stroke_builder() {
        let s = Stroke::new(Color::BLACK, 2.0).with_cap(LineCap::Round);
        assert_eq!(s.cap.as_css(), "round");
        assert_eq!(s.width, 2.0);
    }
}
