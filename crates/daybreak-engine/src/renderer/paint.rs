//! Fill styles: solid colors and canvas-style linear/radial gradients.

use glam::Vec2;

use super::color::Color;

/// A gradient color stop. `offset` is in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// How a shape is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Gradient along the line `start -> end`.
    Linear {
        start: Vec2,
        end: Vec2,
        stops: Vec<ColorStop>,
    },
    /// Gradient between two concentric circles.
    Radial {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<ColorStop>,
    },
}

impl Paint {
    /// Color this paint produces at `point`. Outside the gradient range the
    /// nearest end stop is used, matching canvas behavior.
    pub fn sample(&self, point: Vec2) -> Color {
        match self {
            Paint::Solid(color) => *color,
            Paint::Linear { start, end, stops } => {
                let axis = *end - *start;
                let len_sq = axis.length_squared();
                let t = if len_sq > 0.0 {
                    (point - *start).dot(axis) / len_sq
                } else {
                    0.0
                };
                sample_stops(stops, t)
            }
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                let span = outer_radius - inner_radius;
                let d = point.distance(*center);
                let t = if span > 0.0 {
                    (d - inner_radius) / span
                } else {
                    0.0
                };
                sample_stops(stops, t)
            }
        }
    }

    /// Gradient stops, empty for solid paint.
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Paint::Solid(_) => &[],
            Paint::Linear { stops, .. } | Paint::Radial { stops, .. } => stops.as_slice(),
        }
    }

    /// Highest alpha this paint can produce.
    pub fn max_alpha(&self) -> f32 {
        match self {
            Paint::Solid(color) => color.a,
            _ => self.stops().iter().map(|s| s.color.a).fold(0.0, f32::max),
        }
    }
}

fn sample_stops(stops: &[ColorStop], t: f32) -> Color {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Color::TRANSPARENT,
    };
    let t = t.clamp(0.0, 1.0);
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    last.color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical() -> Paint {
        Paint::Linear {
            start: Vec2::ZERO,
            end: Vec2::new(0.0, 100.0),
            stops: vec![
                ColorStop::new(0.0, Color::BLACK),
                ColorStop::new(0.5, Color::WHITE),
                ColorStop::new(1.0, Color::BLACK),
            ],
        }
    }

    #[test]
    fn linear_hits_stops() {
        let p = vertical();
        assert_eq!(p.sample(Vec2::new(30.0, 0.0)), Color::BLACK);
        assert_eq!(p.sample(Vec2::new(30.0, 50.0)), Color::WHITE);
        assert_eq!(p.sample(Vec2::new(30.0, 100.0)), Color::BLACK);
        let quarter = p.sample(Vec2::new(0.0, 25.0));
        assert!((quarter.r - 0.5).abs() < 1e-5);
    }

    #[test]
    fn linear_clamps_outside() {
        let p = vertical();
        assert_eq!(p.sample(Vec2::new(0.0, -40.0)), Color::BLACK);
        assert_eq!(p.sample(Vec2::new(0.0, 400.0)), Color::BLACK);
    }

    #[test]
    fn radial_fades_out() {
        let p = Paint::Radial {
            center: Vec2::new(10.0, 10.0),
            inner_radius: 10.0,
            outer_radius: 20.0,
            stops: vec![
                ColorStop::new(0.0, Color::WHITE),
                ColorStop::new(1.0, Color::WHITE.with_alpha(0.0)),
            ],
        };
        // Inside the inner circle takes the first stop.
        assert_eq!(p.sample(Vec2::new(10.0, 10.0)).a, 1.0);
        assert!((p.sample(Vec2::new(25.0, 10.0)).a - 0.5).abs() < 1e-5);
        assert_eq!(p.sample(Vec2::new(100.0, 10.0)).a, 0.0);
        assert_eq!(p.max_alpha(), 1.0);
    }

    #[test]
    fn empty_stops_are_transparent() {
        let p = Paint::Linear {
            start: Vec2::ZERO,
            end: Vec2::ONE,
            stops: Vec::new(),
        };
        assert_eq!(p.sample(Vec2::ZERO), Color::TRANSPARENT);
        assert_eq!(p.max_alpha(), 0.0);
    }
}
