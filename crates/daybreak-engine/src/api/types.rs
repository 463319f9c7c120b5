use glam::Vec2;

/// Current drawable area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Point at a fraction of the viewport (0.0 - 1.0 on each axis).
    pub fn at(&self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(self.width * fx, self.height * fy)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Which sky is painted. Night shows stars and the moon, day shows the sun and birds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Night
        } else {
            Theme::Day
        }
    }

    pub fn is_night(self) -> bool {
        self == Theme::Night
    }
}
