use glam::Vec2;

use crate::api::types::Viewport;
use crate::core::rng::Rng;

/// Overlapping circles per cloud.
pub const CLOUD_PUFFS: usize = 5;

/// A drifting cloud, drawn as a row of overlapping puffs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    /// Top-left corner of the cloud's bounding box.
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick, always rightwards.
    pub speed: f32,
    /// Extra radius per puff, drawn once at spawn.
    pub puff_jitter: [f32; CLOUD_PUFFS],
}

impl Cloud {
    pub fn spawn(rng: &mut Rng, viewport: Viewport) -> Self {
        let pos = Vec2::new(
            rng.range(0.0, viewport.width),
            rng.range(0.0, viewport.height * 0.4),
        );
        let width = rng.range(100.0, 250.0);
        let height = rng.range(40.0, 100.0);
        let speed = rng.range(0.1, 0.4);
        let mut puff_jitter = [0.0; CLOUD_PUFFS];
        for j in &mut puff_jitter {
            *j = rng.range(0.0, 10.0);
        }
        Self {
            pos,
            width,
            height,
            speed,
            puff_jitter,
        }
    }

    /// Drift right; once fully past the right edge, jump to just off the left edge.
    pub fn advanced(&self, viewport: Viewport) -> Self {
        let mut x = self.pos.x + self.speed;
        if x > viewport.width + self.width {
            x = -self.width;
        }
        Self {
            pos: Vec2::new(x, self.pos.y),
            ..*self
        }
    }

    /// Center and radius of each puff, left to right.
    pub fn puffs(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        let center = self.pos + Vec2::new(self.width / 2.0, self.height / 2.0);
        let step = self.width / CLOUD_PUFFS as f32;
        self.puff_jitter.iter().enumerate().map(move |(i, jitter)| {
            let offset_x = (i as f32 - 2.5) * step;
            (center + Vec2::new(offset_x, 0.0), self.height / 2.0 + jitter)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud(x: f32, width: f32, speed: f32) -> Cloud {
        Cloud {
            pos: Vec2::new(x, 50.0),
            width,
            height: 60.0,
            speed,
            puff_jitter: [0.0; CLOUD_PUFFS],
        }
    }

    #[test]
    fn drifts_right() {
        let c = cloud(100.0, 150.0, 0.25).advanced(Viewport::new(800.0, 600.0));
        assert_eq!(c.pos.x, 100.25);
        assert_eq!(c.pos.y, 50.0);
    }

    #[test]
    fn hard_wraps_to_negative_width() {
        let vp = Viewport::new(800.0, 600.0);
        let c = cloud(949.9, 150.0, 0.3).advanced(vp);
        assert_eq!(c.pos.x, -150.0);
    }

    #[test]
    fn exactly_at_edge_does_not_wrap() {
        let vp = Viewport::new(800.0, 600.0);
        let c = cloud(949.5, 150.0, 0.5).advanced(vp);
        assert_eq!(c.pos.x, 950.0);
    }

    #[test]
    fn puffs_straddle_center() {
        let c = Cloud {
            puff_jitter: [1.0, 2.0, 3.0, 4.0, 5.0],
            ..cloud(0.0, 100.0, 0.1)
        };
        let puffs: Vec<_> = c.puffs().collect();
        assert_eq!(puffs.len(), CLOUD_PUFFS);
        assert_eq!(puffs[0].0, Vec2::new(50.0 - 50.0, 80.0));
        assert_eq!(puffs[4].0, Vec2::new(50.0 + 30.0, 80.0));
        assert_eq!(puffs[0].1, 31.0);
        assert_eq!(puffs[4].1, 35.0);
    }

    #[test]
    fn spawn_ranges() {
        let mut rng = Rng::new(11);
        let vp = Viewport::new(1920.0, 1080.0);
        for _ in 0..500 {
            let c = Cloud::spawn(&mut rng, vp);
            assert!(c.pos.x >= 0.0 && c.pos.x < 1920.0);
            assert!(c.pos.y >= 0.0 && c.pos.y < 1080.0 * 0.4);
            assert!(c.width >= 100.0 && c.width < 250.0);
            assert!(c.height >= 40.0 && c.height < 100.0);
            assert!(c.speed >= 0.1 && c.speed < 0.4);
            assert!(c.puff_jitter.iter().all(|j| (0.0..10.0).contains(j)));
        }
    }
}
