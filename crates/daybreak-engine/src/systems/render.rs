//! Renderer: paints one complete frame of the ambient sky.
//!
//! Draw order, back to front: sky gradient, then stars and moon (night) or
//! sun and birds (day), then clouds in both themes. Later layers composite
//! over earlier ones, so the order is part of the look.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::types::{Theme, Viewport};
use crate::renderer::color::Color;
use crate::renderer::paint::{ColorStop, Paint};
use crate::renderer::traits::{DrawSurface, LineCap, SkyLayer, Stroke};
use crate::scene::{Bird, Cloud, GlowPhases, SceneState, Star};

const MOON_RADIUS: f32 = 50.0;
/// Crater offsets from the moon center and their radii.
const MOON_CRATERS: [(f32, f32, f32); 3] = [(-15.0, -10.0, 8.0), (10.0, 15.0, 12.0), (20.0, -20.0, 6.0)];

const SUN_RADIUS: f32 = 45.0;
const SUN_RAYS: usize = 12;

/// Stars brighter than this get a halo.
const STAR_HALO_THRESHOLD: f32 = 0.7;

fn sky_stops(theme: Theme) -> [ColorStop; 3] {
    match theme {
        Theme::Night => [
            ColorStop::new(0.0, Color::rgb8(0x0a, 0x0e, 0x27)),
            ColorStop::new(0.5, Color::rgb8(0x1a, 0x1a, 0x3e)),
            ColorStop::new(1.0, Color::rgb8(0x0f, 0x0f, 0x23)),
        ],
        Theme::Day => [
            ColorStop::new(0.0, Color::rgb8(0x87, 0xCE, 0xEB)),
            ColorStop::new(0.5, Color::rgb8(0xB0, 0xE0, 0xE6)),
            ColorStop::new(1.0, Color::rgb8(0xE0, 0xF6, 0xFF)),
        ],
    }
}

fn cloud_color(theme: Theme) -> Color {
    match theme {
        Theme::Night => Color::rgba8(100, 100, 120, 0.15),
        Theme::Day => Color::rgba8(255, 255, 255, 0.8),
    }
}

/// Paint a full frame of `state` onto `surface`.
///
/// The surface is resized to `viewport` and cleared first, so it tracks
/// window resizes and never shows a stale frame.
pub fn render_frame(surface: &mut dyn DrawSurface, state: &SceneState, viewport: Viewport, theme: Theme) {
    surface.resize(viewport.width, viewport.height);
    surface.clear();

    surface.set_layer(SkyLayer::Sky);
    draw_sky(surface, viewport, theme);

    match theme {
        Theme::Night => {
            surface.set_layer(SkyLayer::Stars);
            for star in &state.stars {
                draw_star(surface, star);
            }
            surface.set_layer(SkyLayer::Moon);
            draw_moon(surface, viewport, &state.glow);
        }
        Theme::Day => {
            surface.set_layer(SkyLayer::Sun);
            draw_sun(surface, viewport, &state.glow);
            surface.set_layer(SkyLayer::Birds);
            for bird in &state.birds {
                draw_bird(surface, bird);
            }
        }
    }

    surface.set_layer(SkyLayer::Clouds);
    let fill = Paint::Solid(cloud_color(theme));
    for cloud in &state.clouds {
        draw_cloud(surface, cloud, &fill);
    }
}

fn draw_sky(surface: &mut dyn DrawSurface, viewport: Viewport, theme: Theme) {
    let paint = Paint::Linear {
        start: Vec2::ZERO,
        end: Vec2::new(0.0, viewport.height),
        stops: sky_stops(theme).to_vec(),
    };
    surface.fill_rect(Vec2::ZERO, viewport.size(), &paint);
}

fn draw_star(surface: &mut dyn DrawSurface, star: &Star) {
    surface.fill_circle(
        star.pos,
        star.size,
        &Paint::Solid(Color::WHITE.with_alpha(star.opacity)),
    );
    if star.opacity > STAR_HALO_THRESHOLD {
        surface.fill_circle(
            star.pos,
            star.size * 2.0,
            &Paint::Solid(Color::WHITE.with_alpha(star.opacity * 0.3)),
        );
    }
}

fn draw_moon(surface: &mut dyn DrawSurface, viewport: Viewport, glow: &GlowPhases) {
    let center = viewport.at(0.8, 0.2);
    let intensity = glow.moon_intensity();

    let halo = Paint::Radial {
        center,
        inner_radius: MOON_RADIUS * 0.5,
        outer_radius: MOON_RADIUS * 2.5,
        stops: vec![
            ColorStop::new(0.0, Color::rgba8(255, 255, 200, 0.4 * intensity)),
            ColorStop::new(0.5, Color::rgba8(255, 255, 200, 0.2 * intensity)),
            ColorStop::new(1.0, Color::rgba8(255, 255, 200, 0.0)),
        ],
    };
    surface.fill_circle(center, MOON_RADIUS * 2.5, &halo);

    surface.fill_circle(center, MOON_RADIUS, &Paint::Solid(Color::rgb8(0xf4, 0xf4, 0xc8)));

    let crater = Paint::Solid(Color::rgba8(220, 220, 180, 0.4));
    for (dx, dy, r) in MOON_CRATERS {
        surface.fill_circle(center + Vec2::new(dx, dy), r, &crater);
    }
}

/// Corners of one sun ray pointing along +x, before rotation.
fn ray_shape() -> [Vec2; 4] {
    [
        Vec2::ZERO,
        Vec2::new(SUN_RADIUS + 20.0, -8.0),
        Vec2::new(SUN_RADIUS + 40.0, 0.0),
        Vec2::new(SUN_RADIUS + 20.0, 8.0),
    ]
}

fn draw_sun(surface: &mut dyn DrawSurface, viewport: Viewport, glow: &GlowPhases) {
    let center = viewport.at(0.15, 0.15);
    let intensity = glow.sun_intensity();

    let halo = Paint::Radial {
        center,
        inner_radius: SUN_RADIUS * 0.3,
        outer_radius: SUN_RADIUS * 3.0,
        stops: vec![
            ColorStop::new(0.0, Color::rgba8(255, 223, 0, 0.6 * intensity)),
            ColorStop::new(0.4, Color::rgba8(255, 200, 0, 0.3 * intensity)),
            ColorStop::new(1.0, Color::rgba8(255, 200, 0, 0.0)),
        ],
    };
    surface.fill_circle(center, SUN_RADIUS * 3.0, &halo);

    // The whole fan turns with the glow phase.
    let ray_paint = Paint::Solid(Color::rgba8(255, 223, 0, 0.4 * intensity));
    let shape = ray_shape();
    for i in 0..SUN_RAYS {
        let rotation = Vec2::from_angle(glow.sun + TAU * i as f32 / SUN_RAYS as f32);
        let points = shape.map(|p| center + rotation.rotate(p));
        surface.fill_polygon(&points, &ray_paint);
    }

    surface.fill_circle(center, SUN_RADIUS, &Paint::Solid(Color::rgb8(0xFF, 0xD7, 0x00)));
}

fn draw_bird(surface: &mut dyn DrawSurface, bird: &Bird) {
    let stroke = Stroke::new(Color::BLACK.with_alpha(0.6), 2.0).with_cap(LineCap::Round);
    let offset = bird.wing_offset();
    let body = bird.pos;

    for side in [-1.0, 1.0] {
        let ctrl = body + Vec2::new(10.0 * side, -5.0 - offset);
        let tip = body + Vec2::new(15.0 * side, -offset);
        surface.stroke_quadratic(body, ctrl, tip, &stroke);
    }
}

fn draw_cloud(surface: &mut dyn DrawSurface, cloud: &Cloud, fill: &Paint) {
    for (center, radius) in cloud.puffs() {
        surface.fill_circle(center, radius, fill);
    }
}
