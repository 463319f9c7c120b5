//! Canvas2D implementation of the engine's drawing surface.

use daybreak_engine::{DrawSurface, Paint, Stroke};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Draws onto an owned `<canvas>` element through its 2D context.
///
/// Individual canvas calls that fail are logged and skipped; a broken frame
/// is never worth surfacing as an error from a decorative layer.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap `canvas`. Returns `None` when its 2D context cannot be acquired.
    pub fn acquire(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<CanvasRenderingContext2d>().ok()?,
            Ok(None) => return None,
            Err(e) => {
                log::debug!("2d context unavailable: {:?}", e);
                return None;
            }
        };
        Some(Self { canvas, ctx })
    }

    fn apply_fill(&self, paint: &Paint) -> Result<(), JsValue> {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear { start, end, stops } => {
                let gradient = self.ctx.create_linear_gradient(
                    start.x as f64,
                    start.y as f64,
                    end.x as f64,
                    end.y as f64,
                );
                for stop in stops {
                    gradient.add_color_stop(stop.offset, &stop.color.to_css())?;
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                let gradient = self.ctx.create_radial_gradient(
                    center.x as f64,
                    center.y as f64,
                    *inner_radius as f64,
                    center.x as f64,
                    center.y as f64,
                    *outer_radius as f64,
                )?;
                for stop in stops {
                    gradient.add_color_stop(stop.offset, &stop.color.to_css())?;
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn try_fill_circle(&self, center: Vec2, radius: f32, paint: &Paint) -> Result<(), JsValue> {
        self.apply_fill(paint)?;
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}

fn log_failure(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::debug!("canvas {} failed: {:?}", what, e);
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        let result = self.apply_fill(paint).map(|_| {
            self.ctx.fill_rect(
                origin.x as f64,
                origin.y as f64,
                size.x as f64,
                size.y as f64,
            )
        });
        log_failure("fill_rect", result);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if radius <= 0.0 {
            return;
        }
        log_failure("fill_circle", self.try_fill_circle(center, radius, paint));
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 {
            return;
        }
        if let Err(e) = self.apply_fill(paint) {
            log::debug!("canvas fill_polygon failed: {:?}", e);
            return;
        }
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn stroke_quadratic(&mut self, from: Vec2, ctrl: Vec2, to: Vec2, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.set_line_cap(stroke.cap.as_css());
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx
            .quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
