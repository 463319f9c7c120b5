//! Lyon-based tessellating surface.
//!
//! Turns every draw call into triangles with per-vertex colors sampled from
//! the paint, producing a flat triangle-list buffer a GPU pipeline can upload
//! as-is (6 floats per vertex).
//!
//! Gradients are approximated geometrically: linear gradients are cut into
//! strips at their stop boundaries so vertex interpolation reproduces them
//! exactly, and radial gradients are drawn as concentric rings.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, FillVertexConstructor,
    LineCap as LyonLineCap, StrokeOptions, StrokeTessellator, StrokeVertex,
    StrokeVertexConstructor, VertexBuffers,
};

use super::color::Color;
use super::paint::Paint;
use super::traits::{DrawSurface, LineCap, SkyLayer, Stroke};

/// Rings used to approximate a radial gradient.
const RADIAL_RINGS: usize = 24;
const TOLERANCE: f32 = 0.5;

/// Per-vertex data for the triangle list.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn at(pos: Vec2, color: Color) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

/// Contiguous run of vertices drawn on one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerBatch {
    pub layer: SkyLayer,
    /// First vertex index.
    pub start: usize,
    /// One past the last vertex index.
    pub end: usize,
}

/// Colors each vertex by sampling the paint at its position.
struct PaintVertexCtor<'a> {
    paint: &'a Paint,
}

impl FillVertexConstructor<VectorVertex> for PaintVertexCtor<'_> {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        let pos = Vec2::new(p.x, p.y);
        VectorVertex::at(pos, self.paint.sample(pos))
    }
}

impl StrokeVertexConstructor<VectorVertex> for PaintVertexCtor<'_> {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        let pos = Vec2::new(p.x, p.y);
        VectorVertex::at(pos, self.paint.sample(pos))
    }
}

/// Tessellating [`DrawSurface`]. Cleared by [`DrawSurface::clear`], filled by
/// every draw call after it.
pub struct TessellatedSurface {
    width: f32,
    height: f32,
    layer: SkyLayer,
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    vertices: Vec<VectorVertex>,
    batches: Vec<LayerBatch>,
}

impl TessellatedSurface {
    pub fn new() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            layer: SkyLayer::default(),
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            vertices: Vec::with_capacity(16384),
            batches: Vec::new(),
        }
    }

    /// Size set by the last resize.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Number of vertices in the triangle list.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[VectorVertex] {
        &self.vertices
    }

    /// The triangle list as raw floats (`VectorVertex::FLOATS` per vertex).
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Vertex ranges per layer, in draw order.
    pub fn layer_batches(&self) -> &[LayerBatch] {
        &self.batches
    }

    /// Expand indexed geometry into the flat triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            self.vertices.push(self.geometry.vertices[*idx as usize]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();

        let count = self.vertices.len();
        match self.batches.last_mut() {
            Some(batch) if batch.layer == self.layer => batch.end = count,
            _ => {
                // Geometry emitted before any set_layer call: everything up to here is one batch.
                let start = self.batches.last().map(|b| b.end).unwrap_or(0);
                self.batches.push(LayerBatch {
                    layer: self.layer,
                    start,
                    end: count,
                });
            }
        }
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint, rule: FillRule) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(TOLERANCE).with_fill_rule(rule),
            &mut BuffersBuilder::new(&mut self.geometry, PaintVertexCtor { paint }),
        );
        match result {
            Ok(_) => self.flush_geometry(),
            Err(e) => {
                log::debug!("fill tessellation failed: {:?}", e);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    fn fill_quad(&mut self, min: Vec2, max: Vec2, paint: &Paint) {
        let mut builder = Path::builder();
        builder.begin(point(min.x, min.y));
        builder.line_to(point(max.x, min.y));
        builder.line_to(point(max.x, max.y));
        builder.line_to(point(min.x, max.y));
        builder.close();
        let path = builder.build();
        self.fill_path(&path, paint, FillRule::NonZero);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        let path = builder.build();
        self.fill_path(&path, paint, FillRule::NonZero);
    }

    fn fill_ring(&mut self, center: Vec2, inner: f32, outer: f32, paint: &Paint) {
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), outer, Winding::Positive);
        builder.add_circle(point(center.x, center.y), inner, Winding::Positive);
        let path = builder.build();
        self.fill_path(&path, paint, FillRule::EvenOdd);
    }
}

impl Default for TessellatedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for TessellatedSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
    }

    fn set_layer(&mut self, layer: SkyLayer) {
        self.layer = layer;
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        let min = origin;
        let max = origin + size;

        let Paint::Linear { start, end, stops } = paint else {
            self.fill_quad(min, max, paint);
            return;
        };

        // Cut along the dominant gradient axis at every stop that lands inside the rect.
        let axis = *end - *start;
        let vertical = axis.y.abs() >= axis.x.abs();
        let (lo, hi) = if vertical { (min.y, max.y) } else { (min.x, max.x) };
        let mut cuts = vec![lo, hi];
        for stop in stops {
            let p = *start + axis * stop.offset;
            let c = if vertical { p.y } else { p.x };
            if c > lo && c < hi {
                cuts.push(c);
            }
        }
        cuts.sort_by(|a, b| a.total_cmp(b));
        cuts.dedup();

        for pair in cuts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if vertical {
                self.fill_quad(Vec2::new(min.x, a), Vec2::new(max.x, b), paint);
            } else {
                self.fill_quad(Vec2::new(a, min.y), Vec2::new(b, max.y), paint);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if radius <= 0.0 {
            return;
        }
        if !matches!(paint, Paint::Radial { .. }) {
            self.fill_disc(center, radius, paint);
            return;
        }

        // Each ring's inner and outer vertices sample the gradient at their
        // own radius, so interpolation across the ring follows the gradient.
        let step = radius / RADIAL_RINGS as f32;
        self.fill_disc(center, step, paint);
        for k in 1..RADIAL_RINGS {
            let inner = step * k as f32;
            self.fill_ring(center, inner, inner + step, paint);
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.close();
        let path = builder.build();
        self.fill_path(&path, paint, FillRule::NonZero);
    }

    fn stroke_quadratic(&mut self, from: Vec2, ctrl: Vec2, to: Vec2, stroke: &Stroke) {
        if stroke.width <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.begin(point(from.x, from.y));
        builder.quadratic_bezier_to(point(ctrl.x, ctrl.y), point(to.x, to.y));
        builder.end(false);
        let path = builder.build();

        let cap = match stroke.cap {
            LineCap::Butt => LyonLineCap::Butt,
            LineCap::Round => LyonLineCap::Round,
            LineCap::Square => LyonLineCap::Square,
        };
        let paint = Paint::Solid(stroke.color);
        let result = self.stroke_tess.tessellate_path(
            &path,
            &StrokeOptions::tolerance(TOLERANCE)
                .with_line_width(stroke.width)
                .with_line_cap(cap),
            &mut BuffersBuilder::new(&mut self.geometry, PaintVertexCtor { paint: &paint }),
        );
        match result {
            Ok(_) => self.flush_geometry(),
            Err(e) => {
                log::debug!("stroke tessellation failed: {:?}", e);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }
}
