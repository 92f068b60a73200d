//! Lyon-based vector drawing surface.
//!
//! Every frame the game's render pass issues fill/stroke commands; each command
//! is tessellated on the CPU into a flat triangle list (6 floats per vertex)
//! that the host uploads and draws in submission order, so later commands paint
//! over earlier ones the way a 2D canvas does.
//!
//! # Usage
//!
//! ```ignore
//! fn render(&self, ctx: &mut RenderContext) {
//!     ctx.vectors.fill_rect(Vec2::ZERO, 1800.0, 1000.0, VectorColor::hex(0xa6e060));
//!     ctx.vectors.stroke_circle(Vec2::new(900.0, 500.0), 90.0, 4.0, VectorColor::WHITE);
//!     ctx.vectors.line(a, b, 7.0, VectorColor::hex(0xff6b35).with_alpha(0.9));
//! }
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

/// Tessellation tolerance in logical units.
const TOLERANCE: f32 = 0.5;

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
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

    fn at(x: f32, y: f32, c: VectorColor) -> Self {
        Self { x, y, r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from a `0xRRGGBB` literal, matching CSS hex notation.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Replace the alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Multiply the alpha value, like drawing under a canvas `globalAlpha`.
    pub fn faded(self, opacity: f32) -> Self {
        Self { a: self.a * opacity.clamp(0.0, 1.0), ..self }
    }

    /// Component-wise blend, `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

struct FillCtor {
    color: VectorColor,
}

impl FillVertexConstructor<VectorVertex> for FillCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(p.x, p.y, self.color)
    }
}

/// Stroke vertex constructor. With `to` set, color blends along the path
/// by the vertex's advancement over `length`, giving a linear gradient.
struct StrokeCtor {
    from: VectorColor,
    to: Option<(VectorColor, f32)>,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        let color = match self.to {
            Some((to, length)) if length > 0.0 => self.from.lerp(to, vertex.advancement() / length),
            _ => self.from,
        };
        VectorVertex::at(p.x, p.y, color)
    }
}

/// Per-frame vector drawing surface.
///
/// Holds lyon tessellators and the output vertex buffer.
/// Cleared each frame and populated by drawing commands. Commands that would
/// overflow `max_vertices` are dropped whole, so the host never sees a torn shape.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    max_vertices: usize,
    dropped: usize,
}

impl VectorState {
    pub fn new() -> Self {
        Self::with_capacity(65536)
    }

    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(max_vertices.min(16384) * VectorVertex::FLOATS),
            max_vertices,
            dropped: 0,
        }
    }

    /// Clear the vertex buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.dropped = 0;
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Number of commands dropped this frame for lack of capacity.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Flat float view of the buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    /// Raw pointer to the flat float buffer (for SAB copy).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as an unindexed triangle list.
    fn flush_geometry(&mut self) {
        let incoming = self.geometry.indices.len();
        if self.vertex_count() + incoming > self.max_vertices {
            self.dropped += 1;
        } else {
            for idx in &self.geometry.indices {
                let v = &self.geometry.vertices[*idx as usize];
                self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
            }
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    fn polygon_path(points: &[Vec2], closed: bool) -> Path {
        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(closed);
        builder.build()
    }

    fn rect_points(pos: Vec2, width: f32, height: f32) -> [Vec2; 4] {
        [
            pos,
            Vec2::new(pos.x + width, pos.y),
            Vec2::new(pos.x + width, pos.y + height),
            Vec2::new(pos.x, pos.y + height),
        ]
    }

    /// Fill a closed polygon (convex or concave).
    pub fn fill_polygon(&mut self, points: &[Vec2], color: VectorColor) {
        if points.len() < 3 || color.a <= 0.0 {
            return;
        }
        let path = Self::polygon_path(points, true);
        self.fill_path(&path, color);
    }

    /// Fill an axis-aligned rectangle given its top-left corner.
    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: VectorColor) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.fill_polygon(&Self::rect_points(pos, width, height), color);
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        if radius <= 0.0 || color.a <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        self.fill_path(&builder.build(), color);
    }

    /// Fill an axis-aligned ellipse.
    pub fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: VectorColor) {
        if radii.x <= 0.0 || radii.y <= 0.0 || color.a <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(center.x, center.y),
            lyon::math::vector(radii.x, radii.y),
            lyon::math::Angle::radians(0.0),
            Winding::Positive,
        );
        self.fill_path(&builder.build(), color);
    }

    /// Fill an arbitrary lyon path.
    pub fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, FillCtor { color }),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::debug!("fill tessellation failed: {:?}", err);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    /// Stroke a single segment.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: VectorColor) {
        self.stroke_polyline(&[from, to], width, color);
    }

    /// Stroke a segment whose color blends from `from_color` to `to_color`.
    pub fn gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        from_color: VectorColor,
        to_color: VectorColor,
    ) {
        let length = from.distance(to);
        if length <= 0.0 || width <= 0.0 {
            return;
        }
        let path = Self::polygon_path(&[from, to], false);
        self.stroke_with(&path, width, StrokeCtor { from: from_color, to: Some((to_color, length)) });
    }

    /// Stroke an open polyline.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: VectorColor) {
        if points.len() < 2 || width <= 0.0 || color.a <= 0.0 {
            return;
        }
        let path = Self::polygon_path(points, false);
        self.stroke_path(&path, width, color);
    }

    /// Stroke a closed polygon outline.
    pub fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: VectorColor) {
        if points.len() < 3 || width <= 0.0 || color.a <= 0.0 {
            return;
        }
        let path = Self::polygon_path(points, true);
        self.stroke_path(&path, width, color);
    }

    /// Stroke a circle outline.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        if radius <= 0.0 || width <= 0.0 || color.a <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        self.stroke_path(&builder.build(), width, color);
    }

    /// Stroke a rectangle outline given its top-left corner.
    pub fn stroke_rect(&mut self, pos: Vec2, width: f32, height: f32, line_width: f32, color: VectorColor) {
        self.stroke_polygon(&Self::rect_points(pos, width, height), line_width, color);
    }

    /// Stroke an arbitrary lyon path with a solid color.
    pub fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        self.stroke_with(path, width, StrokeCtor { from: color, to: None });
    }

    fn stroke_with(&mut self, path: &Path, width: f32, ctor: StrokeCtor) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, ctor),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::debug!("stroke tessellation failed: {:?}", err);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    fn vertex(state: &VectorState, i: usize) -> &[f32] {
        &state.as_slice()[i * VectorVertex::FLOATS..(i + 1) * VectorVertex::FLOATS]
    }

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn hex_matches_css() {
        let c = VectorColor::hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn faded_multiplies_alpha() {
        let c = VectorColor::WHITE.with_alpha(0.5).faded(0.5);
        assert!((c.a - 0.25).abs() < 1e-6);
    }

    #[test]
    fn fill_rect_is_two_triangles() {
        let mut state = VectorState::new();
        state.fill_rect(Vec2::ZERO, 100.0, 50.0, VectorColor::BLACK);
        assert_eq!(state.vertex_count(), 6);
    }

    #[test]
    fn degenerate_shapes_emit_nothing() {
        let mut state = VectorState::new();
        state.fill_polygon(&[Vec2::ZERO, Vec2::ONE], VectorColor::WHITE);
        state.fill_circle(Vec2::ZERO, 0.0, VectorColor::WHITE);
        state.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::TRANSPARENT);
        state.line(Vec2::ZERO, Vec2::ONE, 0.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn stroke_and_circle_produce_vertices() {
        let mut state = VectorState::new();
        state.stroke_circle(Vec2::new(50.0, 50.0), 25.0, 4.0, VectorColor::WHITE);
        let after_circle = state.vertex_count();
        assert!(after_circle > 0);
        state.line(Vec2::ZERO, Vec2::new(100.0, 0.0), 5.0, VectorColor::WHITE);
        assert!(state.vertex_count() > after_circle);
    }

    #[test]
    fn gradient_line_blends_colors() {
        let mut state = VectorState::new();
        let from = VectorColor::rgb(0.0, 0.0, 1.0);
        let to = VectorColor::rgb(1.0, 0.0, 0.0);
        state.gradient_line(Vec2::ZERO, Vec2::new(100.0, 0.0), 8.0, from, to);
        assert!(state.vertex_count() > 0);
        let reds: Vec<f32> = (0..state.vertex_count()).map(|i| vertex(&state, i)[2]).collect();
        let min = reds.iter().cloned().fold(f32::MAX, f32::min);
        let max = reds.iter().cloned().fold(f32::MIN, f32::max);
        assert!(min < 0.05, "start should stay blue, min red {}", min);
        assert!(max > 0.95, "end should reach red, max red {}", max);
    }

    #[test]
    fn overflowing_command_is_dropped_whole() {
        let mut state = VectorState::with_capacity(8);
        state.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE);
        state.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 6);
        assert_eq!(state.dropped(), 1);
        state.clear();
        assert_eq!(state.vertex_count(), 0);
        assert_eq!(state.dropped(), 0);
    }
}
