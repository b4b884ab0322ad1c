//! Lyon-based scene tessellation.
//!
//! All globe geometry (sphere, graticule, arcs, markers) is tessellated on
//! the CPU into a flat vertex buffer the host uploads directly. Only the
//! primitives the scene needs exist here: filled circles, stroked circles,
//! and stroked polylines.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

/// Tessellation tolerance in surface units.
const TOLERANCE: f32 = 0.25;

/// Per-vertex data: position + color. 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SceneVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl SceneVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// RGBA color for scene styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Self = Self::rgb(0.75, 0.75, 0.75);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: Color,
}

impl FillVertexConstructor<SceneVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> SceneVertex {
        SceneVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: Color,
}

impl StrokeVertexConstructor<SceneVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> SceneVertex {
        SceneVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Tessellation state for scene rebuilds.
///
/// Holds lyon tessellators and the output vertex buffer. Cleared at the
/// start of every rebuild and repopulated by drawing calls.
pub struct ScenePainter {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<SceneVertex, u32>,
    buffer: Vec<f32>,
}

impl ScenePainter {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * SceneVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each rebuild.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / SceneVertex::FLOATS
    }

    /// The flat float buffer (triangle list, one [`SceneVertex`] stride each).
    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    /// Raw pointer to the flat float buffer (for SAB copy).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Tessellate and fill a circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();

        let result = self.fill_tess.tessellate_path(
            &path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        }
    }

    /// Tessellate a stroked circle outline.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();

        self.stroke_path(&path, width, color);
    }

    /// Tessellate a stroked open polyline.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(false); // open path

        let path = builder.build();
        self.stroke_path(&path, width, color);
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: Color) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        }
    }
}

impl Default for ScenePainter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn scene_vertex_is_24_bytes() {
        assert_eq!(size_of::<SceneVertex>(), 24);
        assert_eq!(SceneVertex::FLOATS, 6);
        assert_eq!(SceneVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn color_constructors() {
        let c = Color::BLUE;
        assert_eq!(c.b, 1.0);
        assert_eq!(c.a, 1.0);

        let c = Color::rgb8(0, 0, 255).with_alpha(0.5);
        assert!((c.b - 1.0).abs() < 0.01);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn fill_circle_produces_vertices() {
        let mut painter = ScenePainter::new();
        painter.fill_circle(Vec2::new(480.0, 480.0), 8.0, Color::BLUE);
        assert!(painter.vertex_count() > 0);
        assert_eq!(painter.buffer().len(), painter.vertex_count() * SceneVertex::FLOATS);
    }

    #[test]
    fn stroke_circle_produces_vertices() {
        let mut painter = ScenePainter::new();
        painter.stroke_circle(Vec2::new(480.0, 480.0), 270.0, 1.0, Color::BLACK);
        assert!(painter.vertex_count() > 0);
    }

    #[test]
    fn short_polylines_produce_nothing() {
        let mut painter = ScenePainter::new();
        painter.stroke_polyline(&[], 2.0, Color::BLUE);
        painter.stroke_polyline(&[Vec2::ZERO], 2.0, Color::BLUE);
        assert_eq!(painter.vertex_count(), 0);
    }

    #[test]
    fn zero_radius_produces_nothing() {
        let mut painter = ScenePainter::new();
        painter.fill_circle(Vec2::ZERO, 0.0, Color::BLUE);
        painter.stroke_circle(Vec2::ZERO, -1.0, 1.0, Color::BLUE);
        assert_eq!(painter.vertex_count(), 0);
    }

    #[test]
    fn clear_resets_buffer() {
        let mut painter = ScenePainter::new();
        painter.fill_circle(Vec2::ZERO, 10.0, Color::BLUE);
        assert!(painter.vertex_count() > 0);

        painter.clear();
        assert_eq!(painter.vertex_count(), 0);
    }

    #[test]
    fn vertices_carry_the_stroke_color() {
        let mut painter = ScenePainter::new();
        painter.stroke_polyline(
            &[Vec2::ZERO, Vec2::new(100.0, 0.0)],
            2.0,
            Color::rgb(0.0, 0.0, 1.0),
        );
        let buf = painter.buffer();
        // r, g, b, a of the first vertex.
        assert_eq!(&buf[2..6], &[0.0, 0.0, 1.0, 1.0]);
    }
}
