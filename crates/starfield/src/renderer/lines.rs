//! Batched line geometry.
//!
//! Every trail is a single line segment with a color per endpoint. Segments
//! for a frame accumulate in a [`LineBuffer`] and are submitted in one go.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::systems::color::TrailColor;

/// Per-vertex data for line rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24

    pub fn new(pos: Vec2, color: TrailColor) -> Self {
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

/// A draw command: one line from `from` to `to`, colors interpolated along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub from_color: TrailColor,
    pub to_color: TrailColor,
}

impl LineSegment {
    pub fn vertices(&self) -> [LineVertex; 2] {
        [
            LineVertex::new(self.from, self.from_color),
            LineVertex::new(self.to, self.to_color),
        ]
    }
}

/// Line list vertex buffer with a fixed capacity.
/// Cleared each frame and filled by a render pass.
pub struct LineBuffer {
    vertices: Vec<LineVertex>,
    max_vertices: usize,
    dropped: u32,
}

impl LineBuffer {
    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(max_vertices),
            max_vertices,
            dropped: 0,
        }
    }

    /// Clear the buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.dropped = 0;
    }

    /// Append a segment. Returns false, and counts the segment as dropped, when full.
    pub fn push_segment(&mut self, segment: &LineSegment) -> bool {
        if self.vertices.len() + 2 > self.max_vertices {
            if self.dropped == 0 {
                log::warn!("line buffer full at {} vertices, dropping segments", self.max_vertices);
            }
            self.dropped += 1;
            return false;
        }
        self.vertices.extend_from_slice(&segment.vertices());
        true
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Vertex data as a flat float slice (x, y, r, g, b, a per vertex).
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Segments rejected since the last `clear`.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(x: f32) -> LineSegment {
        LineSegment {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, 10.0),
            from_color: TrailColor::new(1.0, 0.0, 0.0, 0.5),
            to_color: TrailColor::WHITE,
        }
    }

    #[test]
    fn line_vertex_is_6_floats() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
        assert_eq!(LineVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn push_segment_writes_both_endpoints() {
        let mut buf = LineBuffer::with_capacity(16);
        assert!(buf.push_segment(&segment(3.0)));
        assert_eq!(buf.vertex_count(), 2);
        assert_eq!(
            buf.as_floats(),
            &[3.0, 0.0, 1.0, 0.0, 0.0, 0.5, 3.0, 10.0, 1.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn full_buffer_drops_segments() {
        let mut buf = LineBuffer::with_capacity(5);
        assert!(buf.push_segment(&segment(0.0)));
        assert!(buf.push_segment(&segment(1.0)));
        assert!(!buf.push_segment(&segment(2.0)));
        assert_eq!(buf.segment_count(), 2);
        assert_eq!(buf.dropped(), 1);

        buf.clear();
        assert_eq!(buf.vertex_count(), 0);
        assert_eq!(buf.dropped(), 0);
    }
}
