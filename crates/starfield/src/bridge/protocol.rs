/// Shared float-buffer layout read by the JavaScript renderer.
/// Must stay in sync with the page script that uploads line vertices.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Projection: 16 floats, column-major]
/// [Lines: max_line_vertices × 6 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// JavaScript reads them from the header to compute offsets dynamically.

use crate::config::StarfieldConfig;
use crate::renderer::lines::LineVertex;
use crate::renderer::traits::FrameData;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_LINE_VERTICES: usize = 2;
pub const HEADER_LINE_VERTEX_COUNT: usize = 3;
pub const HEADER_VIEWPORT_WIDTH: usize = 4;
pub const HEADER_VIEWPORT_HEIGHT: usize = 5;
pub const HEADER_PARTICLE_COUNT: usize = 6;
pub const HEADER_DROPPED_SEGMENTS: usize = 7;
pub const HEADER_BLEND_MODE: usize = 8;
// 9..16 reserved

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the projection matrix section.
pub const PROJECTION_FLOATS: usize = 16;

/// Floats per line vertex: x, y, r, g, b, a (wire format — never changes).
pub const LINE_VERTEX_FLOATS: usize = LineVertex::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum line vertices per frame.
    pub max_line_vertices: usize,

    /// Offset (in floats) where the projection matrix begins.
    pub projection_offset: usize,
    /// Offset (in floats) where line vertex data begins.
    pub line_data_offset: usize,
    /// Size of line vertex section in floats.
    pub line_data_floats: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_line_vertices: usize) -> Self {
        let projection_offset = HEADER_FLOATS;
        let line_data_offset = projection_offset + PROJECTION_FLOATS;
        let line_data_floats = max_line_vertices * LINE_VERTEX_FLOATS;
        let buffer_total_floats = line_data_offset + line_data_floats;

        Self {
            max_line_vertices,
            projection_offset,
            line_data_offset,
            line_data_floats,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &StarfieldConfig) -> Self {
        Self::new(config.max_line_vertices)
    }

    /// Write a frame into `buf`, which must be `buffer_total_floats` long.
    /// Vertices beyond `max_line_vertices` are not written.
    pub fn write_frame(&self, buf: &mut [f32], frame: &FrameData, frame_counter: u32) {
        let vertices = &frame.lines[..frame.lines.len().min(self.max_line_vertices)];
        let floats: &[f32] = bytemuck::cast_slice(vertices);

        buf[HEADER_FRAME_COUNTER] = frame_counter as f32;
        buf[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        buf[HEADER_MAX_LINE_VERTICES] = self.max_line_vertices as f32;
        buf[HEADER_LINE_VERTEX_COUNT] = vertices.len() as f32;
        buf[HEADER_VIEWPORT_WIDTH] = frame.viewport.width as f32;
        buf[HEADER_VIEWPORT_HEIGHT] = frame.viewport.height as f32;
        buf[HEADER_PARTICLE_COUNT] = frame.particle_count as f32;
        buf[HEADER_DROPPED_SEGMENTS] = frame.dropped_segments as f32;
        buf[HEADER_BLEND_MODE] = frame.blend.as_f32();

        buf[self.projection_offset..self.line_data_offset]
            .copy_from_slice(&frame.projection.to_cols_array());
        buf[self.line_data_offset..self.line_data_offset + floats.len()].copy_from_slice(floats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::projection::Viewport;

    #[test]
    fn default_layout() {
        let layout = ProtocolLayout::from_config(&StarfieldConfig::default());
        assert_eq!(layout.max_line_vertices, 16384);
        assert_eq!(layout.projection_offset, 16);
        assert_eq!(layout.line_data_offset, 32);
        assert_eq!(layout.buffer_total_floats, 32 + 16384 * 6);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn write_frame_fills_header_and_lines() {
        let layout = ProtocolLayout::new(4);
        let mut buf = vec![0.0; layout.buffer_total_floats];
        let lines = [
            LineVertex { x: 1.0, y: 2.0, r: 0.1, g: 0.2, b: 0.3, a: 0.4 },
            LineVertex { x: 3.0, y: 4.0, r: 0.5, g: 0.6, b: 0.7, a: 0.8 },
        ];
        let mut frame = FrameData::new(&lines, Viewport::new(640, 480));
        frame.dropped_segments = 3;
        frame.particle_count = 12;

        layout.write_frame(&mut buf, &frame, 7);

        assert_eq!(buf[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(buf[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(buf[HEADER_MAX_LINE_VERTICES], 4.0);
        assert_eq!(buf[HEADER_LINE_VERTEX_COUNT], 2.0);
        assert_eq!(buf[HEADER_VIEWPORT_WIDTH], 640.0);
        assert_eq!(buf[HEADER_VIEWPORT_HEIGHT], 480.0);
        assert_eq!(buf[HEADER_PARTICLE_COUNT], 12.0);
        assert_eq!(buf[HEADER_DROPPED_SEGMENTS], 3.0);
        assert_eq!(&buf[32..38], &[1.0, 2.0, 0.1, 0.2, 0.3, 0.4]);
        assert_eq!(&buf[38..44], &[3.0, 4.0, 0.5, 0.6, 0.7, 0.8]);
    }

    #[test]
    fn write_frame_truncates_to_capacity() {
        let layout = ProtocolLayout::new(2);
        let mut buf = vec![0.0; layout.buffer_total_floats];
        let lines = [LineVertex::default(); 6];
        let frame = FrameData::new(&lines, Viewport::new(10, 10));
        layout.write_frame(&mut buf, &frame, 0);
        assert_eq!(buf[HEADER_LINE_VERTEX_COUNT], 2.0);
    }
}
