//! Contract between the simulation and whatever puts pixels on screen.
//!
//! The core never talks to a graphics API. Hosts (the WASM bridge, a native
//! wallpaper window, a test recorder) implement [`DrawSurface`] and receive
//! one [`FrameData`] per rendered frame.

use glam::Mat4;

use crate::systems::color::TrailColor;

use super::lines::LineVertex;
use super::projection::Viewport;

/// Compositing mode for trail lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// `src * src_alpha + dst * (1 - src_alpha)`
    #[default]
    SourceOver,
    /// `src * src_alpha + dst`
    Additive,
}

impl BlendMode {
    /// Wire value used by the shared buffer protocol.
    pub fn as_f32(self) -> f32 {
        match self {
            BlendMode::SourceOver => 0.0,
            BlendMode::Additive => 1.0,
        }
    }
}

/// Everything a surface needs to draw one frame.
pub struct FrameData<'a> {
    /// Line list: vertices `2n` and `2n + 1` form segment `n`.
    pub lines: &'a [LineVertex],
    pub viewport: Viewport,
    /// Pixel-space to clip-space matrix for `viewport`.
    pub projection: Mat4,
    pub blend: BlendMode,
    /// Color the surface clears to before drawing (RGBA).
    pub clear_color: [f32; 4],
    /// Segments that did not fit in the line buffer this frame.
    pub dropped_segments: u32,
    /// Live stars after this frame's cull.
    pub particle_count: usize,
}

impl<'a> FrameData<'a> {
    pub fn new(lines: &'a [LineVertex], viewport: Viewport) -> Self {
        Self {
            lines,
            viewport,
            projection: viewport.projection_matrix(),
            blend: BlendMode::SourceOver,
            clear_color: TrailColor::TRANSPARENT.to_array(),
            dropped_segments: 0,
            particle_count: 0,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }
}

/// A drawing backend accepting batched, per-vertex colored line segments.
pub trait DrawSurface {
    /// Viewport changed. Recreate any size-dependent resources.
    fn resize(&mut self, viewport: Viewport);

    /// Clear and draw a complete frame.
    fn draw(&mut self, frame: &FrameData);
}
