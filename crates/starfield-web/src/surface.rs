use starfield::{DrawSurface, FrameData, ProtocolLayout, Viewport};

/// `DrawSurface` that serializes each frame into a flat `f32` buffer.
/// JavaScript reads the buffer straight out of WASM memory and uploads it
/// as a line-list vertex buffer.
pub struct SharedBufferSurface {
    layout: ProtocolLayout,
    buffer: Vec<f32>,
    viewport: Viewport,
    frame_counter: u32,
}

impl SharedBufferSurface {
    pub fn new(layout: ProtocolLayout, viewport: Viewport) -> Self {
        let buffer = vec![0.0; layout.buffer_total_floats];
        Self {
            layout,
            buffer,
            viewport,
            frame_counter: 0,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    /// Raw pointer to the buffer for reads from WASM memory.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }
}

impl DrawSurface for SharedBufferSurface {
    fn resize(&mut self, viewport: Viewport) {
        log::info!("surface resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    fn draw(&mut self, frame: &FrameData) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.layout.write_frame(&mut self.buffer, frame, self.frame_counter);
    }
}
