use starfield::{
    DrawSurface, FixedTimestep, FrameData, LineBuffer, ParticleField, ProtocolLayout, Projector,
    StarfieldConfig, Viewport,
};

use crate::surface::SharedBufferSurface;

/// Wires the starfield to a host clock and a drawing surface.
///
/// The browser calls `tick` once per animation frame with the elapsed time.
/// Updates run on a fixed step; rendering happens once per tick.
pub struct StarfieldRunner<S: DrawSurface = SharedBufferSurface> {
    config: StarfieldConfig,
    field: ParticleField,
    timestep: FixedTimestep,
    projector: Projector,
    lines: LineBuffer,
    surface: S,
}

impl StarfieldRunner<SharedBufferSurface> {
    /// Runner drawing into a shared buffer sized from `config`.
    pub fn new(config: StarfieldConfig, viewport: Viewport) -> Self {
        let surface = SharedBufferSurface::new(ProtocolLayout::from_config(&config), viewport);
        Self::with_surface(config, viewport, surface)
    }
}

impl<S: DrawSurface> StarfieldRunner<S> {
    pub fn with_surface(config: StarfieldConfig, viewport: Viewport, mut surface: S) -> Self {
        surface.resize(viewport);
        Self {
            field: ParticleField::new(&config),
            timestep: FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame),
            projector: Projector::new(viewport, config.focal_scale),
            lines: LineBuffer::with_capacity(config.max_line_vertices),
            surface,
            config,
        }
    }

    /// Viewport changed size. Stars keep their lateral offsets.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.projector.viewport {
            return;
        }
        self.projector.resize(viewport);
        self.surface.resize(viewport);
    }

    /// Run one host frame: fixed-step updates, then a single render pass.
    pub fn tick(&mut self, frame_dt: f32) {
        let viewport = self.projector.viewport;
        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.field.update_frame(self.timestep.dt(), viewport);
        }

        self.lines.clear();
        self.field
            .render_into(&self.projector, &self.config.trail, &mut self.lines);

        let mut frame = FrameData::new(self.lines.vertices(), viewport);
        frame.dropped_segments = self.lines.dropped();
        frame.particle_count = self.field.len();
        self.surface.draw(&frame);
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn lines(&self) -> &LineBuffer {
        &self.lines
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.projector.viewport
    }
}
