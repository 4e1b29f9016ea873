//! Owner of all live stars: spawning, per-frame update and culling.

use glam::Vec2;

use crate::config::{SpawnPolicy, StarfieldConfig, TrailStyle};
use crate::core::rng::Rng;
use crate::core::time::sanitize_delta;
use crate::renderer::lines::{LineBuffer, LineSegment};
use crate::renderer::projection::{Projector, Viewport};
use crate::systems::particle::Particle;

/// Flat storage of live stars.
///
/// Stars flagged off-screen during a render pass are compacted out when the
/// pass ends, so the collection never holds a culled star between frames.
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: Rng,
    speed: f32,
    spawn_depth: (f32, f32),
    spawn: SpawnPolicy,
    /// Fractional stars carried between updates under `SpawnPolicy::PerSecond`.
    spawn_carry: f32,
}

impl ParticleField {
    pub fn new(config: &StarfieldConfig) -> Self {
        Self {
            particles: Vec::with_capacity(1024),
            rng: Rng::new(config.seed),
            speed: config.speed,
            spawn_depth: (config.spawn_depth_min, config.spawn_depth_max),
            spawn: config.spawn,
            spawn_carry: 0.0,
        }
    }

    /// Add one star at a random lateral offset across the viewport and a random spawn depth.
    pub fn spawn(&mut self, viewport: Viewport) {
        let half = viewport.size() / 2.0;
        let x = self.rng.range(-half.x, half.x);
        let y = self.rng.range(-half.y, half.y);
        let depth = self.rng.range(self.spawn_depth.0, self.spawn_depth.1);
        self.particles.push(Particle::new(Vec2::new(x, y), depth));
    }

    /// Add an already built star.
    pub fn insert(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Advance every star by `dt`, then spawn new ones.
    ///
    /// Under the default `SpawnPolicy::PerUpdate` the spawn count is per call,
    /// so star density follows the host's update rate.
    pub fn update_frame(&mut self, dt: f32, viewport: Viewport) {
        let dt = sanitize_delta(dt);
        for particle in &mut self.particles {
            particle.update(dt, self.speed);
        }

        let count = self.spawn_count(dt);
        for _ in 0..count {
            self.spawn(viewport);
        }
    }

    fn spawn_count(&mut self, dt: f32) -> u32 {
        match self.spawn {
            SpawnPolicy::PerUpdate(n) => n,
            SpawnPolicy::PerSecond(rate) => {
                self.spawn_carry += rate * dt;
                let whole = self.spawn_carry.floor();
                self.spawn_carry -= whole;
                whole as u32
            }
        }
    }

    /// Start a render pass over the stars, newest first.
    ///
    /// The pass yields one trail segment per drawable star. Stars whose trail
    /// leaves the viewport are flagged while iterating and removed when the
    /// pass is dropped. Each call renders the current state afresh.
    pub fn render<'a>(&'a mut self, projector: &'a Projector, style: &'a TrailStyle) -> RenderPass<'a> {
        RenderPass {
            cursor: self.particles.len(),
            particles: &mut self.particles,
            projector,
            style,
        }
    }

    /// Run a full render pass into a line buffer. Returns the number of segments written.
    pub fn render_into(&mut self, projector: &Projector, style: &TrailStyle, buffer: &mut LineBuffer) -> usize {
        let mut written = 0;
        for segment in self.render(projector, style) {
            if buffer.push_segment(&segment) {
                written += 1;
            }
        }
        log::debug!("render pass: {} segments, {} stars live", written, self.particles.len());
        written
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.spawn_carry = 0.0;
    }
}

/// Lazy sequence of trail segments for one frame. See [`ParticleField::render`].
pub struct RenderPass<'a> {
    particles: &'a mut Vec<Particle>,
    /// Stars at `cursor..` have been visited.
    cursor: usize,
    projector: &'a Projector,
    style: &'a TrailStyle,
}

impl Iterator for RenderPass<'_> {
    type Item = LineSegment;

    fn next(&mut self) -> Option<LineSegment> {
        while self.cursor > 0 {
            self.cursor -= 1;
            if let Some(segment) = self.particles[self.cursor].render(self.projector, self.style) {
                return Some(segment);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cursor))
    }
}

impl Drop for RenderPass<'_> {
    fn drop(&mut self) {
        let before = self.particles.len();
        self.particles.retain(|p| !p.is_off_screen());
        let culled = before - self.particles.len();
        if culled > 0 {
            log::debug!("culled {} stars", culled);
        }
    }
}
