//! A single star flying toward the viewer.

use glam::Vec2;

use crate::config::TrailStyle;
use crate::core::time::sanitize_delta;
use crate::renderer::lines::LineSegment;
use crate::renderer::projection::Projector;
use crate::systems::color::hue;

/// A star: fixed lateral offset, shrinking depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Offset from the view axis. Set at spawn, never changes.
    lateral: Vec2,
    /// Distance from the viewer. Never negative.
    depth: f32,
    /// Depth at the start of the last update.
    previous_depth: f32,
    /// Depth at creation. Drives hue phase and fade-in.
    spawn_depth: f32,
    off_screen: bool,
}

impl Particle {
    pub fn new(lateral: Vec2, depth: f32) -> Self {
        let depth = depth.max(0.0);
        Particle {
            lateral,
            depth,
            previous_depth: depth,
            spawn_depth: depth,
            off_screen: false,
        }
    }

    pub fn lateral(&self) -> Vec2 {
        self.lateral
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn previous_depth(&self) -> f32 {
        self.previous_depth
    }

    pub fn spawn_depth(&self) -> f32 {
        self.spawn_depth
    }

    /// Set once the star has left the viewport or reached the viewer.
    pub fn is_off_screen(&self) -> bool {
        self.off_screen
    }

    /// Move the star `dt * speed` units closer, stopping at depth 0.
    pub fn update(&mut self, dt: f32, speed: f32) {
        let dt = sanitize_delta(dt);
        self.previous_depth = self.depth;
        self.depth = (self.depth - dt * speed).max(0.0);
        if self.depth == 0.0 {
            self.off_screen = true;
        }
    }

    /// Depth of the trail head: the last depth change extrapolated by `length_factor`.
    pub fn trail_depth(&self, style: &TrailStyle) -> f32 {
        self.depth - (self.depth - self.previous_depth) * style.length_factor
    }

    /// Build this frame's trail segment.
    ///
    /// Returns `None` when the star is already off-screen, too close to draw,
    /// or when the trail head projects outside the viewport. The latter also
    /// flags the star off-screen so its owner can cull it.
    pub fn render(&mut self, projector: &Projector, style: &TrailStyle) -> Option<LineSegment> {
        if self.off_screen {
            return None;
        }
        let trail_depth = self.trail_depth(style);
        if self.depth < style.min_depth || trail_depth == 0.0 {
            return None;
        }

        let head = projector.project(self.lateral, trail_depth);
        if !projector.viewport.contains(head) {
            self.off_screen = true;
            return None;
        }
        let tip = projector.project(self.lateral, self.depth);

        // Hue turns as the star closes in; stars spawned at different depths are out of phase
        let angle = -(self.spawn_depth + self.depth) / style.hue_period * 360.0 * style.hue_turns;
        let head_alpha = ((self.spawn_depth - trail_depth) / style.fade_depth).clamp(0.0, 1.0);
        let tip_alpha = ((self.spawn_depth - self.depth) / style.fade_depth).clamp(0.0, 1.0);

        Some(LineSegment {
            from: head,
            to: tip,
            from_color: hue(angle).with_alpha(head_alpha),
            to_color: hue(angle + style.hue_offset).with_alpha(tip_alpha),
        })
    }
}
