pub mod config;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use config::{ConfigError, SpawnPolicy, StarfieldConfig, TrailStyle};
pub use crate::core::field::{ParticleField, RenderPass};
pub use crate::core::rng::Rng;
pub use crate::core::time::{sanitize_delta, FixedTimestep};
pub use systems::color::{hue, TrailColor};
pub use systems::particle::Particle;
pub use renderer::lines::{LineBuffer, LineSegment, LineVertex};
pub use renderer::projection::{Projector, Viewport};
pub use renderer::traits::{BlendMode, DrawSurface, FrameData};
pub use bridge::protocol::ProtocolLayout;
