pub mod lines;
pub mod projection;
pub mod traits;

// Re-export key types for convenient access
pub use lines::{LineBuffer, LineSegment, LineVertex};
pub use projection::{Projector, Viewport};
pub use traits::{BlendMode, DrawSurface, FrameData};
