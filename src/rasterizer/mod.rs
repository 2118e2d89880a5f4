//! Software triangle rasterizer
//!
//! Two fill strategies write into a caller-owned BGRA framebuffer:
//! - Edge-walking scanline fill driven by Bresenham edge steppers
//! - Half-space (edge function) fill with top-left tie-breaking and
//!   barycentric attribute interpolation

mod edge;
mod framebuffer;
mod halfspace;
mod math;
mod render;
mod scanline;
mod types;

pub use edge::*;
pub use framebuffer::*;
pub use halfspace::*;
pub use math::*;
pub use render::*;
pub use scanline::*;
pub use types::*;

/// Default buffer dimensions
pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 180;
