//! wgpu rendering module
//!
//! Everything is drawn as colored triangles in normalized device
//! coordinates; point sprites are expanded to pixel-sized quads on the CPU.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};
