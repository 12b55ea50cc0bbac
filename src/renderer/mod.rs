//! Rendering module
//!
//! Produces a renderer-agnostic draw list; the host window owns the GPU.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Scene, TextAlign, TextLabel, build_scene};
pub use vertex::{Vertex, colors};
