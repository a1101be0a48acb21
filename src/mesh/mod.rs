pub mod buffers;
pub mod engine;
pub mod error;
pub mod tessellate;
pub mod wireframe;

pub use buffers::{MeshBuffers, WireframeBuffers};
pub use engine::{MeshCommand, MeshEngine, MeshResult};
pub use error::{Axis, MeshError};
pub use tessellate::{GridConfig, MAX_VERTICES, UvMode, tessellate, tessellate_parallel};
pub use wireframe::wireframe;
