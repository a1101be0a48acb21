//! Tessellation of parametric surfaces into GPU-ready triangle meshes.
//!
//! A [`Surface`] maps `(u, v)` parameters to points in 3D space. The mesh
//! module samples it on a regular grid and produces flat position, texcoord,
//! normal and index buffers suitable for direct vertex/index buffer upload.

pub mod mesh;
pub mod surface;

pub use mesh::{
    Axis, GridConfig, MAX_VERTICES, MeshBuffers, MeshCommand, MeshEngine, MeshError, MeshResult,
    UvMode, WireframeBuffers, tessellate, tessellate_parallel, wireframe,
};
pub use surface::{
    MobiusStrip, Plane, Sphere, Surface, SurfacePreset, SURFACE_PRESETS, Torus, TutteSurface,
};
