pub mod shapes;

pub use shapes::{MobiusStrip, Plane, Sphere, SurfacePreset, Torus, TutteSurface, SURFACE_PRESETS};

use glam::DVec3;

/// A parametric surface: a pure mapping from `(u, v)` to a point in space.
///
/// Implementations must be deterministic and side-effect free; the mesher
/// may evaluate them from multiple threads.
pub trait Surface {
    fn position(&self, u: f64, v: f64) -> DVec3;
}

impl<F> Surface for F
where
    F: Fn(f64, f64) -> DVec3,
{
    fn position(&self, u: f64, v: f64) -> DVec3 {
        self(u, v)
    }
}
