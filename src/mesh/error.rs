use thiserror::Error;

/// Parameter axis a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    U,
    V,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::U => write!(f, "u"),
            Axis::V => write!(f, "v"),
        }
    }
}

/// All mesh generation failures. Detected before any buffer is produced;
/// there are no partial results.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("{axis} granularity must be at least 1")]
    InvalidGranularity { axis: Axis },

    #[error("degenerate {axis} domain: [{min}, {max}]")]
    DegenerateDomain { axis: Axis, min: f64, max: f64 },

    #[error("{vertex_count} vertices exceed the 16-bit index limit of {max}")]
    IndexOverflow { vertex_count: usize, max: usize },

    #[error("surface returned a non-finite coordinate at ({u}, {v})")]
    NonFiniteSample { u: f64, v: f64 },
}
