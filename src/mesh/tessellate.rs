use std::ops::Range;

use glam::Vec3;
use log::debug;

use super::buffers::MeshBuffers;
use super::error::{Axis, MeshError};
use crate::surface::Surface;

/// Vertex counts past this no longer fit 16-bit indices.
pub const MAX_VERTICES: usize = 1 << 16;

/// What gets written into the texcoord buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UvMode {
    /// Grid fractions in `[0, 1]`.
    #[default]
    Normalized,
    /// The raw `(u, v)` parameter values.
    Domain,
}

/// Sampling resolution and parameter domain for one generation.
///
/// Granularities count subdivisions; the sampled grid has
/// `granularity + 1` points along each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub u_granularity: u32,
    pub v_granularity: u32,
    pub u_range: (f64, f64),
    pub v_range: (f64, f64),
    pub uv_mode: UvMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(50, 50)
    }
}

impl GridConfig {
    /// Grid over the unit domain `[0,1] x [0,1]`.
    pub fn new(u_granularity: u32, v_granularity: u32) -> Self {
        Self {
            u_granularity,
            v_granularity,
            u_range: (0.0, 1.0),
            v_range: (0.0, 1.0),
            uv_mode: UvMode::Normalized,
        }
    }

    pub fn with_u_range(mut self, min: f64, max: f64) -> Self {
        self.u_range = (min, max);
        self
    }

    pub fn with_v_range(mut self, min: f64, max: f64) -> Self {
        self.v_range = (min, max);
        self
    }

    pub fn with_uv_mode(mut self, mode: UvMode) -> Self {
        self.uv_mode = mode;
        self
    }

    pub fn u_count(&self) -> usize {
        self.u_granularity as usize + 1
    }

    pub fn v_count(&self) -> usize {
        self.v_granularity as usize + 1
    }

    pub fn vertex_count(&self) -> usize {
        self.u_count() * self.v_count()
    }

    pub(crate) fn validate(&self) -> Result<(), MeshError> {
        if self.u_granularity == 0 {
            return Err(MeshError::InvalidGranularity { axis: Axis::U });
        }
        if self.v_granularity == 0 {
            return Err(MeshError::InvalidGranularity { axis: Axis::V });
        }
        if !(self.u_range.1 > self.u_range.0) {
            return Err(MeshError::DegenerateDomain {
                axis: Axis::U,
                min: self.u_range.0,
                max: self.u_range.1,
            });
        }
        if !(self.v_range.1 > self.v_range.0) {
            return Err(MeshError::DegenerateDomain {
                axis: Axis::V,
                min: self.v_range.0,
                max: self.v_range.1,
            });
        }
        if self.vertex_count() > MAX_VERTICES {
            return Err(MeshError::IndexOverflow {
                vertex_count: self.vertex_count(),
                max: MAX_VERTICES,
            });
        }
        Ok(())
    }
}

/// Tessellates `surface` over the grid into triangle-list buffers with
/// smooth per-vertex normals.
pub fn tessellate(
    surface: &(impl Surface + ?Sized),
    grid: &GridConfig,
) -> Result<MeshBuffers, MeshError> {
    grid.validate()?;
    let (positions, texcoords) = sample_rows(surface, grid, 0..grid.v_count())?;
    Ok(assemble(positions, texcoords, grid))
}

/// Same output as [`tessellate`], with grid sampling split into row bands
/// across `threads` scoped worker threads.
pub fn tessellate_parallel(
    surface: &(impl Surface + Sync + ?Sized),
    grid: &GridConfig,
    threads: usize,
) -> Result<MeshBuffers, MeshError> {
    grid.validate()?;

    let v_count = grid.v_count();
    let threads = threads.clamp(1, v_count);
    let rows_per_band = v_count.div_ceil(threads);

    let sampled = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|band| {
                let start = band * rows_per_band;
                let end = (start + rows_per_band).min(v_count);
                scope.spawn(move || sample_rows(surface, grid, start..end))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("sampler thread panicked"))
            .collect::<Vec<_>>()
    });

    let mut positions = Vec::with_capacity(grid.vertex_count() * 3);
    let mut texcoords = Vec::with_capacity(grid.vertex_count() * 2);
    for band in sampled {
        let (p, t) = band?;
        positions.extend_from_slice(&p);
        texcoords.extend_from_slice(&t);
    }
    Ok(assemble(positions, texcoords, grid))
}

/// Samples positions and texcoords for the given row range, row-major.
pub(crate) fn sample_rows(
    surface: &(impl Surface + ?Sized),
    grid: &GridConfig,
    rows: Range<usize>,
) -> Result<(Vec<f32>, Vec<f32>), MeshError> {
    let u_count = grid.u_count();
    let (u_min, u_max) = grid.u_range;
    let (v_min, v_max) = grid.v_range;
    let u_gran = f64::from(grid.u_granularity);
    let v_gran = f64::from(grid.v_granularity);

    let row_count = rows.end.saturating_sub(rows.start);
    let mut positions = Vec::with_capacity(row_count * u_count * 3);
    let mut texcoords = Vec::with_capacity(row_count * u_count * 2);

    for i in rows {
        let row_frac = i as f64 / v_gran;
        let v = v_min + (v_max - v_min) * row_frac;
        for j in 0..u_count {
            let col_frac = j as f64 / u_gran;
            let u = u_min + (u_max - u_min) * col_frac;

            let p = surface.position(u, v).as_vec3();
            if !p.is_finite() {
                return Err(MeshError::NonFiniteSample { u, v });
            }
            positions.extend_from_slice(&[p.x, p.y, p.z]);

            let (s, t) = match grid.uv_mode {
                UvMode::Normalized => (col_frac, row_frac),
                UvMode::Domain => (u, v),
            };
            texcoords.extend_from_slice(&[s as f32, t as f32]);
        }
    }

    Ok((positions, texcoords))
}

fn assemble(positions: Vec<f32>, texcoords: Vec<f32>, grid: &GridConfig) -> MeshBuffers {
    let u_count = grid.u_count();
    let vertex_count = grid.vertex_count();

    let mut indices =
        Vec::with_capacity(grid.u_granularity as usize * grid.v_granularity as usize * 6);
    for i in 0..grid.v_granularity as usize {
        for j in 0..grid.u_granularity as usize {
            // tl  tr
            // bl  br
            let top_left = (i * u_count + j) as u16;
            let top_right = top_left + 1;
            let bottom_left = top_left + u_count as u16;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[
                top_left,
                top_right,
                bottom_right,
                top_left,
                bottom_right,
                bottom_left,
            ]);
        }
    }

    let position = |idx: usize| {
        Vec3::new(
            positions[idx * 3],
            positions[idx * 3 + 1],
            positions[idx * 3 + 2],
        )
    };

    // Face normals stay unnormalized while accumulating: larger and
    // wider-angled triangles weigh more in the per-vertex blend.
    let mut accumulated = vec![Vec3::ZERO; vertex_count];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (position(b) - position(a)).cross(position(c) - position(a));
        accumulated[a] += face;
        accumulated[b] += face;
        accumulated[c] += face;
    }

    let mut normals = Vec::with_capacity(vertex_count * 3);
    for n in accumulated {
        // zero accumulator means degenerate geometry; keep the zero vector
        let n = n.normalize_or_zero();
        normals.extend_from_slice(&[n.x, n.y, n.z]);
    }

    let triangle_count = indices.len() / 3;
    debug!("tessellated {vertex_count} vertices, {triangle_count} triangles");

    MeshBuffers {
        positions,
        texcoords,
        normals,
        indices,
        vertex_count,
        triangle_count,
    }
}
