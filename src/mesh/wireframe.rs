use log::debug;

use super::buffers::WireframeBuffers;
use super::error::MeshError;
use super::tessellate::{GridConfig, sample_rows};
use crate::surface::Surface;

/// Samples the same grid as [`tessellate`](super::tessellate) but emits a
/// line-list index buffer instead of triangles: one segment per horizontal
/// neighbor pair and one per vertical neighbor pair.
pub fn wireframe(
    surface: &(impl Surface + ?Sized),
    grid: &GridConfig,
) -> Result<WireframeBuffers, MeshError> {
    grid.validate()?;
    let (positions, _) = sample_rows(surface, grid, 0..grid.v_count())?;

    let u_count = grid.u_count();
    let v_count = grid.v_count();
    let u_gran = grid.u_granularity as usize;
    let v_gran = grid.v_granularity as usize;

    let mut indices = Vec::with_capacity((v_count * u_gran + u_count * v_gran) * 2);
    for i in 0..v_count {
        for j in 0..u_gran {
            let at = (i * u_count + j) as u16;
            indices.extend_from_slice(&[at, at + 1]);
        }
    }
    for i in 0..v_gran {
        for j in 0..u_count {
            let at = (i * u_count + j) as u16;
            indices.extend_from_slice(&[at, at + u_count as u16]);
        }
    }

    let vertex_count = grid.vertex_count();
    let segment_count = indices.len() / 2;
    debug!("extracted wireframe: {vertex_count} vertices, {segment_count} segments");

    Ok(WireframeBuffers {
        positions,
        indices,
        vertex_count,
        segment_count,
    })
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::mesh::error::Axis;
    use crate::surface::Plane;

    #[test]
    fn segment_counts_match_the_grid() {
        let grid = GridConfig::new(3, 2);
        let wf = wireframe(&Plane, &grid).unwrap();

        // 3 rows of 3 horizontal segments, 2 columns-worth of 4 vertical ones
        assert_eq!(wf.vertex_count, 4 * 3);
        assert_eq!(wf.segment_count, 3 * 3 + 4 * 2);
        assert_eq!(wf.indices.len(), wf.segment_count * 2);
        assert_eq!(wf.positions.len(), wf.vertex_count * 3);
    }

    #[test]
    fn indices_stay_in_range() {
        let wf = wireframe(&Plane, &GridConfig::new(5, 7)).unwrap();
        for &idx in &wf.indices {
            assert!((idx as usize) < wf.vertex_count);
        }
    }

    #[test]
    fn minimal_grid_outlines_the_quad() {
        let wf = wireframe(&Plane, &GridConfig::new(1, 1)).unwrap();

        assert_eq!(wf.vertex_count, 4);
        assert_eq!(wf.indices, vec![0, 1, 2, 3, 0, 2, 1, 3]);
    }

    #[test]
    fn shares_the_mesh_error_taxonomy() {
        let err = wireframe(&Plane, &GridConfig::new(0, 1)).unwrap_err();
        assert_eq!(err, MeshError::InvalidGranularity { axis: Axis::U });

        let pole = |u: f64, v: f64| DVec3::new(u, v, (u - 0.5).ln());
        assert!(matches!(
            wireframe(&pole, &GridConfig::new(2, 2)).unwrap_err(),
            MeshError::NonFiniteSample { .. }
        ));
    }
}
