use crossbeam::channel::{self, Receiver, Sender};
use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::buffers::{MeshBuffers, WireframeBuffers};
use super::error::MeshError;
use super::tessellate::{GridConfig, tessellate};
use super::wireframe::wireframe;
use crate::surface::Surface;

type BoxedSurface = Box<dyn Surface + Send>;

pub enum MeshCommand {
    Tessellate {
        surface: BoxedSurface,
        grid: GridConfig,
    },
    Wireframe {
        surface: BoxedSurface,
        grid: GridConfig,
    },
    Stop,
}

pub enum MeshResult {
    Surface(MeshBuffers),
    Wireframe(WireframeBuffers),
    Error(MeshError),
}

/// Regenerates meshes on a worker thread so interactive callers can keep
/// their frame loop responsive while granularity or shape parameters
/// change.
pub struct MeshEngine {
    tx_cmd: Sender<MeshCommand>,
    rx_result: Receiver<MeshResult>,
    last_error: Arc<Mutex<Option<String>>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl MeshEngine {
    pub fn new() -> Self {
        let (tx_cmd, rx_cmd) = channel::unbounded::<MeshCommand>();
        let (tx_result, rx_result) = channel::bounded::<MeshResult>(2);
        let last_error = Arc::new(Mutex::new(None));
        let last_error_clone = Arc::clone(&last_error);

        let thread_handle = thread::spawn(move || {
            mesh_thread(rx_cmd, tx_result, last_error_clone);
        });

        Self {
            tx_cmd,
            rx_result,
            last_error,
            thread_handle: Some(thread_handle),
        }
    }

    pub fn tessellate(&self, surface: impl Surface + Send + 'static, grid: GridConfig) {
        let _ = self.tx_cmd.send(MeshCommand::Tessellate {
            surface: Box::new(surface),
            grid,
        });
    }

    pub fn wireframe(&self, surface: impl Surface + Send + 'static, grid: GridConfig) {
        let _ = self.tx_cmd.send(MeshCommand::Wireframe {
            surface: Box::new(surface),
            grid,
        });
    }

    pub fn try_recv_result(&self) -> Option<MeshResult> {
        self.rx_result.try_recv().ok()
    }

    pub fn recv_result_timeout(&self, timeout: Duration) -> Option<MeshResult> {
        self.rx_result.recv_timeout(timeout).ok()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    pub fn stop(&self) {
        let _ = self.tx_cmd.send(MeshCommand::Stop);
    }
}

impl Default for MeshEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MeshEngine {
    fn drop(&mut self) {
        let _ = self.tx_cmd.send(MeshCommand::Stop);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

fn mesh_thread(
    rx_cmd: Receiver<MeshCommand>,
    tx_result: Sender<MeshResult>,
    last_error: Arc<Mutex<Option<String>>>,
) {
    loop {
        let cmd = match rx_cmd.recv() {
            Ok(c) => c,
            Err(_) => return,
        };

        match cmd {
            MeshCommand::Tessellate { surface, grid } => {
                *last_error.lock() = None;

                match tessellate(surface.as_ref(), &grid) {
                    Ok(mesh) => {
                        let _ = tx_result.send(MeshResult::Surface(mesh));
                    }
                    Err(e) => {
                        debug!("tessellation failed: {e}");
                        *last_error.lock() = Some(e.to_string());
                        let _ = tx_result.send(MeshResult::Error(e));
                    }
                }
            }
            MeshCommand::Wireframe { surface, grid } => {
                *last_error.lock() = None;

                match wireframe(surface.as_ref(), &grid) {
                    Ok(wf) => {
                        let _ = tx_result.send(MeshResult::Wireframe(wf));
                    }
                    Err(e) => {
                        debug!("wireframe extraction failed: {e}");
                        *last_error.lock() = Some(e.to_string());
                        let _ = tx_result.send(MeshResult::Error(e));
                    }
                }
            }
            MeshCommand::Stop => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::error::Axis;
    use crate::surface::{Plane, TutteSurface};

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn tessellates_in_the_background() {
        let engine = MeshEngine::new();
        engine.tessellate(
            TutteSurface::default(),
            GridConfig::new(10, 99).with_v_range(-5.0, 5.0),
        );

        match engine.recv_result_timeout(WAIT) {
            Some(MeshResult::Surface(mesh)) => {
                assert_eq!(mesh.vertex_count, 11 * 100);
                assert_eq!(mesh.triangle_count, 10 * 99 * 2);
            }
            other => panic!("expected a surface mesh, got {}", kind(&other)),
        }
        assert_eq!(engine.last_error(), None);
    }

    #[test]
    fn wireframes_in_the_background() {
        let engine = MeshEngine::new();
        engine.wireframe(Plane, GridConfig::new(4, 4));

        match engine.recv_result_timeout(WAIT) {
            Some(MeshResult::Wireframe(wf)) => {
                assert_eq!(wf.vertex_count, 25);
                assert_eq!(wf.segment_count, 5 * 4 * 2);
            }
            other => panic!("expected a wireframe, got {}", kind(&other)),
        }
    }

    #[test]
    fn failures_surface_through_both_channels() {
        let engine = MeshEngine::new();
        engine.tessellate(Plane, GridConfig::new(0, 3));

        match engine.recv_result_timeout(WAIT) {
            Some(MeshResult::Error(e)) => {
                assert_eq!(e, MeshError::InvalidGranularity { axis: Axis::U });
            }
            other => panic!("expected an error, got {}", kind(&other)),
        }
        assert_eq!(engine.last_error(), Some(e_string()));

        // a later success clears the slot
        engine.tessellate(Plane, GridConfig::new(3, 3));
        assert!(matches!(
            engine.recv_result_timeout(WAIT),
            Some(MeshResult::Surface(_))
        ));
        assert_eq!(engine.last_error(), None);
    }

    #[test]
    fn stop_is_idempotent_and_drop_joins() {
        let engine = MeshEngine::new();
        engine.stop();
        engine.stop();
        drop(engine);
    }

    fn e_string() -> String {
        MeshError::InvalidGranularity { axis: Axis::U }.to_string()
    }

    fn kind(result: &Option<MeshResult>) -> &'static str {
        match result {
            Some(MeshResult::Surface(_)) => "surface",
            Some(MeshResult::Wireframe(_)) => "wireframe",
            Some(MeshResult::Error(_)) => "error",
            None => "timeout",
        }
    }
}
