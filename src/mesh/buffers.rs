/// Output of a surface tessellation: flat attribute buffers plus a 16-bit
/// triangle-list index buffer, laid out for direct vertex/index buffer
/// upload.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBuffers {
    /// 3 floats per vertex.
    pub positions: Vec<f32>,
    /// 2 floats per vertex.
    pub texcoords: Vec<f32>,
    /// 3 floats per vertex; unit length, or zero for degenerate vertices.
    pub normals: Vec<f32>,
    /// 3 indices per triangle.
    pub indices: Vec<u16>,
    pub vertex_count: usize,
    pub triangle_count: usize,
}

impl MeshBuffers {
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn texcoord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texcoords)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Output of a wireframe extraction: positions plus a 16-bit line-list
/// index buffer, two indices per segment.
#[derive(Clone, Debug, PartialEq)]
pub struct WireframeBuffers {
    pub positions: Vec<f32>,
    pub indices: Vec<u16>,
    pub vertex_count: usize,
    pub segment_count: usize,
}

impl WireframeBuffers {
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_views_cover_the_buffers() {
        let mesh = MeshBuffers {
            positions: vec![0.0; 12],
            texcoords: vec![0.0; 8],
            normals: vec![0.0; 12],
            indices: vec![0, 1, 3, 0, 3, 2],
            vertex_count: 4,
            triangle_count: 2,
        };

        assert_eq!(mesh.position_bytes().len(), 12 * 4);
        assert_eq!(mesh.texcoord_bytes().len(), 8 * 4);
        assert_eq!(mesh.normal_bytes().len(), 12 * 4);
        assert_eq!(mesh.index_bytes().len(), 6 * 2);
    }
}
