use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// GPU-visible vertex: position and flat face normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// A triangle mesh ready for upload: duplicated per-face vertices plus
/// a 16-bit index buffer.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append a convex planar face, fan-triangulated from its first corner.
    /// Corners must be ordered counter-clockwise seen from outside.
    pub(crate) fn push_face(&mut self, corners: &[Vec3], normal: Vec3) {
        let base = self.vertices.len() as u16;
        for corner in corners {
            self.vertices.push(Vertex {
                position: corner.to_array(),
                normal: normal.to_array(),
            });
        }
        for i in 1..corners.len() as u16 - 1 {
            self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_face_fan_triangulates() {
        let mut mesh = MeshData::default();
        let corners = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        mesh.push_face(&corners, Vec3::Z);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn push_face_offsets_indices() {
        let mut mesh = MeshData::default();
        let tri = [Vec3::ZERO, Vec3::X, Vec3::Y];
        mesh.push_face(&tri, Vec3::Z);
        mesh.push_face(&tri, Vec3::Z);
        assert_eq!(mesh.indices[3..], [3, 4, 5]);
    }
}
