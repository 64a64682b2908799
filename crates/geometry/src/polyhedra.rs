use crate::mesh::MeshData;
use glam::Vec3;

/// Golden ratio, the edge constant of both solids.
const PHI: f32 = 1.618_034;

/// The 12 icosahedron vertices before normalization: cyclic permutations
/// of (0, ±1, ±PHI).
#[rustfmt::skip]
const ICO_VERTS: [[f32; 3]; 12] = [
    [-1.0,  PHI,  0.0],
    [ 1.0,  PHI,  0.0],
    [-1.0, -PHI,  0.0],
    [ 1.0, -PHI,  0.0],
    [ 0.0, -1.0,  PHI],
    [ 0.0,  1.0,  PHI],
    [ 0.0, -1.0, -PHI],
    [ 0.0,  1.0, -PHI],
    [ PHI,  0.0, -1.0],
    [ PHI,  0.0,  1.0],
    [-PHI,  0.0, -1.0],
    [-PHI,  0.0,  1.0],
];

/// The 20 triangular faces, counter-clockwise seen from outside.
#[rustfmt::skip]
const ICO_FACES: [[usize; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

fn ico_corners() -> [Vec3; 12] {
    ICO_VERTS.map(|v| Vec3::from_array(v).normalize())
}

/// Regular icosahedron with unit circumradius and flat face normals.
pub fn icosahedron() -> MeshData {
    let corners = ico_corners();
    let mut mesh = MeshData::default();
    for [a, b, c] in ICO_FACES {
        let face = [corners[a], corners[b], corners[c]];
        let normal = (face[1] - face[0]).cross(face[2] - face[0]).normalize();
        mesh.push_face(&face, normal);
    }
    mesh
}

/// Regular dodecahedron with unit circumradius and flat face normals.
///
/// Built as the dual of the icosahedron: one pentagonal face per icosahedron
/// vertex, with corners at the normalized centroids of the five triangles
/// meeting at that vertex.
pub fn dodecahedron() -> MeshData {
    let corners = ico_corners();
    let mut mesh = MeshData::default();
    for (vertex, corner) in corners.iter().enumerate() {
        let axis = corner.normalize();
        let mut pentagon: Vec<Vec3> = ICO_FACES
            .iter()
            .filter(|face| face.contains(&vertex))
            .map(|&[a, b, c]| ((corners[a] + corners[b] + corners[c]) / 3.0).normalize())
            .collect();

        // Order the five corners counter-clockwise around the face axis.
        let flatten = |p: Vec3| p - axis * p.dot(axis);
        let basis = flatten(pentagon[0]).normalize();
        pentagon.sort_by(|&p, &q| {
            let angle = |p: Vec3| {
                let flat = flatten(p);
                axis.dot(basis.cross(flat)).atan2(basis.dot(flat))
            };
            angle(p).total_cmp(&angle(q))
        });

        mesh.push_face(&pentagon, axis);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn icosahedron_counts() {
        let mesh = icosahedron();
        // 20 faces, 3 duplicated vertices each
        assert_eq!(mesh.vertices.len(), 60);
        assert_eq!(mesh.triangle_count(), 20);
    }

    #[test]
    fn dodecahedron_counts() {
        let mesh = dodecahedron();
        // 12 pentagons, 5 duplicated vertices and 3 fan triangles each
        assert_eq!(mesh.vertices.len(), 60);
        assert_eq!(mesh.triangle_count(), 36);
    }

    #[test]
    fn positions_on_unit_circumsphere() {
        for mesh in [icosahedron(), dodecahedron()] {
            for v in &mesh.vertices {
                let len = Vec3::from_array(v.position).length();
                assert!((len - 1.0).abs() < EPS, "vertex off circumsphere: {len}");
            }
        }
    }

    #[test]
    fn normals_unit_length_and_outward() {
        for mesh in [icosahedron(), dodecahedron()] {
            for tri in mesh.indices.chunks(3) {
                let [a, b, c] = [
                    Vec3::from_array(mesh.vertices[tri[0] as usize].position),
                    Vec3::from_array(mesh.vertices[tri[1] as usize].position),
                    Vec3::from_array(mesh.vertices[tri[2] as usize].position),
                ];
                let normal = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
                assert!((normal.length() - 1.0).abs() < EPS);
                // Outward: the normal leaves the solid through the face.
                let centroid = (a + b + c) / 3.0;
                assert!(normal.dot(centroid) > 0.0);
            }
        }
    }

    #[test]
    fn winding_matches_stored_normal() {
        for mesh in [icosahedron(), dodecahedron()] {
            for tri in mesh.indices.chunks(3) {
                let [a, b, c] = [
                    Vec3::from_array(mesh.vertices[tri[0] as usize].position),
                    Vec3::from_array(mesh.vertices[tri[1] as usize].position),
                    Vec3::from_array(mesh.vertices[tri[2] as usize].position),
                ];
                let face = (b - a).cross(c - a).normalize();
                let stored = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
                assert!(face.dot(stored) > 0.99, "winding disagrees with normal");
            }
        }
    }

    #[test]
    fn dodecahedron_faces_are_planar() {
        let mesh = dodecahedron();
        // All five corners of a pentagon share the same height along its axis.
        for face in mesh.vertices.chunks(5) {
            let axis = Vec3::from_array(face[0].normal);
            let height = axis.dot(Vec3::from_array(face[0].position));
            for v in face {
                let h = axis.dot(Vec3::from_array(v.position));
                assert!((h - height).abs() < EPS);
            }
        }
    }
}
