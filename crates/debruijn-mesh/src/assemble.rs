//! Assembly of accepted cells into a quad mesh.

use crate::mesh::PolyMesh;
use debruijn_core::{Rhomb, Role};
use glam::{DVec2, DVec3};
use indexmap::IndexSet;
use tracing::debug;

/// Quartile role of each color after normalizing by the global range.
///
/// A constant color list maps every face to the first bucket.
pub fn color_roles(colors: &[f64]) -> Vec<Role> {
    let (min, max) = colors
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &c| {
            (lo.min(c), hi.max(c))
        });
    let range = max - min;

    colors
        .iter()
        .map(|&c| {
            let normalized = if range > 0.0 && range.is_finite() {
                (c - min) / range
            } else {
                0.0
            };
            let bucket = (normalized * 4.0).floor().clamp(0.0, 3.0) as usize;
            Role::from_bucket(bucket)
        })
        .collect()
}

/// Build a quad mesh from cells and their parallel color list.
///
/// With `shared_vertices`, corners at exactly the same coordinate collapse
/// into one vertex; otherwise each face gets four vertices of its own.
/// Faces are wound so that every quad faces the same way.
pub fn assemble(shapes: &[Rhomb], colors: &[f64], shared_vertices: bool) -> PolyMesh {
    debug_assert_eq!(shapes.len(), colors.len());

    let mut mesh = PolyMesh {
        vertices: Vec::with_capacity(shapes.len() * 4),
        faces: Vec::with_capacity(shapes.len()),
        face_roles: color_roles(colors),
        vertex_roles: Vec::new(),
    };
    let mut seen: IndexSet<[u64; 2]> = IndexSet::new();

    for shape in shapes {
        let c = &shape.corners;
        let order = if (c[1] - c[0]).perp_dot(c[2] - c[0]) < 0.0 {
            [0, 1, 2, 3]
        } else {
            [3, 2, 1, 0]
        };

        let mut face = [0usize; 4];
        for (slot, corner) in face.iter_mut().zip(order) {
            let point = c[corner];
            *slot = if shared_vertices {
                let (index, inserted) = seen.insert_full(coordinate_key(point));
                if inserted {
                    mesh.vertices.push(to_plane(point));
                }
                index
            } else {
                mesh.vertices.push(to_plane(point));
                mesh.vertices.len() - 1
            };
        }
        mesh.faces.push(face);
    }

    mesh.vertex_roles = vec![Role::New; mesh.vertices.len()];

    debug!(
        faces = mesh.faces.len(),
        vertices = mesh.vertices.len(),
        shared_vertices,
        "Assembled mesh"
    );
    mesh
}

/// Exact-value key of a coordinate, with negative zero folded onto zero.
fn coordinate_key(point: DVec2) -> [u64; 2] {
    let fold = |v: f64| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
    [fold(point.x), fold(point.y)]
}

fn to_plane(point: DVec2) -> DVec3 {
    DVec3::new(point.x, 0.0, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(origin: DVec2, ccw: bool) -> Rhomb {
        let mut corners = [
            origin + DVec2::new(1.0, 1.0),
            origin + DVec2::new(0.0, 1.0),
            origin,
            origin + DVec2::new(1.0, 0.0),
        ];
        if !ccw {
            corners.reverse();
        }
        Rhomb {
            corners,
            line1: 0,
            line2: 1,
            parallel1: 0,
            parallel2: 0,
        }
    }

    fn face_normal_y(mesh: &PolyMesh, face: usize) -> f64 {
        let [a, b, c, _] = mesh.faces[face];
        let v = &mesh.vertices;
        (v[b] - v[a]).cross(v[c] - v[a]).y
    }

    #[test]
    fn test_color_roles_quartiles() {
        let roles = color_roles(&[0.0, 0.3, 0.6, 1.0, 0.5]);
        assert_eq!(
            roles,
            vec![Role::Ignored, Role::Existing, Role::New, Role::NewAlt, Role::New]
        );
    }

    #[test]
    fn test_color_roles_constant() {
        assert_eq!(color_roles(&[0.7, 0.7]), vec![Role::Ignored, Role::Ignored]);
        assert!(color_roles(&[]).is_empty());
    }

    #[test]
    fn test_unshared_vertices() {
        let shapes = [cell(DVec2::ZERO, true), cell(DVec2::new(1.0, 0.0), true)];
        let mesh = assemble(&shapes, &[0.0, 1.0], false);

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.faces, vec![[0, 1, 2, 3], [4, 5, 6, 7]]);
        // Counter-clockwise cells are emitted in reverse corner order.
        assert_eq!(mesh.vertices[0], DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.vertices[3], DVec3::new(1.0, 0.0, 1.0));
        assert_eq!(mesh.vertex_roles, vec![Role::New; 8]);
        assert_eq!(mesh.face_roles, vec![Role::Ignored, Role::NewAlt]);
    }

    #[test]
    fn test_shared_vertices() {
        let shapes = [cell(DVec2::ZERO, true), cell(DVec2::new(1.0, 0.0), true)];
        let mesh = assemble(&shapes, &[0.0, 1.0], true);

        // Two unit squares side by side share an edge.
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.face_count(), 2);
        assert!(mesh.faces.iter().flatten().all(|&i| i < 6));
        assert_eq!(mesh.vertex_roles.len(), 6);
    }

    #[test]
    fn test_negative_zero_shared() {
        let mut a = cell(DVec2::ZERO, true);
        a.corners[2] = DVec2::new(-0.0, 0.0);
        let b = cell(DVec2::new(-1.0, 0.0), true);
        let mesh = assemble(&[a, b], &[0.0, 0.0], true);
        assert_eq!(mesh.vertex_count(), 6);
    }

    #[test]
    fn test_consistent_winding() {
        let shapes = [cell(DVec2::ZERO, true), cell(DVec2::new(3.0, 0.0), false)];
        let mesh = assemble(&shapes, &[0.2, 0.4], false);

        let first = face_normal_y(&mesh, 0);
        let second = face_normal_y(&mesh, 1);
        assert!(first != 0.0);
        assert_eq!(first.signum(), second.signum());
    }

    #[test]
    fn test_empty_input() {
        let mesh = assemble(&[], &[], true);
        assert!(mesh.is_empty());
        assert!(mesh.vertices.is_empty());
        assert!(mesh.face_roles.is_empty());
        assert!(mesh.vertex_roles.is_empty());
    }
}
