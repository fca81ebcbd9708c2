//! Quad mesh container.

use debruijn_core::Role;
use glam::DVec3;

/// A mesh of quadrilateral faces lying on the y = 0 plane.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolyMesh {
    pub vertices: Vec<DVec3>,
    /// Four vertex indices per face.
    pub faces: Vec<[usize; 4]>,
    /// One role per face.
    pub face_roles: Vec<Role>,
    /// One role per vertex.
    pub vertex_roles: Vec<Role>,
}

impl PolyMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }

    /// Split every quad into two triangles, keeping the face winding.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.faces
            .iter()
            .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
    }
}
