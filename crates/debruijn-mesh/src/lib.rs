//! Quad mesh assembly for multigrid tilings.
//!
//! Converts accepted cells and their color scalars into the
//! `(vertices, faces, face roles, vertex roles)` form consumed by polygon
//! mesh containers.

mod assemble;
mod mesh;

pub use assemble::{assemble, color_roles};
pub use mesh::PolyMesh;
