//! de Bruijn multigrid tiling generator.
//!
//! Several families of evenly spaced parallel lines are laid over the plane.
//! Every crossing of two lines becomes one quadrilateral cell of the dual
//! tiling, found by mapping the crossing's strip coordinates back to a
//! lattice point. Cells are filtered to an annulus, given a heuristic color
//! scalar, and assembled into a quad mesh.
//!
//! # Pipeline Overview
//!
//! 1. **Angles**: one direction per line family, evenly spaced or random
//! 2. **Intersections**: every line pair across two families
//! 3. **Reconstruction**: the four lattice corners around each crossing
//! 4. **Filtering**: radial annulus on the scaled corners
//! 5. **Coloring**: a heuristic scalar per cell
//! 6. **Assembly**: a quad mesh with per-face color roles
//!
//! # Example
//!
//! ```
//! use debruijn::{MultiGrid, MultigridConfig};
//!
//! let config = MultigridConfig::new(4, 5)
//!     .with_offset(0.2)
//!     .with_distance(0.0, 1000.0);
//! let tiling = MultiGrid::new(config)?.build(true, false)?;
//!
//! assert_eq!(tiling.mesh.face_count(), tiling.shapes.len());
//! # Ok::<(), debruijn::MultigridError>(())
//! ```

mod builder;

pub use builder::{BuildStats, MultiGrid, Tiling};

pub use debruijn_core::{
    ConfigError, DualMapError, Intersection, MultigridConfig, MultigridError, Result, Rhomb, Role,
    WorkBudget, MAX_DIVISIONS,
};
pub use debruijn_grid::{
    indices_from_point, random_angles, uniform_angles, vertex, CancellationToken,
};
pub use debruijn_mesh::PolyMesh;

pub use glam::{DVec2, DVec3};
