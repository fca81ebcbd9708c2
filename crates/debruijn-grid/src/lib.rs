//! Multigrid construction for de Bruijn dual tilings.
//!
//! This crate provides the planar stages of the generator:
//! - Angle sets for the line families (evenly spaced or randomized)
//! - Pairwise line intersections across families
//! - The index-vector map between points and dual lattice vertices
//! - Reconstruction of the quadrilateral cell around each intersection
//! - Radial filtering and the color heuristic
//!
//! # Example
//!
//! ```ignore
//! use debruijn_grid::{uniform_angles, IntersectionEngine, reconstruct, CancellationToken};
//!
//! let angles = uniform_angles(5);
//! let engine = IntersectionEngine::new(&angles, 3, 0.2);
//! for intersection in engine.run(&CancellationToken::new())? {
//!     let rhomb = reconstruct(&intersection, &angles, 0.2)?;
//!     println!("{:?}", rhomb.corners);
//! }
//! ```

mod angles;
mod cancel;
mod color;
mod filter;
mod intersect;
mod lattice;
mod rhomb;

pub use angles::{random_angles, uniform_angles, MIN_RANDOM_STEP};
pub use cancel::CancellationToken;
pub use color::{ColorAssigner, ColorWeights};
pub use filter::DistanceFilter;
pub use intersect::{line_intersection, IntersectionEngine, Line, SEGMENT_HALF_LENGTH};
pub use lattice::{indices_from_point, vertex};
pub use rhomb::reconstruct;
