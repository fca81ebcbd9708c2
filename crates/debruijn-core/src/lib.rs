//! Core types, configuration, and errors for the de Bruijn multigrid tiling generator.
//!
//! This crate provides the foundational types used across the other debruijn crates:
//! - Generator configuration ([`MultigridConfig`], [`WorkBudget`])
//! - Value types for intersections, rhombic cells, and mesh roles
//! - Error types

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
