//! The map between plane points and dual lattice index vectors.

use debruijn_core::{DualMapError, IndexVector};
use glam::DVec2;
use tracing::error;

/// Integer cell coordinates of `point`, one component per family.
///
/// Component `i` is `floor(x·sin θᵢ + y·cos θᵢ − offset + 1)`: the strip of
/// family `i` the point falls in.
pub fn indices_from_point(point: DVec2, angles: &[f64], offset: f64) -> IndexVector {
    angles
        .iter()
        .map(|&theta| {
            let (sin, cos) = theta.sin_cos();
            (point.x * sin + point.y * cos - offset + 1.0).floor() as i64
        })
        .collect()
}

/// Dual lattice vertex of an index vector: `Σ kᵢ (cos θᵢ, sin θᵢ)`.
///
/// Empty inputs and mismatched lengths are caller errors.
pub fn vertex(indices: &[i64], angles: &[f64]) -> Result<DVec2, DualMapError> {
    if indices.is_empty() {
        error!("Dual map called with an empty index vector");
        return Err(DualMapError::EmptyIndices);
    }
    if angles.is_empty() {
        error!("Dual map called with an empty angle set");
        return Err(DualMapError::EmptyAngles);
    }
    if indices.len() != angles.len() {
        error!(
            indices = indices.len(),
            angles = angles.len(),
            "Dual map called with mismatched lengths"
        );
        return Err(DualMapError::LengthMismatch {
            indices: indices.len(),
            angles: angles.len(),
        });
    }

    Ok(indices
        .iter()
        .zip(angles)
        .map(|(&k, &theta)| {
            let (sin, cos) = theta.sin_cos();
            DVec2::new(cos, sin) * k as f64
        })
        .sum())
}
