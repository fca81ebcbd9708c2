//! Radial acceptance of cells.

use debruijn_core::{MultigridConfig, Rhomb};

/// Accepts cells whose corners all lie in an annulus around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceFilter {
    min_sq: f64,
    max_sq: f64,
}

impl DistanceFilter {
    pub fn new(min_distance: f64, max_distance: f64) -> Self {
        Self {
            min_sq: min_distance * min_distance,
            max_sq: max_distance * max_distance,
        }
    }

    pub fn from_config(config: &MultigridConfig) -> Self {
        Self::new(config.min_distance, config.max_distance)
    }

    /// Whether every corner satisfies `min² ≤ |c|² ≤ max²`.
    ///
    /// A single corner outside the annulus rejects the whole cell.
    pub fn accepts(&self, rhomb: &Rhomb) -> bool {
        rhomb.corners.iter().all(|corner| {
            let d = corner.length_squared();
            d >= self.min_sq && d <= self.max_sq
        })
    }
}
