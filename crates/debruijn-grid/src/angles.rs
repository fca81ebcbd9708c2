//! Angle sets for the line families.

use rand::Rng;
use std::f64::consts::{PI, TAU};

/// Smallest increment between consecutive random angles.
pub const MIN_RANDOM_STEP: f64 = 0.01;

/// Evenly spaced angles covering the full circle: `2π·i / dimensions`.
pub fn uniform_angles(dimensions: usize) -> Vec<f64> {
    (0..dimensions)
        .map(|i| TAU * i as f64 / dimensions as f64)
        .collect()
}

/// Randomized cumulative angles in `[0, π)`.
///
/// Starts at zero and keeps adding a uniform step drawn from
/// `(MIN_RANDOM_STEP, π / (divisions / 2))` until the running sum reaches π.
/// The number of families depends on the draws. Only half the circle is
/// covered, unlike [`uniform_angles`].
pub fn random_angles<R: Rng + ?Sized>(divisions: u32, rng: &mut R) -> Vec<f64> {
    let half = f64::from(divisions.max(1)) / 2.0;
    let max_step = (PI / half).max(MIN_RANDOM_STEP * 2.0);

    let mut angles = Vec::new();
    let mut theta = 0.0;
    while theta < PI {
        angles.push(theta);
        theta += rng.gen_range(MIN_RANDOM_STEP..max_step);
    }
    angles
}
