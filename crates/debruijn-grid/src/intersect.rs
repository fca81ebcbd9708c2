//! Pairwise intersections between line families.

use crate::cancel::CancellationToken;
use debruijn_core::{ConfigError, Intersection, MultigridError, MAX_DIVISIONS};
use glam::DVec2;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Half length of the canonical segment each family line is built from.
///
/// Intersections are solved on the infinite lines through the segments, so
/// the length only has to keep the direction well conditioned.
pub const SEGMENT_HALF_LENGTH: f64 = 1000.0;

/// A line given by two points on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: DVec2,
    pub end: DVec2,
}

impl Line {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Line of the family at `angle` whose signed distance from the origin
    /// along the family normal `(sin θ, cos θ)` is `position`.
    pub fn in_family(angle: f64, position: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let normal = DVec2::new(sin, cos);
        let direction = DVec2::new(cos, -sin) * SEGMENT_HALF_LENGTH;
        let shift = normal * position;
        Self {
            start: shift - direction,
            end: shift + direction,
        }
    }
}

/// Intersection point of two lines, or `None` when they are parallel or coincident.
///
/// Only an exactly zero determinant counts as parallel.
pub fn line_intersection(a: &Line, b: &Line) -> Option<DVec2> {
    let tmp = (b.end.x - b.start.x) * (a.end.y - a.start.y)
        - (b.end.y - b.start.y) * (a.end.x - a.start.x);
    if tmp == 0.0 {
        return None;
    }

    let mu = ((a.start.x - b.start.x) * (a.end.y - a.start.y)
        - (a.start.y - b.start.y) * (a.end.x - a.start.x))
        / tmp;

    Some(b.start + (b.end - b.start) * mu)
}

/// Enumerates every crossing between lines of different families.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionEngine<'a> {
    angles: &'a [f64],
    divisions: u32,
    offset: f64,
}

impl<'a> IntersectionEngine<'a> {
    pub fn new(angles: &'a [f64], divisions: u32, offset: f64) -> Self {
        Self {
            angles,
            divisions,
            offset,
        }
    }

    /// Number of candidate line pairs: `C(n, 2) · (2·divisions + 1)²`.
    ///
    /// This is also the number of intersections when no two families are parallel.
    pub fn candidate_count(&self) -> u64 {
        let n = self.angles.len() as u64;
        let family_pairs = n * n.saturating_sub(1) / 2;
        let lines = 2 * u64::from(self.divisions) + 1;
        family_pairs.saturating_mul(lines.saturating_mul(lines))
    }

    /// Ordered family pairs `(i, k)` with `i < k`.
    pub fn family_pairs(&self) -> Vec<(usize, usize)> {
        let n = self.angles.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |k| (i, k)))
            .collect()
    }

    /// Largest line index in each family.
    fn half_width(&self) -> Result<i32, ConfigError> {
        match i32::try_from(self.divisions) {
            Ok(d) if self.divisions <= MAX_DIVISIONS => Ok(d),
            _ => Err(ConfigError::TooManyDivisions {
                divisions: self.divisions,
                max: MAX_DIVISIONS,
            }),
        }
    }

    /// All intersections between families `i` and `k`, ordered by line index.
    ///
    /// Fails when `divisions` is above [`MAX_DIVISIONS`].
    pub fn pair(&self, i: usize, k: usize) -> Result<Vec<Intersection>, ConfigError> {
        let d = self.half_width()?;
        let lines_k: Vec<Line> = (-d..=d)
            .map(|q| Line::in_family(self.angles[k], f64::from(q) + self.offset))
            .collect();

        let mut found = Vec::with_capacity(lines_k.len() * lines_k.len());
        for p in -d..=d {
            let line_i = Line::in_family(self.angles[i], f64::from(p) + self.offset);
            for (q, line_k) in (-d..=d).zip(&lines_k) {
                if let Some(point) = line_intersection(&line_i, line_k) {
                    found.push(Intersection {
                        point,
                        line1: i,
                        line2: k,
                        parallel1: p,
                        parallel2: q,
                    });
                }
            }
        }
        Ok(found)
    }

    /// Intersections for every family pair, in `(i, k, p, q)` order.
    ///
    /// Family pairs run in parallel when the `parallel` feature is enabled;
    /// the merged order is the same either way.
    pub fn run(&self, token: &CancellationToken) -> Result<Vec<Intersection>, MultigridError> {
        let pairs = self.family_pairs();

        let solve = |&(i, k): &(usize, usize)| {
            if token.is_cancelled() {
                return Err(MultigridError::Cancelled);
            }
            self.pair(i, k).map_err(MultigridError::from)
        };

        #[cfg(feature = "parallel")]
        let per_pair: Vec<Vec<Intersection>> =
            pairs.par_iter().map(solve).collect::<Result<_, _>>()?;
        #[cfg(not(feature = "parallel"))]
        let per_pair: Vec<Vec<Intersection>> =
            pairs.iter().map(solve).collect::<Result<_, _>>()?;

        let intersections: Vec<Intersection> = per_pair.into_iter().flatten().collect();
        debug!(
            family_pairs = pairs.len(),
            intersections = intersections.len(),
            skipped = self.candidate_count() - intersections.len() as u64,
            "Computed family intersections"
        );
        Ok(intersections)
    }
}
