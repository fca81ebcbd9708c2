//! Heuristic color scalar for cells.

use debruijn_core::{MultigridConfig, Rhomb};

/// Weights of the three color metrics, each roughly in `[-1, 1]`.
///
/// A positive weight darkens cells where the metric is high; a negative
/// weight darkens cells where it is low.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorWeights {
    pub ratio: f64,
    pub intersect: f64,
    pub index: f64,
}

/// Computes the color scalar of each accepted cell.
#[derive(Debug, Clone, Copy)]
pub struct ColorAssigner {
    weights: ColorWeights,
    divisions: f64,
    dimensions: f64,
}

impl ColorAssigner {
    pub fn new(weights: ColorWeights, divisions: u32, dimensions: usize) -> Self {
        Self {
            weights,
            divisions: f64::from(divisions),
            dimensions: dimensions as f64,
        }
    }

    pub fn from_config(config: &MultigridConfig) -> Self {
        let weights = ColorWeights {
            ratio: config.color_ratio,
            intersect: config.color_intersect,
            index: config.color_index,
        };
        Self::new(weights, config.divisions, config.dimensions)
    }

    /// Ratio of the shorter diagonal to the longer one.
    pub fn shape_ratio(rhomb: &Rhomb) -> f64 {
        let (w1, w2) = rhomb.diagonals();
        w1.min(w2) / w1.max(w2)
    }

    /// Average relative line position of the source intersection.
    pub fn intersect_ratio(&self, rhomb: &Rhomb) -> f64 {
        (f64::from(rhomb.parallel1) + f64::from(rhomb.parallel2)) / (2.0 * self.dimensions)
    }

    /// Falls towards zero for intersections near the edge of the arrangement.
    pub fn index_ratio(&self, rhomb: &Rhomb) -> f64 {
        let p1 = f64::from(rhomb.parallel1);
        let p2 = f64::from(rhomb.parallel2);
        (1.0 - (p1 / self.divisions / 2.0).abs()) * (1.0 - (p2 / self.divisions / 2.0).abs())
    }

    /// Color scalar of a cell; NaN results become zero.
    pub fn color(&self, rhomb: &Rhomb) -> f64 {
        let metrics = [
            (Self::shape_ratio(rhomb), self.weights.ratio),
            (self.intersect_ratio(rhomb), self.weights.intersect),
            (self.index_ratio(rhomb), self.weights.index),
        ];

        let gradient = metrics
            .iter()
            .fold(1.0, |g, &(metric, weight)| g * blend(metric, weight));

        if gradient.is_nan() {
            0.0
        } else {
            gradient
        }
    }
}

fn blend(metric: f64, weight: f64) -> f64 {
    if weight >= 0.0 {
        1.0 - metric * weight
    } else {
        1.0 - (1.0 - metric) * weight.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn rhomb(w: f64, h: f64, parallel1: i32, parallel2: i32) -> Rhomb {
        Rhomb {
            corners: [
                DVec2::new(w, 0.0),
                DVec2::new(0.0, h),
                DVec2::new(-w, 0.0),
                DVec2::new(0.0, -h),
            ],
            line1: 0,
            line2: 1,
            parallel1,
            parallel2,
        }
    }

    fn assigner(ratio: f64, intersect: f64, index: f64) -> ColorAssigner {
        ColorAssigner::new(ColorWeights { ratio, intersect, index }, 4, 5)
    }

    #[test]
    fn test_shape_ratio() {
        assert_relative_eq!(ColorAssigner::shape_ratio(&rhomb(1.0, 1.0, 0, 0)), 1.0);
        assert_relative_eq!(ColorAssigner::shape_ratio(&rhomb(2.0, 1.0, 0, 0)), 0.5);
        assert_relative_eq!(ColorAssigner::shape_ratio(&rhomb(1.0, 4.0, 0, 0)), 0.25);
    }

    #[test]
    fn test_position_metrics() {
        let a = assigner(0.0, 0.0, 0.0);
        let r = rhomb(1.0, 1.0, 2, 3);
        assert_relative_eq!(a.intersect_ratio(&r), 0.5);
        assert_relative_eq!(a.index_ratio(&r), 0.75 * 0.625);
    }

    #[test]
    fn test_extreme_line_indices() {
        let a = assigner(0.0, 0.0, 0.0);
        let r = rhomb(1.0, 1.0, i32::MAX, i32::MAX);
        assert_relative_eq!(a.intersect_ratio(&r), f64::from(i32::MAX) / 5.0);
    }

    #[test]
    fn test_zero_weights_give_one() {
        let a = assigner(0.0, 0.0, 0.0);
        assert_relative_eq!(a.color(&rhomb(2.0, 1.0, 1, -3)), 1.0);
    }

    #[test]
    fn test_ratio_weight_signs() {
        let r = rhomb(2.0, 1.0, 0, 0);
        assert_relative_eq!(assigner(1.0, 0.0, 0.0).color(&r), 0.5);
        assert_relative_eq!(assigner(0.5, 0.0, 0.0).color(&r), 0.75);
        assert_relative_eq!(assigner(-1.0, 0.0, 0.0).color(&r), 0.5);
        assert_relative_eq!(assigner(-0.5, 0.0, 0.0).color(&r), 0.75);

        let square = rhomb(1.0, 1.0, 0, 0);
        assert_relative_eq!(assigner(1.0, 0.0, 0.0).color(&square), 0.0);
        assert_relative_eq!(assigner(-1.0, 0.0, 0.0).color(&square), 1.0);
    }

    #[test]
    fn test_factors_multiply() {
        // shape 0.5, intersect (2 + 3) / 10 = 0.5, index 0.75 * 0.625
        let r = rhomb(2.0, 1.0, 2, 3);
        let a = assigner(1.0, 1.0, -1.0);
        let expected = (1.0 - 0.5) * (1.0 - 0.5) * (1.0 - (1.0 - 0.75 * 0.625));
        assert_relative_eq!(a.color(&r), expected);
    }

    #[test]
    fn test_degenerate_diagonal_is_zero() {
        let collapsed = rhomb(0.0, 0.0, 0, 0);
        assert_eq!(assigner(1.0, 0.0, 0.0).color(&collapsed), 0.0);
    }

    #[test]
    fn test_zero_divisions_is_zero() {
        let a = ColorAssigner::new(ColorWeights::default(), 0, 5);
        assert_eq!(a.color(&rhomb(1.0, 2.0, 0, 0)), 0.0);
    }
}
