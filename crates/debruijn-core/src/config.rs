//! Generator configuration.

use crate::errors::ConfigError;

/// Largest accepted `divisions`.
///
/// Line indices are stored as `i32`, and the sum of two indices must fit as well.
pub const MAX_DIVISIONS: u32 = i32::MAX as u32 / 2;

/// Configuration for a multigrid tiling build.
///
/// All parameters are plain values; a build is a pure function of the
/// configuration plus the angle mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MultigridConfig {
    /// Half-count of parallel lines per family (each family has `2 * divisions + 1` lines).
    pub divisions: u32,
    /// Number of line families (angular directions).
    pub dimensions: usize,
    /// Uniform shift applied to every family's line positions.
    pub offset: f64,
    /// Inner radius of the acceptance annulus, measured after scaling.
    pub min_distance: f64,
    /// Outer radius of the acceptance annulus, measured after scaling.
    pub max_distance: f64,
    /// Weight of the diagonal aspect ratio in the color heuristic.
    pub color_ratio: f64,
    /// Weight of the lattice-offset magnitude in the color heuristic.
    pub color_index: f64,
    /// Weight of the relative intersection position in the color heuristic.
    pub color_intersect: f64,
    /// Uniform scale applied to shape corners before filtering and output.
    pub scale: f64,
    /// Upper bound on the work a single build may do.
    pub budget: WorkBudget,
}

impl Default for MultigridConfig {
    fn default() -> Self {
        Self {
            divisions: 5,
            dimensions: 5,
            offset: 0.2,
            min_distance: 0.0,
            max_distance: 30.0,
            color_ratio: 1.0,
            color_index: 0.0,
            color_intersect: 0.0,
            scale: 1.0,
            budget: WorkBudget::default(),
        }
    }
}

impl MultigridConfig {
    /// Create a configuration with the given grid size and defaults for everything else.
    pub fn new(divisions: u32, dimensions: usize) -> Self {
        Self {
            divisions,
            dimensions,
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the radial acceptance annulus.
    pub fn with_distance(mut self, min: f64, max: f64) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Set the three color heuristic weights.
    pub fn with_color_weights(mut self, ratio: f64, index: f64, intersect: f64) -> Self {
        self.color_ratio = ratio;
        self.color_index = index;
        self.color_intersect = intersect;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_budget(mut self, budget: WorkBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Check that every parameter is usable.
    ///
    /// Too few families simply yield an empty tiling, and non-generic offsets
    /// are tolerated. `divisions` is bounded by [`MAX_DIVISIONS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divisions > MAX_DIVISIONS {
            return Err(ConfigError::TooManyDivisions {
                divisions: self.divisions,
                max: MAX_DIVISIONS,
            });
        }

        let fields = [
            ("offset", self.offset),
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
            ("color_ratio", self.color_ratio),
            ("color_index", self.color_index),
            ("color_intersect", self.color_intersect),
            ("scale", self.scale),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if self.min_distance < 0.0 || self.max_distance < 0.0 {
            return Err(ConfigError::NegativeDistance {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        if self.min_distance > self.max_distance {
            return Err(ConfigError::InvertedDistance {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        if self.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }

        Ok(())
    }

    /// Number of lines in each family.
    pub fn lines_per_family(&self) -> u64 {
        2 * u64::from(self.divisions) + 1
    }

    /// Whether the offset places lines in special position.
    ///
    /// Integer and half-integer offsets make lines of several families pass
    /// through common points, which collapses corners of neighbouring cells.
    pub fn is_special_offset(&self) -> bool {
        let doubled = self.offset * 2.0;
        (doubled - doubled.round()).abs() < 1e-9
    }
}

/// Limits on the work a build may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkBudget {
    /// Maximum number of candidate line pairs to test. `None` means unlimited.
    pub max_line_pairs: Option<u64>,
}

impl WorkBudget {
    pub const fn unlimited() -> Self {
        Self { max_line_pairs: None }
    }

    pub const fn limited(max_line_pairs: u64) -> Self {
        Self {
            max_line_pairs: Some(max_line_pairs),
        }
    }

    /// Check a requested amount of work against the limit.
    ///
    /// Returns the limit that was exceeded, if any.
    pub fn exceeded_by(&self, requested: u64) -> Option<u64> {
        self.max_line_pairs.filter(|&limit| requested > limit)
    }
}
