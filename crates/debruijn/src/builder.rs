//! The end-to-end tiling build.

use debruijn_core::{MultigridConfig, MultigridError, Result, Rhomb};
use debruijn_grid::{
    random_angles, reconstruct, uniform_angles, CancellationToken, ColorAssigner, DistanceFilter,
    IntersectionEngine,
};
use debruijn_mesh::{assemble, PolyMesh};
use rand::Rng;
use tracing::{debug, info, warn};

/// Output of a build.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tiling {
    pub mesh: PolyMesh,
    /// Accepted cells, scaled, in intersection order. Parallel to `colors`
    /// and to the mesh faces.
    pub shapes: Vec<Rhomb>,
    /// Raw color scalar of each accepted cell.
    pub colors: Vec<f64>,
    pub stats: BuildStats,
}

/// Counters collected during a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildStats {
    /// Number of line families used.
    pub families: usize,
    /// Intersections found before filtering.
    pub intersections: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Multigrid tiling generator.
#[derive(Debug, Clone)]
pub struct MultiGrid {
    config: MultigridConfig,
}

impl MultiGrid {
    /// Create a generator after validating `config`.
    pub fn new(config: MultigridConfig) -> Result<Self> {
        config.validate()?;

        if config.is_special_offset() {
            warn!(
                offset = config.offset,
                "Offset is an integer or half-integer; cell corners may coincide"
            );
        }
        if config.dimensions < 2 {
            warn!(
                dimensions = config.dimensions,
                "Fewer than two line families; uniform builds will be empty"
            );
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &MultigridConfig {
        &self.config
    }

    /// Angle set for a build, drawing from the thread RNG in random mode.
    pub fn angles(&self, random: bool) -> Vec<f64> {
        if random {
            random_angles(self.config.divisions, &mut rand::thread_rng())
        } else {
            uniform_angles(self.config.dimensions)
        }
    }

    /// Upper bound on the intersections of a uniform build.
    pub fn intersection_count_estimate(&self) -> u64 {
        IntersectionEngine::new(
            &uniform_angles(self.config.dimensions),
            self.config.divisions,
            self.config.offset,
        )
        .candidate_count()
    }

    /// Build the tiling.
    ///
    /// `random` swaps the evenly spaced angle set for a random one over half
    /// the circle. Uniform builds are deterministic.
    pub fn build(&self, shared_vertices: bool, random: bool) -> Result<Tiling> {
        self.build_with_token(shared_vertices, random, &CancellationToken::new())
    }

    /// Build with a random angle set drawn from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(
        &self,
        shared_vertices: bool,
        rng: &mut R,
    ) -> Result<Tiling> {
        let angles = random_angles(self.config.divisions, rng);
        self.build_from_angles(&angles, shared_vertices, &CancellationToken::new())
    }

    /// Build, stopping early with [`MultigridError::Cancelled`] once `token` is cancelled.
    pub fn build_with_token(
        &self,
        shared_vertices: bool,
        random: bool,
        token: &CancellationToken,
    ) -> Result<Tiling> {
        let angles = self.angles(random);
        self.build_from_angles(&angles, shared_vertices, token)
    }

    /// Build from an explicit angle set, one line family per angle.
    pub fn build_from_angles(
        &self,
        angles: &[f64],
        shared_vertices: bool,
        token: &CancellationToken,
    ) -> Result<Tiling> {
        let config = &self.config;
        info!(
            families = angles.len(),
            divisions = config.divisions,
            offset = config.offset,
            shared_vertices,
            "Building multigrid tiling"
        );

        let engine = IntersectionEngine::new(angles, config.divisions, config.offset);
        let requested = engine.candidate_count();
        if let Some(limit) = config.budget.exceeded_by(requested) {
            return Err(MultigridError::BudgetExceeded { requested, limit });
        }

        let intersections = engine.run(token)?;
        if token.is_cancelled() {
            return Err(MultigridError::Cancelled);
        }

        let filter = DistanceFilter::from_config(config);
        let assigner = ColorAssigner::from_config(config);
        let mut shapes = Vec::new();
        let mut colors = Vec::new();

        for intersection in &intersections {
            let rhomb = reconstruct(intersection, angles, config.offset)?.scaled(config.scale);
            if !filter.accepts(&rhomb) {
                continue;
            }
            colors.push(assigner.color(&rhomb));
            shapes.push(rhomb);
        }

        let stats = BuildStats {
            families: angles.len(),
            intersections: intersections.len(),
            accepted: shapes.len(),
            rejected: intersections.len() - shapes.len(),
        };
        debug!(accepted = stats.accepted, rejected = stats.rejected, "Filtered cells");

        let mesh = assemble(&shapes, &colors, shared_vertices);
        info!(
            faces = mesh.face_count(),
            vertices = mesh.vertex_count(),
            "Built multigrid tiling"
        );

        Ok(Tiling {
            mesh,
            shapes,
            colors,
            stats,
        })
    }
}
