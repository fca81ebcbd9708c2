//! Value types shared by the generator stages.

use glam::DVec2;
use smallvec::SmallVec;

/// Integer cell coordinates, one component per line family.
pub type IndexVector = SmallVec<[i64; 8]>;

/// A point where a line of one family crosses a line of a later family.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
    pub point: DVec2,
    /// Family index of the first line.
    pub line1: usize,
    /// Family index of the second line (always greater than `line1`).
    pub line2: usize,
    /// Line index within the first family.
    pub parallel1: i32,
    /// Line index within the second family.
    pub parallel2: i32,
}

/// A quadrilateral cell of the dual tiling.
///
/// Corners run cyclically around the originating intersection. The cell is
/// tagged with the intersection it was reconstructed from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rhomb {
    pub corners: [DVec2; 4],
    pub line1: usize,
    pub line2: usize,
    pub parallel1: i32,
    pub parallel2: i32,
}

impl Rhomb {
    /// Create a cell carrying the tags of `source`.
    pub fn from_intersection(corners: [DVec2; 4], source: &Intersection) -> Self {
        Self {
            corners,
            line1: source.line1,
            line2: source.line2,
            parallel1: source.parallel1,
            parallel2: source.parallel2,
        }
    }

    /// The corners with the first one repeated at the end, for drawing closed outlines.
    pub fn closed_outline(&self) -> [DVec2; 5] {
        let [a, b, c, d] = self.corners;
        [a, b, c, d, a]
    }

    /// Diagonal lengths `(|c2 - c0|, |c3 - c1|)`.
    pub fn diagonals(&self) -> (f64, f64) {
        let c = &self.corners;
        (c[2].distance(c[0]), c[3].distance(c[1]))
    }

    pub fn centroid(&self) -> DVec2 {
        self.corners.iter().copied().sum::<DVec2>() / 4.0
    }

    /// Apply a uniform scale about the origin.
    pub fn scaled(mut self, factor: f64) -> Self {
        for corner in &mut self.corners {
            *corner *= factor;
        }
        self
    }
}

/// Discrete role attached to mesh faces and vertices.
///
/// Face roles carry the color quartile of a cell; vertices produced by the
/// generator are always [`Role::New`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Ignored,
    Existing,
    New,
    NewAlt,
    ExistingAlt,
}

impl Role {
    /// Map a color quartile bucket to a role. Buckets above 3 clamp to the last one.
    pub fn from_bucket(bucket: usize) -> Self {
        match bucket {
            0 => Role::Ignored,
            1 => Role::Existing,
            2 => Role::New,
            _ => Role::NewAlt,
        }
    }

    /// Numeric value of the role.
    pub fn index(self) -> usize {
        self as usize
    }
}
