//! Reconstruction of the dual cell around an intersection.

use crate::lattice::{indices_from_point, vertex};
use debruijn_core::{DualMapError, Intersection, Rhomb};
use glam::DVec2;

/// Steps added to the two crossing families' line indices, in winding order.
const CORNER_STEPS: [(i64, i64); 4] = [(1, 1), (0, 1), (0, 0), (1, 0)];

/// Build the quadrilateral dual to `intersection`.
///
/// The index vector at the intersection point fixes every other family's
/// strip; the two crossing families take each of their two neighbouring
/// strips, giving four lattice vertices.
pub fn reconstruct(
    intersection: &Intersection,
    angles: &[f64],
    offset: f64,
) -> Result<Rhomb, DualMapError> {
    let (i, k) = (intersection.line1, intersection.line2);
    if i >= angles.len() || k >= angles.len() {
        return Err(DualMapError::LengthMismatch {
            indices: i.max(k) + 1,
            angles: angles.len(),
        });
    }

    let base = indices_from_point(intersection.point, angles, offset);
    let p = i64::from(intersection.parallel1);
    let q = i64::from(intersection.parallel2);

    let mut corners = [DVec2::ZERO; 4];
    for (corner, (dp, dq)) in corners.iter_mut().zip(CORNER_STEPS) {
        let mut indices = base.clone();
        indices[i] = p + dp;
        indices[k] = q + dq;
        *corner = vertex(&indices, angles)?;
    }

    Ok(Rhomb::from_intersection(corners, intersection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angles::uniform_angles;
    use crate::cancel::CancellationToken;
    use crate::intersect::IntersectionEngine;
    use approx::assert_relative_eq;

    fn rhombs(dimensions: usize, divisions: u32, offset: f64) -> Vec<Rhomb> {
        let angles = uniform_angles(dimensions);
        IntersectionEngine::new(&angles, divisions, offset)
            .run(&CancellationToken::new())
            .unwrap()
            .iter()
            .map(|x| reconstruct(x, &angles, offset).unwrap())
            .collect()
    }

    #[test]
    fn test_edges_follow_family_directions() {
        let angles = uniform_angles(5);
        let x = Intersection {
            point: DVec2::ZERO,
            line1: 1,
            line2: 3,
            parallel1: 0,
            parallel2: 0,
        };
        let rhomb = reconstruct(&x, &angles, 0.2).unwrap();
        let [c0, c1, c2, c3] = rhomb.corners;

        let e1 = DVec2::new(angles[1].cos(), angles[1].sin());
        let e3 = DVec2::new(angles[3].cos(), angles[3].sin());
        assert_relative_eq!((c0 - c1).distance(e1), 0.0, epsilon = 1e-12);
        assert_relative_eq!((c3 - c2).distance(e1), 0.0, epsilon = 1e-12);
        assert_relative_eq!((c1 - c2).distance(e3), 0.0, epsilon = 1e-12);
        assert_relative_eq!((c0 - c3).distance(e3), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_four_distinct_corners() {
        for rhomb in rhombs(5, 3, 0.2) {
            for a in 0..4 {
                for b in a + 1..4 {
                    assert!(rhomb.corners[a].distance(rhomb.corners[b]) > 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_unit_edges() {
        for rhomb in rhombs(7, 2, 0.3) {
            let c = rhomb.corners;
            for j in 0..4 {
                assert_relative_eq!(c[j].distance(c[(j + 1) % 4]), 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_tags_carried() {
        let angles = uniform_angles(3);
        let x = Intersection {
            point: DVec2::new(0.4, -0.1),
            line1: 0,
            line2: 2,
            parallel1: -1,
            parallel2: 1,
        };
        let rhomb = reconstruct(&x, &angles, 0.2).unwrap();
        assert_eq!((rhomb.line1, rhomb.line2), (0, 2));
        assert_eq!((rhomb.parallel1, rhomb.parallel2), (-1, 1));
    }

    #[test]
    fn test_family_out_of_range() {
        let x = Intersection {
            point: DVec2::ZERO,
            line1: 0,
            line2: 4,
            parallel1: 0,
            parallel2: 0,
        };
        assert_eq!(
            reconstruct(&x, &uniform_angles(3), 0.2),
            Err(DualMapError::LengthMismatch { indices: 5, angles: 3 })
        );
    }
}
