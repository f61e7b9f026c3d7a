use crate::error::{Result, StrokeError};
use crate::geometry::StrokePoint;
use crate::math::{golden_section_search, TOLERANCE};
use crate::params::AngleSearch;

use super::Stroke;

/// Outcome of a rotation search between two strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMatch {
    /// Rotation applied to the searching stroke, in radians.
    pub angle: f64,
    /// Mean pointwise distance at that rotation.
    pub distance: f64,
}

impl<P: StrokePoint> Stroke<P> {
    /// Mean pointwise Euclidean distance to `other`.
    ///
    /// When the point counts differ, `other` is compared through its cached
    /// resample at this stroke's count; `other` itself is not modified.
    ///
    /// # Errors
    ///
    /// Propagates the resampling errors of [`Stroke::sample`] when the counts
    /// differ.
    #[allow(clippy::cast_precision_loss)]
    pub fn distance_to(&self, other: &Stroke<P>) -> Result<f64> {
        let n = self.points.len();
        let sum = if other.points.len() == n {
            pointwise_sum(&self.points, &other.points)
        } else {
            let resampled = other.sample(n)?;
            pointwise_sum(&self.points, &resampled.points)
        };
        Ok(sum / n as f64)
    }

    /// Distance from a copy of this stroke rotated by `angle` to `other`.
    ///
    /// # Errors
    ///
    /// Same as [`Stroke::distance_to`].
    pub fn distance_at_angle(&self, other: &Stroke<P>, angle: f64) -> Result<f64> {
        let mut rotated = self.clone();
        rotated.rotate_by(angle);
        rotated.distance_to(other)
    }

    /// Golden-section search for the rotation of this stroke that brings it
    /// closest to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InvalidInput`] for invalid search parameters and
    /// propagates the errors of [`Stroke::distance_to`].
    pub fn best_angle_match(&self, other: &Stroke<P>, search: &AngleSearch) -> Result<AngleMatch> {
        search.validate()?;
        let min = golden_section_search(
            |angle| self.distance_at_angle(other, angle),
            search.from,
            search.to,
            search.precision,
        )?;
        tracing::trace!(
            from = search.from,
            to = search.to,
            iterations = min.iterations,
            angle = min.x,
            distance = min.value,
            "rotation search finished"
        );
        Ok(AngleMatch {
            angle: min.x,
            distance: min.value,
        })
    }

    /// Smallest [`Stroke::distance_at_angle`] found over the search bracket.
    ///
    /// # Errors
    ///
    /// Same as [`Stroke::best_angle_match`].
    pub fn distance_at_best_angle(&self, other: &Stroke<P>, search: &AngleSearch) -> Result<f64> {
        self.best_angle_match(other, search).map(|m| m.distance)
    }

    /// Protractor's closed-form rotation-invariant distance: the angle, in
    /// radians, between the two vector representations after the optimal
    /// rotation. Lies in `[0, π]`.
    ///
    /// Both strokes must already have the same point count.
    ///
    /// # Errors
    ///
    /// - [`StrokeError::InvalidInput`] if the point counts differ.
    /// - [`StrokeError::DegenerateStroke`] if either vector representation
    ///   has zero magnitude.
    pub fn optimal_cosine_distance(&self, other: &Stroke<P>) -> Result<f64> {
        let v1 = self.vector_rep()?;
        let v2 = other.vector_rep()?;
        if v1.len() != v2.len() {
            return Err(StrokeError::InvalidInput(format!(
                "optimal cosine distance needs equal point counts, got {} and {}",
                self.points.len(),
                other.points.len()
            )));
        }

        let (a, b) = v1
            .chunks_exact(2)
            .zip(v2.chunks_exact(2))
            .fold((0.0, 0.0), |(a, b), (p, q)| {
                (a + p[0] * q[0] + p[1] * q[1], b + p[0] * q[1] - p[1] * q[0])
            });

        // atan(b / 0) is ±π/2 already; only 0 / 0 needs a value.
        let angle = if a.abs() < TOLERANCE && b.abs() < TOLERANCE {
            0.0
        } else {
            (b / a).atan()
        };
        let similarity = a * angle.cos() + b * angle.sin();
        Ok(similarity.clamp(-1.0, 1.0).acos())
    }
}

fn pointwise_sum<P: StrokePoint>(a: &[P], b: &[P]) -> f64 {
    a.iter().zip(b).map(|(p, q)| p.distance_to(q)).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::geometry::Point;
    use crate::math::deg_to_rad;

    fn stroke(coords: &[(f64, f64)]) -> Stroke {
        Stroke::from_records(coords.iter().copied()).unwrap()
    }

    fn zigzag() -> Stroke {
        stroke(&[(0.0, 0.0), (30.0, 60.0), (60.0, 0.0), (90.0, 60.0), (120.0, 10.0)])
    }

    #[test]
    fn identical_strokes_are_zero_apart() {
        let s = zigzag();
        assert!(s.distance_to(&s.clone()).unwrap().abs() < 1e-12);
    }

    #[test]
    fn mean_of_pointwise_distances() {
        let a = stroke(&[(0.0, 0.0), (1.0, 0.0)]);
        let b = stroke(&[(0.0, 3.0), (1.0, 1.0)]);
        assert!((a.distance_to(&b).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn unequal_counts_resample_other_privately() {
        let a = stroke(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        let b = stroke(&[(0.0, 1.0), (10.0, 1.0)]);
        assert!((a.distance_to(&b).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(b.num_points(), 2);
    }

    #[test]
    fn unequal_counts_with_single_point_other() {
        let a = stroke(&[(0.0, 0.0), (1.0, 0.0)]);
        let b = stroke(&[(0.0, 0.0)]);
        assert!(matches!(
            a.distance_to(&b),
            Err(StrokeError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn distance_at_angle_undoes_rotation() {
        let s = zigzag();
        let mut rotated = s.clone();
        rotated.rotate_by(0.3);
        assert!(s.distance_at_angle(&rotated, 0.3).unwrap() < 1e-9);
        assert!(s.distance_at_angle(&rotated, 0.0).unwrap() > 1.0);
    }

    #[test]
    fn best_angle_recovers_rotation_within_range() {
        let mut s = zigzag();
        s.resample(32).unwrap();
        let mut rotated = s.clone();
        rotated.rotate_by(deg_to_rad(20.0));

        let search = AngleSearch::default();
        let best = s.best_angle_match(&rotated, &search).unwrap();
        let plain = s.distance_to(&rotated).unwrap();
        assert!(best.distance <= plain);
        assert!((best.angle - deg_to_rad(20.0)).abs() < deg_to_rad(2.0), "angle={}", best.angle);
        assert!(best.distance < 0.1 * plain, "best={} plain={plain}", best.distance);
        assert!(
            (s.distance_at_best_angle(&rotated, &search).unwrap() - best.distance).abs() < 1e-12
        );
    }

    #[test]
    fn best_angle_exact_with_fine_precision() {
        let s = zigzag();
        let mut rotated = s.clone();
        rotated.rotate_by(-0.4);
        let search = AngleSearch::new(-0.7, 0.7, 1e-9);
        assert!(s.distance_at_best_angle(&rotated, &search).unwrap() < 1e-6);
    }

    #[test]
    fn best_angle_with_sub_ulp_precision_terminates() {
        let s = zigzag();
        let mut rotated = s.clone();
        rotated.rotate_by(0.2);
        let search = AngleSearch::new(-0.785, 0.785, 1e-20);
        let best = s.best_angle_match(&rotated, &search).unwrap();
        assert!((best.angle - 0.2).abs() < 1e-6, "angle={}", best.angle);
        assert!(best.distance < 1e-6, "distance={}", best.distance);
    }

    #[test]
    fn best_angle_rejects_bad_precision() {
        let s = zigzag();
        let search = AngleSearch::new(-0.5, 0.5, -1.0);
        assert!(matches!(
            s.distance_at_best_angle(&s, &search),
            Err(StrokeError::InvalidInput(_))
        ));
    }

    #[test]
    fn optimal_cosine_zero_for_same_shape() {
        let s = zigzag();
        assert!(s.optimal_cosine_distance(&s.clone()).unwrap() < 1e-6);
    }

    #[test]
    fn optimal_cosine_ignores_rotation_about_origin() {
        let a = stroke(&[(-10.0, -5.0), (0.0, 8.0), (10.0, -3.0), (4.0, 6.0)]);
        let rotated: Vec<Point> = a
            .points()
            .iter()
            .map(|p| {
                let (s, c) = 1.1_f64.sin_cos();
                Point::new(p.x * c - p.y * s, p.x * s + p.y * c)
            })
            .collect();
        let b = Stroke::new(rotated).unwrap();
        assert!(a.optimal_cosine_distance(&b).unwrap() < 1e-6);
    }

    #[test]
    fn optimal_cosine_ignores_scale() {
        let a = stroke(&[(1.0, 2.0), (3.0, -1.0), (-2.0, 4.0)]);
        let mut b = a.clone();
        b.scale_to(
            a.bounding_box().width * 3.0,
            a.bounding_box().height * 3.0,
        )
        .unwrap();
        assert!(a.optimal_cosine_distance(&b).unwrap() < 1e-6);
    }

    #[test]
    fn optimal_cosine_opposite_shapes() {
        let a = stroke(&[(1.0, 0.0), (2.0, 0.0)]);
        let b = stroke(&[(-1.0, 0.0), (-2.0, 0.0)]);
        // The closed form only considers rotations within ±90°.
        let dist = a.optimal_cosine_distance(&b).unwrap();
        assert!((dist - PI).abs() < 1e-6, "dist={dist}");

        let c = stroke(&[(1.0, 0.0), (-1.0, 0.0)]);
        let d = stroke(&[(1.0, 0.0), (1.0, 0.0)]);
        let dist = c.optimal_cosine_distance(&d).unwrap();
        assert!((dist - PI / 2.0).abs() < 1e-9, "dist={dist}");
    }

    #[test]
    fn optimal_cosine_needs_equal_counts() {
        let a = stroke(&[(1.0, 0.0), (2.0, 0.0)]);
        let b = stroke(&[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert!(matches!(
            a.optimal_cosine_distance(&b),
            Err(StrokeError::InvalidInput(_))
        ));
    }

    #[test]
    fn optimal_cosine_degenerate_vector() {
        let a = stroke(&[(0.0, 0.0), (0.0, 0.0)]);
        let b = stroke(&[(1.0, 0.0), (2.0, 0.0)]);
        assert!(matches!(
            a.optimal_cosine_distance(&b),
            Err(StrokeError::DegenerateStroke(_))
        ));
    }
}
