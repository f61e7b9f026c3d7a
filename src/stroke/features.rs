use crate::error::{Result, StrokeError};
use crate::geometry::{Rectangle, StrokePoint};
use crate::math::{rad_to_deg, Point2, Vector2};

use super::cache::cached;
use super::{polyline_length, Stroke};

impl<P: StrokePoint> Stroke<P> {
    /// Mean of all points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Point2 {
        *self.cache.centroid.get_or_init(|| {
            let n = self.points.len() as f64;
            let (sx, sy) = self
                .points
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
            Point2::new(sx / n, sy / n)
        })
    }

    /// Axis-aligned extent of the points.
    #[must_use]
    pub fn bounding_box(&self) -> Rectangle {
        *self.cache.bounding_box.get_or_init(|| {
            let first = self.first_point();
            Rectangle::enclosing(self.points.iter().map(StrokePoint::position))
                .unwrap_or(Rectangle::new(first.x(), first.y(), 0.0, 0.0))
        })
    }

    /// Direction from the centroid to the first point, `atan2(c − p0)`.
    #[must_use]
    pub fn indicative_angle(&self) -> f64 {
        *self.cache.indicative_angle.get_or_init(|| {
            let c = self.centroid();
            let p0 = self.first_point();
            (c.y - p0.y()).atan2(c.x - p0.x())
        })
    }

    /// Coordinates flattened as `[x0, y0, x1, y1, …]` and scaled to unit
    /// Euclidean norm.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::DegenerateStroke`] when the vector has zero
    /// magnitude, i.e. every point sits at the origin.
    pub fn vector_rep(&self) -> Result<&[f64]> {
        cached(&self.cache.vector_rep, || {
            let mut vector = Vec::with_capacity(self.points.len() * 2);
            let mut sum = 0.0;
            for p in &self.points {
                vector.push(p.x());
                vector.push(p.y());
                sum += p.x() * p.x() + p.y() * p.y();
            }
            let magnitude = sum.sqrt();
            if magnitude <= 0.0 {
                tracing::debug!(magnitude, "rejecting zero-magnitude vector representation");
                return Err(StrokeError::DegenerateStroke(
                    "vector representation has zero magnitude".to_owned(),
                ));
            }
            for v in &mut vector {
                *v /= magnitude;
            }
            Ok(vector)
        })
        .map(Vec::as_slice)
    }

    /// Per-segment deltas `p[i + 1] − p[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InsufficientPoints`] for a single-point stroke.
    pub fn diff(&self) -> Result<&[Vector2]> {
        cached(&self.cache.diff, || {
            self.require_points(2)?;
            Ok(self
                .points
                .windows(2)
                .map(|w| Vector2::new(w[1].x() - w[0].x(), w[1].y() - w[0].y()))
                .collect())
        })
        .map(Vec::as_slice)
    }

    /// Direction of each segment in radians, `atan2(dy, dx)`.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InsufficientPoints`] for a single-point stroke.
    pub fn angles(&self) -> Result<&[f64]> {
        cached(&self.cache.angles, || {
            Ok(self.diff()?.iter().map(|d| d.y.atan2(d.x)).collect())
        })
        .map(Vec::as_slice)
    }

    /// [`Stroke::angles`] in degrees. Not cached.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InsufficientPoints`] for a single-point stroke.
    pub fn angles_in_degrees(&self) -> Result<Vec<f64>> {
        Ok(self.angles()?.iter().copied().map(rad_to_deg).collect())
    }

    /// Consecutive differences of [`Stroke::angles`], one fewer than the
    /// number of segments.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InsufficientPoints`] for a single-point stroke.
    pub fn angles_diff(&self) -> Result<&[f64]> {
        cached(&self.cache.angles_diff, || {
            Ok(self.angles()?.windows(2).map(|w| w[1] - w[0]).collect())
        })
        .map(Vec::as_slice)
    }

    /// [`Stroke::angles_diff`] in degrees. Not cached.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InsufficientPoints`] for a single-point stroke.
    pub fn angles_diff_in_degrees(&self) -> Result<Vec<f64>> {
        Ok(self.angles_diff()?.iter().copied().map(rad_to_deg).collect())
    }

    /// Total length of the polyline.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InsufficientPoints`] for a single-point stroke.
    pub fn path_length(&self) -> Result<f64> {
        cached(&self.cache.path_length, || {
            self.require_points(2)?;
            Ok(polyline_length(&self.points))
        })
        .copied()
    }

    /// Corners reported by the stroke's corner detector, first and last
    /// point included.
    ///
    /// The detector runs at most once per point set.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InsufficientPoints`] for a single-point stroke.
    pub fn corners(&self) -> Result<&[Point2]> {
        cached(&self.cache.corners, || {
            self.require_points(2)?;
            let positions: Vec<Point2> = self.points.iter().map(StrokePoint::position).collect();
            let corners = self.corner_detector.detect(&positions);
            tracing::debug!(
                points = positions.len(),
                corners = corners.len(),
                "detected stroke corners"
            );
            Ok(corners)
        })
        .map(Vec::as_slice)
    }
}
