use crate::error::{Result, StrokeError};
use crate::geometry::StrokePoint;
use crate::math::DEFAULT_SAMPLE_COUNT;

use super::Stroke;

/// Total length of the polyline through `points`.
pub(crate) fn polyline_length<P: StrokePoint>(points: &[P]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Resamples a polyline to exactly `n` points spaced evenly by arc length.
///
/// The first output point is the first input point and the last output point
/// coincides with the last input point.
///
/// # Errors
///
/// - [`StrokeError::InvalidTargetCount`] if `n < 2`.
/// - [`StrokeError::InsufficientPoints`] if fewer than 2 points are given.
/// - [`StrokeError::DegenerateStroke`] if the polyline has zero length.
pub fn resample_points<P: StrokePoint>(points: &[P], n: usize) -> Result<Vec<P>> {
    if n < 2 {
        return Err(StrokeError::InvalidTargetCount(n));
    }
    if points.len() < 2 {
        return Err(StrokeError::InsufficientPoints {
            required: 2,
            actual: points.len(),
        });
    }
    resample_walk(points, n, polyline_length(points))
}

/// Walks the polyline emitting a point every `length / (n − 1)` of arc.
///
/// Emitted points become the start of the remaining part of their segment,
/// so a segment spanning several intervals yields several samples.
#[allow(clippy::cast_precision_loss)]
fn resample_walk<P: StrokePoint>(points: &[P], n: usize, length: f64) -> Result<Vec<P>> {
    if length <= 0.0 {
        tracing::debug!(length, "rejecting resample of zero-length stroke");
        return Err(StrokeError::DegenerateStroke(
            "cannot resample a stroke with zero path length".to_owned(),
        ));
    }

    let interval = length / (n - 1) as f64;
    let mut out = Vec::with_capacity(n);
    out.push(points[0].clone());

    let mut prev = points[0].clone();
    let mut acc = 0.0;
    let mut i = 1;
    while i < points.len() && out.len() < n {
        let d = prev.distance_to(&points[i]);
        if d > 0.0 && acc + d >= interval {
            let q = prev.interpolate(&points[i], (interval - acc) / d);
            out.push(q.clone());
            prev = q;
            acc = 0.0;
        } else {
            acc += d;
            prev = points[i].clone();
            i += 1;
        }
    }

    // Rounding can leave the walk one sample short of the end.
    if out.len() < n {
        let missing = n - out.len();
        if missing > 1 {
            tracing::debug!(missing, n, "filling resample tail with the last point");
        }
        out.resize(n, points[points.len() - 1].clone());
    }

    tracing::trace!(n, interval, "resampled stroke");
    Ok(out)
}

impl<P: StrokePoint> Stroke<P> {
    /// Rewrites the stroke to exactly `n` points evenly spaced by arc length.
    ///
    /// # Errors
    ///
    /// - [`StrokeError::InvalidTargetCount`] if `n < 2`.
    /// - [`StrokeError::InsufficientPoints`] for a single-point stroke.
    /// - [`StrokeError::DegenerateStroke`] if every point coincides.
    pub fn resample(&mut self, n: usize) -> Result<&mut Self> {
        if n < 2 {
            return Err(StrokeError::InvalidTargetCount(n));
        }
        let length = self.path_length()?;
        self.points = resample_walk(&self.points, n, length)?;
        self.invalidate();
        Ok(self)
    }

    /// [`Stroke::resample`] to [`DEFAULT_SAMPLE_COUNT`] points.
    ///
    /// # Errors
    ///
    /// Same as [`Stroke::resample`].
    pub fn resample_default(&mut self) -> Result<&mut Self> {
        self.resample(DEFAULT_SAMPLE_COUNT)
    }

    /// Returns a copy of this stroke resampled to `n` points, leaving `self`
    /// untouched.
    ///
    /// The resampled stroke is cached per `n` until the next mutation.
    ///
    /// # Errors
    ///
    /// Same as [`Stroke::resample`].
    pub fn sample(&self, n: usize) -> Result<Stroke<P>> {
        if let Some(sample) = self.cache.samples.borrow().get(&n) {
            return Ok(sample.clone());
        }
        let mut sample = self.clone();
        sample.resample(n)?;
        let copy = sample.clone();
        self.cache.samples.borrow_mut().insert(n, sample);
        Ok(copy)
    }

    /// [`Stroke::sample`] at [`DEFAULT_SAMPLE_COUNT`] points.
    ///
    /// # Errors
    ///
    /// Same as [`Stroke::resample`].
    pub fn sample_default(&self) -> Result<Stroke<P>> {
        self.sample(DEFAULT_SAMPLE_COUNT)
    }
}
