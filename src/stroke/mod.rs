mod cache;
mod distance;
mod features;
mod resample;
mod transform;

pub use distance::AngleMatch;
pub use resample::resample_points;

pub(crate) use resample::polyline_length;

use std::fmt;
use std::sync::Arc;

use crate::corners::{CornerDetector, ShortStraw};
use crate::error::{Result, StrokeError};
use crate::geometry::{Point, PointRecord, StrokePoint};

use cache::FeatureCache;

/// One continuous pen or touch gesture: points in drawing order plus a cache
/// of derived features.
///
/// A stroke always holds at least one point. Every mutating method replaces
/// the feature cache, so accessors never observe values computed from an
/// earlier point set.
///
/// Accessors fill the cache through `&self`, so a stroke is `Send` but not
/// `Sync`. To compare against templates from several threads, clone the
/// stroke per worker.
pub struct Stroke<P: StrokePoint = Point> {
    points: Vec<P>,
    cache: FeatureCache<P>,
    corner_detector: Arc<dyn CornerDetector>,
}

impl<P: StrokePoint> Stroke<P> {
    /// Creates a stroke that takes ownership of `points`.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InvalidInput`] if `points` is empty.
    pub fn new(points: Vec<P>) -> Result<Self> {
        if points.is_empty() {
            return Err(StrokeError::InvalidInput(
                "a stroke needs at least one point".to_owned(),
            ));
        }
        Ok(Self {
            points,
            cache: FeatureCache::default(),
            corner_detector: Arc::new(ShortStraw::default()),
        })
    }

    /// Creates a stroke from `{x, y, t?}` records, building each point through
    /// [`StrokePoint::create`].
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InvalidInput`] if no record is given.
    pub fn from_records<I, R>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<PointRecord>,
    {
        let points = records
            .into_iter()
            .map(|r| {
                let r = r.into();
                P::create(r.x, r.y, r.t)
            })
            .collect();
        Self::new(points)
    }

    /// Creates a stroke from a flat array of `x, y` pairs, or of `x, y, t`
    /// triples when `has_timestamp` is set.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InvalidInput`] if the length is not a multiple
    /// of the stride or the array is empty.
    pub fn from_flat(values: &[f64], has_timestamp: bool) -> Result<Self> {
        let stride = if has_timestamp { 3 } else { 2 };
        if values.len() % stride != 0 {
            return Err(StrokeError::InvalidInput(format!(
                "flat array length {} is not a multiple of {stride}",
                values.len()
            )));
        }
        let points = values
            .chunks_exact(stride)
            .map(|c| P::create(c[0], c[1], c.get(2).copied()))
            .collect();
        Self::new(points)
    }

    /// Deep-copies a stroke over another point type through the factory hook.
    ///
    /// The copy starts with an empty cache and keeps the source's corner
    /// detector.
    #[must_use]
    pub fn from_stroke<Q: StrokePoint>(other: &Stroke<Q>) -> Self {
        Self {
            points: other
                .points
                .iter()
                .map(|p| P::create(p.x(), p.y(), p.t()))
                .collect(),
            cache: FeatureCache::default(),
            corner_detector: Arc::clone(&other.corner_detector),
        }
    }

    /// Replaces the corner detector used by [`Stroke::corners`].
    #[must_use]
    pub fn with_corner_detector(mut self, detector: Arc<dyn CornerDetector>) -> Self {
        self.corner_detector = detector;
        self.invalidate();
        self
    }

    /// Points in drawing order.
    #[must_use]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Consumes the stroke, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<P> {
        self.points
    }

    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn point_at(&self, index: usize) -> Option<&P> {
        self.points.get(index)
    }

    #[must_use]
    pub fn first_point(&self) -> &P {
        &self.points[0]
    }

    #[must_use]
    pub fn last_point(&self) -> &P {
        &self.points[self.points.len() - 1]
    }

    /// Drops every cached feature.
    fn invalidate(&mut self) {
        self.cache = FeatureCache::default();
    }

    fn require_points(&self, required: usize) -> Result<()> {
        if self.points.len() < required {
            return Err(StrokeError::InsufficientPoints {
                required,
                actual: self.points.len(),
            });
        }
        Ok(())
    }
}

impl<P: StrokePoint> Clone for Stroke<P> {
    /// Copies the points; the clone starts with an empty cache.
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
            cache: FeatureCache::default(),
            corner_detector: Arc::clone(&self.corner_detector),
        }
    }
}

impl<P: StrokePoint> fmt::Debug for Stroke<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stroke")
            .field("points", &self.points)
            .field("corner_detector", &self.corner_detector)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn new_rejects_empty() {
        let result = Stroke::<Point>::new(vec![]);
        assert!(matches!(result, Err(StrokeError::InvalidInput(_))));
    }

    #[test]
    fn from_records_pairs_and_triples() {
        let s = Stroke::<Point>::from_records([(0.0, 1.0), (2.0, 3.0)]).unwrap();
        assert_eq!(s.num_points(), 2);
        assert_eq!(s.point_at(1), Some(&Point::new(2.0, 3.0)));

        let s = Stroke::<Point>::from_records([(0.0, 1.0, 5.0)]).unwrap();
        assert_eq!(s.first_point().t, Some(5.0));
    }

    #[test]
    fn from_records_empty_fails() {
        let result = Stroke::<Point>::from_records(Vec::<(f64, f64)>::new());
        assert!(matches!(result, Err(StrokeError::InvalidInput(_))));
    }

    #[test]
    fn from_flat_pairs() {
        let s = Stroke::<Point>::from_flat(&[0.0, 0.0, 1.0, 2.0, 3.0, 4.0], false).unwrap();
        assert_eq!(s.num_points(), 3);
        assert_eq!(*s.last_point(), Point::new(3.0, 4.0));
    }

    #[test]
    fn from_flat_triples() {
        let s = Stroke::<Point>::from_flat(&[0.0, 0.0, 10.0, 1.0, 2.0, 20.0], true).unwrap();
        assert_eq!(s.num_points(), 2);
        assert_eq!(*s.last_point(), Point::with_time(1.0, 2.0, 20.0));
    }

    #[test]
    fn from_flat_bad_stride() {
        let pairs = Stroke::<Point>::from_flat(&[0.0, 0.0, 1.0], false);
        assert!(matches!(pairs, Err(StrokeError::InvalidInput(_))));
        let triples = Stroke::<Point>::from_flat(&[0.0, 0.0, 1.0, 2.0], true);
        assert!(matches!(triples, Err(StrokeError::InvalidInput(_))));
    }

    #[test]
    fn from_flat_empty() {
        let result = Stroke::<Point>::from_flat(&[], false);
        assert!(matches!(result, Err(StrokeError::InvalidInput(_))));
    }

    #[test]
    fn from_stroke_converts_point_type() {
        let s = Stroke::<Point>::from_records([(0.0, 1.0, 3.0), (2.0, 3.0, 4.0)]).unwrap();
        let plain = Stroke::<Point2>::from_stroke(&s);
        assert_eq!(plain.points(), &[Point2::new(0.0, 1.0), Point2::new(2.0, 3.0)]);
        let back = Stroke::<Point>::from_stroke(&plain);
        assert_eq!(back.first_point().t, None);
    }

    #[test]
    fn clone_is_deep() {
        let s = Stroke::<Point>::from_records([(0.0, 0.0), (4.0, 0.0)]).unwrap();
        let mut c = s.clone();
        c.flip_x();
        assert_eq!(*s.last_point(), Point::new(4.0, 0.0));
        assert_eq!(*c.last_point(), Point::new(-4.0, 0.0));
    }

    #[test]
    fn point_at_out_of_range() {
        let s = Stroke::<Point>::from_records([(0.0, 0.0)]).unwrap();
        assert!(s.point_at(1).is_none());
        assert_eq!(s.first_point(), s.last_point());
    }
}
