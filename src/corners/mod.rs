mod short_straw;

pub use short_straw::ShortStraw;

use std::fmt::Debug;

use crate::math::Point2;

/// Finds the points where a stroke changes direction sharply.
///
/// Implementations receive the stroke's positions in drawing order (at least
/// two) and return the corner positions in the same order, the first and
/// last point included. Results must be deterministic: strokes cache them
/// until their points change.
pub trait CornerDetector: Debug + Send + Sync {
    fn detect(&self, points: &[Point2]) -> Vec<Point2>;
}
