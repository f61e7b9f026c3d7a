use std::fmt::Debug;

use crate::math::Point2;

/// Capability set every stroke point type provides.
///
/// [`StrokePoint::create`] is the factory hook through which strokes build
/// their points, so a custom type can carry extra per-point attributes
/// (pressure, tilt) alongside the coordinates.
pub trait StrokePoint: Clone + Debug {
    /// Builds a point from coordinates and an optional capture timestamp.
    fn create(x: f64, y: f64, t: Option<f64>) -> Self;

    fn x(&self) -> f64;

    fn y(&self) -> f64;

    /// Capture timestamp, if the point type records one.
    fn t(&self) -> Option<f64> {
        None
    }

    /// Moves the point, leaving every other attribute untouched.
    fn set_position(&mut self, x: f64, y: f64);

    /// Returns the coordinates as a plain 2D point.
    fn position(&self) -> Point2 {
        Point2::new(self.x(), self.y())
    }

    /// Euclidean distance to `other`.
    fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at fraction `u` of the segment from `self` to `other`.
    ///
    /// The timestamp is interpolated when both endpoints carry one.
    #[must_use]
    fn interpolate(&self, other: &Self, u: f64) -> Self {
        let x = self.x() + u * (other.x() - self.x());
        let y = self.y() + u * (other.y() - self.y());
        let t = match (self.t(), other.t()) {
            (Some(t0), Some(t1)) => Some(t0 + u * (t1 - t0)),
            _ => None,
        };
        Self::create(x, y, t)
    }
}

/// A sampled stroke point with an optional capture timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub t: Option<f64>,
}

impl Point {
    /// Creates an untimed point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, t: None }
    }

    /// Creates a point captured at time `t`.
    #[must_use]
    pub fn with_time(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t: Some(t) }
    }
}

impl StrokePoint for Point {
    fn create(x: f64, y: f64, t: Option<f64>) -> Self {
        Self { x, y, t }
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn t(&self) -> Option<f64> {
        self.t
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl StrokePoint for Point2 {
    fn create(x: f64, y: f64, _t: Option<f64>) -> Self {
        Point2::new(x, y)
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

/// Raw `{x, y, t?}` input record accepted by stroke construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    pub t: Option<f64>,
}

impl From<(f64, f64)> for PointRecord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y, t: None }
    }
}

impl From<(f64, f64, f64)> for PointRecord {
    fn from((x, y, t): (f64, f64, f64)) -> Self {
        Self { x, y, t: Some(t) }
    }
}
