use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;

use crate::error::Result;
use crate::geometry::{Rectangle, StrokePoint};
use crate::math::{Point2, Vector2};

use super::Stroke;

/// Lazily populated derived features of a stroke.
///
/// Every slot is empty until its accessor first runs. The owning stroke
/// replaces the whole cache on each mutation, so a filled slot always
/// reflects the current points.
#[derive(Debug)]
pub(crate) struct FeatureCache<P: StrokePoint> {
    pub(crate) samples: RefCell<HashMap<usize, Stroke<P>>>,
    pub(crate) centroid: OnceCell<Point2>,
    pub(crate) bounding_box: OnceCell<Rectangle>,
    pub(crate) indicative_angle: OnceCell<f64>,
    pub(crate) vector_rep: OnceCell<Vec<f64>>,
    pub(crate) angles: OnceCell<Vec<f64>>,
    pub(crate) angles_diff: OnceCell<Vec<f64>>,
    pub(crate) diff: OnceCell<Vec<Vector2>>,
    pub(crate) path_length: OnceCell<f64>,
    pub(crate) corners: OnceCell<Vec<Point2>>,
}

impl<P: StrokePoint> Default for FeatureCache<P> {
    fn default() -> Self {
        Self {
            samples: RefCell::new(HashMap::new()),
            centroid: OnceCell::new(),
            bounding_box: OnceCell::new(),
            indicative_angle: OnceCell::new(),
            vector_rep: OnceCell::new(),
            angles: OnceCell::new(),
            angles_diff: OnceCell::new(),
            diff: OnceCell::new(),
            path_length: OnceCell::new(),
            corners: OnceCell::new(),
        }
    }
}

/// Returns the cached value, or computes and stores it.
///
/// A failed computation leaves the slot empty.
pub(crate) fn cached<T>(cell: &OnceCell<T>, compute: impl FnOnce() -> Result<T>) -> Result<&T> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = compute()?;
    Ok(cell.get_or_init(|| value))
}
