use crate::error::{Result, StrokeError};
use crate::math::{Point2, ANGLE_PRECISION, ANGLE_RANGE, DEFAULT_SAMPLE_COUNT};

/// Bracket and precision of the golden-section rotation search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSearch {
    /// Lower bound of the searched rotation, in radians.
    pub from: f64,
    /// Upper bound of the searched rotation, in radians.
    pub to: f64,
    /// Bracket width at which the search stops, in radians.
    pub precision: f64,
}

impl Default for AngleSearch {
    fn default() -> Self {
        Self {
            from: -ANGLE_RANGE,
            to: ANGLE_RANGE,
            precision: ANGLE_PRECISION,
        }
    }
}

impl AngleSearch {
    /// Creates a search over `[from, to]` narrowed to `precision`.
    #[must_use]
    pub fn new(from: f64, to: f64, precision: f64) -> Self {
        Self {
            from,
            to,
            precision,
        }
    }

    /// Checks that the search terminates.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::InvalidInput`] if a bound is not finite or the
    /// precision is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(StrokeError::InvalidInput(format!(
                "angle search bounds must be finite, got [{}, {}]",
                self.from, self.to
            )));
        }
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(StrokeError::InvalidInput(format!(
                "angle search precision must be positive, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

/// Parameters of the canonical-pose normalization applied to candidates and
/// templates before comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeParams {
    /// Number of points after resampling.
    pub sample_count: usize,
    /// Side of the square the stroke is scaled into.
    pub square_size: f64,
    /// Where the centroid is moved to.
    pub origin: Point2,
    /// Rotate so the indicative angle becomes zero.
    pub rotate_to_zero: bool,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            square_size: 250.0,
            origin: Point2::origin(),
            rotate_to_zero: true,
        }
    }
}
