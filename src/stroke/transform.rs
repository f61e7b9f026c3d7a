use nalgebra::Rotation2;

use crate::error::{Result, StrokeError};
use crate::geometry::StrokePoint;
use crate::math::Point2;
use crate::params::NormalizeParams;

use super::Stroke;

impl<P: StrokePoint> Stroke<P> {
    /// Reverses the drawing order.
    pub fn reverse(&mut self) -> &mut Self {
        self.points.reverse();
        self.invalidate();
        self
    }

    /// Negates every x coordinate.
    pub fn flip_x(&mut self) -> &mut Self {
        for p in &mut self.points {
            let (x, y) = (p.x(), p.y());
            p.set_position(-x, y);
        }
        self.invalidate();
        self
    }

    /// Negates every y coordinate.
    pub fn flip_y(&mut self) -> &mut Self {
        for p in &mut self.points {
            let (x, y) = (p.x(), p.y());
            p.set_position(x, -y);
        }
        self.invalidate();
        self
    }

    /// Rotates every point about the centroid by `angle` radians
    /// (counter-clockwise for a y-up frame).
    pub fn rotate_by(&mut self, angle: f64) -> &mut Self {
        let c = self.centroid();
        let rot = Rotation2::new(angle);
        for p in &mut self.points {
            let q = c + rot * (p.position() - c);
            p.set_position(q.x, q.y);
        }
        self.invalidate();
        self
    }

    /// Scales x by `width / bbox.width` and y by `height / bbox.height`, so
    /// the bounding box becomes `width × height`. Scaling is about the
    /// coordinate origin, not the centroid.
    ///
    /// # Errors
    ///
    /// Returns [`StrokeError::DegenerateStroke`] if a bounding-box dimension
    /// is zero, or so small that the scale factor overflows. The stroke is
    /// left unchanged.
    pub fn scale_to(&mut self, width: f64, height: f64) -> Result<&mut Self> {
        let bbox = self.bounding_box();
        let sx = width / bbox.width;
        let sy = height / bbox.height;
        if !sx.is_finite() || !sy.is_finite() {
            tracing::debug!(
                width = bbox.width,
                height = bbox.height,
                "rejecting scale of flat bounding box"
            );
            return Err(StrokeError::DegenerateStroke(format!(
                "cannot scale a {} x {} bounding box",
                bbox.width, bbox.height
            )));
        }
        for p in &mut self.points {
            let (x, y) = (p.x(), p.y());
            p.set_position(x * sx, y * sy);
        }
        self.invalidate();
        Ok(self)
    }

    /// [`Stroke::scale_to`] with equal width and height.
    ///
    /// # Errors
    ///
    /// Same as [`Stroke::scale_to`].
    pub fn scale_to_uniform(&mut self, size: f64) -> Result<&mut Self> {
        self.scale_to(size, size)
    }

    /// Shifts every point so the centroid lands on `target`.
    pub fn translate_to(&mut self, target: Point2) -> &mut Self {
        let delta = target - self.centroid();
        for p in &mut self.points {
            let q = p.position() + delta;
            p.set_position(q.x, q.y);
        }
        self.invalidate();
        self
    }

    /// Brings the stroke into canonical pose: resample, optionally rotate the
    /// indicative angle to zero, scale into the square, move the centroid to
    /// the origin.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Stroke::resample`] and
    /// [`Stroke::scale_to`]. A failed step may leave earlier steps applied.
    pub fn normalize(&mut self, params: &NormalizeParams) -> Result<&mut Self> {
        self.resample(params.sample_count)?;
        if params.rotate_to_zero {
            let angle = self.indicative_angle();
            self.rotate_by(-angle);
        }
        self.scale_to_uniform(params.square_size)?;
        self.translate_to(params.origin);
        Ok(self)
    }
}
