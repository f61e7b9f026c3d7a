//! Geometry kernel for unistroke gesture recognition.
//!
//! A [`Stroke`] holds the ordered points of one pen or touch gesture and
//! provides the normalizations and distances used by nearest-template
//! classifiers of the $1 / Protractor family.

pub mod corners;
pub mod error;
pub mod geometry;
pub mod math;
pub mod params;
pub mod stroke;

pub use corners::{CornerDetector, ShortStraw};
pub use error::{Result, StrokeError};
pub use geometry::{Point, PointRecord, Rectangle, StrokePoint};
pub use params::{AngleSearch, NormalizeParams};
pub use stroke::{AngleMatch, Stroke};
