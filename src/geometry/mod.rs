pub mod point;
pub mod rect;

pub use point::{Point, PointRecord, StrokePoint};
pub use rect::Rectangle;
