pub mod golden_section;

pub use golden_section::{golden_section_search, GoldenSectionMin};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Number of points a stroke is resampled to when no count is given.
pub const DEFAULT_SAMPLE_COUNT: usize = 64;

/// Half-width of the default rotation search bracket (45°).
pub const ANGLE_RANGE: f64 = std::f64::consts::FRAC_PI_4;

/// Default rotation search precision (2°).
pub const ANGLE_PRECISION: f64 = 2.0 * std::f64::consts::PI / 180.0;

/// Golden ratio conjugate, `(√5 − 1) / 2`.
pub const PHI: f64 = 0.618_033_988_749_894_9;

/// Converts degrees to radians.
#[must_use]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[must_use]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phi_matches_closed_form() {
        let phi = 0.5 * (5.0_f64.sqrt() - 1.0);
        assert!((PHI - phi).abs() < 1e-15);
    }

    #[test]
    fn default_search_constants() {
        assert!((rad_to_deg(ANGLE_RANGE) - 45.0).abs() < 1e-12);
        assert!((rad_to_deg(ANGLE_PRECISION) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn degree_conversions_invert() {
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert!((rad_to_deg(deg_to_rad(37.5)) - 37.5).abs() < 1e-12);
    }
}
