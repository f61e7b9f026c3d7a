use crate::geometry::Rectangle;
use crate::math::Point2;
use crate::stroke::{polyline_length, resample_points};

use super::CornerDetector;

/// ShortStraw corner finder (Wolin, Eoff, Hammond 2008).
///
/// The stroke is resampled at a spacing proportional to its bounding-box
/// diagonal. For each sample the "straw" is the chord between the samples
/// `window` steps before and after it; straws well below the median mark
/// corners. A post-processing pass then adds missed corners between
/// corners joined by a curved path and drops corners lying on a straight
/// run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortStraw {
    /// Resample spacing is `bbox diagonal / spacing_divisor`.
    pub spacing_divisor: f64,
    /// Samples on each side of a straw.
    pub window: usize,
    /// Straws shorter than `median_ratio × median` are corner candidates.
    pub median_ratio: f64,
    /// Chord over path length above which a run counts as a line.
    pub line_ratio: f64,
}

impl Default for ShortStraw {
    fn default() -> Self {
        Self {
            spacing_divisor: 40.0,
            window: 3,
            median_ratio: 0.95,
            line_ratio: 0.95,
        }
    }
}

impl CornerDetector for ShortStraw {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn detect(&self, points: &[Point2]) -> Vec<Point2> {
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return Vec::new();
        };
        if points.len() < 2 {
            return vec![first];
        }

        let Some(bbox) = Rectangle::enclosing(points.iter().copied()) else {
            return vec![first, last];
        };
        let spacing = bbox.diagonal() / self.spacing_divisor;
        let length = polyline_length(points);
        if spacing <= 0.0 || length <= 0.0 {
            return vec![first, last];
        }

        let count = (length / spacing).round() as usize + 1;
        let Ok(resampled) = resample_points(points, count.max(2)) else {
            return vec![first, last];
        };

        let indices = self.corner_indices(&resampled);
        tracing::trace!(
            samples = resampled.len(),
            spacing,
            corners = indices.len(),
            "short straw finished"
        );
        indices.into_iter().map(|i| resampled[i]).collect()
    }
}

impl ShortStraw {
    /// Corner indices into the evenly spaced `points`, first and last
    /// included.
    fn corner_indices(&self, points: &[Point2]) -> Vec<usize> {
        let n = points.len();
        let w = self.window.max(1);
        if n <= 2 * w {
            return vec![0, n - 1];
        }

        let mut straws = vec![f64::INFINITY; n];
        for i in w..n - w {
            straws[i] = nalgebra::distance(&points[i - w], &points[i + w]);
        }
        let threshold = median(&straws[w..n - w]) * self.median_ratio;

        let mut corners = vec![0];
        let mut i = w;
        while i < n - w {
            if straws[i] < threshold {
                let mut local_min = f64::INFINITY;
                let mut local_index = i;
                while i < n - w && straws[i] < threshold {
                    if straws[i] < local_min {
                        local_min = straws[i];
                        local_index = i;
                    }
                    i += 1;
                }
                corners.push(local_index);
            }
            i += 1;
        }
        corners.push(n - 1);

        self.post_process(points, &mut corners, &straws);
        corners
    }

    fn post_process(&self, points: &[Point2], corners: &mut Vec<usize>, straws: &[f64]) {
        // Split runs that bend until every run between corners is a line.
        loop {
            let mut inserted = false;
            let mut i = 1;
            while i < corners.len() {
                let (c1, c2) = (corners[i - 1], corners[i]);
                if !self.is_line(points, c1, c2) {
                    let mid = halfway_corner(straws, c1, c2);
                    if mid > c1 && mid < c2 {
                        corners.insert(i, mid);
                        inserted = true;
                    }
                }
                i += 1;
            }
            if !inserted {
                break;
            }
        }

        // Drop corners whose neighbours are joined by a line.
        let mut i = 1;
        while i + 1 < corners.len() {
            if self.is_line(points, corners[i - 1], corners[i + 1]) {
                corners.remove(i);
            } else {
                i += 1;
            }
        }
    }

    fn is_line(&self, points: &[Point2], a: usize, b: usize) -> bool {
        let path = polyline_length(&points[a..=b]);
        if path <= 0.0 {
            return true;
        }
        nalgebra::distance(&points[a], &points[b]) / path > self.line_ratio
    }
}

/// Index of the shortest straw in the middle half of `a..b`.
fn halfway_corner(straws: &[f64], a: usize, b: usize) -> usize {
    let quarter = (b - a) / 4;
    let mut best = a + quarter;
    let mut min = f64::INFINITY;
    for (i, &straw) in straws.iter().enumerate().take(b - quarter).skip(a + quarter) {
        if straw < min {
            min = straw;
            best = i;
        }
    }
    best
}

#[allow(clippy::cast_precision_loss)]
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) * 0.5
    } else {
        sorted[mid]
    }
}
