#![allow(dead_code, clippy::unwrap_used)]

use tracing_subscriber::EnvFilter;
use unistroke::{Point, Stroke};

/// Installs a test-scoped subscriber; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Densifies a polyline so each segment carries `per_segment` samples.
pub fn densify(vertices: &[(f64, f64)], per_segment: u32) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    for w in vertices.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        for k in 0..per_segment {
            let u = f64::from(k) / f64::from(per_segment);
            out.push((x0 + u * (x1 - x0), y0 + u * (y1 - y0)));
        }
    }
    if let Some(&last) = vertices.last() {
        out.push(last);
    }
    out
}

/// Deterministic jitter in `[-amplitude, amplitude]`.
pub fn jitter(i: usize, amplitude: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let v = ((i as f64) * 12.9898).sin() * 43_758.545_3;
    (v - v.floor() - 0.5) * 2.0 * amplitude
}

pub fn stroke(coords: &[(f64, f64)]) -> Stroke {
    Stroke::from_records(coords.iter().copied()).unwrap()
}

pub fn circle(radius: f64, samples: u32) -> Vec<(f64, f64)> {
    (0..=samples)
        .map(|k| {
            let a = std::f64::consts::TAU * f64::from(k) / f64::from(samples);
            (radius * a.cos(), radius * a.sin())
        })
        .collect()
}

pub fn points_close(a: &[Point], b: &[Point], tol: f64) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(p, q)| (p.x - q.x).abs() <= tol && (p.y - q.y).abs() <= tol)
}
