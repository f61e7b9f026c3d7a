use super::PHI;

/// Result of a golden-section minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenSectionMin {
    /// Argument of the smaller of the two final probes.
    pub x: f64,
    /// Objective value at `x`.
    pub value: f64,
    /// Number of narrowing steps performed after the two initial probes.
    pub iterations: usize,
}

/// Minimizes a unimodal objective over `[a, b]` by golden-section search.
///
/// Two interior probes `x1 = φa + (1 − φ)b` and `x2 = (1 − φ)a + φb` are
/// kept. Each step discards the half-interval beyond the worse probe and
/// evaluates only one new probe, so the objective is called
/// `iterations + 2` times. The search stops once `|b − a| <= threshold`,
/// after at most `ceil(log(|b − a| / threshold) / log(1 / φ))` steps, or as
/// soon as a step no longer narrows the bracket. The latter happens when
/// `threshold` is below the float spacing around `a` and `b`.
///
/// # Errors
///
/// Propagates the first error returned by `f`.
pub fn golden_section_search<F, E>(
    mut f: F,
    mut a: f64,
    mut b: f64,
    threshold: f64,
) -> Result<GoldenSectionMin, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let mut x1 = PHI * a + (1.0 - PHI) * b;
    let mut f1 = f(x1)?;
    let mut x2 = (1.0 - PHI) * a + PHI * b;
    let mut f2 = f(x2)?;
    let mut iterations = 0;

    let mut width = (b - a).abs();
    while width > threshold {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1.0 - PHI) * b;
            f1 = f(x1)?;
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * a + PHI * b;
            f2 = f(x2)?;
        }
        iterations += 1;

        let narrowed = (b - a).abs();
        if narrowed >= width {
            break;
        }
        width = narrowed;
    }

    let (x, value) = if f1 < f2 { (x1, f1) } else { (x2, f2) };
    Ok(GoldenSectionMin {
        x,
        value,
        iterations,
    })
}
