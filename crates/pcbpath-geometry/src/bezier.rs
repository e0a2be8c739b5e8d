//! One-dimensional Bezier helpers.
//!
//! Everything here works on a single coordinate stream (all x values or all
//! y values of a curve's control points). Callers run them once per axis.

use pcbpath_core::config::MAX_BEZIER_STEPS;

/// Coefficients below this are treated as zero when solving for extrema.
const EPS: f64 = 1e-12;

/// Sample a quadratic Bezier at `t = k / steps` for `k = 0..=steps` using
/// forward differences.
///
/// Returns `steps + 1` values; the last one is exactly `p[2]`. `steps` is
/// clamped to `1..=MAX_BEZIER_STEPS`.
#[must_use]
pub fn quadratic_points(p: [f64; 3], steps: usize) -> Vec<f64> {
    let steps = steps.clamp(1, MAX_BEZIER_STEPS);
    let [p0, p1, p2] = p;
    let t = 1.0 / steps as f64;
    let t2 = t * t;

    let mut f = p0;
    let mut fd = 2.0 * (p1 - p0) * t;
    let fdd_per_2 = (p0 - 2.0 * p1 + p2) * t2;
    let fdd = 2.0 * fdd_per_2;

    let mut out = Vec::with_capacity(steps + 1);
    for _ in 0..steps {
        out.push(f);
        f += fd + fdd_per_2;
        fd += fdd;
    }
    out.push(p2);
    out
}

/// Sample a cubic Bezier at `t = k / steps` for `k = 0..=steps` using
/// forward differences.
///
/// Returns `steps + 1` values; the last one is exactly `p[3]`. `steps` is
/// clamped like [`quadratic_points`].
#[must_use]
pub fn cubic_points(p: [f64; 4], steps: usize) -> Vec<f64> {
    let steps = steps.clamp(1, MAX_BEZIER_STEPS);
    let [p0, p1, p2, p3] = p;
    let t = 1.0 / steps as f64;
    let t2 = t * t;

    let mut f = p0;
    let mut fd = 3.0 * (p1 - p0) * t;
    let mut fdd_per_2 = 3.0 * (p0 - 2.0 * p1 + p2) * t2;
    let fddd_per_2 = 3.0 * (3.0 * (p1 - p2) + p3 - p0) * t2 * t;

    let fddd = 2.0 * fddd_per_2;
    let mut fdd = 2.0 * fdd_per_2;
    let fddd_per_6 = fddd_per_2 / 3.0;

    let mut out = Vec::with_capacity(steps + 1);
    for _ in 0..steps {
        out.push(f);
        f += fd + fdd_per_2 + fddd_per_6;
        fd += fdd + fddd_per_2;
        fdd += fddd;
        fdd_per_2 += fddd_per_2;
    }
    out.push(p3);
    out
}

#[must_use]
pub fn quadratic_at(p: [f64; 3], t: f64) -> f64 {
    let t2 = t * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    p[0] * mt2 + p[1] * 2.0 * mt * t + p[2] * t2
}

#[must_use]
pub fn cubic_at(p: [f64; 4], t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;
    p[0] * mt3 + p[1] * 3.0 * mt2 * t + p[2] * 3.0 * mt * t2 + p[3] * t3
}

/// `(min, max)` of a quadratic Bezier over `t` in `[0, 1]`.
#[must_use]
pub fn quadratic_bounds(p: [f64; 3]) -> (f64, f64) {
    let [p0, p1, p2] = p;
    let mut min = p0.min(p2);
    let mut max = p0.max(p2);

    // B'(t) = 2 * ((p1 - p0) + t * (p0 - 2 p1 + p2))
    let denom = p0 - 2.0 * p1 + p2;
    if denom.abs() > EPS {
        let t = (p0 - p1) / denom;
        if (0.0..=1.0).contains(&t) {
            let v = quadratic_at(p, t);
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min, max)
}

/// `(min, max)` of a cubic Bezier over `t` in `[0, 1]`.
///
/// Stationary points are classified by the sign of the second derivative:
/// only minima lower `min`, only maxima raise `max`, inflections are ignored.
#[must_use]
pub fn cubic_bounds(p: [f64; 4]) -> (f64, f64) {
    let [p0, p1, p2, p3] = p;
    let mut min = p0.min(p3);
    let mut max = p0.max(p3);

    // B'(t) / 3 = a t^2 + b t + c, B''(t) / 3 = 2 a t + b
    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let b = 2.0 * (p0 - 2.0 * p1 + p2);
    let c = p1 - p0;

    let mut fold = |t: f64| {
        if !(0.0..=1.0).contains(&t) {
            return;
        }
        let curvature = 2.0 * a * t + b;
        let v = cubic_at(p, t);
        if curvature > 0.0 {
            min = min.min(v);
        } else if curvature < 0.0 {
            max = max.max(v);
        }
    };

    if a.abs() < EPS {
        if b.abs() >= EPS {
            fold(-c / b);
        }
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let root = disc.sqrt();
            fold((-b + root) / (2.0 * a));
            fold((-b - root) / (2.0 * a));
        }
    }
    (min, max)
}
