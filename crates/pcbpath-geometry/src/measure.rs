use pcbpath_core::Point;

/// Length of the polyline through `(xs[i], ys[i])`.
///
/// Extra values in the longer slice are ignored. Fewer than two points have
/// no length.
#[must_use]
pub fn path_length(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    (1..n)
        .map(|i| (xs[i] - xs[i - 1]).hypot(ys[i] - ys[i - 1]))
        .sum()
}

#[must_use]
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_and_single_point_have_no_length() {
        assert_eq!(path_length(&[], &[]), 0.0);
        assert_eq!(path_length(&[1.0], &[2.0]), 0.0);
        assert_eq!(polyline_length(&[Point::new(1.0, 2.0)]), 0.0);
    }

    #[test]
    fn sums_segment_lengths() {
        assert_abs_diff_eq!(
            path_length(&[0.0, 3.0, 3.0], &[0.0, 4.0, 0.0]),
            9.0,
            epsilon = 1e-12
        );
        let pts = [Point::new(0.0, 0.0), Point::new(0.0, 2.0), Point::new(2.0, 2.0)];
        assert_abs_diff_eq!(polyline_length(&pts), 4.0, epsilon = 1e-12);
    }
}
