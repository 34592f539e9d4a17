//! Piecewise-linear interpolation and trapezoidal integration over sampled curves.
//!
//! Thrust curves arrive as strictly increasing sample times with one thrust value
//! per time. Everything downstream (resampling, mass depletion, plotting) goes
//! through the helpers here so there is exactly one interpolation strategy.

/// Linear interpolation between two knots.
pub fn linear_interp(a: (f64, f64), b: (f64, f64), x: f64) -> f64 {
    let (x0, y0) = a;
    let (x1, y1) = b;
    if (x1 - x0).abs() < 1e-12 {
        return y0;
    }
    let u = (x - x0) / (x1 - x0);
    y0 + u * (y1 - y0)
}

/// Evaluate a sampled curve at `t`.
///
/// Returns 0 outside `[times[0], times[last]]` and for non-finite `t`.
/// `times` must be strictly increasing and the same length as `values`.
pub fn interpolate_samples(t: f64, times: &[f64], values: &[f64]) -> f64 {
    let len = times.len().min(values.len());
    if len == 0 || t.is_nan() {
        return 0.0;
    }
    if t < times[0] || t > times[len - 1] {
        return 0.0;
    }

    // First knot with time >= t.
    let hi = times[..len].partition_point(|&x| x < t);
    if hi == 0 {
        return values[0];
    }
    linear_interp(
        (times[hi - 1], values[hi - 1]),
        (times[hi], values[hi]),
        t,
    )
}

/// Trapezoidal integral over all samples.
pub fn trapezoid(times: &[f64], values: &[f64]) -> f64 {
    let len = times.len().min(values.len());
    (1..len)
        .map(|i| 0.5 * (values[i - 1] + values[i]) * (times[i] - times[i - 1]))
        .sum()
}

/// Trapezoidal integral of the interpolated curve from `times[0]` up to `t`.
///
/// Clamped to `[0, trapezoid(times, values)]`.
pub fn cumulative_trapezoid(t: f64, times: &[f64], values: &[f64]) -> f64 {
    let len = times.len().min(values.len());
    if len < 2 || t.is_nan() || t <= times[0] {
        return 0.0;
    }
    if t >= times[len - 1] {
        return trapezoid(times, values);
    }

    let mut area = 0.0;
    for i in 1..len {
        let (t0, t1) = (times[i - 1], times[i]);
        if t >= t1 {
            area += 0.5 * (values[i - 1] + values[i]) * (t1 - t0);
            continue;
        }
        let v_t = linear_interp((t0, values[i - 1]), (t1, values[i]), t);
        area += 0.5 * (values[i - 1] + v_t) * (t - t0);
        break;
    }
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMES: [f64; 4] = [0.0, 0.1, 1.0, 2.0];
    const THRUST: [f64; 4] = [0.0, 100.0, 80.0, 0.0];

    #[test]
    fn interpolates_between_knots() {
        assert!((interpolate_samples(0.05, &TIMES, &THRUST) - 50.0).abs() < 1e-12);
        assert!((interpolate_samples(1.5, &TIMES, &THRUST) - 40.0).abs() < 1e-12);
        assert_eq!(interpolate_samples(0.1, &TIMES, &THRUST), 100.0);
    }

    #[test]
    fn zero_outside_the_sampled_range() {
        assert_eq!(interpolate_samples(-0.01, &TIMES, &THRUST), 0.0);
        assert_eq!(interpolate_samples(2.01, &TIMES, &THRUST), 0.0);
        assert_eq!(interpolate_samples(f64::INFINITY, &TIMES, &THRUST), 0.0);
        assert_eq!(interpolate_samples(f64::NAN, &TIMES, &THRUST), 0.0);
    }

    #[test]
    fn late_first_sample_is_zero_before_it() {
        let times = [0.5, 1.0];
        let thrust = [20.0, 10.0];
        assert_eq!(interpolate_samples(0.25, &times, &thrust), 0.0);
        assert_eq!(interpolate_samples(0.5, &times, &thrust), 20.0);
    }

    #[test]
    fn trapezoid_matches_hand_computation() {
        // 0.5*100*0.1 + 0.5*180*0.9 + 0.5*80*1.0
        let expected = 5.0 + 81.0 + 40.0;
        assert!((trapezoid(&TIMES, &THRUST) - expected).abs() < 1e-9);
    }

    #[test]
    fn cumulative_trapezoid_is_monotone_and_bounded() {
        let total = trapezoid(&TIMES, &THRUST);
        let mut prev = 0.0;
        for i in 0..=40 {
            let t = -0.5 + i as f64 * 0.075;
            let area = cumulative_trapezoid(t, &TIMES, &THRUST);
            assert!(area >= prev - 1e-12, "area decreased at t={t}");
            assert!(area <= total + 1e-12);
            prev = area;
        }
        assert!((cumulative_trapezoid(0.1, &TIMES, &THRUST) - 5.0).abs() < 1e-12);
        assert_eq!(cumulative_trapezoid(f64::INFINITY, &TIMES, &THRUST), total);
    }
}
