//! Easing curves.

use std::f32::consts::PI;

/// Newton-Raphson iterations before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;
/// Slope below which Newton-Raphson is not trusted.
const NEWTON_MIN_SLOPE: f32 = 1e-6;
const BISECTION_PRECISION: f32 = 1e-7;
const BISECTION_MAX_ITERATIONS: usize = 32;

/// An easing curve mapping linear progress (0.0..=1.0) to eased progress.
///
/// Every curve returns exactly 0.0 at or before the start and exactly 1.0 at
/// or after the end. Between the ends a curve may overshoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Spring-like curve that overshoots and settles. Higher bounciness
    /// oscillates more.
    Elastic { bounciness: f32 },
    /// CSS-style cubic bezier through (0, 0), (x1, y1), (x2, y2), (1, 1).
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    pub const fn elastic(bounciness: f32) -> Self {
        Easing::Elastic { bounciness }
    }

    pub const fn bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Easing::CubicBezier { x1, y1, x2, y2 }
    }

    /// Apply the curve to progress `t`.
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Easing::Linear => t,
            Easing::Elastic { bounciness } => {
                let p = bounciness * PI;
                1.0 - (t * PI / 2.0).cos().powi(3) * (t * p).cos()
            }
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                if x1 == y1 && x2 == y2 {
                    return t;
                }
                let s = solve_bezier_x(t, x1, x2);
                bezier_component(s, y1, y2)
            }
        }
    }
}

/// One coordinate of the bezier at parameter `s`, given its two inner
/// control values.
fn bezier_component(s: f32, c1: f32, c2: f32) -> f32 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    ((a * s + b) * s + c) * s
}

fn bezier_slope(s: f32, c1: f32, c2: f32) -> f32 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    3.0 * a * s * s + 2.0 * b * s + c
}

/// Find the curve parameter whose x coordinate is `x`.
fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < NEWTON_MIN_SLOPE {
            break;
        }
        let err = bezier_component(s, x1, x2) - x;
        if err.abs() < BISECTION_PRECISION {
            return s;
        }
        s -= err / slope;
    }

    if (0.0..=1.0).contains(&s) && (bezier_component(s, x1, x2) - x).abs() < 1e-5 {
        return s;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECTION_MAX_ITERATIONS {
        let current = bezier_component(s, x1, x2);
        if (current - x).abs() < BISECTION_PRECISION {
            break;
        }
        if current < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAND: Easing = Easing::bezier(1.0, 0.2, 0.47, 0.97);

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::elastic(1.0), Easing::elastic(3.0), SAND] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
            assert_eq!(easing.apply(-0.5), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.5), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_elastic_overshoots() {
        let easing = Easing::elastic(1.0);
        let peak = (1..100)
            .map(|i| easing.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "peak {peak}");
        assert!(peak < 1.5, "peak {peak}");
    }

    #[test]
    fn test_bezier_is_monotone() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = SAND.apply(i as f32 / 100.0);
            assert!(v >= last - 1e-4, "step {i}: {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn test_bezier_starts_slow() {
        // x1 = 1.0 holds the curve back early on.
        assert!(SAND.apply(0.25) < 0.1);
        assert!(SAND.apply(0.9) > 0.8);
    }

    #[test]
    fn test_bezier_matches_parameter() {
        let (x1, y1, x2, y2) = (0.25, 0.1, 0.25, 1.0);
        let easing = Easing::bezier(x1, y1, x2, y2);
        for i in 1..10 {
            let s = i as f32 / 10.0;
            let x = bezier_component(s, x1, x2);
            let y = bezier_component(s, y1, y2);
            assert!((easing.apply(x) - y).abs() < 1e-3, "s = {s}");
        }
    }

    #[test]
    fn test_linear_bezier() {
        let easing = Easing::bezier(0.3, 0.3, 0.7, 0.7);
        assert_eq!(easing.apply(0.42), 0.42);
    }
}
