//! Timing-curve descriptions
//!
//! These are curve *descriptions* only; Tinct does not ship an animation
//! scheduler. Hosts sample a curve with [`Easing::apply`] and drive their own
//! clock. The named variants carry the Core Animation control points so a
//! curve resolved from the token store matches the platform's media timing
//! functions exactly.

/// A unit timing curve mapping progress `t ∈ [0, 1]` to eased progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Core Animation `easeIn`: cubic-bezier(0.42, 0, 1, 1)
    EaseIn,
    /// Core Animation `easeOut`: cubic-bezier(0, 0, 0.58, 1)
    EaseOut,
    /// Core Animation `easeInEaseOut`: cubic-bezier(0.42, 0, 0.58, 1)
    EaseInOut,
    /// Custom control points (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseInOut
    }
}

impl Easing {
    /// Control points of this curve in CSS / Core Animation form
    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => (*x1, *y1, *x2, *y2),
        }
    }

    /// Apply the curve to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            _ => {
                let (x1, y1, x2, y2) = self.control_points();
                cubic_bezier_ease(t, x1, y1, x2, y2)
            }
        }
    }
}

/// Cubic bezier easing calculation (matches CSS spec / browser implementations).
///
/// Uses Newton-Raphson with binary-search fallback for robustness.
/// Computes in f64 internally to avoid f32 precision jitter.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Endpoints are always exact
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let x1 = x1 as f64;
    let y1 = y1 as f64;
    let x2 = x2 as f64;
    let y2 = y2 as f64;

    // Solve for parameter `p` where bezier_x(p) == x using Newton-Raphson,
    // falling back to binary search if the slope is too flat.
    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    // Binary search fallback (always converges)
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..20 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// Evaluate cubic bezier at parameter t with endpoints fixed at 0 and 1
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

/// Derivative of the bezier polynomial above
#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_symmetric_midpoint() {
        let mid = Easing::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-3, "midpoint was {mid}");
    }

    #[test]
    fn test_ease_in_slow_start() {
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
    }

    #[test]
    fn test_monotonic() {
        let e = Easing::EaseInOut;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = e.apply(i as f32 / 100.0);
            assert!(v >= prev, "not monotonic at step {i}");
            prev = v;
        }
    }
}
