//! Cubic Bezier evaluation for hill profiles

/// A 2D point `(x, y)`.
pub type Point2 = (f32, f32);

/// A cubic Bezier curve defined by four control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    /// Start point (P0)
    pub p0: Point2,
    /// First control point (P1)
    pub p1: Point2,
    /// Second control point (P2)
    pub p2: Point2,
    /// End point (P3)
    pub p3: Point2,
}

/// Ease-in/ease-out rise from base (0, 0) to peak (1, 1) shared by every hill.
pub const HILL_FALLOFF: CubicBezier = CubicBezier {
    p0: (0.0, 0.0),
    p1: (0.52, 0.06),
    p2: (0.42, 0.95),
    p3: (1.0, 1.0),
};

impl CubicBezier {
    pub const fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter `t`.
    pub fn evaluate(&self, t: f32) -> Point2 {
        evaluate_cubic(t, self.p0, self.p1, self.p2, self.p3)
    }
}

/// Evaluate `B(t) = (1-t)^3*P0 + 3*(1-t)^2*t*P1 + 3*(1-t)*t^2*P2 + t^3*P3`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate the polynomial.
pub fn evaluate_cubic(t: f32, p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Point2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    let w0 = mt3;
    let w1 = 3.0 * mt2 * t;
    let w2 = 3.0 * mt * t2;
    let w3 = t3;

    (
        w0 * p0.0 + w1 * p1.0 + w2 * p2.0 + w3 * p3.0,
        w0 * p0.1 + w1 * p1.1 + w2 * p2.1 + w3 * p3.1,
    )
}
