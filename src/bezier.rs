use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BISECTIONS, X_TOLERANCE};

/// A point in track coordinates. Y grows downward; the bump peak sits at
/// negative Y above the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One cubic Bézier segment of the track: two endpoints and two interior
/// tangent controls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

/// Cubic Bernstein blend: (1-t)³a + 3(1-t)²tb + 3(1-t)t²c + t³d
fn blend(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * a + 3.0 * mt * mt * t * b + 3.0 * mt * t * t * c + t * t * t * d
}

impl CubicSegment {
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// X(t) for t in [0, 1].
    pub fn x_at(&self, t: f64) -> f64 {
        blend(self.p0.x, self.p1.x, self.p2.x, self.p3.x, t)
    }

    /// Y(t) for t in [0, 1].
    pub fn y_at(&self, t: f64) -> f64 {
        blend(self.p0.y, self.p1.y, self.p2.y, self.p3.y, t)
    }

    /// Y at a target X, by bisection on X(t).
    ///
    /// The curve is parameterized by t, not X, and X(t) has no closed-form
    /// inverse in general, so t is found numerically: halve [tMin, tMax]
    /// until X(t) is within `X_TOLERANCE` of the target or `MAX_BISECTIONS`
    /// iterations have run, then return Y at that t.
    ///
    /// Precondition: X(t) increases monotonically from p0 to p3. The track
    /// constructor's control-point layout guarantees this for the parameter
    /// ranges the slider exposes; if the shoulder controls are pushed past
    /// the peak controls (curve top wider than the section), the bracket
    /// can close on the wrong fold and the result is approximate.
    pub fn y_at_x(&self, target_x: f64) -> f64 {
        let mut t_min = 0.0;
        let mut t_max = 1.0;
        let mut t = 0.5;

        for _ in 0..MAX_BISECTIONS {
            let x = self.x_at(t);
            if (x - target_x).abs() < X_TOLERANCE {
                break;
            }
            if x < target_x {
                t_min = t;
            } else {
                t_max = t;
            }
            t = (t_min + t_max) / 2.0;
        }

        self.y_at(t)
    }
}
