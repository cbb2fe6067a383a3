use crate::point::Point;
use crate::NativeFloat;

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Evaluate a CubicBezier curve at t by direct evaluation of the Bernstein
    /// basis polynomial. This is the evaluation the sampled closest-pair search
    /// is defined over, so it stays the direct form on purpose.
    pub fn eval(&self, t: NativeFloat) -> P {
        let one_t = 1.0 - t;
        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (3.0 * t * one_t * one_t)
            + self.ctrl2 * (3.0 * t * t * one_t)
            + self.end * (t * t * t)
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: NativeFloat) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    /// Returns the control points in curve order [start, ctrl1, ctrl2, end]
    pub fn control_points(&self) -> [P; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Returns a copy of the curve with the control point at `index` (0..=3)
    /// replaced by `point`, leaving self untouched. The arity of the curve is
    /// fixed by the type, so an out of range index is a contract violation.
    ///
    /// # Panics
    /// Panics if `index > 3`.
    pub fn with_control_point(&self, index: usize, point: P) -> Self {
        let mut curve = *self;
        match index {
            0 => curve.start = point,
            1 => curve.ctrl1 = point,
            2 => curve.ctrl2 = point,
            3 => curve.end = point,
            _ => panic!("cubic bezier control point index out of range: {}", index),
        }
        curve
    }
}
