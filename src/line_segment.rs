use crate::point::Point;
use crate::NativeFloat;

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter u: [0,1] in eval()
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment<P> {
    pub(crate) start: P,
    pub(crate) end: P,
}

impl<P> LineSegment<P>
where
    P: Point,
{
    pub fn new(start: P, end: P) -> Self {
        LineSegment { start, end }
    }

    /// Evaluate the segment at u by linear interpolation between the endpoints
    pub fn eval(&self, u: NativeFloat) -> P {
        self.start * (1.0 - u) + self.end * u
    }

    /// Returns the endpoints in segment order [start, end]
    pub fn endpoints(&self) -> [P; 2] {
        [self.start, self.end]
    }

    /// Returns a copy of the segment with the endpoint at `index` (0 or 1)
    /// replaced by `point`, leaving self untouched.
    ///
    /// # Panics
    /// Panics if `index > 1`.
    pub fn with_endpoint(&self, index: usize, point: P) -> Self {
        let mut line = *self;
        match index {
            0 => line.start = point,
            1 => line.end = point,
            _ => panic!("line segment endpoint index out of range: {}", index),
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point2, EPSILON};

    /// Check whether a line segment interpolation at u=0.5
    /// yields equal distance to the start/end points (up to machine accuracy).
    #[test]
    fn interpolation_midpoint() {
        let line = LineSegment::new(Point2::new(0f64, 1.77f64), Point2::new(4.3f64, 3f64));

        let mid = line.eval(0.5);
        assert!((mid.distance(line.start) - mid.distance(line.end)).abs() < EPSILON);
    }

    #[test]
    fn eval_endpoints() {
        let line = LineSegment::new(Point2::new(300f64, 200f64), Point2::new(200f64, 300f64));
        assert_eq!(line.eval(0.0), line.start);
        assert_eq!(line.eval(1.0), line.end);
    }

    /// A zero-length segment is legal input and interpolates to its single point
    #[test]
    fn eval_degenerate_segment() {
        let p = Point2::new(50f64, 50f64);
        let line = LineSegment::new(p, p);
        for u in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(line.eval(u), p);
        }
    }

    #[test]
    fn with_endpoint_replaces_single_slot() {
        let line = LineSegment::new(Point2::new(300f64, 200f64), Point2::new(200f64, 300f64));
        let moved = line.with_endpoint(1, Point2::new(0f64, 0f64));

        assert_eq!(moved.endpoints(), [Point2::new(300f64, 200f64), Point2::new(0f64, 0f64)]);
        assert_eq!(line.endpoints()[1], Point2::new(200f64, 300f64));
    }

    #[test]
    #[should_panic]
    fn with_endpoint_rejects_out_of_range_index() {
        let p = Point2::new(0f64, 0f64);
        let line = LineSegment::new(p, p);
        let _ = line.with_endpoint(2, p);
    }
}
