use core::fmt;

use crate::cubic_bezier::CubicBezier;
use crate::line_segment::LineSegment;
use crate::point::Point;
use crate::NativeFloat;

/// Number of evenly spaced parameter samples taken along each shape.
/// The parameter grid is t_i = i/(n-1) for i in 0..n, so at least two samples
/// are required for the spacing to be defined; construction rejects anything
/// coarser instead of letting a division by zero seed NaN into the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleResolution(usize);

impl SampleResolution {
    /// Smallest admissible sample count (endpoints only)
    pub const MIN: usize = 2;

    pub fn new(n: usize) -> Result<Self, ResolutionError> {
        if n < Self::MIN {
            Err(ResolutionError::TooCoarse(n))
        } else {
            Ok(SampleResolution(n))
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for SampleResolution {
    /// Five samples per shape, the interactive editor's start value
    fn default() -> Self {
        SampleResolution(5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionError {
    /// Fewer than [`SampleResolution::MIN`] samples were requested
    TooCoarse(usize),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::TooCoarse(n) => write!(
                f,
                "sample resolution {} is below the minimum of {}",
                n,
                SampleResolution::MIN
            ),
        }
    }
}

impl std::error::Error for ResolutionError {}

/// The closest pair found over the sampled grid: one point on the curve, one
/// on the line, and their Euclidean distance. Both points are exact members
/// of the sample sets, never interpolated any further, so the distance is
/// grid-resolution-dependent rather than the true geometric minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair<P> {
    pub curve_point: P,
    pub line_point: P,
    pub distance: NativeFloat,
}

/// Calculates the minimum distance pair between the sampled curve and the
/// sampled line by brute force over all n² point pairs.
///
/// The curve is evaluated at t_i = i/(n-1) with the Bernstein basis, the line
/// at u_j = j/(n-1) by linear interpolation. Ties are broken in favour of the
/// first pair encountered in row-major order (curve index outer, line index
/// inner); a later pair only wins with a strictly smaller distance.
///
/// O(n²) on purpose, with no spatial pruning: n is UI-driven and small.
pub fn closest_pair<P>(
    curve: &CubicBezier<P>,
    line: &LineSegment<P>,
    resolution: SampleResolution,
) -> ClosestPair<P>
where
    P: Point,
{
    let n = resolution.get();
    let spacing = (n - 1) as NativeFloat;

    // the start values never survive the scan since n >= 2 guarantees at
    // least one finite candidate pair
    let mut best = ClosestPair {
        curve_point: curve.start,
        line_point: line.start,
        distance: NativeFloat::INFINITY,
    };

    for i in 0..n {
        let t = i as NativeFloat / spacing;
        let p = curve.eval(t);
        for j in 0..n {
            let u = j as NativeFloat / spacing;
            let q = line.eval(u);
            let d = p.distance(q);
            if d < best.distance {
                best = ClosestPair {
                    curve_point: p,
                    line_point: q,
                    distance: d,
                };
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2;

    fn default_curve() -> CubicBezier<Point2<NativeFloat>> {
        CubicBezier::new(
            Point2::new(10f64, 80f64),
            Point2::new(45f64, 80f64),
            Point2::new(80f64, 45f64),
            Point2::new(80f64, 10f64),
        )
    }

    fn default_line() -> LineSegment<Point2<NativeFloat>> {
        LineSegment::new(Point2::new(300f64, 200f64), Point2::new(200f64, 300f64))
    }

    #[test]
    fn resolution_rejects_degenerate_counts() {
        assert_eq!(SampleResolution::new(0), Err(ResolutionError::TooCoarse(0)));
        assert_eq!(SampleResolution::new(1), Err(ResolutionError::TooCoarse(1)));
        assert!(SampleResolution::new(2).is_ok());
        assert_eq!(SampleResolution::default().get(), 5);
    }

    /// Default editor geometry at the default resolution yields a finite,
    /// positive distance, and the result matches an independently written
    /// brute-force scan over the same grid.
    #[test]
    fn default_geometry_scenario() {
        let curve = default_curve();
        let line = default_line();
        let res = SampleResolution::new(5).unwrap();

        let pair = closest_pair(&curve, &line, res);
        assert!(pair.distance.is_finite());
        assert!(pair.distance > 0.0);

        // independent reference scan
        let mut min_d = f64::INFINITY;
        for i in 0..5 {
            let t = i as f64 / 4.0;
            let p = curve.eval(t);
            for j in 0..5 {
                let u = j as f64 / 4.0;
                let q = line.eval(u);
                let d = p.distance(q);
                if d < min_d {
                    min_d = d;
                }
            }
        }
        assert_eq!(pair.distance, min_d);
        // and the reported points actually realize the reported distance
        assert_eq!(pair.curve_point.distance(pair.line_point), pair.distance);
    }

    /// Running the search twice on identical inputs must yield bit-identical
    /// results; the computation is a pure function of its inputs.
    #[test]
    fn determinism() {
        let curve = default_curve();
        let line = default_line();
        let res = SampleResolution::new(7).unwrap();

        let a = closest_pair(&curve, &line, res);
        let b = closest_pair(&curve, &line, res);
        assert_eq!(a, b);
    }

    /// The parameter grid always contains t=0 and t=1 exactly, so the curve's
    /// start and end control points are always candidates.
    #[test]
    fn endpoint_inclusion() {
        let curve = default_curve();
        // place the line's start right on the curve's start control point
        let line = LineSegment::new(Point2::new(10f64, 80f64), Point2::new(400f64, 380f64));

        for n in [2usize, 3, 5, 17] {
            let res = SampleResolution::new(n).unwrap();
            let pair = closest_pair(&curve, &line, res);
            assert_eq!(pair.distance, 0.0);
            assert_eq!(pair.curve_point, Point2::new(10f64, 80f64));
            assert_eq!(pair.line_point, Point2::new(10f64, 80f64));
        }
    }

    /// Two sample pairs at equal distance: the earlier pair in row-major
    /// order must be the one reported.
    #[test]
    fn tie_break_is_row_major_first() {
        // all curve samples collapse onto the origin
        let origin = Point2::new(0f64, 0f64);
        let curve = CubicBezier::new(origin, origin, origin, origin);
        // a vertical segment symmetric about y=0: with n=2 only the two
        // endpoints are sampled and both are equally far from the origin
        let line = LineSegment::new(Point2::new(10f64, -10f64), Point2::new(10f64, 10f64));

        let pair = closest_pair(&curve, &line, SampleResolution::new(2).unwrap());
        assert_eq!(pair.line_point, Point2::new(10f64, -10f64));
        assert_eq!(pair.curve_point, origin);
    }

    /// Degenerate line: every line sample is the same point, so the minimum
    /// equals the distance from the closest curve sample to that point.
    #[test]
    fn degenerate_line_collapses_to_point_distance() {
        let curve = default_curve();
        let anchor = Point2::new(50f64, 50f64);
        let line = LineSegment::new(anchor, anchor);
        let res = SampleResolution::new(9).unwrap();

        let pair = closest_pair(&curve, &line, res);
        assert_eq!(pair.line_point, anchor);

        let mut min_d = f64::INFINITY;
        for i in 0..9 {
            let t = i as f64 / 8.0;
            let d = curve.eval(t).distance(anchor);
            if d < min_d {
                min_d = d;
            }
        }
        assert_eq!(pair.distance, min_d);
    }

    /// Degenerate curve: all control points coincident, every curve sample is
    /// exactly that point and the result distance is the point-to-segment
    /// sampled minimum.
    #[test]
    fn degenerate_curve_collapses_to_point() {
        let origin = Point2::new(0f64, 0f64);
        let curve = CubicBezier::new(origin, origin, origin, origin);
        let line = LineSegment::new(Point2::new(3f64, 4f64), Point2::new(3f64, -4f64));

        let pair = closest_pair(&curve, &line, SampleResolution::new(3).unwrap());
        assert_eq!(pair.curve_point, origin);
        // midpoint sample (3, 0) is the closest of the three line samples
        assert_eq!(pair.line_point, Point2::new(3f64, 0f64));
        assert_eq!(pair.distance, 3.0);
    }

    /// N=2 samples only the shape endpoints; with a straight "curve" parallel
    /// to the line, the first of the equally distant endpoint pairs wins.
    #[test]
    fn minimal_resolution_samples_endpoints_only() {
        let curve = CubicBezier::new(
            Point2::new(0f64, 0f64),
            Point2::new(1f64, 0f64),
            Point2::new(2f64, 0f64),
            Point2::new(3f64, 0f64),
        );
        let line = LineSegment::new(Point2::new(0f64, 1f64), Point2::new(3f64, 1f64));

        let pair = closest_pair(&curve, &line, SampleResolution::new(2).unwrap());
        assert_eq!(pair.distance, 1.0);
        // (t=0, u=0) precedes the equally distant (t=1, u=1) in scan order
        assert_eq!(pair.curve_point, Point2::new(0f64, 0f64));
        assert_eq!(pair.line_point, Point2::new(0f64, 1f64));
    }
}
