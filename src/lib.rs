//! curvegap
//! A small library for interactively exploring the minimum distance between
//! a cubic Bézier curve and a line segment. Both shapes are discretized at a
//! user-chosen sample resolution and the closest pair among all sampled
//! points is returned together with its Euclidean distance. The result is
//! grid-resolution-dependent by design; there is no root finding and no
//! continuous optimization involved.
//!
//! The editor module carries the surrounding interaction state (draggable
//! control points, a show toggle and a sample-resolution setting) as a plain
//! state machine, and the svg module renders the scene as path data strings
//! so a host canvas can display it.

pub use tinyvec::ArrayVec;

mod point;
pub use crate::point::Point;

mod point2;
pub use crate::point2::Point2;

mod cubic_bezier;
pub use crate::cubic_bezier::CubicBezier;

mod line_segment;
pub use crate::line_segment::LineSegment;

mod proximity;
pub use crate::proximity::{closest_pair, ClosestPair, ResolutionError, SampleResolution};

mod editor;
pub use crate::editor::{DragState, Editor, Handle, HANDLE_RADIUS};

mod svg;
pub use crate::svg::{
    curve_path_data, format_distance, line_path_data, scene_svg, segment_path_data, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};

/// The floating point type used for all scalar values in the library
pub type NativeFloat = f64;

/// Tolerance below which two scalar values are considered equal in tests
/// and degeneracy checks
pub const EPSILON: NativeFloat = 1e-10;
