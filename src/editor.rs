use tinyvec::ArrayVec;

use crate::cubic_bezier::CubicBezier;
use crate::line_segment::LineSegment;
use crate::point::Point;
use crate::proximity::{closest_pair, ClosestPair, ResolutionError, SampleResolution};
use crate::{NativeFloat, Point2};

/// Pick radius around a handle in canvas units, matching the drawn circle radius
pub const HANDLE_RADIUS: NativeFloat = 6.0;

/// Which point, if any, a drag gesture is currently moving.
/// A drag begins on pointer-down over a handle and ends on pointer-up
/// anywhere on the canvas, not just over the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragging one of the four curve control points (0..=3)
    CurvePoint(usize),
    /// Dragging one of the two line endpoints (0 or 1)
    LinePoint(usize),
}

/// A draggable handle: where it is drawn and which drag state a hit enters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Handle<P> {
    pub target: DragState,
    pub position: P,
}

/// Interaction state for one curve and one line on a canvas.
///
/// Owns the geometry, the sample resolution, the show toggle and the drag
/// state machine. The closest-pair result is cached and recomputed only when
/// one of its inputs changed since the last query; the show toggle gates the
/// computation entirely so a hidden result costs nothing.
#[derive(Debug, Clone)]
pub struct Editor<P> {
    curve: CubicBezier<P>,
    line: LineSegment<P>,
    resolution: SampleResolution,
    show: bool,
    drag: DragState,
    cached: Option<ClosestPair<P>>,
    dirty: bool,
}

impl<P> Editor<P>
where
    P: Point,
{
    pub fn with_geometry(curve: CubicBezier<P>, line: LineSegment<P>) -> Self {
        Editor {
            curve,
            line,
            resolution: SampleResolution::default(),
            show: false,
            drag: DragState::Idle,
            cached: None,
            dirty: true,
        }
    }

    pub fn curve(&self) -> &CubicBezier<P> {
        &self.curve
    }

    pub fn line(&self) -> &LineSegment<P> {
        &self.line
    }

    pub fn resolution(&self) -> SampleResolution {
        self.resolution
    }

    pub fn show(&self) -> bool {
        self.show
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// All six draggable handles in draw order: curve control points first,
    /// then the line endpoints.
    pub fn handles(&self) -> ArrayVec<[Handle<P>; 6]> {
        let mut handles = ArrayVec::new();
        for (i, position) in self.curve.control_points().into_iter().enumerate() {
            handles.push(Handle {
                target: DragState::CurvePoint(i),
                position,
            });
        }
        for (i, position) in self.line.endpoints().into_iter().enumerate() {
            handles.push(Handle {
                target: DragState::LinePoint(i),
                position,
            });
        }
        handles
    }

    /// Begin a drag if the pointer is over a handle; otherwise stay Idle.
    /// Handles drawn later sit on top, so hit-testing walks the draw order
    /// in reverse and the topmost handle under the pointer wins.
    pub fn pointer_down(&mut self, pointer: P) {
        for handle in self.handles().iter().rev() {
            if handle.position.distance(pointer) <= HANDLE_RADIUS {
                self.drag = handle.target;
                return;
            }
        }
    }

    /// Move the dragged point to the pointer position. No-op while Idle.
    pub fn pointer_move(&mut self, pointer: P) {
        match self.drag {
            DragState::Idle => {}
            DragState::CurvePoint(index) => {
                self.curve = self.curve.with_control_point(index, pointer);
                self.dirty = true;
            }
            DragState::LinePoint(index) => {
                self.line = self.line.with_endpoint(index, pointer);
                self.dirty = true;
            }
        }
    }

    /// End any drag in progress, wherever the pointer currently is
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Change the sample resolution; values below the minimum are rejected
    /// and leave the current resolution in place.
    pub fn set_resolution(&mut self, n: usize) -> Result<(), ResolutionError> {
        let resolution = SampleResolution::new(n)?;
        if resolution != self.resolution {
            self.resolution = resolution;
            self.dirty = true;
        }
        Ok(())
    }

    pub fn set_show(&mut self, show: bool) {
        self.show = show;
    }

    /// The closest sampled pair for the current geometry and resolution, or
    /// None while the show toggle is off. Recomputes only when an input
    /// changed since the last call.
    pub fn closest_pair(&mut self) -> Option<ClosestPair<P>> {
        if !self.show {
            return None;
        }
        if self.dirty || self.cached.is_none() {
            self.cached = Some(closest_pair(&self.curve, &self.line, self.resolution));
            self.dirty = false;
        }
        self.cached
    }
}

impl Default for Editor<Point2<NativeFloat>> {
    /// Start geometry of the interactive editor: a curve bending through the
    /// upper left corner and a line in the lower right of a 500x400 canvas.
    fn default() -> Self {
        Editor::with_geometry(
            CubicBezier::new(
                Point2::new(10.0, 80.0),
                Point2::new(45.0, 80.0),
                Point2::new(80.0, 45.0),
                Point2::new(80.0, 10.0),
            ),
            LineSegment::new(Point2::new(300.0, 200.0), Point2::new(200.0, 300.0)),
        )
    }
}
