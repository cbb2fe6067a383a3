//! SVG output for the editor scene.
//! Path data strings use the compact canvas form: the curve as a single
//! `M .. C ..` path, the line and the result segment as `M .. L ..` paths.
//! Coordinates use the plain `Display` form of the scalar type.

use crate::cubic_bezier::CubicBezier;
use crate::editor::Editor;
use crate::line_segment::LineSegment;
use crate::point::Point;
use crate::proximity::ClosestPair;
use crate::NativeFloat;

/// Canvas extents the editor scene is laid out for
pub const CANVAS_WIDTH: u32 = 500;
pub const CANVAS_HEIGHT: u32 = 400;

const CURVE_COLOR: &str = "#700";
const LINE_COLOR: &str = "#007";
const RESULT_COLOR: &str = "#070a";

/// Path data for the cubic curve, e.g. `"M 10 80 C 45 80 80 45 80 10"`
pub fn curve_path_data<P: Point>(curve: &CubicBezier<P>) -> String {
    let [p0, p1, p2, p3] = curve.control_points();
    format!(
        "M {} {} C {} {} {} {} {} {}",
        p0.x(),
        p0.y(),
        p1.x(),
        p1.y(),
        p2.x(),
        p2.y(),
        p3.x(),
        p3.y()
    )
}

/// Path data for the line segment, e.g. `"M 300 200 L 200 300"`
pub fn line_path_data<P: Point>(line: &LineSegment<P>) -> String {
    let [a, b] = line.endpoints();
    format!("M {} {} L {} {}", a.x(), a.y(), b.x(), b.y())
}

/// Path data for the closest-pair result segment, curve point first
pub fn segment_path_data<P: Point>(pair: &ClosestPair<P>) -> String {
    format!(
        "M {} {} L {} {}",
        pair.curve_point.x(),
        pair.curve_point.y(),
        pair.line_point.x(),
        pair.line_point.y()
    )
}

/// Distance readout with two decimal places, as displayed under the canvas
pub fn format_distance(distance: NativeFloat) -> String {
    format!("{:.2}", distance)
}

fn circle<P: Point>(center: P, radius: NativeFloat, fill: &str) -> String {
    format!(
        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
        center.x(),
        center.y(),
        radius,
        fill
    )
}

fn path(data: &str, stroke: &str) -> String {
    format!(
        "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
        data, stroke
    )
}

/// Render the whole editor scene as a standalone SVG document: curve, line,
/// their handles, and (while the show toggle is on) the result segment with
/// its endpoint markers on top.
pub fn scene_svg<P: Point>(editor: &mut Editor<P>) -> String {
    let mut doc = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        CANVAS_WIDTH, CANVAS_HEIGHT
    );

    doc.push_str(&path(&curve_path_data(editor.curve()), CURVE_COLOR));
    for point in editor.curve().control_points() {
        doc.push_str(&circle(point, 6.0, CURVE_COLOR));
    }

    doc.push_str(&path(&line_path_data(editor.line()), LINE_COLOR));
    for point in editor.line().endpoints() {
        doc.push_str(&circle(point, 6.0, LINE_COLOR));
    }

    if let Some(pair) = editor.closest_pair() {
        doc.push_str(&path(&segment_path_data(&pair), RESULT_COLOR));
        doc.push_str(&circle(pair.curve_point, 4.0, RESULT_COLOR));
        doc.push_str(&circle(pair.line_point, 4.0, RESULT_COLOR));
    }

    doc.push_str("</svg>\n");
    doc
}
