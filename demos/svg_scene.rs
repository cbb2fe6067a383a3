extern crate curvegap;
use curvegap::{scene_svg, Editor, Point2};

/// Replays a short editing session on the default scene and writes the
/// resulting SVG document to disk.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = Editor::default();
    editor.set_show(true);
    editor.set_resolution(9)?;

    // drag the line's first endpoint towards the curve
    editor.pointer_down(Point2::new(300.0, 200.0));
    editor.pointer_move(Point2::new(180.0, 120.0));
    editor.pointer_up();

    if let Some(pair) = editor.closest_pair() {
        println!("distance: {}", curvegap::format_distance(pair.distance));
    }

    std::fs::write("scene.svg", scene_svg(&mut editor))?;
    println!("wrote scene.svg");
    Ok(())
}
