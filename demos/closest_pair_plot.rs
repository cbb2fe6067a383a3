extern crate plotters;
use plotters::prelude::*;

extern crate curvegap;
use curvegap::{closest_pair, CubicBezier, LineSegment, Point, Point2, SampleResolution};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // the editor's start geometry on its 500x400 canvas
    let curve = CubicBezier::new(
        Point2::new(10f64, 80f64),
        Point2::new(45f64, 80f64),
        Point2::new(80f64, 45f64),
        Point2::new(80f64, 10f64),
    );
    let line = LineSegment::new(Point2::new(300f64, 200f64), Point2::new(200f64, 300f64));

    let resolution = SampleResolution::new(5)?;
    let pair = closest_pair(&curve, &line, resolution);
    println!("distance: {}", curvegap::format_distance(pair.distance));

    // render the path of the curve to drawing accuracy (much finer than the
    // sample grid used by the search)
    let nsteps: usize = 1000;
    let mut curve_graph: Vec<(f64, f64)> = Vec::with_capacity(nsteps);
    for t in 0..=nsteps {
        let t = t as f64 * 1f64 / (nsteps as f64);
        let p = curve.eval(t);
        curve_graph.push((p.x(), p.y()));
    }

    // the sparse sample points the search actually compared
    let mut curve_samples: Vec<(f64, f64)> = Vec::new();
    let mut line_samples: Vec<(f64, f64)> = Vec::new();
    for i in 0..resolution.get() {
        let t = i as f64 / (resolution.get() - 1) as f64;
        let p = curve.eval(t);
        curve_samples.push((p.x(), p.y()));
        let q = line.eval(t);
        line_samples.push((q.x(), q.y()));
    }

    let root = BitMapBackend::new("closest_pair.png", (640, 512)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart; y grows downward to match canvas coordinates
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Sampled closest pair, d = {}", curvegap::format_distance(pair.distance)),
            ("sans-serif", 21).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0f64..500f64, 400f64..0f64)?;

    chart.configure_mesh().draw()?;

    // draw the bezier curve B(t)
    chart
        .draw_series(LineSeries::new(curve_graph, &RED))?
        .label("B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    // draw the line segment L(u)
    chart
        .draw_series(LineSeries::new(
            vec![
                (line.endpoints()[0].x(), line.endpoints()[0].y()),
                (line.endpoints()[1].x(), line.endpoints()[1].y()),
            ],
            &BLUE,
        ))?
        .label("L(u)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // mark the compared sample points on both shapes
    chart.draw_series(
        curve_samples
            .iter()
            .map(|coord| Circle::new(*coord, 3, RED.filled())),
    )?;
    chart.draw_series(
        line_samples
            .iter()
            .map(|coord| Circle::new(*coord, 3, BLUE.filled())),
    )?;

    // draw the minimum-distance segment between the two winning samples
    chart
        .draw_series(LineSeries::new(
            vec![
                (pair.curve_point.x(), pair.curve_point.y()),
                (pair.line_point.x(), pair.line_point.y()),
            ],
            &GREEN,
        ))?
        .label("closest pair")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
