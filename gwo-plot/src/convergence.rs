use plotters::prelude::*;

use crate::Series;

/// Render the convergence curve of a finished run as a line chart
///
/// # Arguments:
/// curve: best score recorded at each iteration
/// filename: output image path
/// dims: width and height of the image in pixels
pub fn plot_convergence(curve: &[f64], filename: &str, dims: (u32, u32)) {
    debug!("plotting convergence curve with {} entries to {}", curve.len(), filename);

    let series: Series = curve.iter().enumerate().map(|(t, s)| (t as f64, *s)).collect();
    let mut y_min = curve[0];
    let mut y_max = curve[0];
    for s in curve {
        if *s < y_min {
            y_min = *s;
        }
        if *s > y_max {
            y_max = *s;
        }
    }
    // Flat curves still need a non-degenerate axis
    let pad = ((y_max - y_min) * 0.05).max(1e-6);
    let x_max = (curve.len() - 1) as f64;

    let root = BitMapBackend::new(filename, dims).into_drawing_area();
    root.fill(&WHITE).unwrap();

    let mut cc = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .caption("Convergence Curve", ("sans-serif", 20).into_font().with_color(BLACK))
        .build_cartesian_2d(0.0..x_max.max(1.0), (y_min - pad)..(y_max + pad))
        .unwrap();

    cc.configure_mesh()
        .x_desc("Iteration")
        .y_desc("Best Fitness")
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()
        .unwrap();

    cc.draw_series(LineSeries::new(series, &RED))
        .unwrap()
        .label("alpha score")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    cc.configure_series_labels()
        .border_style(BLACK)
        .draw()
        .unwrap();

    root.present().unwrap();
}
