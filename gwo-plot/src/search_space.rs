use plotters::prelude::*;

/// Render a 2d view of the search space with the best found position
///
/// Only the first two coordinates of `alpha_pos` are drawn.
///
/// # Arguments:
/// lower, upper: the scalar search bounds, shared by both axes
/// alpha_pos: the best position the optimizer found
/// optimum: the known global optimum, when there is one
/// filename: output image path
/// dims: width and height of the image in pixels
pub fn plot_search_2d(
    lower: f64,
    upper: f64,
    alpha_pos: &[f64],
    optimum: Option<(f64, f64)>,
    filename: &str,
    dims: (u32, u32),
) {
    assert!(alpha_pos.len() >= 2, "need at least two coordinates to draw");
    debug!("plotting search space view to {}", filename);

    let root = BitMapBackend::new(filename, dims).into_drawing_area();
    root.fill(&WHITE).unwrap();

    let mut cc = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .caption("Search Space", ("sans-serif", 20).into_font().with_color(BLACK))
        .build_cartesian_2d(lower..upper, lower..upper)
        .unwrap();

    cc.configure_mesh()
        .x_label_formatter(&|v| format!("{:.1}", v))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .draw()
        .unwrap();

    if let Some((ox, oy)) = optimum {
        cc.draw_series(std::iter::once(Circle::new((ox, oy), 8, GREEN.filled())))
            .unwrap()
            .label("optimum")
            .legend(|(x, y)| Circle::new((x + 10, y), 5, GREEN.filled()));
    }
    cc.draw_series(std::iter::once(Circle::new(
        (alpha_pos[0], alpha_pos[1]),
        5,
        RED.filled(),
    )))
    .unwrap()
    .label("alpha")
    .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    cc.configure_series_labels()
        .border_style(BLACK)
        .draw()
        .unwrap();

    root.present().unwrap();
}
