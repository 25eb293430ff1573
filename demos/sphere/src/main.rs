#[macro_use]
extern crate log;

use gwo::{benchmarks::sphere, Gwo, GwoParams, SearchSpace};
use gwo_plot::{plot_convergence, plot_search_2d};

const SEED: Option<u64> = Some(0);

pub(crate) fn main() {
    pretty_env_logger::init();

    let params = GwoParams {
        space: SearchSpace {
            lower: -10.0,
            upper: 10.0,
            dim: 2,
        },
        wolf_count: 10,
        max_iter: 50,
        seed: SEED,
    };
    info!(
        "starting GWO on {} dimensions for {} iterations",
        params.space.dim, params.max_iter
    );

    let mut gwo = Gwo::new(sphere, params).unwrap();
    gwo.run_with_progress(|t, score| {
        if t % 10 == 0 {
            info!("iteration {}: best fitness: {:.6}", t, score);
        }
    })
    .unwrap();

    info!("optimization finished");
    info!("best position found: {:?}", gwo.alpha_pos());
    info!("best fitness: {}", gwo.alpha_score());

    std::fs::create_dir_all("img").unwrap();
    plot_convergence(gwo.convergence_curve(), "img/sphere_convergence.png", (1024, 768));
    // The sphere function bottoms out at the origin
    plot_search_2d(
        params.space.lower,
        params.space.upper,
        gwo.alpha_pos(),
        Some((0.0, 0.0)),
        "img/sphere_search_space.png",
        (768, 768),
    );
}
