#[macro_use]
extern crate log;

mod convergence;
mod search_space;

pub use convergence::plot_convergence;
pub use search_space::plot_search_2d;

pub type Series = Vec<(f64, f64)>;
