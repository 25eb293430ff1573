//! Grey wolf optimizer for bounded continuous minimization problems

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod benchmarks;
mod engine;
mod error;
mod leaders;
mod objective;

pub use engine::{Gwo, GwoParams, SearchSpace};
pub use error::Error;
pub use leaders::{Leader, Leaders};
pub use objective::{BoxedError, Objective};
