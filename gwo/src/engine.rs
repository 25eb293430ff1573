use nanorand::{Rng, WyRand};

use crate::{leaders::Leaders, objective::Objective, Error};

/// The bounded box the optimizer searches over
///
/// The scalar bounds apply uniformly across all dimensions.
#[derive(Debug, Clone, Copy)]
pub struct SearchSpace {
    /// Lower bound of every coordinate
    pub lower: f64,
    /// Upper bound of every coordinate
    pub upper: f64,
    /// Number of dimensions
    pub dim: usize,
}

impl SearchSpace {
    fn validate(&self) -> Result<(), Error> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(Error::InvalidConfig("search bounds must be finite"));
        }
        if self.lower >= self.upper {
            return Err(Error::InvalidConfig("lower bound must be below upper bound"));
        }
        if self.dim < 1 {
            return Err(Error::InvalidConfig("dimension must be at least 1"));
        }

        Ok(())
    }

    #[inline(always)]
    fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.lower, self.upper)
    }
}

/// Parameters of the grey wolf optimizer
#[derive(Debug, Clone, Copy)]
pub struct GwoParams {
    /// The search space to minimize over
    pub space: SearchSpace,
    /// Number of wolves in the pack. At least 3 so the three leaders can be
    /// distinct candidates
    pub wolf_count: usize,
    /// Number of iterations to run for. There is no other stopping criterion
    pub max_iter: usize,
    /// Random number generator seed for reproducible runs
    pub seed: Option<u64>,
}

/// Minimizes an objective function with the grey wolf optimizer
///
/// A pack of candidate positions is pulled toward the three best solutions
/// seen so far (Alpha, Beta, Delta), with an exploration coefficient that
/// decays linearly from 2 to 0 over the run.
pub struct Gwo<O: Objective> {
    objective: O,
    space: SearchSpace,
    max_iter: usize,
    /// One position per wolf, fully overwritten each iteration
    positions: Vec<Vec<f64>>,
    leaders: Leaders,
    convergence_curve: Vec<f64>,
    rng: WyRand,
}

impl<O: Objective> Gwo<O> {
    /// Create a new optimizer with randomized initial positions
    ///
    /// # Arguments:
    /// objective: the fitness capability to minimize, lower is better
    /// params: the optimizer parameters, validated eagerly here
    pub fn new(objective: O, params: GwoParams) -> Result<Self, Error> {
        params.space.validate()?;
        if params.wolf_count < 3 {
            return Err(Error::InvalidConfig("wolf count must be at least 3"));
        }
        if params.max_iter < 1 {
            return Err(Error::InvalidConfig("max iterations must be at least 1"));
        }

        let mut rng = if let Some(seed) = params.seed {
            WyRand::new_seed(seed)
        } else {
            WyRand::new()
        };
        let SearchSpace { lower, upper, dim } = params.space;
        let positions = (0..params.wolf_count)
            .map(|_| {
                (0..dim)
                    .map(|_| lower + rng.generate::<f64>() * (upper - lower))
                    .collect()
            })
            .collect();

        Ok(Self {
            objective,
            space: params.space,
            max_iter: params.max_iter,
            positions,
            leaders: Leaders::sentinel(dim),
            convergence_curve: Vec::with_capacity(params.max_iter),
            rng,
        })
    }

    /// Run the full optimization loop
    ///
    /// # Returns:
    /// the convergence curve, one best-score-so-far entry per iteration
    pub fn run(&mut self) -> Result<&[f64], Error> {
        self.run_with_progress(|_, _| {})
    }

    /// Run the full optimization loop, reporting progress once per iteration
    ///
    /// # Arguments:
    /// progress: observer called with `(iteration_index, alpha_score)` after
    /// each completed iteration
    pub fn run_with_progress<F>(&mut self, mut progress: F) -> Result<&[f64], Error>
    where
        F: FnMut(usize, f64),
    {
        for t in 0..self.max_iter {
            // A wolf must never reach the objective out of bounds
            self.clip_positions();
            self.rank_leaders()?;

            // Decays linearly from 2 toward 0. Dips slightly below zero on
            // the very last iteration, which the update rule tolerates.
            let a = 2.0 - t as f64 * (2.0 / self.max_iter as f64);
            self.update_positions(a);

            let alpha_score = self.leaders.alpha().score();
            self.convergence_curve.push(alpha_score);
            debug!("iteration {}: alpha_score: {}", t, alpha_score);
            progress(t, alpha_score);
        }

        Ok(&self.convergence_curve)
    }

    fn clip_positions(&mut self) {
        for wolf in self.positions.iter_mut() {
            for x in wolf.iter_mut() {
                *x = self.space.clamp(*x);
            }
        }
    }

    /// Evaluates the pack and folds it into a fresh leader hierarchy, which
    /// replaces the previous one in a single assignment
    fn rank_leaders(&mut self) -> Result<(), Error> {
        let mut leaders = self.leaders.clone();
        for wolf in self.positions.iter() {
            let fitness = self
                .objective
                .evaluate(wolf)
                .map_err(Error::ObjectiveEvaluation)?;
            leaders = leaders.ranked(wolf, fitness);
        }
        self.leaders = leaders;

        Ok(())
    }

    /// Pulls every wolf toward the three leaders
    ///
    /// Each coordinate is replaced by the mean of one pull per leader,
    /// `X_l = L - A * |C * L - x|` with `A` uniform in `[-a, a)` and `C`
    /// uniform in `[0, 2)`. The raw update may transiently leave the bounds;
    /// the clip at the start of the next iteration pulls it back.
    fn update_positions(&mut self, a: f64) {
        for wolf in self.positions.iter_mut() {
            for j in 0..self.space.dim {
                let mut pull = 0.0;
                for leader in [self.leaders.alpha(), self.leaders.beta(), self.leaders.delta()] {
                    let r1 = self.rng.generate::<f64>();
                    let r2 = self.rng.generate::<f64>();
                    let amp = 2.0 * a * r1 - a;
                    let lp = leader.position()[j];
                    let dist = (2.0 * r2 * lp - wolf[j]).abs();
                    pull += lp - amp * dist;
                }
                wolf[j] = pull / 3.0;
            }
        }
    }

    /// The best position found so far
    #[inline(always)]
    pub fn alpha_pos(&self) -> &[f64] {
        self.leaders.alpha().position()
    }

    /// The fitness of the best position found so far
    #[inline(always)]
    pub fn alpha_score(&self) -> f64 {
        self.leaders.alpha().score()
    }

    /// The current leader hierarchy
    #[inline(always)]
    pub fn leaders(&self) -> &Leaders {
        &self.leaders
    }

    /// The current positions of all wolves
    #[inline(always)]
    pub fn positions(&self) -> &[Vec<f64>] {
        &self.positions
    }

    /// The best score recorded at each completed iteration
    #[inline(always)]
    pub fn convergence_curve(&self) -> &[f64] {
        &self.convergence_curve
    }

    /// The search space this optimizer covers
    #[inline(always)]
    pub fn space(&self) -> SearchSpace {
        self.space
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{benchmarks::sphere, objective::BoxedError};

    use super::*;

    const SPACE: SearchSpace = SearchSpace {
        lower: -10.0,
        upper: 10.0,
        dim: 2,
    };

    fn params() -> GwoParams {
        GwoParams {
            space: SPACE,
            wolf_count: 10,
            max_iter: 50,
            seed: Some(0),
        }
    }

    #[test]
    fn rejects_invalid_configs() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let configs = [
            GwoParams {
                space: SearchSpace {
                    lower: 1.0,
                    upper: 1.0,
                    dim: 2,
                },
                ..params()
            },
            GwoParams {
                space: SearchSpace {
                    lower: 5.0,
                    upper: -5.0,
                    dim: 2,
                },
                ..params()
            },
            GwoParams {
                space: SearchSpace {
                    lower: f64::NEG_INFINITY,
                    upper: 10.0,
                    dim: 2,
                },
                ..params()
            },
            GwoParams {
                space: SearchSpace {
                    lower: -10.0,
                    upper: 10.0,
                    dim: 0,
                },
                ..params()
            },
            GwoParams {
                wolf_count: 2,
                ..params()
            },
            GwoParams {
                max_iter: 0,
                ..params()
            },
        ];
        for p in configs {
            let res = Gwo::new(sphere, p);
            assert!(matches!(res, Err(Error::InvalidConfig(_))), "accepted {:?}", p);
        }
    }

    #[test]
    fn curve_has_one_entry_per_iteration() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut gwo = Gwo::new(sphere, params()).unwrap();
        let curve = gwo.run().unwrap();

        assert_eq!(curve.len(), 50);
    }

    #[test]
    fn curve_never_increases() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut gwo = Gwo::new(sphere, params()).unwrap();
        let curve = gwo.run().unwrap().to_vec();

        for w in curve.windows(2) {
            assert!(w[1] <= w[0], "alpha score worsened: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn leaders_stay_ordered() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut gwo = Gwo::new(sphere, params()).unwrap();
        gwo.run().unwrap();

        let leaders = gwo.leaders();
        assert!(leaders.alpha().score() <= leaders.beta().score());
        assert!(leaders.beta().score() <= leaders.delta().score());
    }

    #[test]
    fn candidates_are_clipped_before_evaluation() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let checked_sphere = |x: &[f64]| {
            assert!(
                x.iter().all(|v| (SPACE.lower..=SPACE.upper).contains(v)),
                "objective saw out-of-bounds candidate: {:?}",
                x
            );
            sphere(x)
        };
        let mut gwo = Gwo::new(checked_sphere, params()).unwrap();
        gwo.run().unwrap();
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let p = GwoParams {
            seed: Some(42),
            ..params()
        };
        let mut a = Gwo::new(sphere, p).unwrap();
        let mut b = Gwo::new(sphere, p).unwrap();
        let curve_a = a.run().unwrap().to_vec();
        let curve_b = b.run().unwrap().to_vec();

        assert_eq!(curve_a, curve_b);
        assert_eq!(a.alpha_pos(), b.alpha_pos());
    }

    #[test]
    fn smallest_valid_config_runs() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let p = GwoParams {
            space: SearchSpace {
                lower: -1.0,
                upper: 1.0,
                dim: 1,
            },
            wolf_count: 3,
            max_iter: 1,
            seed: Some(0),
        };
        let mut gwo = Gwo::new(sphere, p).unwrap();
        let curve = gwo.run().unwrap();

        assert_eq!(curve.len(), 1);
        assert!(curve[0].is_finite());
    }

    #[test]
    fn sphere_run_makes_progress() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut gwo = Gwo::new(sphere, params()).unwrap();
        let curve = gwo.run().unwrap().to_vec();
        info!("alpha_pos: {:?}, alpha_score: {}", gwo.alpha_pos(), gwo.alpha_score());

        assert!(gwo.alpha_score().is_finite());
        assert!(gwo.alpha_score() >= 0.0);
        assert!(gwo.alpha_score() < curve[0]);
    }

    #[test]
    fn constant_objective_settles_immediately() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut gwo = Gwo::new(|_: &[f64]| 5.0, params()).unwrap();
        let curve = gwo.run().unwrap().to_vec();

        assert!(curve.iter().all(|v| *v == 5.0));
        assert_eq!(gwo.alpha_score(), 5.0);
    }

    #[test]
    fn progress_observer_sees_every_iteration() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut seen = Vec::new();
        let mut gwo = Gwo::new(sphere, params()).unwrap();
        gwo.run_with_progress(|t, score| seen.push((t, score))).unwrap();

        assert_eq!(seen.len(), 50);
        assert_eq!(seen.first().map(|(t, _)| *t), Some(0));
        assert_eq!(seen.last().map(|(t, _)| *t), Some(49));
        assert_eq!(seen.last().map(|(_, s)| *s), Some(gwo.alpha_score()));
    }

    /// Succeeds a fixed number of times, then fails every call
    struct FailsAfter {
        calls: Cell<usize>,
        limit: usize,
    }

    impl Objective for FailsAfter {
        fn evaluate(&self, position: &[f64]) -> Result<f64, BoxedError> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            if n >= self.limit {
                return Err("objective exploded".into());
            }

            Ok(sphere(position))
        }
    }

    #[test]
    fn failing_objective_aborts_with_partial_curve() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // 10 wolves per iteration, so the failure hits in iteration 2
        let objective = FailsAfter {
            calls: Cell::new(0),
            limit: 25,
        };
        let mut gwo = Gwo::new(objective, params()).unwrap();
        let res = gwo.run();

        assert!(matches!(res, Err(Error::ObjectiveEvaluation(_))));
        assert_eq!(gwo.convergence_curve().len(), 2);
    }
}
