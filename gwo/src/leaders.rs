use std::mem;

/// A ranked candidate: its position in the search space and its fitness
#[derive(Debug, Clone)]
pub struct Leader {
    position: Vec<f64>,
    score: f64,
}

impl Leader {
    // Displaced by any finite fitness
    fn sentinel(dim: usize) -> Self {
        Self {
            position: vec![0.0; dim],
            score: f64::INFINITY,
        }
    }

    /// The position of this leader
    #[inline(always)]
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// The fitness of this leader
    #[inline(always)]
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// The three best-ranked distinct candidates seen so far, by ascending score
///
/// The ranking is a pure fold: each evaluated candidate produces the next
/// `Leaders` value, and the engine swaps in the result once the whole
/// population has been folded. Comparisons are strict, so a candidate whose
/// score exactly equals an incumbent's never displaces it.
#[derive(Debug, Clone)]
pub struct Leaders {
    alpha: Leader,
    beta: Leader,
    delta: Leader,
}

impl Leaders {
    pub(crate) fn sentinel(dim: usize) -> Self {
        Self {
            alpha: Leader::sentinel(dim),
            beta: Leader::sentinel(dim),
            delta: Leader::sentinel(dim),
        }
    }

    /// Folds one evaluated candidate into the hierarchy
    pub(crate) fn ranked(mut self, position: &[f64], fitness: f64) -> Self {
        let promoted = || Leader {
            position: position.to_vec(),
            score: fitness,
        };

        if fitness < self.alpha.score {
            // Alpha drops to beta, beta to delta
            self.delta = mem::replace(&mut self.beta, mem::replace(&mut self.alpha, promoted()));
        } else if fitness > self.alpha.score && fitness < self.beta.score {
            self.delta = mem::replace(&mut self.beta, promoted());
        } else if fitness > self.alpha.score && fitness > self.beta.score && fitness < self.delta.score
        {
            self.delta = promoted();
        }

        self
    }

    /// The best candidate seen so far
    #[inline(always)]
    pub fn alpha(&self) -> &Leader {
        &self.alpha
    }

    /// The second best candidate seen so far
    #[inline(always)]
    pub fn beta(&self) -> &Leader {
        &self.beta
    }

    /// The third best candidate seen so far
    #[inline(always)]
    pub fn delta(&self) -> &Leader {
        &self.delta
    }
}
