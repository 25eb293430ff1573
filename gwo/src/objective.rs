/// Boxed failure type an [`Objective`] may surface
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The fitness capability supplied by the caller
///
/// Lower is better (minimization). Must be total over the search box for the
/// run to be well-defined and callable any number of times.
pub trait Objective {
    /// Evaluates the fitness of a candidate position
    ///
    /// # Arguments:
    /// position: candidate coordinates, all within the search bounds
    ///
    /// # Returns:
    /// scalar fitness, or the failure to propagate out of the run
    fn evaluate(&self, position: &[f64]) -> Result<f64, BoxedError>;
}

/// Any infallible fitness closure is an `Objective`
impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, position: &[f64]) -> Result<f64, BoxedError> {
        Ok(self(position))
    }
}
