//! Parameter handling for the layered graph generator.

use crate::error::{Result, StrataError};

/// Probability of adding a self-loop to each vertex unless overridden.
pub const DEFAULT_SELF_LOOP_PROBABILITY: f64 = 0.1;

/// Configuration for [`crate::GraphGenerator`].
///
/// # Examples
/// ```
/// use strata_core::GeneratorParams;
///
/// let params = GeneratorParams::new(4, 3)
///     .expect("depth is positive")
///     .with_rng_seed(7);
/// assert_eq!(params.target_depth(), 4);
/// assert_eq!(params.layer_branching_factor(), 3);
/// assert_eq!(params.rng_seed(), Some(7));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorParams {
    target_depth: usize,
    layer_branching_factor: usize,
    self_loop_probability: f64,
    rng_seed: Option<u64>,
}

impl GeneratorParams {
    /// Creates a parameter set for graphs with `target_depth` layers (root
    /// included) where each vertex attempts `layer_branching_factor` children.
    ///
    /// # Errors
    /// Returns [`StrataError::InvalidDepth`] when `target_depth` is zero.
    pub fn new(target_depth: usize, layer_branching_factor: usize) -> Result<Self> {
        if target_depth == 0 {
            return Err(StrataError::InvalidDepth { got: target_depth });
        }
        Ok(Self {
            target_depth,
            layer_branching_factor,
            self_loop_probability: DEFAULT_SELF_LOOP_PROBABILITY,
            rng_seed: None,
        })
    }

    /// Overrides the per-vertex self-loop probability.
    ///
    /// # Errors
    /// Returns [`StrataError::InvalidProbability`] when `probability` is NaN
    /// or outside `[0, 1]`.
    pub fn with_self_loop_probability(mut self, probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(StrataError::InvalidProbability {
                parameter: "self_loop_probability",
                got: probability,
            });
        }
        self.self_loop_probability = probability;
        Ok(self)
    }

    /// Seeds the generator so every call to [`crate::GraphGenerator::generate`]
    /// replays the same graph.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Number of layers the grey pass aims for, root included.
    #[must_use]
    pub fn target_depth(&self) -> usize {
        self.target_depth
    }

    /// Bernoulli trials attempted per vertex when growing the next layer.
    #[must_use]
    pub fn layer_branching_factor(&self) -> usize {
        self.layer_branching_factor
    }

    /// Per-vertex self-loop probability.
    #[must_use]
    pub fn self_loop_probability(&self) -> f64 {
        self.self_loop_probability
    }

    /// Explicit seed, or `None` to draw one from OS entropy.
    #[must_use]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn rejects_zero_depth() {
        let err = GeneratorParams::new(0, 2).expect_err("zero depth is invalid");
        assert_eq!(err, StrataError::InvalidDepth { got: 0 });
    }

    #[rstest]
    #[case(1, 0)]
    #[case(1, 5)]
    #[case(6, 0)]
    fn accepts_positive_depth_with_any_branching(#[case] depth: usize, #[case] branching: usize) {
        let params = GeneratorParams::new(depth, branching).expect("depth is positive");
        assert_eq!(params.target_depth(), depth);
        assert_eq!(params.layer_branching_factor(), branching);
        assert_eq!(params.self_loop_probability(), DEFAULT_SELF_LOOP_PROBABILITY);
        assert_eq!(params.rng_seed(), None);
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.01)]
    #[case(f64::NAN)]
    fn rejects_out_of_range_self_loop_probability(#[case] probability: f64) {
        let err = GeneratorParams::new(2, 2)
            .and_then(|params| params.with_self_loop_probability(probability))
            .expect_err("probability must be rejected");
        assert!(matches!(
            err,
            StrataError::InvalidProbability {
                parameter: "self_loop_probability",
                ..
            }
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(1.0)]
    fn accepts_bounds_of_unit_interval(#[case] probability: f64) {
        let params = GeneratorParams::new(2, 2)
            .and_then(|params| params.with_self_loop_probability(probability))
            .expect("probability is in range");
        assert_eq!(params.self_loop_probability(), probability);
    }
}
