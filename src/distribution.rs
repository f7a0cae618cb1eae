use crate::error::{Result, SamplingError};

/// A labeled outcome paired with its probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub label: String,
    pub prob: f32,
}

/// An ordered probability distribution over a finite, labeled outcome set.
///
/// Construction validates that every probability is finite and non-negative
/// and that the total mass is positive. The total is not required to equal 1:
/// intermediate distributions may carry unnormalized mass until a transform
/// renormalizes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    outcomes: Vec<Outcome>,
}

impl Distribution {
    /// Create a distribution from labeled outcomes.
    pub fn new(outcomes: Vec<Outcome>) -> Result<Self> {
        if outcomes.is_empty() {
            return Err(SamplingError::EmptyDistribution);
        }
        for (index, outcome) in outcomes.iter().enumerate() {
            if !outcome.prob.is_finite() || outcome.prob < 0.0 {
                return Err(SamplingError::InvalidProbability {
                    index,
                    value: outcome.prob,
                });
            }
        }
        if outcomes.iter().map(|o| o.prob).sum::<f32>() <= 0.0 {
            return Err(SamplingError::ZeroMass);
        }
        Ok(Self { outcomes })
    }

    /// Create a distribution from `(label, probability)` pairs.
    pub fn from_pairs(pairs: &[(&str, f32)]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(label, prob)| Outcome {
                    label: label.to_string(),
                    prob,
                })
                .collect(),
        )
    }

    /// Create a distribution from bare probabilities, labeling each outcome
    /// with its index.
    pub fn from_probs(probs: &[f32]) -> Result<Self> {
        Self::new(
            probs
                .iter()
                .enumerate()
                .map(|(i, &prob)| Outcome {
                    label: i.to_string(),
                    prob,
                })
                .collect(),
        )
    }

    /// Same labels, new probabilities. Callers guarantee validity; transforms
    /// only ever produce non-negative renormalized values.
    pub(crate) fn with_probs(&self, probs: Vec<f32>) -> Self {
        Self {
            outcomes: self
                .outcomes
                .iter()
                .zip(probs)
                .map(|(o, prob)| Outcome {
                    label: o.label.clone(),
                    prob,
                })
                .collect(),
        }
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns the outcomes in label order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Returns the probabilities in label order.
    pub fn probs(&self) -> Vec<f32> {
        self.outcomes.iter().map(|o| o.prob).collect()
    }

    /// Probability of outcome `i`.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn prob(&self, i: usize) -> f32 {
        self.outcomes[i].prob
    }

    /// Label of outcome `i`.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn label(&self, i: usize) -> &str {
        &self.outcomes[i].label
    }

    /// Sum of all probabilities.
    pub fn total_mass(&self) -> f32 {
        self.outcomes.iter().map(|o| o.prob).sum()
    }

    /// Inclusive prefix sums in label order: entry `i` is the sum of
    /// probabilities `0..=i`.
    ///
    /// The sequence is deliberately not sorted by magnitude, matching the
    /// label-order accumulation used by [`crate::TopPNormalizer::new`].
    pub fn cumulative(&self) -> Vec<f32> {
        let mut running = 0.0f32;
        self.outcomes
            .iter()
            .map(|o| {
                running += o.prob;
                running
            })
            .collect()
    }
}
