use crate::distribution::Distribution;
use crate::error::{Result, SamplingError};
use crate::params::TopP;
use crate::transform::Transform;

/// Nucleus renormalization: zeroes every outcome past the cumulative
/// threshold, then renormalizes the kept outcomes to sum to 1.
///
/// An outcome is kept while the cumulative sum of all *previous* outcomes in
/// walk order is strictly below the threshold, so one outcome may push the
/// cumulative sum past it. The default walk order is label order, matching
/// the reference behavior; [`TopPNormalizer::sorted`] walks in descending
/// probability order instead, the conventional nucleus-sampling semantics.
pub struct TopPNormalizer {
    top_p: TopP,
    sort_descending: bool,
}

impl TopPNormalizer {
    /// Create a normalizer that accumulates in label order.
    pub fn new(top_p: TopP) -> Self {
        Self {
            top_p,
            sort_descending: false,
        }
    }

    /// Create a normalizer that accumulates in descending probability order.
    /// Ties keep label order; output stays in label order.
    pub fn sorted(top_p: TopP) -> Self {
        Self {
            top_p,
            sort_descending: true,
        }
    }

    /// Return the renormalized distribution.
    ///
    /// Fails with [`SamplingError::EmptyNucleus`] when the kept outcomes
    /// carry no mass, such as a threshold of 0.
    pub fn normalize(&self, dist: &Distribution) -> Result<Distribution> {
        let probs = dist.probs();

        let mut order: Vec<usize> = (0..probs.len()).collect();
        if self.sort_descending {
            order.sort_by(|&a, &b| {
                probs[b]
                    .partial_cmp(&probs[a])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        let mut kept = vec![0.0f32; probs.len()];
        let mut cumulative = 0.0f32;
        for &i in &order {
            if cumulative < self.top_p.value() {
                kept[i] = probs[i];
                cumulative += probs[i];
            }
        }

        let kept_sum: f32 = kept.iter().sum();
        if kept_sum <= 0.0 {
            return Err(SamplingError::EmptyNucleus(self.top_p.value()));
        }
        Ok(dist.with_probs(kept.into_iter().map(|p| p / kept_sum).collect()))
    }
}

impl Transform for TopPNormalizer {
    fn name(&self) -> &str {
        "top_p"
    }

    fn apply(&self, dist: &Distribution) -> Result<Distribution> {
        self.normalize(dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn normalizer(p: f32) -> TopPNormalizer {
        TopPNormalizer::new(TopP::new(p).unwrap())
    }

    #[test]
    fn test_full_threshold_is_identity() {
        let dist = Distribution::from_probs(&[0.4, 0.3, 0.2, 0.1]).unwrap();
        let out = normalizer(1.0).normalize(&dist).unwrap();
        for i in 0..dist.len() {
            assert_relative_eq!(out.prob(i), dist.prob(i), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_zero_threshold_is_empty_nucleus() {
        let dist = Distribution::from_probs(&[0.5, 0.5]).unwrap();
        assert!(matches!(
            normalizer(0.0).normalize(&dist),
            Err(SamplingError::EmptyNucleus(_))
        ));
    }

    #[test]
    fn test_cutoff_entry_is_included() {
        // Cumulative before index 2 is 0.649..., still below 0.7, so index 2
        // is kept even though it pushes the cumulative sum to 0.82.
        let adjusted =
            Distribution::from_probs(&[0.38314, 0.26607, 0.17029, 0.13793, 0.04257]).unwrap();
        let out = normalizer(0.7).normalize(&adjusted).unwrap();

        assert_eq!(out.prob(3), 0.0);
        assert_eq!(out.prob(4), 0.0);
        // Kept sum is 0.81950.
        assert_relative_eq!(out.prob(0), 0.46753, epsilon = 1e-4);
        assert_relative_eq!(out.prob(1), 0.32467, epsilon = 1e-4);
        assert_relative_eq!(out.prob(2), 0.20780, epsilon = 1e-4);
        assert_relative_eq!(out.total_mass(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_first_entry_always_kept_for_positive_threshold() {
        let dist = Distribution::from_probs(&[0.9, 0.1]).unwrap();
        let out = normalizer(0.1).normalize(&dist).unwrap();
        assert_relative_eq!(out.prob(0), 1.0, epsilon = 1e-6);
        assert_eq!(out.prob(1), 0.0);
    }

    #[test]
    fn test_label_order_differs_from_sorted() {
        let dist = Distribution::from_probs(&[0.1, 0.5, 0.4]).unwrap();
        let top_p = TopP::new(0.5).unwrap();

        // Label order keeps 0.1 and 0.5 (cumulative before 0.4 is 0.6).
        let label_order = TopPNormalizer::new(top_p).normalize(&dist).unwrap();
        assert!(label_order.prob(0) > 0.0);
        assert!(label_order.prob(1) > 0.0);
        assert_eq!(label_order.prob(2), 0.0);

        // Descending order keeps only 0.5 (cumulative is 0.5 before 0.4).
        let sorted = TopPNormalizer::sorted(top_p).normalize(&dist).unwrap();
        assert_eq!(sorted.prob(0), 0.0);
        assert_relative_eq!(sorted.prob(1), 1.0, epsilon = 1e-6);
        assert_eq!(sorted.prob(2), 0.0);
    }

    #[test]
    fn test_sorted_output_stays_in_label_order() {
        let dist = Distribution::from_pairs(&[("bird", 0.2), ("cat", 0.5), ("dog", 0.3)]).unwrap();
        let out = TopPNormalizer::sorted(TopP::new(0.6).unwrap())
            .normalize(&dist)
            .unwrap();
        assert_eq!(out.label(0), "bird");
        assert_eq!(out.label(1), "cat");
        assert_eq!(out.label(2), "dog");
        // cat is kept outright; dog is the cutoff entry (0.5 < 0.6 before it).
        assert_eq!(out.prob(0), 0.0);
        assert_relative_eq!(out.prob(1), 0.625, epsilon = 1e-5);
        assert_relative_eq!(out.prob(2), 0.375, epsilon = 1e-5);
    }
}
