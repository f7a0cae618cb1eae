use crate::distribution::Distribution;
use crate::error::Result;
use crate::params::Temperature;
use crate::transform::Transform;

/// Raises every probability to the power `1/temperature`, then renormalizes.
///
/// Lower temperatures produce exponents above 1 and sharpen the distribution
/// toward its largest entry; temperature 1 leaves an already-normalized
/// distribution unchanged.
pub struct TemperatureAdjuster {
    temperature: Temperature,
}

impl TemperatureAdjuster {
    /// Create a new adjuster for the given temperature.
    pub fn new(temperature: Temperature) -> Self {
        Self { temperature }
    }

    /// Return the adjusted distribution.
    ///
    /// Infallible: a validated distribution has at least one positive entry,
    /// and a positive entry stays positive under a positive exponent, so the
    /// renormalizing sum is always positive and finite.
    pub fn adjust(&self, dist: &Distribution) -> Distribution {
        let exponent = 1.0 / self.temperature.value();
        let raised: Vec<f32> = dist.probs().iter().map(|p| p.powf(exponent)).collect();
        let sum: f32 = raised.iter().sum();
        dist.with_probs(raised.into_iter().map(|p| p / sum).collect())
    }
}

impl Transform for TemperatureAdjuster {
    fn name(&self) -> &str {
        "temperature"
    }

    fn apply(&self, dist: &Distribution) -> Result<Distribution> {
        Ok(self.adjust(dist))
    }
}
