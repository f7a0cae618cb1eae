use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplingError {
    #[error("temperature must be in (0, 1], got {0}")]
    InvalidTemperature(f32),
    #[error("top-p must be in [0, 1], got {0}")]
    InvalidTopP(f32),
    #[error("probability at index {index} must be finite and non-negative, got {value}")]
    InvalidProbability { index: usize, value: f32 },
    #[error("distribution has no entries")]
    EmptyDistribution,
    #[error("distribution has zero total mass")]
    ZeroMass,
    #[error("top-p {0} selects no outcomes")]
    EmptyNucleus(f32),
    #[error("cannot draw from weights: {0}")]
    InvalidWeights(#[from] rand::distributions::WeightedError),
}

pub type Result<T> = std::result::Result<T, SamplingError>;
