use crate::error::{Result, SamplingError};

/// Sampling temperature, valid over `(0, 1]`.
///
/// Construction rejects zero (the exponent `1/t` would diverge), negative
/// and non-finite values, and values above 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature(f32);

impl Temperature {
    pub fn new(value: f32) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(SamplingError::InvalidTemperature(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

/// Nucleus threshold, valid over `[0, 1]`.
///
/// Zero is constructible; it is the normalizer that reports the resulting
/// empty nucleus (see [`crate::SamplingError::EmptyNucleus`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopP(f32);

impl TopP {
    pub fn new(value: f32) -> Result<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(SamplingError::InvalidTopP(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_bounds() {
        assert!(Temperature::new(0.5).is_ok());
        assert!(Temperature::new(1.0).is_ok());
        assert!(matches!(
            Temperature::new(0.0),
            Err(SamplingError::InvalidTemperature(_))
        ));
        assert!(Temperature::new(-0.5).is_err());
        assert!(Temperature::new(1.5).is_err());
        assert!(Temperature::new(f32::NAN).is_err());
        assert!(Temperature::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_top_p_bounds() {
        assert!(TopP::new(0.0).is_ok());
        assert!(TopP::new(0.7).is_ok());
        assert!(TopP::new(1.0).is_ok());
        assert!(matches!(
            TopP::new(-0.1),
            Err(SamplingError::InvalidTopP(_))
        ));
        assert!(TopP::new(1.1).is_err());
        assert!(TopP::new(f32::NAN).is_err());
    }
}
