pub mod distribution;
pub mod error;
pub mod params;
pub mod select;
pub mod temperature;
pub mod top_p;
pub mod transform;

pub use distribution::{Distribution, Outcome};
pub use error::{Result, SamplingError};
pub use params::{Temperature, TopP};
pub use select::{argmax, WeightedSampler};
pub use temperature::TemperatureAdjuster;
pub use top_p::TopPNormalizer;
pub use transform::{Pipeline, Transform};
