use crate::distribution::Distribution;
use crate::error::Result;

/// Trait for transforms that map one distribution to another.
pub trait Transform: Send + Sync {
    /// Returns the name of this transform.
    fn name(&self) -> &str;

    /// Produce a new distribution from `dist`. The input is never mutated.
    fn apply(&self, dist: &Distribution) -> Result<Distribution>;
}

/// Composes multiple transforms into a pipeline applied in order.
///
/// The reference data flow is raw distribution -> temperature -> top-p;
/// the pipeline short-circuits on the first transform error.
pub struct Pipeline {
    transforms: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the end of the pipeline. Returns self for
    /// builder-style usage.
    pub fn with(mut self, transform: Box<dyn Transform>) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Apply every transform in sequence and return the final distribution.
    pub fn run(&self, dist: &Distribution) -> Result<Distribution> {
        let mut current = dist.clone();
        for transform in &self.transforms {
            current = transform.apply(&current)?;
        }
        Ok(current)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
