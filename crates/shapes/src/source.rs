//! Dimension sources feeding the generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shapeforge_core::DimensionBounds;

/// Picks a width and height inside the given bounds.
///
/// Implementations must return values within `bounds`; the generator checks and
/// refuses anything else.
pub trait DimensionSource {
    fn generate(&mut self, bounds: &DimensionBounds) -> (u32, u32);
}

/// Uniformly random dimensions.
#[derive(Debug, Clone)]
pub struct RandomDimensions<R = StdRng> {
    rng: R,
}

impl RandomDimensions<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomDimensions<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DimensionSource for RandomDimensions<R> {
    fn generate(&mut self, bounds: &DimensionBounds) -> (u32, u32) {
        let width = self.rng.gen_range(bounds.min_width()..=bounds.max_width());
        let height = self.rng.gen_range(bounds.min_height()..=bounds.max_height());
        (width, height)
    }
}
