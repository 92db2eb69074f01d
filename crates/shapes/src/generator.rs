//! Generator: produce batches of shapes from one injected factory.

use shapeforge_core::{DimensionBounds, Shape, ShapeError, ShapeResult};

use crate::factory::ShapeFactory;
use crate::source::{DimensionSource, RandomDimensions};

/// Draws dimensions from a source and hands them to a single factory.
///
/// The generator never knows which variant it produces. To switch variants, swap
/// the factory with [`ShapeGenerator::replace_factory`] (or build another generator);
/// there is no shared default factory.
#[derive(Debug)]
pub struct ShapeGenerator<S = RandomDimensions> {
    bounds: DimensionBounds,
    factory: Box<dyn ShapeFactory>,
    source: S,
}

impl<S: DimensionSource> ShapeGenerator<S> {
    pub fn new(bounds: DimensionBounds, factory: Box<dyn ShapeFactory>, source: S) -> Self {
        Self {
            bounds,
            factory,
            source,
        }
    }

    pub fn bounds(&self) -> &DimensionBounds {
        &self.bounds
    }

    pub fn factory(&self) -> &dyn ShapeFactory {
        self.factory.as_ref()
    }

    /// Swap in another factory, returning the previous one.
    pub fn replace_factory(&mut self, factory: Box<dyn ShapeFactory>) -> Box<dyn ShapeFactory> {
        core::mem::replace(&mut self.factory, factory)
    }

    /// `count` shapes with independently drawn width and height.
    pub fn generate_shapes(&mut self, count: usize) -> ShapeResult<Vec<Box<dyn Shape>>> {
        let bounds = self.bounds;
        let shapes = (0..count)
            .map(|_| {
                let (width, height) = self.draw(&bounds)?;
                self.factory.create(width, height)
            })
            .collect::<ShapeResult<Vec<_>>>()?;

        tracing::debug!(count, factory = ?self.factory, "generated shapes");
        Ok(shapes)
    }

    /// `count` squares; the side is drawn from the range both axes allow.
    pub fn generate_squares(&mut self, count: usize) -> ShapeResult<Vec<Box<dyn Shape>>> {
        let bounds = self.bounds.square();
        let shapes = (0..count)
            .map(|_| {
                let (side, _) = self.draw(&bounds)?;
                self.factory.create(side, side)
            })
            .collect::<ShapeResult<Vec<_>>>()?;

        tracing::debug!(count, factory = ?self.factory, "generated squares");
        Ok(shapes)
    }

    fn draw(&mut self, bounds: &DimensionBounds) -> ShapeResult<(u32, u32)> {
        let (width, height) = self.source.generate(bounds);
        if !bounds.contains(width, height) {
            tracing::warn!(width, height, ?bounds, "dimension source ignored its bounds");
            return Err(ShapeError::out_of_bounds(width, height));
        }
        Ok((width, height))
    }
}
