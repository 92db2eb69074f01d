//! Rectangle: the base shape variant, rendered as a bordered outline.

use core::any::Any;

use shapeforge_core::{Dimensions, Shape, ShapeResult};

use crate::render::OutlineRows;

/// Outline rectangle.
///
/// Reset on clone: `rotation_count`.
#[derive(Debug, PartialEq, Eq)]
pub struct Rectangle {
    dimensions: Dimensions,
    rotation_count: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> ShapeResult<Self> {
        Ok(Self::with_dimensions(Dimensions::new(width, height)?))
    }

    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            rotation_count: 0,
        }
    }

    fn reset_on_clone(&mut self) {
        self.rotation_count = 0;
    }
}

/// Every copy of a rectangle starts with a clean rotation history.
impl Clone for Rectangle {
    fn clone(&self) -> Self {
        let mut copy = Self {
            dimensions: self.dimensions,
            rotation_count: self.rotation_count,
        };
        copy.reset_on_clone();
        copy
    }
}

impl Shape for Rectangle {
    fn variant(&self) -> &'static str {
        "rectangle"
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn rotation_count(&self) -> u32 {
        self.rotation_count
    }

    fn rotate(&mut self) {
        self.dimensions = self.dimensions.rotated();
        self.rotation_count += 1;
    }

    fn render(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(OutlineRows::new(self.dimensions))
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        tracing::trace!(variant = self.variant(), dimensions = %self.dimensions, "clone");
        Box::new(self.clone())
    }

    // Scalar-only: nothing to recurse into.
    fn deep_clone(&self) -> Box<dyn Shape> {
        self.clone_shape()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
