//! Factories: create shapes without naming their concrete variant.

use shapeforge_core::{FillSymbol, Shape, ShapeResult};

use crate::filled::FilledRectangle;
use crate::rectangle::Rectangle;

/// Creation capability shared by every variant family member.
///
/// The signature is fixed: anything a variant needs beyond width and height is bound
/// when the factory itself is built. That keeps all factories substitutable.
pub trait ShapeFactory: core::fmt::Debug {
    fn create(&self, width: u32, height: u32) -> ShapeResult<Box<dyn Shape>>;
}

/// Produces outline [`Rectangle`]s.
#[derive(Debug, Copy, Clone, Default)]
pub struct RectangleFactory;

impl RectangleFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ShapeFactory for RectangleFactory {
    fn create(&self, width: u32, height: u32) -> ShapeResult<Box<dyn Shape>> {
        Ok(Box::new(Rectangle::new(width, height)?))
    }
}

/// Produces [`FilledRectangle`]s painted with one fixed symbol.
#[derive(Debug, Copy, Clone)]
pub struct FilledRectangleFactory {
    fill: FillSymbol,
}

impl FilledRectangleFactory {
    pub fn new(fill: FillSymbol) -> Self {
        Self { fill }
    }

    pub fn fill_symbol(&self) -> FillSymbol {
        self.fill
    }
}

impl ShapeFactory for FilledRectangleFactory {
    fn create(&self, width: u32, height: u32) -> ShapeResult<Box<dyn Shape>> {
        Ok(Box::new(FilledRectangle::new(width, height, self.fill)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeforge_core::ShapeError;

    fn factories() -> Vec<Box<dyn ShapeFactory>> {
        vec![
            Box::new(RectangleFactory::new()),
            Box::new(FilledRectangleFactory::new(FillSymbol::new('o').unwrap())),
        ]
    }

    #[test]
    fn rectangle_factory_creates_outlines() {
        let shape = RectangleFactory.create(3, 4).unwrap();
        assert_eq!(shape.variant(), "rectangle");
        assert_eq!((shape.width(), shape.height()), (3, 4));
        assert_eq!(shape.rotation_count(), 0);
    }

    #[test]
    fn filled_factory_binds_fill_at_construction() {
        let factory = FilledRectangleFactory::new(FillSymbol::new('o').unwrap());
        let shape = factory.create(2, 2).unwrap();

        let filled = shape
            .as_any()
            .downcast_ref::<FilledRectangle>()
            .expect("filled factory must create filled rectangles");
        assert_eq!(filled.fill_symbol(), factory.fill_symbol());
    }

    #[test]
    fn factories_are_substitutable() {
        for factory in factories() {
            let shape = factory.create(5, 3).unwrap();
            assert_eq!(shape.area(), 15);
            assert_eq!(shape.render().count(), 3);
        }
    }

    #[test]
    fn every_factory_rejects_invalid_dimensions() {
        for factory in factories() {
            match factory.create(0, 3) {
                Err(ShapeError::InvalidDimension { width: 0, height: 3 }) => {}
                other => panic!("Expected InvalidDimension, got {other:?}"),
            }
        }
    }
}
