//! Filled rectangle: a rectangle painted solid with a fill symbol.

use core::any::Any;

use shapeforge_core::{Dimensions, FillSymbol, Shape, ShapeResult};

use crate::rectangle::Rectangle;
use crate::render::FillRows;

/// Rectangle whose every cell is `fill`.
///
/// Dimensions and rotation history live in the embedded [`Rectangle`], so the base
/// reset list applies unchanged.
///
/// Reset on clone: `rotation_count` (through the base). Kept: `fill`.
#[derive(Debug, PartialEq, Eq)]
pub struct FilledRectangle {
    base: Rectangle,
    fill: FillSymbol,
}

impl FilledRectangle {
    pub fn new(width: u32, height: u32, fill: FillSymbol) -> ShapeResult<Self> {
        Ok(Self::with_dimensions(Dimensions::new(width, height)?, fill))
    }

    pub fn with_dimensions(dimensions: Dimensions, fill: FillSymbol) -> Self {
        Self {
            base: Rectangle::with_dimensions(dimensions),
            fill,
        }
    }

    pub fn fill_symbol(&self) -> FillSymbol {
        self.fill
    }
}

impl Clone for FilledRectangle {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            fill: self.fill,
        }
    }
}

impl Shape for FilledRectangle {
    fn variant(&self) -> &'static str {
        "filled_rectangle"
    }

    fn dimensions(&self) -> Dimensions {
        self.base.dimensions()
    }

    fn rotation_count(&self) -> u32 {
        self.base.rotation_count()
    }

    fn rotate(&mut self) {
        self.base.rotate();
    }

    fn render(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(FillRows::new(self.dimensions(), self.fill))
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        tracing::trace!(
            variant = self.variant(),
            dimensions = %self.dimensions(),
            fill = %self.fill,
            "clone"
        );
        Box::new(self.clone())
    }

    fn deep_clone(&self) -> Box<dyn Shape> {
        self.clone_shape()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shapeforge_core::render_text;

    fn star() -> FillSymbol {
        FillSymbol::new('*').unwrap()
    }

    #[test]
    fn renders_solid_rows() {
        let shape = FilledRectangle::new(3, 2, star()).unwrap();
        assert_eq!(shape.render().collect::<Vec<_>>(), vec!["***", "***"]);
        assert_eq!(render_text(&shape), "***\n***");
    }

    #[test]
    fn rotated_shape_renders_rotated() {
        let mut shape = FilledRectangle::new(3, 2, star()).unwrap();
        shape.rotate();
        assert_eq!(shape.render().collect::<Vec<_>>(), vec!["**", "**", "**"]);
    }

    #[test]
    fn clone_keeps_fill_and_resets_rotations() {
        let mut shape = FilledRectangle::new(3, 2, FillSymbol::new('#').unwrap()).unwrap();
        shape.rotate();

        let copy = shape.clone_shape();
        let copy = copy
            .as_any()
            .downcast_ref::<FilledRectangle>()
            .expect("clone must keep the filled variant");

        assert_eq!(copy.fill_symbol().as_char(), '#');
        assert_eq!(copy.dimensions(), shape.dimensions());
        assert_eq!(copy.rotation_count(), 0);
    }

    #[test]
    fn deep_clone_keeps_variant() {
        let shape: Box<dyn Shape> = Box::new(FilledRectangle::new(1, 1, star()).unwrap());
        let deep = shape.deep_clone();
        assert_eq!(deep.variant(), "filled_rectangle");
        assert_eq!(render_text(deep.as_ref()), "*");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: cloning never carries rotation history over, whatever the history.
        #[test]
        fn clone_always_starts_fresh(w in 1u32..100, h in 1u32..100, rotations in 0u32..20) {
            let mut shape = FilledRectangle::new(w, h, star()).unwrap();
            for _ in 0..rotations {
                shape.rotate();
            }

            let copy = shape.clone_shape();
            prop_assert_eq!(copy.rotation_count(), 0);
            prop_assert_eq!(copy.dimensions(), shape.dimensions());
            prop_assert_eq!(shape.rotation_count(), rotations);
        }
    }
}
