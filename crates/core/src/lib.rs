//! `shapeforge-core` — shape foundation building blocks.
//!
//! This crate contains the **pure** primitives every shape variant is built from:
//! validated value objects, the error model and the `Shape` capability trait.
//! Concrete variants, factories and containers live in `shapeforge-shapes`.

pub mod dimensions;
pub mod error;
pub mod fill;
pub mod shape;
pub mod value_object;

pub use dimensions::{DimensionBounds, Dimensions};
pub use error::{ShapeError, ShapeResult};
pub use fill::FillSymbol;
pub use shape::{Shape, render_text};
pub use value_object::ValueObject;
