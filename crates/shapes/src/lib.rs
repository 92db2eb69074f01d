//! Shape variants and the machinery around them.
//!
//! This crate holds the concrete variants, the factories that create them, the
//! generator that drives a factory from a dimension source, and the container whose
//! shallow and deep duplication semantics are the point of the exercise. Everything
//! here is synchronous, single-threaded and IO-free except [`report`].

pub mod container;
pub mod factory;
pub mod filled;
pub mod generator;
pub mod rectangle;
pub mod render;
pub mod report;
pub mod source;

pub use container::{ShapeContainer, SharedShape};
pub use factory::{FilledRectangleFactory, RectangleFactory, ShapeFactory};
pub use filled::FilledRectangle;
pub use generator::ShapeGenerator;
pub use rectangle::Rectangle;
pub use render::{FillRows, OutlineRows};
pub use report::{ReportFormat, ShapeReport, write_report};
pub use source::{DimensionSource, RandomDimensions};

pub use shapeforge_core::{
    DimensionBounds, Dimensions, FillSymbol, Shape, ShapeError, ShapeResult, render_text,
};
