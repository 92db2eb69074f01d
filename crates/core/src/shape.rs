//! Shape trait: the capability set every variant provides.

use core::any::Any;

use crate::dimensions::Dimensions;

/// Shape capability set.
///
/// Variants are an open set: a new kind of shape implements this trait and every
/// factory, generator and container keeps working without changes.
///
/// ## Duplication policy
///
/// Both [`Shape::clone_shape`] and [`Shape::deep_clone`] return a fresh shape of the
/// *same concrete variant*. Each variant documents which of its fields are reset on
/// duplication; `rotation_count` is reset to `0` by every variant. A clone is a new
/// shape at the same dimensions, not a shape with borrowed history.
///
/// `deep_clone` differs from `clone_shape` only for variants holding a field with its
/// own copy semantics; such a field must be deep-cloned as well. For scalar-only
/// variants the two are the same.
pub trait Shape: core::fmt::Debug + 'static {
    /// Short, stable variant name (used in reports and logs).
    fn variant(&self) -> &'static str;

    fn dimensions(&self) -> Dimensions;

    /// Number of times [`Shape::rotate`] has been called on this instance.
    fn rotation_count(&self) -> u32;

    /// Swap width and height and bump the rotation counter.
    ///
    /// Two rotations restore the dimensions; the counter never goes back.
    fn rotate(&mut self);

    /// Lazily produce the rendered rows, top to bottom.
    ///
    /// Always yields exactly `height` rows of exactly `width` characters. Calling it
    /// again starts over.
    fn render(&self) -> Box<dyn Iterator<Item = String> + '_>;

    /// Shallow duplicate with the variant's reset fields cleared.
    fn clone_shape(&self) -> Box<dyn Shape>;

    /// Deep duplicate with the variant's reset fields cleared.
    fn deep_clone(&self) -> Box<dyn Shape>;

    /// Downcast hook for reading variant-specific fields.
    fn as_any(&self) -> &dyn Any;

    fn width(&self) -> u32 {
        self.dimensions().width()
    }

    fn height(&self) -> u32 {
        self.dimensions().height()
    }

    fn area(&self) -> u64 {
        self.dimensions().area()
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_shape()
    }
}

/// Collect a shape's rendering into one newline-separated string.
pub fn render_text(shape: &dyn Shape) -> String {
    shape.render().collect::<Vec<_>>().join("\n")
}
