//! Shape container with explicit shallow and deep duplication.
//!
//! Containers own their shapes through [`SharedShape`] slots. A slot is only ever
//! shared between containers by [`ShapeContainer::shallow_copy`]; everything else
//! (construction, [`ShapeContainer::deep_clone`]) gives each shape exactly one owner.
//!
//! - **Shallow copy**: new container and new sequence, same underlying shapes. A
//!   rotation through either container is visible through the other.
//! - **Deep clone**: new container whose shapes are each shape's own `deep_clone`,
//!   in the same order. Nothing is shared.
//!
//! The model is single-threaded, so slots use `Rc<RefCell<_>>` rather than locks.

use core::cell::{Ref, RefCell};
use std::rc::Rc;

use shapeforge_core::{Dimensions, Shape};

/// One container slot: a shape that may be aliased by shallow copies.
///
/// Borrows are short-lived; holding a [`SharedShape::borrow`] guard while rotating
/// the same shape through an alias panics, as with any `RefCell`.
#[derive(Debug)]
pub struct SharedShape(Rc<RefCell<Box<dyn Shape>>>);

impl SharedShape {
    fn new(shape: Box<dyn Shape>) -> Self {
        Self(Rc::new(RefCell::new(shape)))
    }

    fn alias(&self) -> Self {
        Self(Rc::clone(&self.0))
    }

    /// `true` when both slots refer to the very same shape.
    pub fn same_shape(&self, other: &SharedShape) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of slots (across all containers) referring to this shape.
    pub fn alias_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    pub fn borrow(&self) -> Ref<'_, dyn Shape> {
        Ref::map(self.0.borrow(), |shape| &**shape)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.0.borrow().dimensions()
    }

    pub fn rotation_count(&self) -> u32 {
        self.0.borrow().rotation_count()
    }

    pub fn rotate(&self) {
        self.0.borrow_mut().rotate();
    }

    fn deep_clone(&self) -> Self {
        Self::new(self.0.borrow().deep_clone())
    }
}

/// Ordered collection of shapes with bulk mutation and duplication.
///
/// Deliberately not `Clone`: callers pick [`ShapeContainer::shallow_copy`] or
/// [`ShapeContainer::deep_clone`] by name.
#[derive(Debug, Default)]
pub struct ShapeContainer {
    shapes: Vec<SharedShape>,
}

impl ShapeContainer {
    /// Take ownership of `shapes`, preserving order.
    pub fn new(shapes: Vec<Box<dyn Shape>>) -> Self {
        shapes.into_iter().collect()
    }

    pub fn push(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(SharedShape::new(shape));
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SharedShape> {
        self.shapes.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, SharedShape> {
        self.shapes.iter()
    }

    /// Rotate every shape taller than it is wide. Returns how many rotated.
    ///
    /// Takes `&self`: shapes are mutated in place, and every shallow copy sees it.
    pub fn to_landscape(&self) -> usize {
        let rotated = self.rotate_where(|d| d.height() > d.width());
        tracing::debug!(rotated, total = self.len(), "to landscape");
        rotated
    }

    /// Rotate every shape wider than it is tall. Returns how many rotated.
    pub fn to_portrait(&self) -> usize {
        let rotated = self.rotate_where(|d| d.width() > d.height());
        tracing::debug!(rotated, total = self.len(), "to portrait");
        rotated
    }

    /// New container, new sequence, same shapes.
    pub fn shallow_copy(&self) -> Self {
        tracing::debug!(len = self.len(), "shallow copy");
        Self {
            shapes: self.shapes.iter().map(SharedShape::alias).collect(),
        }
    }

    /// New container of independently owned deep clones, same order.
    pub fn deep_clone(&self) -> Self {
        tracing::debug!(len = self.len(), "deep clone");
        Self {
            shapes: self.shapes.iter().map(SharedShape::deep_clone).collect(),
        }
    }

    /// `true` when any shape here is also held by `other`.
    pub fn shares_shapes_with(&self, other: &ShapeContainer) -> bool {
        self.shapes
            .iter()
            .any(|mine| other.shapes.iter().any(|theirs| mine.same_shape(theirs)))
    }

    fn rotate_where(&self, predicate: impl Fn(&Dimensions) -> bool) -> usize {
        let mut rotated = 0;
        for shape in &self.shapes {
            if predicate(&shape.dimensions()) {
                shape.rotate();
                rotated += 1;
            }
        }
        rotated
    }
}

impl FromIterator<Box<dyn Shape>> for ShapeContainer {
    fn from_iter<I: IntoIterator<Item = Box<dyn Shape>>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().map(SharedShape::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ShapeContainer {
    type Item = &'a SharedShape;
    type IntoIter = core::slice::Iter<'a, SharedShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
