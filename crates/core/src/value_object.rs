//! Value object trait: equality by value, not identity.
//!
//! Shapes themselves are mutable (they rotate and count their rotations), but the
//! pieces they are built from are plain values: a `Dimensions` pair or a
//! `FillSymbol` carries no identity and is freely copied into clones.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (`Dimensions::rotated` returns a fresh pair instead of
/// swapping in place).
///
/// ## Value Object vs Shape
///
/// - **Value Object**: `Dimensions { width: 3, height: 2 }` equals any other 3x2 pair
/// - **Shape**: a rectangle is a distinct mutable object; two rectangles with the same
///   dimensions can still diverge once one of them rotates
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Margin {
///     top: u32,
///     left: u32,
/// }
///
/// impl ValueObject for Margin {}
///
/// let a = Margin { top: 1, left: 2 };
/// let b = Margin { top: 1, left: 2 };
/// assert_eq!(a, b);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
