//! Validated width/height pairs and the bounds generators draw them from.

use serde::Serialize;

use crate::error::{ShapeError, ShapeResult};
use crate::value_object::ValueObject;

/// A strictly positive width/height pair.
///
/// The only way to obtain one is [`Dimensions::new`], so every shape built on top of
/// it upholds `width > 0 && height > 0` without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl ValueObject for Dimensions {}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> ShapeResult<Self> {
        if width == 0 || height == 0 {
            return Err(ShapeError::dimension(width, height));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width * height`, widened so it cannot overflow.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// The same pair with width and height swapped.
    pub fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn is_landscape(&self) -> bool {
        self.width >= self.height
    }

    pub fn is_portrait(&self) -> bool {
        self.height >= self.width
    }
}

impl core::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Inclusive ranges a dimension source may pick widths and heights from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionBounds {
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
}

impl ValueObject for DimensionBounds {}

impl Default for DimensionBounds {
    fn default() -> Self {
        Self {
            min_width: 2,
            max_width: 6,
            min_height: 2,
            max_height: 6,
        }
    }
}

impl DimensionBounds {
    /// Bounds are rejected when a minimum is zero or exceeds its maximum.
    pub fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> ShapeResult<Self> {
        if min_width == 0 || min_height == 0 {
            return Err(ShapeError::bounds("minimum width and height must be positive"));
        }
        if min_width > max_width {
            return Err(ShapeError::bounds(format!(
                "min_width {min_width} exceeds max_width {max_width}"
            )));
        }
        if min_height > max_height {
            return Err(ShapeError::bounds(format!(
                "min_height {min_height} exceeds max_height {max_height}"
            )));
        }
        Ok(Self {
            min_width,
            max_width,
            min_height,
            max_height,
        })
    }

    /// Same range on both axes.
    pub fn uniform(min: u32, max: u32) -> ShapeResult<Self> {
        Self::new(min, max, min, max)
    }

    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Bounds for squares: a side must fit both axes.
    ///
    /// Never empty, since `min(min_w, min_h) <= min(max_w, max_h)` follows from the
    /// per-axis checks in [`DimensionBounds::new`].
    pub fn square(&self) -> Self {
        let min = self.min_width.min(self.min_height);
        let max = self.max_width.min(self.max_height);
        Self {
            min_width: min,
            max_width: max,
            min_height: min,
            max_height: max,
        }
    }

    pub fn contains(&self, width: u32, height: u32) -> bool {
        (self.min_width..=self.max_width).contains(&width)
            && (self.min_height..=self.max_height).contains(&height)
    }
}
