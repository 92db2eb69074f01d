//! Row iterators backing `Shape::render`.
//!
//! Both iterators are lazy and exact-sized: they yield `height` rows of `width`
//! characters and nothing else.

use core::iter::FusedIterator;

use shapeforge_core::{Dimensions, FillSymbol};

/// Bordered outline: `+`/`-` on the first and last row, `|` on the sides.
///
/// A one-column shape has no right-hand glyph; a one-row shape is a single border row.
#[derive(Debug, Clone)]
pub struct OutlineRows {
    width: u32,
    height: u32,
    row: u32,
}

impl OutlineRows {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            width: dimensions.width(),
            height: dimensions.height(),
            row: 0,
        }
    }
}

impl Iterator for OutlineRows {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.row >= self.height {
            return None;
        }
        let border = self.row == 0 || self.row == self.height - 1;
        let (edge, inner) = if border { ('+', '-') } else { ('|', ' ') };

        let mut line = String::with_capacity(self.width as usize);
        line.push(edge);
        line.extend(core::iter::repeat_n(inner, self.width.saturating_sub(2) as usize));
        if self.width > 1 {
            line.push(edge);
        }

        self.row += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.height - self.row) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OutlineRows {}
impl FusedIterator for OutlineRows {}

/// Solid block: every cell is the fill symbol.
#[derive(Debug, Clone)]
pub struct FillRows {
    width: u32,
    height: u32,
    row: u32,
    fill: FillSymbol,
}

impl FillRows {
    pub fn new(dimensions: Dimensions, fill: FillSymbol) -> Self {
        Self {
            width: dimensions.width(),
            height: dimensions.height(),
            row: 0,
            fill,
        }
    }
}

impl Iterator for FillRows {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.row >= self.height {
            return None;
        }
        self.row += 1;
        Some(core::iter::repeat_n(self.fill.as_char(), self.width as usize).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.height - self.row) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FillRows {}
impl FusedIterator for FillRows {}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn outline_has_border_rows_and_open_interior() {
        let rows: Vec<String> = OutlineRows::new(dims(4, 3)).collect();
        assert_eq!(rows, vec!["+--+", "|  |", "+--+"]);
    }

    #[test]
    fn narrow_outline_has_no_inner_cells() {
        let rows: Vec<String> = OutlineRows::new(dims(2, 5)).collect();
        assert_eq!(rows, vec!["++", "||", "||", "||", "++"]);
    }

    #[test]
    fn single_column_outline_drops_right_edge() {
        let rows: Vec<String> = OutlineRows::new(dims(1, 3)).collect();
        assert_eq!(rows, vec!["+", "|", "+"]);
    }

    #[test]
    fn single_row_outline_is_one_border_row() {
        let rows: Vec<String> = OutlineRows::new(dims(5, 1)).collect();
        assert_eq!(rows, vec!["+---+"]);
    }

    #[test]
    fn one_by_one_outline_is_a_single_corner() {
        let rows: Vec<String> = OutlineRows::new(dims(1, 1)).collect();
        assert_eq!(rows, vec!["+"]);
    }

    #[test]
    fn fill_rows_repeat_symbol() {
        let fill = FillSymbol::new('*').unwrap();
        let rows: Vec<String> = FillRows::new(dims(3, 2), fill).collect();
        assert_eq!(rows, vec!["***", "***"]);
    }

    #[test]
    fn iterators_report_exact_length() {
        let mut rows = OutlineRows::new(dims(3, 4));
        assert_eq!(rows.len(), 4);
        rows.next();
        assert_eq!(rows.len(), 3);

        let fill = FillSymbol::new('#').unwrap();
        assert_eq!(FillRows::new(dims(2, 7), fill).len(), 7);
    }
}
