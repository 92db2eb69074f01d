//! Fill symbol value object.

use serde::Serialize;

use crate::error::{ShapeError, ShapeResult};
use crate::value_object::ValueObject;

/// The single character a filled shape paints every cell with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FillSymbol(char);

impl ValueObject for FillSymbol {}

impl FillSymbol {
    /// Control characters are rejected: a `'\n'` fill would break the one-row-per-line
    /// shape of rendered output.
    pub fn new(symbol: char) -> ShapeResult<Self> {
        if symbol.is_control() {
            return Err(ShapeError::fill_symbol(format!(
                "control character {symbol:?} cannot be used as a fill"
            )));
        }
        Ok(Self(symbol))
    }

    /// Parse user input, keeping only its first character.
    pub fn parse(input: &str) -> ShapeResult<Self> {
        match input.chars().next() {
            Some(symbol) => Self::new(symbol),
            None => Err(ShapeError::fill_symbol("fill symbol cannot be empty")),
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

/// `#`, the conventional block fill.
impl Default for FillSymbol {
    fn default() -> Self {
        Self('#')
    }
}

impl core::fmt::Display for FillSymbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<char> for FillSymbol {
    type Error = ShapeError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_first_character() {
        let fill = FillSymbol::parse("#abc").unwrap();
        assert_eq!(fill.as_char(), '#');
    }

    #[test]
    fn parse_rejects_empty_input() {
        match FillSymbol::parse("").unwrap_err() {
            ShapeError::InvalidFillSymbol(msg) if msg.contains("empty") => {}
            other => panic!("Expected InvalidFillSymbol, got {other:?}"),
        }
    }

    #[test]
    fn newline_is_not_a_fill() {
        assert!(FillSymbol::new('\n').is_err());
    }

    #[test]
    fn multibyte_symbols_are_allowed() {
        let fill = FillSymbol::parse("█").unwrap();
        assert_eq!(fill.to_string(), "█");
    }
}
