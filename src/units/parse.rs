use serde::{Deserialize, Serialize};

use super::superscript::{from_superscript_char, to_superscript};

/// A unit string split into base symbol and integer exponent.
///
/// `unit` is `None` only for empty input; a present-but-blank base (for
/// example a bare exponent such as `"³"`) parses to `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedUnit {
    pub unit: Option<String>,
    pub exponent: i32,
}

impl ParsedUnit {
    #[must_use]
    pub fn new(unit: impl Into<String>, exponent: i32) -> Self {
        Self {
            unit: Some(unit.into()),
            exponent,
        }
    }

    /// The base symbol, if one was present in the input.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

/// Splits a unit string into base symbol and trailing superscript exponent.
///
/// Every recognized superscript glyph feeds the exponent accumulator in its
/// ASCII form; every other character belongs to the base symbol, input order
/// preserved in both buffers. A unit without a visible exponent means power
/// 1, not power 0. The scan is permissive and total: there is no failure
/// mode.
#[must_use]
pub fn parse_unit(input: &str) -> ParsedUnit {
    if input.is_empty() {
        return ParsedUnit {
            unit: None,
            exponent: 1,
        };
    }

    let mut symbol = String::new();
    let mut digits = String::new();
    for c in input.chars() {
        match from_superscript_char(c) {
            Some(ascii) => digits.push(ascii),
            None => symbol.push(c),
        }
    }

    ParsedUnit {
        unit: Some(symbol),
        exponent: leading_integer(&digits).unwrap_or(1),
    }
}

/// Renders a base symbol and exponent back into display form.
///
/// Exponent 1 is invisible; anything else is appended as superscript
/// glyphs, sign included.
#[must_use]
pub fn format_unit(unit: &str, exponent: i32) -> String {
    if exponent == 1 {
        return unit.to_owned();
    }
    let mut formatted = unit.to_owned();
    formatted.push_str(&to_superscript(&exponent.to_string()));
    formatted
}

/// Reads an optional sign and the digit run that follows, stopping at the
/// first character that is neither. Mirrors `parseInt` truncation so that
/// stray glyphs (a decimal dot, a second sign) never make parsing fail.
fn leading_integer(digits: &str) -> Option<i32> {
    let rest = digits.strip_prefix(['+', '-']).unwrap_or(digits);
    let digit_len = rest.chars().take_while(char::is_ascii_digit).count();
    if digit_len == 0 {
        return None;
    }
    let signed_len = digits.len() - rest.len() + digit_len;
    digits[..signed_len].parse().ok()
}
