use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Marker shapes a style string can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolShape {
    Circle,
    Square,
    Triangle,
    TriangleDown,
    Diamond,
    Plus,
    Cross,
    Star,
}

impl SymbolShape {
    /// Parse from a matplotlib-style format character.
    #[must_use]
    pub fn from_style_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Self::Circle),
            's' => Some(Self::Square),
            '^' => Some(Self::Triangle),
            'v' => Some(Self::TriangleDown),
            'd' => Some(Self::Diamond),
            '+' => Some(Self::Plus),
            'x' => Some(Self::Cross),
            '*' => Some(Self::Star),
            _ => None,
        }
    }
}

/// Fixed colors addressable by a single style character.
fn color_for_code(c: char) -> Option<Color> {
    match c {
        'k' => Some(Color::BLACK),
        'r' => Some(Color::RED),
        'g' => Some(Color::GREEN),
        'b' => Some(Color::BLUE),
        'c' => Some(Color::CYAN),
        'm' => Some(Color::MAGENTA),
        'y' => Some(Color::YELLOW),
        'w' => Some(Color::WHITE),
        _ => None,
    }
}

/// Result of parsing a compact style string such as `"k-o"`.
///
/// A series may carry a line, a symbol, both, or neither; `color` set means
/// the default categorical assignment is overridden.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleTokens {
    pub line: bool,
    pub color: Option<Color>,
    pub symbol: Option<SymbolShape>,
}

impl StyleTokens {
    /// Whether this style draws anything at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.line || self.symbol.is_some()
    }
}

/// Parses a style string left to right.
///
/// `-` enables the connecting line, a color code fixes the series color,
/// a symbol code enables markers. Any other character is a
/// [`PlotError::StyleParse`], reported with its position; callers decide
/// whether to fall back or surface the error.
pub fn parse_style(style: &str) -> PlotResult<StyleTokens> {
    let mut tokens = StyleTokens::default();
    for (position, character) in style.chars().enumerate() {
        if character == '-' {
            tokens.line = true;
        } else if let Some(color) = color_for_code(character) {
            tokens.color = Some(color);
        } else if let Some(symbol) = SymbolShape::from_style_char(character) {
            tokens.symbol = Some(symbol);
        } else {
            return Err(PlotError::StyleParse {
                style: style.to_owned(),
                character,
                position,
            });
        }
    }
    Ok(tokens)
}
