//! Unicode superscript glyphs used by the unit grammar.

/// Glyphs a unit exponent may consist of, ASCII form first.
///
/// `⋅` stands in for the decimal point; signs use the dedicated
/// superscript plus/minus code points.
const SUPERSCRIPT_GLYPHS: [(char, char); 13] = [
    ('0', '\u{2070}'),
    ('1', '\u{00B9}'),
    ('2', '\u{00B2}'),
    ('3', '\u{00B3}'),
    ('4', '\u{2074}'),
    ('5', '\u{2075}'),
    ('6', '\u{2076}'),
    ('7', '\u{2077}'),
    ('8', '\u{2078}'),
    ('9', '\u{2079}'),
    ('+', '\u{207A}'),
    ('-', '\u{207B}'),
    ('.', '\u{22C5}'),
];

/// Maps one superscript glyph back to its ASCII form.
#[must_use]
pub(crate) fn from_superscript_char(glyph: char) -> Option<char> {
    SUPERSCRIPT_GLYPHS
        .iter()
        .find(|(_, sup)| *sup == glyph)
        .map(|(ascii, _)| *ascii)
}

/// Maps one ASCII character to its superscript glyph.
#[must_use]
pub(crate) fn to_superscript_char(ascii: char) -> Option<char> {
    SUPERSCRIPT_GLYPHS
        .iter()
        .find(|(plain, _)| *plain == ascii)
        .map(|(_, sup)| *sup)
}

/// Converts a string into its unicode superscript equivalent.
///
/// Characters without a superscript form pass through unchanged.
#[must_use]
pub fn to_superscript(s: &str) -> String {
    s.chars()
        .map(|c| to_superscript_char(c).unwrap_or(c))
        .collect()
}
