//! Overlap counts to dot glyphs.

use std::borrow::Cow;

/// Denser dots for busier cells.  5 and 6 are reserved and still blank.
const GLYPHS: [(u64, &str); 6] = [
    (1, "‧"),
    (2, "•"),
    (3, "⦁"),
    (4, "●"),
    (5, ""),
    (6, ""),
];

/// Table entry for `count`, if any.
#[inline]
#[must_use]
pub fn glyph(count: u64) -> Option<&'static str> {
    GLYPHS
        .iter()
        .find_map(|&(n, g)| (n == count).then_some(g))
}

/// Text of one populated cell.  Falls back to the decimal count; a blank
/// table entry still occupies one column.
#[must_use]
pub fn cell_text(count: u64, use_glyphs: bool) -> Cow<'static, str> {
    match glyph(count).filter(|_| use_glyphs) {
        Some("") => Cow::Borrowed(" "),
        Some(g) => Cow::Borrowed(g),
        None => Cow::Owned(count.to_string()),
    }
}
