//! Splitting display text around case-insensitive matches of a search term.
//!
//! The term is literal text. Characters such as `+`, `(` or `*` match
//! themselves; nothing is interpreted as a pattern.

/// A piece of highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any match.
    Plain(&'a str),
    /// Text that matched the search term.
    Match(&'a str),
}

impl<'a> Segment<'a> {
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Plain(text) | Self::Match(text) => *text,
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}

/// Splits `text` into alternating plain and matched segments.
///
/// Every non-overlapping occurrence of `term` is marked, scanning left to
/// right. An empty `term` yields the text unchanged as a single plain
/// segment. Concatenating the segments always reproduces `text`.
///
/// # Example
///
/// ```rust
/// use menuboard::catalog::{highlight, Segment};
///
/// let segments = highlight("a+b is great", "A+B");
/// assert_eq!(segments, vec![Segment::Match("a+b"), Segment::Plain(" is great")]);
/// ```
#[must_use]
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }
    if term.is_empty() {
        return vec![Segment::Plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        if let Some(len) = match_len_at(&text[cursor..], term) {
            if plain_start < cursor {
                segments.push(Segment::Plain(&text[plain_start..cursor]));
            }
            segments.push(Segment::Match(&text[cursor..cursor + len]));
            cursor += len;
            plain_start = cursor;
        } else {
            cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::Plain(&text[plain_start..]));
    }

    segments
}

/// Whether `haystack` contains `term` under the same per-character case
/// folding [`highlight`] uses. An empty `term` is contained in everything.
#[must_use]
pub fn contains_ci(haystack: &str, term: &str) -> bool {
    term.is_empty()
        || haystack
            .char_indices()
            .any(|(idx, _)| match_len_at(&haystack[idx..], term).is_some())
}

/// Byte length of the prefix of `haystack` that equals `term` ignoring case.
fn match_len_at(haystack: &str, term: &str) -> Option<usize> {
    let mut hay_chars = haystack.char_indices();
    for term_char in term.chars() {
        let (_, hay_char) = hay_chars.next()?;
        if !hay_char.to_lowercase().eq(term_char.to_lowercase()) {
            return None;
        }
    }
    Some(hay_chars.next().map_or(haystack.len(), |(idx, _)| idx))
}
