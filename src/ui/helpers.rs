//! Shared rendering utilities and helpers.
//!
//! Widths here are counted in characters, not bytes, so Arabic names and
//! prices pad the same as ASCII ones.
//!
//! # Example
//!
//! ```rust
//! use menuboard::ui::helpers::highlighted_text;
//! use menuboard::ui::theme::Theme;
//!
//! let theme = Theme::default();
//! let out = highlighted_text("Mint Tea", &[(5, 8)], &theme, "");
//! assert!(out.starts_with("Mint "));
//! assert!(out.contains("Tea"));
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters.
#[must_use]
pub fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Builds `text` with the given character ranges in the match colors.
///
/// After each match `restore` is emitted so the surrounding style (for
/// example a selection background) carries on.
#[must_use]
pub fn highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out
}

/// Prints `text` centered in a full-width line with the given style prefix.
pub fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = clip(text, cols);
    let text_len = text_width(&text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_character_ranges_of_multibyte_text() {
        let theme = Theme::default();
        let out = highlighted_text("شاي بالنعناع", &[(0, 3)], &theme, "");

        let expected = format!(
            "{}{}شاي{} بالنعناع",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset()
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn restore_follows_every_match() {
        let theme = Theme::default();
        let out = highlighted_text("tea tea", &[(0, 3), (4, 7)], &theme, "<R>");
        assert_eq!(out.matches("<R>").count(), 2);
        assert!(out.ends_with("<R>"));
    }

    #[test]
    fn out_of_bounds_ranges_are_clamped() {
        let theme = Theme::default();
        let out = highlighted_text("abc", &[(2, 10), (7, 9)], &theme, "");
        assert!(out.starts_with("ab"));
        assert!(out.contains('c'));
    }

    #[test]
    fn clip_counts_characters() {
        assert_eq!(clip("مطعمنا", 3), "مطع");
        assert_eq!(text_width("مطعمنا"), 6);
    }
}
