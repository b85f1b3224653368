//! Search bar component renderer.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box at `row` and returns the next free row.
///
/// ```text
///      ┌──────────────────────────┐
///      │ Search: chicken▏         │
///      └──────────────────────────┘
/// ```
///
/// The caret is only drawn while keystrokes go to the query; when focus is
/// on the results the query is dimmed.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let caret = if search.is_typing { "▏" } else { "" };
    let max_query = inner_width.saturating_sub(text_width(" Search: ") + text_width(caret));
    let query_len = text_width(&search.query);
    let visible_query: String = search
        .query
        .chars()
        .skip(query_len.saturating_sub(max_query))
        .collect();
    let search_text = format!(" Search: {visible_query}{caret}");
    let padding = inner_width.saturating_sub(text_width(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    if search.is_typing {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
