//! Empty state component renderer.
//!
//! Shown in place of the menu list while loading and when nothing matches.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message starting at `row`.
///
/// ```text
///                 No dishes match your search
///         Esc clears the search, Tab changes the category
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    print_centered(row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(row + 1, &empty.subtitle, &subtitle_style, cols);
}
