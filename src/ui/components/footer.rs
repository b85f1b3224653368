//! Footer component renderer.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed, truncated to the
/// terminal width. Returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    print_centered(row, &footer.keybindings, &Theme::fg(&theme.colors.text_dim), cols);
    row + 1
}
