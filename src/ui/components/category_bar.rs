//! Category filter bar renderer.

use crate::ui::helpers::{clip, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CategoryChip;

/// Renders the chips on one line at `row` and returns the next free row.
///
/// The selected chip is drawn in the active colors. Chips that do not fit are
/// replaced by an ellipsis.
pub fn render_category_bar(
    row: usize,
    chips: &[CategoryChip],
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    for chip in chips {
        let label = format!(" {} ", chip.label);
        let width = text_width(&label) + 1;
        if used + width > cols {
            if used < cols {
                print!("{}…{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
                used += 1;
            }
            break;
        }

        if chip.is_selected {
            print!(
                "{}{}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.chip_active_fg),
                Theme::bg(&theme.colors.chip_active_bg)
            );
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}{} ", clip(&label, cols), Theme::reset());
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
