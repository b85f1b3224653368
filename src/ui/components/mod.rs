//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Site name, description and data status
//! - [`category_bar`]: "All" plus one chip per category
//! - [`search`]: Search input box
//! - [`menu_list`]: Category headings and dish rows
//! - [`empty`]: Message shown instead of an empty list
//! - [`lightbox`]: Image viewer overlay
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header: title]
//! [Header: description / status]
//! [Category bar]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Menu rows or empty state]
//! [Border]
//! [Footer]
//! ```
//!
//! The lightbox, when present, is drawn over the finished layout.

mod category_bar;
mod empty;
mod footer;
mod header;
mod lightbox;
mod menu_list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use category_bar::render_category_bar;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use lightbox::render_lightbox;
use menu_list::render_menu_rows;
use search::render_search_bar;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen for `vm`.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_category_bar(current_row, &vm.category_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        render_menu_rows(current_row, &vm.rows, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    if let Some(lightbox) = &vm.lightbox {
        render_lightbox(lightbox, theme, rows, cols);
    }
}
