//! Menu list renderer: category headings followed by their dishes.
//!
//! Product row layout:
//!
//! ```text
//! ▸ Chicken Tikka                          30 ر.س  img 1/3   sold out  Marinated in yoghurt...
//! └┬┘└──────────── name (32) ────┘ └ price (12) ┘ └ img (9) ┘ └ (9) ──┘ └ text ─────────────
//! ```
//!
//! The selected row shows the current carousel image URL in the text column;
//! other rows show the description.

use crate::ui::helpers::{self, clip, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayRow, ProductRow, SectionRow};

const NAME_WIDTH: usize = 32;
const PRICE_WIDTH: usize = 12;
const IMAGE_WIDTH: usize = 9;
const STATUS_WIDTH: usize = 9;

/// Renders `rows` starting at `row` and returns the next free row.
pub fn render_menu_rows(row: usize, rows: &[DisplayRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for display_row in rows {
        current_row = match display_row {
            DisplayRow::Section(section) => render_section(current_row, section, theme, cols),
            DisplayRow::Product(product) => render_product(current_row, product, theme, cols),
        };
    }
    current_row
}

fn render_section(row: usize, section: &SectionRow, theme: &Theme, cols: usize) -> usize {
    let icon = section.icon.as_deref().map(|i| format!("{i} ")).unwrap_or_default();
    let count = format!(" ({})", section.product_count);
    let description = section
        .description
        .as_deref()
        .map(|d| format!("  {d}"))
        .unwrap_or_default();

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("▌ {icon}{}", section.name);
    print!("{}{}{count}", Theme::reset(), Theme::fg(&theme.colors.text_dim));

    let used = 2 + text_width(&icon) + text_width(&section.name) + text_width(&count);
    let description = clip(&description, cols.saturating_sub(used));
    print!("{}{description}", Theme::dim());
    print!("{}", " ".repeat(cols.saturating_sub(used + text_width(&description))));
    print!("{}", Theme::reset());

    row + 1
}

fn render_product(row: usize, product: &ProductRow, theme: &Theme, cols: usize) -> usize {
    let base = if product.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, 1);
    print!("{base}");
    print!("{}", if product.is_selected { "▸ " } else { "  " });

    print!(
        "{}",
        helpers::highlighted_text(&product.name, &product.highlight_ranges, theme, &base)
    );
    print!("{}", " ".repeat(NAME_WIDTH.saturating_sub(text_width(&product.name))));

    let price = clip(&product.price, PRICE_WIDTH);
    print!(" ");
    if !product.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{}", " ".repeat(PRICE_WIDTH - text_width(&price)));
    print!("{price}{base} ");

    let image = match (&product.image_url, &product.image_position) {
        (Some(_), Some(position)) => format!("img {position}"),
        (Some(_), None) => "img".to_string(),
        (None, _) => String::new(),
    };
    let image = clip(&image, IMAGE_WIDTH);
    print!("{}{image}{base}", Theme::dim());
    print!("{} ", " ".repeat(IMAGE_WIDTH - text_width(&image)));

    if product.is_available {
        print!("{}", " ".repeat(STATUS_WIDTH));
    } else {
        print!(
            "{}{:<STATUS_WIDTH$}{}{base}",
            Theme::fg(&theme.colors.unavailable_fg),
            "sold out",
            Theme::reset()
        );
    }
    print!(" ");

    let fixed = 2 + NAME_WIDTH + 1 + PRICE_WIDTH + 1 + IMAGE_WIDTH + 1 + STATUS_WIDTH + 1;
    let text = if product.is_selected {
        product.image_url.as_deref().or(product.description.as_deref())
    } else {
        product.description.as_deref()
    };
    let text = clip(text.unwrap_or_default(), cols.saturating_sub(fixed));
    if !product.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(fixed + text_width(&text))));

    print!("{}", Theme::reset());
    row + 1
}
