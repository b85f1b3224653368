//! Header component renderer.
//!
//! Two lines: the site name centered in bold, then the site description on
//! the left and the data status on the right.

use crate::ui::helpers::{clip, position_cursor, print_centered, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// ```text
///                      مطعمنا الرائع
/// أشهى الأطباق العربية                  updated 3m ago
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let mut style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&Theme::bg(bg));
    }
    print_centered(row, &header.title, &style, cols);

    if let Some(logo) = &header.logo_url {
        let logo = clip(logo, cols / 3);
        let logo_len = text_width(&logo);
        let title_end = (cols + text_width(&header.title)) / 2;
        if title_end + logo_len + 2 <= cols {
            position_cursor(row, cols - logo_len + 1);
            print!("{}{}{logo}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), Theme::reset());
        }
    }

    render_status_line(row + 1, header, theme, cols);
    row + 2
}

fn render_status_line(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let status = clip(&header.status, cols);
    let status_len = text_width(&status);
    let subtitle = header
        .subtitle
        .as_deref()
        .map(|s| clip(s, cols.saturating_sub(status_len + 2)))
        .unwrap_or_default();
    let subtitle_len = text_width(&subtitle);

    let status_color = if header.is_degraded {
        &theme.colors.unavailable_fg
    } else {
        &theme.colors.text_dim
    };

    position_cursor(row, 1);
    print!("{}{subtitle}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(subtitle_len + status_len)));
    print!("{}{status}{}", Theme::fg(status_color), Theme::reset());
}
