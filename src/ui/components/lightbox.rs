//! Lightbox overlay renderer.
//!
//! Drawn last, on top of the menu, as a centered box:
//!
//! ```text
//!        ╭──────────────────────────────────────╮
//!        │ Chicken Tikka                30 ر.س  │
//!        │                                      │
//!        │ http://localhost:5000/uploads/t.png  │
//!        │                                      │
//!        │ 2 / 5   1 [2] 3 4 5                  │
//!        ╰──────────────────────────────────────╯
//! ```

use crate::ui::helpers::{clip, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LightboxView;

const MAX_BOX_WIDTH: usize = 72;
const BOX_HEIGHT: usize = 7;

pub fn render_lightbox(lightbox: &LightboxView, theme: &Theme, rows: usize, cols: usize) {
    let box_width = cols.saturating_sub(4).min(MAX_BOX_WIDTH);
    if box_width < 12 || rows < BOX_HEIGHT {
        return;
    }
    let inner = box_width - 4;
    let left = (cols - box_width) / 2 + 1;
    let top = (rows - BOX_HEIGHT) / 2 + 1;
    let border = Theme::fg(&theme.colors.lightbox_border);

    position_cursor(top, left);
    print!("{border}╭{}╮{}", "─".repeat(box_width - 2), Theme::reset());

    let price = clip(&lightbox.price, inner / 2);
    let title = clip(&lightbox.title, inner.saturating_sub(text_width(&price) + 1));
    let gap = inner - text_width(&title) - text_width(&price);
    let title_line = format!(
        "{}{}{title}{}{}{}{price}",
        Theme::bold(),
        Theme::fg(&theme.colors.text_normal),
        Theme::reset(),
        " ".repeat(gap),
        Theme::fg(&theme.colors.price_fg),
    );
    let title_width = text_width(&title) + gap + text_width(&price);
    render_line(top + 1, left, &border, inner, &title_line, title_width);

    render_line(top + 2, left, &border, inner, "", 0);

    let url = clip(&lightbox.image_url, inner);
    render_line(
        top + 3,
        left,
        &border,
        inner,
        &format!("{}{url}", Theme::fg(&theme.colors.text_normal)),
        text_width(&url),
    );

    render_line(top + 4, left, &border, inner, "", 0);

    let (strip, strip_width) = thumbnail_strip(lightbox, theme, inner);
    render_line(top + 5, left, &border, inner, &strip, strip_width);

    position_cursor(top + 6, left);
    print!("{border}╰{}╯{}", "─".repeat(box_width - 2), Theme::reset());
}

/// One bordered content line; `width` is the visible width of `content`.
fn render_line(
    row: usize,
    left: usize,
    border: &str,
    inner: usize,
    content: &str,
    width: usize,
) {
    position_cursor(row, left);
    print!("{border}│{} {content}{}", Theme::reset(), Theme::reset());
    print!("{} {border}│{}", " ".repeat(inner.saturating_sub(width)), Theme::reset());
}

/// Counter followed by as many thumbnail labels as fit.
fn thumbnail_strip(lightbox: &LightboxView, theme: &Theme, inner: usize) -> (String, usize) {
    let mut out = format!("{}{}{}", Theme::dim(), lightbox.counter, Theme::reset());
    let mut width = text_width(&lightbox.counter);

    if !lightbox.thumbnails.is_empty() {
        out.push_str("  ");
        width += 2;
    }

    for thumbnail in &lightbox.thumbnails {
        let label = if thumbnail.is_current {
            format!("[{}]", thumbnail.label)
        } else {
            format!(" {} ", thumbnail.label)
        };
        let label_width = text_width(&label);
        if width + label_width > inner {
            break;
        }
        if thumbnail.is_current {
            out.push_str(&format!(
                "{}{}{label}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.lightbox_border),
                Theme::reset()
            ));
        } else {
            out.push_str(&format!(
                "{}{label}{}",
                Theme::fg(&theme.colors.text_dim),
                Theme::reset()
            ));
        }
        width += label_width;
    }

    (out, width.min(inner))
}
