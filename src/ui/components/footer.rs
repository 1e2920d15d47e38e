//! Footer component renderer.

use crate::ui::helpers::{display_width, fit_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the key hints centered at `row`, truncated on narrow panes.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let text_width = display_width(&footer.keybindings).min(cols);
    let padding = cols.saturating_sub(text_width) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{}", fit_width(&footer.keybindings, text_width));
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_width)));
    print!("{}", Theme::reset());
    row + 1
}
