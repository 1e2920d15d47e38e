//! Search box component renderer.

use crate::ui::helpers::{fit_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin around the search box.
const SEARCH_BOX_MARGIN: usize = 1;

/// Renders the 3-line search box at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
///  ┌──────────────────────────┐
///  │ germ▏                    │
///  └──────────────────────────┘
/// ```
///
/// An empty query shows the placeholder, dimmed.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (text, color) = if search.query.is_empty() {
        (format!(" {}", search.placeholder), &theme.colors.text_dim)
    } else {
        (format!(" {}▏", search.query), &theme.colors.text_normal)
    };

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(color));
    print!("{}", fit_width(&text, inner_width));
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
