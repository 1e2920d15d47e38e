//! "No countries found" row.
//!
//! Shown in place of the candidate list when the search matched nothing. The
//! row is not interactive: clicks on it land inside the widget but select
//! nothing.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty list state at `row` and returns the next free row.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_width = display_width(&empty.message);
    let padding = cols.saturating_sub(msg_width) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(padding + msg_width)));
    print!("{}", Theme::reset());
    row + 1
}
