//! Composable UI component renderers.
//!
//! Each component prints one part of the pane at a given row and returns the
//! next free row.
//!
//! # Components
//!
//! - [`header`]: Title line with the last reported number
//! - [`input`]: Country trigger and number input
//! - [`search`]: Search box of the open dropdown
//! - [`list`]: Candidate rows
//! - [`empty`]: "No countries found" row
//! - [`footer`]: Key hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Trigger] [Number input]
//! [Search box - 3 lines]    while open and searchable
//! [Candidate rows]          while open
//! [Blank padding]
//! [Border]
//! [Footer]
//! ```
//!
//! Rows of the elements here must agree with
//! [`Layout::compute`](crate::ui::viewmodel::Layout::compute), which the host
//! uses for hit testing.

mod empty;
mod footer;
mod header;
mod input;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{UIViewModel, INPUT_ROW};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use input::render_input_line;
use list::render_rows;
use search::render_search_bar;

/// Renders a horizontal separator at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole widget pane.
pub fn render_widget(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    debug_assert_eq!(current_row, INPUT_ROW);
    current_row = render_input_line(current_row, &vm.trigger, &vm.number, theme, cols);

    if let Some(dropdown) = &vm.dropdown {
        if let Some(search) = &dropdown.search_bar {
            current_row = render_search_bar(current_row, search, theme, cols);
        }
        current_row = match &dropdown.empty_state {
            Some(empty) => render_empty_state(current_row, empty, theme, cols),
            None => render_rows(current_row, &dropdown.rows, theme, cols),
        };
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    if border_row > current_row {
        render_border(border_row, &theme.colors.border, cols);
        render_footer(footer_row, &vm.footer, theme, cols);
    }
}
