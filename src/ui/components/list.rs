//! Candidate list renderer.
//!
//! One row per visible country: selection marker, flag, name with search
//! matches highlighted, and the dial code right-aligned. The row under the
//! keyboard cursor is drawn in the selection colors.

use crate::ui::helpers::{self, display_width, fit_width, flag_text, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CountryRow;

const MARKER: &str = "✓ ";
const MARKER_WIDTH: usize = 2;
const FLAG_COLUMN: usize = 5;
const DIAL_COLUMN: usize = 7;

/// Renders `rows` starting at `row` and returns the next free row.
pub fn render_rows(row: usize, rows: &[CountryRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one candidate.
///
/// # Layout
///
/// ```text
/// ✓ 🇬🇧   United Kingdom                    +44
/// ```
fn render_row(row: usize, item: &CountryRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_cursor {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selected_marker_fg));
        print!("{MARKER}");
    } else {
        print!("{}", " ".repeat(MARKER_WIDTH));
    }
    print!("{}", Theme::fg(base_fg));

    let mut used = MARKER_WIDTH;
    if let Some(flag) = &item.flag {
        print!("{}", fit_width(&flag_text(flag), FLAG_COLUMN));
        used += FLAG_COLUMN;
    }

    let dial_width = if item.dial_code.is_some() { DIAL_COLUMN } else { 0 };
    let name_width = cols.saturating_sub(used + dial_width);
    if display_width(&item.name) <= name_width {
        helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_cursor);
        if !item.is_cursor {
            print!("{}", Theme::fg(base_fg));
        }
        print!("{}", " ".repeat(name_width - display_width(&item.name)));
    } else {
        print!("{}", fit_width(&item.name, name_width));
    }

    if let Some(dial_code) = &item.dial_code {
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.dial_code_fg));
        }
        print!("{:>width$}", dial_code, width = DIAL_COLUMN.saturating_sub(1));
        print!(" ");
    }

    print!("{}", Theme::reset());
    row + 1
}
