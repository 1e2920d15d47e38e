//! Header component renderer.
//!
//! Renders the title line: the title on the left and, once the widget has
//! reported a change, the last full number on the right.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
///  Phone number                          last: +445551234567 (GB)
/// ```
///
/// The status is dropped when it does not fit next to the title.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let status = header
        .status
        .as_ref()
        .map(|status| format!("last: {status} "))
        .filter(|status| display_width(&title) + display_width(status) < cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{title}");
    print!("{}", Theme::reset());

    let status_width = status.as_deref().map_or(0, display_width);
    print!("{}", " ".repeat(cols.saturating_sub(display_width(&title) + status_width)));

    if let Some(status) = status {
        print!("{}", Theme::fg(&theme.colors.dial_code_fg));
        print!("{status}");
        print!("{}", Theme::reset());
    }

    row + 1
}
