//! Shared rendering utilities.
//!
//! Cursor placement, terminal-width-aware padding and match highlighting. All
//! width arithmetic goes through `unicode-width`, since country names and flag
//! glyphs are rarely one column per byte.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::flag::FlagElement;
use crate::ui::theme::Theme;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cuts `text` to at most `width` columns, then pads it with spaces to exactly
/// `width` columns.
///
/// ```
/// use flagdial::ui::helpers::fit_width;
///
/// assert_eq!(fit_width("Germany", 4), "Germ");
/// assert_eq!(fit_width("DE", 4), "DE  ");
/// ```
#[must_use]
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Terminal text for a flag element.
///
/// Emoji print as themselves. Terminals cannot show remote images, so an image
/// element prints as a bracketed code badge.
#[must_use]
pub fn flag_text(flag: &FlagElement) -> String {
    match flag {
        FlagElement::Emoji { glyph, .. } => glyph.clone(),
        FlagElement::Image { alt, .. } => format!("[{}]", alt.to_lowercase()),
    }
}

/// Prints `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive. On the cursor
/// row the selection colors win and nothing is highlighted.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_cursor: bool) {
    if ranges.is_empty() || is_cursor {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal: String = chars[current_pos..start].iter().collect();
            print!("{normal}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        print!("{highlighted}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
