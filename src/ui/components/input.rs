//! The input line: country trigger followed by the number input.

use crate::ui::helpers::{fit_width, flag_text, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{NumberView, TriggerView, TRIGGER_WIDTH};

/// Renders the trigger and the number input on `row` and returns the next free row.
///
/// # Layout
///
/// ```text
/// [🇬🇧 +44    ▾]  5551234567▏
/// ```
///
/// The focused part is framed in the focus color. A disabled widget is drawn
/// entirely in the disabled color.
pub fn render_input_line(row: usize, trigger: &TriggerView, number: &NumberView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    render_trigger(trigger, theme);
    print!(" ");
    render_number(number, theme, cols.saturating_sub(TRIGGER_WIDTH + 1));
    print!("{}", Theme::reset());
    row + 1
}

fn frame_color<'a>(focused: bool, disabled: bool, theme: &'a Theme) -> &'a str {
    if disabled {
        &theme.colors.disabled_fg
    } else if focused {
        &theme.colors.focus_border
    } else {
        &theme.colors.border
    }
}

fn render_trigger(trigger: &TriggerView, theme: &Theme) {
    let frame = frame_color(trigger.is_focused, trigger.disabled, theme);
    let inner = TRIGGER_WIDTH - 2;

    let mut label = String::new();
    if let Some(flag) = &trigger.flag {
        label.push_str(&flag_text(flag));
        label.push(' ');
    }
    if let Some(dial_code) = &trigger.dial_code {
        label.push_str(dial_code);
    }
    let indicator = if trigger.is_open { "▴" } else { "▾" };

    print!("{}", Theme::fg(frame));
    print!("[");
    if trigger.disabled {
        print!("{}", Theme::fg(&theme.colors.disabled_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.dial_code_fg));
    }
    print!("{}", fit_width(&label, inner - 1));
    print!("{}", Theme::fg(frame));
    print!("{indicator}]");
}

fn render_number(number: &NumberView, theme: &Theme, width: usize) {
    let frame = frame_color(number.is_focused, number.disabled, theme);
    print!("{}", Theme::fg(frame));
    print!(" ");

    let (text, color) = if number.text.is_empty() {
        (number.placeholder.as_str(), &theme.colors.text_dim)
    } else if number.disabled {
        (number.text.as_str(), &theme.colors.disabled_fg)
    } else {
        (number.text.as_str(), &theme.colors.text_normal)
    };

    print!("{}", Theme::fg(color));
    let caret = if number.is_focused && !number.disabled { "▏" } else { "" };
    print!("{}", fit_width(&format!("{text}{caret}"), width.saturating_sub(1)));
}
