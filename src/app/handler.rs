//! Event handling for the selector and phone widgets.
//!
//! Hosts translate raw input (keys, pointer clicks, prop updates) into [`Event`]s
//! and feed them to [`handle_selector_event`] or [`handle_event`]. Both return a
//! re-render flag and the actions to execute, in order.
//!
//! # Event Types
//!
//! - **Dropdown**: `Toggle`, `OutsideInteraction`, `Search`, `CursorDown`,
//!   `CursorUp`, `SelectHighlighted`, `SelectItem`, `HoverItem`
//! - **Number**: `NumberEdited`
//! - **Keyboard**: `Char`, `Backspace`, `Enter`, `Escape`, `FocusNext`, routed by
//!   the widget's current state
//! - **Host**: `ExternalValue`, `ExternalNumber`, `SetDisabled`
//!
//! Handling never fails. Events that do not apply in the current state (a search
//! while closed, a code that is not listed, an edit while disabled) are logged
//! and absorbed.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use flagdial::app::{handle_event, Action, Event, PhoneWidget};
//! use flagdial::infrastructure::pointer::PointerBus;
//! use flagdial::{StaticCatalog, WidgetConfig};
//!
//! let bus = PointerBus::new();
//! let mut widget = PhoneWidget::new(
//!     WidgetConfig::default(),
//!     Rc::new(StaticCatalog::bundled()),
//!     "",
//!     &bus,
//! );
//!
//! let (render, actions) = handle_event(&mut widget, &Event::NumberEdited("555".to_string()));
//! assert!(render);
//! assert!(matches!(&actions[..], [Action::PhoneChanged { full_number, .. }] if full_number == "+1555"));
//! ```

use super::modes::{Toggle, WidgetFocus};
use super::selector::CountrySelector;
use super::widget::PhoneWidget;
use super::Action;
use crate::domain::CountryRecord;

/// Inputs accepted by the widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Trigger activated: open or close the dropdown.
    Toggle,
    /// A pointer-down landed outside the widget boundary.
    OutsideInteraction,
    /// Search box content replaced.
    Search(String),
    /// Keyboard cursor one row down (wraps).
    CursorDown,
    /// Keyboard cursor one row up (wraps).
    CursorUp,
    /// Commit the row under the keyboard cursor.
    SelectHighlighted,
    /// Commit the listed candidate with this code.
    SelectItem(String),
    /// Pointer moved over the listed candidate with this code.
    HoverItem(String),
    /// Number input content replaced with this local part.
    NumberEdited(String),

    /// Printable character, routed to the search box or the number input.
    Char(char),
    /// Backspace, routed like [`Event::Char`].
    Backspace,
    /// Enter: commit the highlighted row, or open the dropdown from the trigger.
    Enter,
    /// Escape: close the dropdown, or ask the host to hide the pane.
    Escape,
    /// Switch keyboard focus between trigger and number input.
    FocusNext,

    /// The host's value for the selected country.
    ExternalValue(Option<CountryRecord>),
    /// The host's value for the full number.
    ExternalNumber(String),
    /// The host toggled the disabled flag.
    SetDisabled(bool),
}

/// Processes an event for a standalone country selector.
///
/// Commits yield [`Action::CountryChanged`]. Number events are ignored.
///
/// # Returns
///
/// `(should_render, actions)`.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use flagdial::app::{handle_selector_event, Action, CountrySelector, Event};
/// use flagdial::infrastructure::pointer::PointerBus;
/// use flagdial::{StaticCatalog, WidgetConfig};
///
/// let bus = PointerBus::new();
/// let mut selector = CountrySelector::new(
///     WidgetConfig::default(),
///     Rc::new(StaticCatalog::bundled()),
///     None,
///     &bus,
/// );
///
/// handle_selector_event(&mut selector, &Event::Toggle);
/// handle_selector_event(&mut selector, &Event::Search("germ".to_string()));
/// let (_, actions) = handle_selector_event(&mut selector, &Event::SelectHighlighted);
/// assert!(matches!(&actions[..], [Action::CountryChanged(c)] if c.code == "DE"));
/// ```
pub fn handle_selector_event(selector: &mut CountrySelector, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_selector_event", event_type = ?event).entered();

    match event {
        Event::Toggle => {
            let (outcome, actions) = selector.toggle();
            (outcome != Toggle::Suppressed, actions)
        }
        Event::OutsideInteraction => (selector.outside_interaction(), vec![]),
        Event::Search(text) => (selector.search(text), vec![]),
        Event::CursorDown => (selector.cursor_down(), vec![]),
        Event::CursorUp => (selector.cursor_up(), vec![]),
        Event::SelectHighlighted => committed(selector.select_highlighted()),
        Event::SelectItem(code) => committed(selector.select_item(code)),
        Event::HoverItem(code) => (selector.hover(code), vec![]),
        Event::Char(c) => (selector.push_search_char(*c), vec![]),
        Event::Backspace => (selector.pop_search_char(), vec![]),
        Event::Enter => {
            if selector.is_open() {
                committed(selector.select_highlighted())
            } else {
                handle_selector_event(selector, &Event::Toggle)
            }
        }
        Event::Escape => {
            if selector.close() {
                (true, vec![])
            } else {
                (false, vec![Action::CloseFocus])
            }
        }
        Event::ExternalValue(value) => (selector.set_value(value.as_ref()), vec![]),
        Event::SetDisabled(disabled) => (selector.set_disabled(*disabled), vec![]),
        Event::NumberEdited(_) | Event::ExternalNumber(_) | Event::FocusNext => {
            tracing::debug!("event ignored by standalone selector");
            (false, vec![])
        }
    }
}

/// Processes an event for a phone widget.
///
/// Number edits and country commits both yield [`Action::PhoneChanged`].
/// `Char` and `Backspace` go to the search box while the dropdown is open and
/// to the number input when it has focus.
///
/// # Returns
///
/// `(should_render, actions)`.
pub fn handle_event(widget: &mut PhoneWidget, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Toggle => {
            let (outcome, actions) = widget.toggle();
            (outcome != Toggle::Suppressed, actions)
        }
        Event::SelectHighlighted => committed(widget.select_highlighted()),
        Event::SelectItem(code) => committed(widget.select_item(code)),
        Event::NumberEdited(local) => committed(widget.edit_number(local)),
        Event::ExternalNumber(full_number) => (widget.set_number(full_number), vec![]),
        Event::ExternalValue(value) => (widget.set_value(value.as_ref()), vec![]),

        Event::Char(c) => {
            if widget.selector().is_open() {
                (widget.selector_mut().push_search_char(*c), vec![])
            } else if widget.focus() == WidgetFocus::Number {
                committed(widget.push_number_char(*c))
            } else {
                (false, vec![])
            }
        }
        Event::Backspace => {
            if widget.selector().is_open() {
                (widget.selector_mut().pop_search_char(), vec![])
            } else if widget.focus() == WidgetFocus::Number {
                committed(widget.pop_number_char())
            } else {
                (false, vec![])
            }
        }
        Event::Enter => {
            if widget.selector().is_open() {
                committed(widget.select_highlighted())
            } else if widget.focus() == WidgetFocus::Trigger {
                handle_event(widget, &Event::Toggle)
            } else {
                (false, vec![])
            }
        }
        Event::FocusNext => {
            let next = widget.focus().toggled();
            if next == WidgetFocus::Number {
                widget.selector_mut().close();
            }
            (widget.set_focus(next), vec![])
        }

        Event::OutsideInteraction
        | Event::Search(_)
        | Event::CursorDown
        | Event::CursorUp
        | Event::HoverItem(_)
        | Event::Escape
        | Event::SetDisabled(_) => handle_selector_event(widget.selector_mut(), event),
    }
}

fn committed(action: Option<Action>) -> (bool, Vec<Action>) {
    match action {
        Some(action) => (true, vec![action]),
        None => (false, vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::WidgetConfig;
    use crate::domain::{Catalog, StaticCatalog};
    use crate::infrastructure::pointer::PointerBus;
    use std::rc::Rc;

    fn catalog() -> Rc<dyn Catalog> {
        Rc::new(
            StaticCatalog::new(vec![
                CountryRecord::new("United States", "US", "+1", "🇺🇸"),
                CountryRecord::new("United Kingdom", "GB", "+44", "🇬🇧"),
                CountryRecord::new("Germany", "DE", "+49", "🇩🇪"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn typing_goes_to_search_while_open() {
        let bus = PointerBus::new();
        let mut widget = PhoneWidget::new(WidgetConfig::default(), catalog(), "+1555", &bus);
        handle_event(&mut widget, &Event::Toggle);
        let (render, actions) = handle_event(&mut widget, &Event::Char('g'));
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(widget.selector().search_term(), "g");
        assert_eq!(widget.full_number(), "+1555");
    }

    #[test]
    fn typing_goes_to_number_when_closed() {
        let bus = PointerBus::new();
        let mut widget = PhoneWidget::new(WidgetConfig::default(), catalog(), "+1555", &bus);
        let (_, actions) = handle_event(&mut widget, &Event::Char('0'));
        assert_eq!(actions.len(), 1);
        assert_eq!(widget.full_number(), "+15550");
    }

    #[test]
    fn escape_closes_then_hides() {
        let bus = PointerBus::new();
        let mut widget = PhoneWidget::new(WidgetConfig::default(), catalog(), "", &bus);
        handle_event(&mut widget, &Event::Toggle);
        assert_eq!(handle_event(&mut widget, &Event::Escape), (true, vec![]));
        assert_eq!(handle_event(&mut widget, &Event::Escape), (false, vec![Action::CloseFocus]));
    }

    #[test]
    fn enter_on_trigger_opens_and_enter_in_list_commits() {
        let bus = PointerBus::new();
        let mut widget = PhoneWidget::new(WidgetConfig::default(), catalog(), "", &bus);
        handle_event(&mut widget, &Event::FocusNext);
        assert_eq!(widget.focus(), WidgetFocus::Trigger);

        let (_, actions) = handle_event(&mut widget, &Event::Enter);
        assert_eq!(actions, vec![Action::FocusSearch]);
        assert!(widget.selector().is_open());

        handle_event(&mut widget, &Event::Search("ger".to_string()));
        let (_, actions) = handle_event(&mut widget, &Event::Enter);
        assert!(matches!(
            &actions[..],
            [Action::PhoneChanged { full_number, country: Some(c) }] if full_number == "+49" && c.code == "DE"
        ));
    }

    #[test]
    fn disabled_toggle_does_not_render() {
        let bus = PointerBus::new();
        let mut selector = CountrySelector::new(WidgetConfig::default(), catalog(), None, &bus);
        handle_selector_event(&mut selector, &Event::SetDisabled(true));
        assert_eq!(handle_selector_event(&mut selector, &Event::Toggle), (false, vec![]));
    }

    #[test]
    fn selector_ignores_number_events() {
        let bus = PointerBus::new();
        let mut selector = CountrySelector::new(WidgetConfig::default(), catalog(), None, &bus);
        assert_eq!(
            handle_selector_event(&mut selector, &Event::NumberEdited("1".to_string())),
            (false, vec![])
        );
    }

    #[test]
    fn external_value_wins_over_user_choice() {
        let bus = PointerBus::new();
        let catalog = catalog();
        let mut selector = CountrySelector::new(WidgetConfig::default(), Rc::clone(&catalog), None, &bus);
        handle_selector_event(&mut selector, &Event::Toggle);
        handle_selector_event(&mut selector, &Event::SelectItem("GB".to_string()));

        let de = catalog.lookup("DE").cloned();
        handle_selector_event(&mut selector, &Event::ExternalValue(de));
        assert_eq!(selector.selected().map(|c| c.code.as_str()), Some("DE"));
    }
}
