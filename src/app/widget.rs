//! The composed phone widget: a country selector plus a number input.
//!
//! [`PhoneWidget`] owns a [`CountrySelector`] and a [`PhoneComposer`]. The stored
//! full number is the single source of truth; the number input shows the local
//! part derived from it and the current selection.
//!
//! Every number edit and every country commit produces one
//! [`Action::PhoneChanged`]. The country it carries is `None` until a selection
//! has resolved.

use std::rc::Rc;

use super::config::WidgetConfig;
use super::modes::{Toggle, WidgetFocus};
use super::phone::PhoneComposer;
use super::selector::CountrySelector;
use super::Action;
use crate::domain::{Catalog, CountryRecord};
use crate::infrastructure::pointer::PointerBus;

/// One phone input instance.
#[derive(Debug)]
pub struct PhoneWidget {
    selector: CountrySelector,
    phone: PhoneComposer,
    focus: WidgetFocus,
}

impl PhoneWidget {
    /// Builds a phone widget holding `full_number`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::rc::Rc;
    /// use flagdial::app::PhoneWidget;
    /// use flagdial::infrastructure::pointer::PointerBus;
    /// use flagdial::{StaticCatalog, WidgetConfig};
    ///
    /// let bus = PointerBus::new();
    /// let widget = PhoneWidget::new(
    ///     WidgetConfig::default(),
    ///     Rc::new(StaticCatalog::bundled()),
    ///     "+15551234567",
    ///     &bus,
    /// );
    /// assert_eq!(widget.local_part(), "5551234567");
    /// ```
    pub fn new(config: WidgetConfig, catalog: Rc<dyn Catalog>, full_number: &str, bus: &PointerBus) -> Self {
        Self {
            selector: CountrySelector::new(config, catalog, None, bus),
            phone: PhoneComposer::new(full_number),
            focus: WidgetFocus::default(),
        }
    }

    /// The embedded selector.
    #[must_use]
    pub const fn selector(&self) -> &CountrySelector {
        &self.selector
    }

    /// Mutable access to the embedded selector.
    ///
    /// Country commits made directly on the selector bypass phone recomposition;
    /// use [`PhoneWidget::select_item`] for those.
    pub fn selector_mut(&mut self) -> &mut CountrySelector {
        &mut self.selector
    }

    /// The stored full number.
    #[must_use]
    pub fn full_number(&self) -> &str {
        self.phone.full_number()
    }

    /// The number shown in the input.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.phone.local_part(self.selector.selected())
    }

    /// Current keyboard focus.
    #[must_use]
    pub const fn focus(&self) -> WidgetFocus {
        self.focus
    }

    /// Moves keyboard focus to `focus`.
    pub fn set_focus(&mut self, focus: WidgetFocus) -> bool {
        if self.focus == focus {
            return false;
        }
        self.focus = focus;
        true
    }

    /// Opens or closes the dropdown; focus follows the trigger when it opens.
    pub fn toggle(&mut self) -> (Toggle, Vec<Action>) {
        let (outcome, actions) = self.selector.toggle();
        if outcome == Toggle::Opened {
            self.focus = WidgetFocus::Trigger;
        }
        (outcome, actions)
    }

    /// Replaces the local part with `local_part` as typed.
    ///
    /// Ignored while disabled.
    pub fn edit_number(&mut self, local_part: &str) -> Option<Action> {
        if self.selector.is_disabled() {
            tracing::debug!("number edit ignored, widget disabled");
            return None;
        }
        let selected = self.selector.selected();
        let full_number = self.phone.edit_local(local_part, selected);
        Some(Action::PhoneChanged {
            full_number,
            country: selected.cloned(),
        })
    }

    /// Appends one character to the local part.
    pub fn push_number_char(&mut self, c: char) -> Option<Action> {
        let mut local = self.local_part().to_string();
        local.push(c);
        self.edit_number(&local)
    }

    /// Removes the last character of the local part.
    pub fn pop_number_char(&mut self) -> Option<Action> {
        let mut local = self.local_part().to_string();
        local.pop()?;
        self.edit_number(&local)
    }

    /// Commits the visible candidate with `code` and moves the number under it.
    ///
    /// The number is recomposed from the previously stored value, not from the
    /// displayed local part.
    pub fn select_item(&mut self, code: &str) -> Option<Action> {
        let previous = self.selector.selected().cloned();
        match self.selector.select_item(code)? {
            Action::CountryChanged(country) => Some(self.country_committed(previous.as_ref(), country)),
            other => Some(other),
        }
    }

    /// Commits the candidate under the keyboard cursor.
    pub fn select_highlighted(&mut self) -> Option<Action> {
        let code = self.selector.highlighted()?.code.clone();
        self.select_item(&code)
    }

    /// Replaces the stored number with a value supplied by the host.
    ///
    /// Host updates never produce notifications.
    pub fn set_number(&mut self, full_number: &str) -> bool {
        self.phone.set_full_number(full_number)
    }

    /// Applies a country reported by the host.
    pub fn set_value(&mut self, external: Option<&CountryRecord>) -> bool {
        self.selector.set_value(external)
    }

    fn country_committed(&mut self, previous: Option<&CountryRecord>, country: CountryRecord) -> Action {
        let full_number = self.phone.change_country(previous, &country);
        self.focus = WidgetFocus::Number;
        Action::PhoneChanged {
            full_number,
            country: Some(country),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StaticCatalog;

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

    fn widget(number: &str, config: WidgetConfig, bus: &PointerBus) -> PhoneWidget {
        PhoneWidget::new(config, catalog(), number, bus)
    }

    #[test]
    fn number_edit_recomposes_with_selected_dial_code() {
        let bus = PointerBus::new();
        let mut widget = widget("+15551234567", WidgetConfig::default(), &bus);
        assert_eq!(widget.local_part(), "5551234567");

        let action = widget.edit_number("5559999999");
        let us = catalog().lookup("US").cloned();
        assert_eq!(
            action,
            Some(Action::PhoneChanged {
                full_number: "+15559999999".to_string(),
                country: us,
            })
        );
    }

    #[test]
    fn unresolved_country_emits_none() {
        let bus = PointerBus::new();
        let config = WidgetConfig {
            default_country: "ZZ".to_string(),
            ..Default::default()
        };
        let mut widget = widget("", config, &bus);
        assert_eq!(
            widget.edit_number("555"),
            Some(Action::PhoneChanged {
                full_number: "555".to_string(),
                country: None,
            })
        );
    }

    #[test]
    fn country_commit_moves_number_under_new_code() {
        let bus = PointerBus::new();
        let mut widget = widget("+15551234567", WidgetConfig::default(), &bus);
        widget.toggle();
        let action = widget.select_item("GB");

        assert!(matches!(
            action,
            Some(Action::PhoneChanged { ref full_number, country: Some(ref c) })
                if full_number == "+445551234567" && c.code == "GB"
        ));
        assert_eq!(widget.local_part(), "5551234567");
        assert_eq!(widget.focus(), WidgetFocus::Number);
    }

    #[test]
    fn disabled_widget_ignores_number_edits() {
        let bus = PointerBus::new();
        let config = WidgetConfig {
            disabled: true,
            ..Default::default()
        };
        let mut widget = widget("+1555", config, &bus);
        assert_eq!(widget.edit_number("999"), None);
        assert_eq!(widget.push_number_char('9'), None);
        assert_eq!(widget.full_number(), "+1555");
    }

    #[test]
    fn char_edits_operate_on_local_part() {
        let bus = PointerBus::new();
        let mut widget = widget("+1555", WidgetConfig::default(), &bus);
        widget.push_number_char('1');
        assert_eq!(widget.full_number(), "+15551");
        widget.pop_number_char();
        widget.pop_number_char();
        assert_eq!(widget.full_number(), "+155");
    }

    #[test]
    fn backspace_on_empty_local_part_is_silent() {
        let bus = PointerBus::new();
        let mut widget = widget("+1", WidgetConfig::default(), &bus);
        assert_eq!(widget.pop_number_char(), None);
    }

    #[test]
    fn host_number_is_not_echoed() {
        let bus = PointerBus::new();
        let mut widget = widget("", WidgetConfig::default(), &bus);
        assert!(widget.set_number("+12025550123"));
        assert_eq!(widget.local_part(), "2025550123");
    }
}
