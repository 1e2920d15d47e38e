//! The country selector widget.
//!
//! [`CountrySelector`] wires the pieces of one selector instance together: the
//! read-only [`WidgetConfig`], a shared [`Catalog`], the [`SelectionController`],
//! the [`DropdownMachine`], the cached [`VisibleList`] and the widget's
//! [`PointerSubscription`].
//!
//! The visible list is recomputed eagerly by the transitions that change its
//! inputs (opening and search edits), never by rendering. The pointer
//! subscription is armed exactly while the dropdown is open and is released when
//! the selector is dropped.

use std::fmt;
use std::rc::Rc;

use super::config::WidgetConfig;
use super::dropdown::DropdownMachine;
use super::filter::{compute_visible_list, VisibleList};
use super::modes::Toggle;
use super::selection::SelectionController;
use super::Action;
use crate::domain::{Catalog, CountryRecord};
use crate::infrastructure::pointer::{ListenerId, PointerBus, PointerSubscription, Rect};

/// One country selector instance.
pub struct CountrySelector {
    config: WidgetConfig,
    catalog: Rc<dyn Catalog>,
    selection: SelectionController,
    dropdown: DropdownMachine,
    visible: VisibleList,
    listener: PointerSubscription,
}

impl fmt::Debug for CountrySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountrySelector")
            .field("selected", &self.selection.selected().map(|c| c.code.as_str()))
            .field("dropdown", &self.dropdown)
            .field("visible", &self.visible.len())
            .field("listener", &self.listener.id())
            .finish_non_exhaustive()
    }
}

impl CountrySelector {
    /// Builds a selector and registers its outside-interaction listener on `bus`.
    ///
    /// `external` is the host-supplied initial value; without one the configured
    /// default country is looked up.
    ///
    /// # Example
    ///
    /// ```
    /// use std::rc::Rc;
    /// use flagdial::app::CountrySelector;
    /// use flagdial::infrastructure::pointer::PointerBus;
    /// use flagdial::{StaticCatalog, WidgetConfig};
    ///
    /// let bus = PointerBus::new();
    /// let selector = CountrySelector::new(
    ///     WidgetConfig::default(),
    ///     Rc::new(StaticCatalog::bundled()),
    ///     None,
    ///     &bus,
    /// );
    /// assert_eq!(selector.selected().map(|c| c.dial_code.as_str()), Some("+1"));
    /// assert!(!selector.is_open());
    /// ```
    pub fn new(
        config: WidgetConfig,
        catalog: Rc<dyn Catalog>,
        external: Option<CountryRecord>,
        bus: &PointerBus,
    ) -> Self {
        let selection = SelectionController::new(external, &config.default_country, catalog.as_ref());
        let visible = compute_visible_list(
            catalog.all(),
            "",
            &config.exclude_countries,
            &config.preferred_countries,
        );

        Self {
            config,
            catalog,
            selection,
            dropdown: DropdownMachine::new(),
            visible,
            listener: bus.subscribe(),
        }
    }

    /// Construction-time options.
    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    /// The currently selected country, if any has resolved.
    #[must_use]
    pub const fn selected(&self) -> Option<&CountryRecord> {
        self.selection.selected()
    }

    /// Returns `true` while the dropdown list is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    /// Returns `true` when toggles and edits are ignored.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.dropdown.search_term()
    }

    /// Candidates for the current search term.
    #[must_use]
    pub const fn visible(&self) -> &VisibleList {
        &self.visible
    }

    /// Index of the keyboard-highlighted row.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.dropdown.cursor()
    }

    /// The record under the keyboard cursor.
    #[must_use]
    pub fn highlighted(&self) -> Option<&CountryRecord> {
        self.visible.get(self.dropdown.cursor())
    }

    /// Identity of this selector's pointer listener.
    #[must_use]
    pub const fn listener_id(&self) -> ListenerId {
        self.listener.id()
    }

    /// Records the rendered boundary used for outside-interaction detection.
    pub fn update_bounds(&self, bounds: impl IntoIterator<Item = Rect>) {
        self.listener.set_bounds(bounds);
    }

    /// Opens or closes the dropdown.
    ///
    /// Opening resets the search term, recomputes the list and arms the pointer
    /// listener. When the selector is searchable, opening also yields
    /// [`Action::FocusSearch`].
    pub fn toggle(&mut self) -> (Toggle, Vec<Action>) {
        let outcome = self.dropdown.toggle(self.config.disabled);
        let mut actions = vec![];

        match outcome {
            Toggle::Opened => {
                self.refresh_visible();
                self.listener.set_armed(true);
                if self.config.searchable {
                    actions.push(Action::FocusSearch);
                }
            }
            Toggle::Closed => self.listener.set_armed(false),
            Toggle::Suppressed => {}
        }

        tracing::debug!(outcome = ?outcome, "dropdown toggled");
        (outcome, actions)
    }

    /// Replaces the search term and re-filters synchronously.
    ///
    /// Returns `true` when the list changed.
    pub fn search(&mut self, text: &str) -> bool {
        if !self.config.searchable {
            tracing::debug!("search ignored, selector not searchable");
            return false;
        }
        if !self.dropdown.search(text) {
            return false;
        }
        self.refresh_visible();
        true
    }

    /// Appends a character to the search term.
    pub fn push_search_char(&mut self, c: char) -> bool {
        if !self.config.searchable || !self.dropdown.push_char(c) {
            return false;
        }
        self.refresh_visible();
        true
    }

    /// Removes the last character of the search term.
    pub fn pop_search_char(&mut self) -> bool {
        if !self.config.searchable || !self.dropdown.pop_char() {
            return false;
        }
        self.refresh_visible();
        true
    }

    /// Moves the keyboard cursor one row down.
    pub fn cursor_down(&mut self) -> bool {
        if !self.dropdown.is_open() {
            return false;
        }
        self.dropdown.cursor_down(self.visible.len());
        true
    }

    /// Moves the keyboard cursor one row up.
    pub fn cursor_up(&mut self) -> bool {
        if !self.dropdown.is_open() {
            return false;
        }
        self.dropdown.cursor_up(self.visible.len());
        true
    }

    /// Moves the keyboard cursor onto the row showing `code`.
    pub fn hover(&mut self, code: &str) -> bool {
        let Some(index) = self.visible.records().iter().position(|c| c.code == code) else {
            return false;
        };
        self.dropdown.place_cursor(index, self.visible.len());
        true
    }

    /// Commits the visible candidate with `code`.
    ///
    /// Only candidates currently in the open list can be committed; anything
    /// else is logged and ignored. A commit closes the dropdown, clears the
    /// search term and yields [`Action::CountryChanged`].
    pub fn select_item(&mut self, code: &str) -> Option<Action> {
        if !self.dropdown.is_open() {
            tracing::debug!(code = code, "select ignored, dropdown closed");
            return None;
        }
        let Some(country) = self.visible.find(code).cloned() else {
            tracing::debug!(code = code, "select ignored, code not in visible list");
            return None;
        };

        self.dropdown.commit();
        self.listener.set_armed(false);
        self.refresh_visible();
        Some(self.selection.set_selection(country))
    }

    /// Commits the candidate under the keyboard cursor.
    pub fn select_highlighted(&mut self) -> Option<Action> {
        let code = self.highlighted()?.code.clone();
        self.select_item(&code)
    }

    /// A pointer-down landed outside this selector.
    ///
    /// Returns `true` when the dropdown closed.
    pub fn outside_interaction(&mut self) -> bool {
        if !self.dropdown.outside_interaction() {
            return false;
        }
        self.listener.set_armed(false);
        self.refresh_visible();
        true
    }

    /// Closes the dropdown if it is open.
    pub fn close(&mut self) -> bool {
        if !self.dropdown.is_open() {
            return false;
        }
        self.dropdown.close();
        self.listener.set_armed(false);
        self.refresh_visible();
        true
    }

    /// Flips the disabled flag.
    ///
    /// Disabling an open selector closes it, so an inert widget never shows a
    /// live list.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        if self.config.disabled == disabled {
            return false;
        }
        self.config.disabled = disabled;
        if disabled && self.close() {
            tracing::debug!("disabled while open, dropdown closed");
        }
        true
    }

    /// Applies a value reported by the host. See [`SelectionController::reconcile`].
    pub fn set_value(&mut self, external: Option<&CountryRecord>) -> bool {
        self.selection.reconcile(external, self.catalog.as_ref())
    }

    fn refresh_visible(&mut self) {
        self.visible = compute_visible_list(
            self.catalog.all(),
            self.dropdown.search_term(),
            &self.config.exclude_countries,
            &self.config.preferred_countries,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StaticCatalog;
    use crate::infrastructure::pointer::Point;

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

    fn selector(bus: &PointerBus) -> CountrySelector {
        CountrySelector::new(WidgetConfig::default(), catalog(), None, bus)
    }

    #[test]
    fn opening_arms_listener_and_requests_focus() {
        let bus = PointerBus::new();
        let mut selector = selector(&bus);
        selector.update_bounds([Rect::new(1, 1, 10, 30)]);

        let (outcome, actions) = selector.toggle();
        assert_eq!(outcome, Toggle::Opened);
        assert_eq!(actions, vec![Action::FocusSearch]);
        assert_eq!(bus.dispatch(Point::new(20, 1)), vec![selector.listener_id()]);
        assert!(bus.dispatch(Point::new(2, 2)).is_empty());
    }

    #[test]
    fn not_searchable_opens_without_focus_request() {
        let bus = PointerBus::new();
        let config = WidgetConfig {
            searchable: false,
            ..Default::default()
        };
        let mut selector = CountrySelector::new(config, catalog(), None, &bus);
        let (_, actions) = selector.toggle();
        assert!(actions.is_empty());
        assert!(!selector.search("ger"));
    }

    #[test]
    fn search_refilters_synchronously() {
        let bus = PointerBus::new();
        let mut selector = selector(&bus);
        selector.toggle();
        assert!(selector.search("44"));
        assert_eq!(selector.visible().codes(), vec!["GB"]);
        assert!(selector.search("zzz"));
        assert_eq!(selector.visible(), &VisibleList::NoResults);
    }

    #[test]
    fn select_item_commits_and_closes() {
        let bus = PointerBus::new();
        let mut selector = selector(&bus);
        selector.toggle();
        selector.search("ger");

        let action = selector.select_item("DE");
        assert!(matches!(action, Some(Action::CountryChanged(ref c)) if c.code == "DE"));
        assert!(!selector.is_open());
        assert_eq!(selector.search_term(), "");
        assert!(bus.dispatch(Point::new(99, 99)).is_empty());
    }

    #[test]
    fn select_item_outside_visible_list_is_ignored() {
        let bus = PointerBus::new();
        let mut selector = selector(&bus);
        selector.toggle();
        selector.search("ger");
        assert_eq!(selector.select_item("GB"), None);
        assert_eq!(selector.select_item("ZZ"), None);
        assert!(selector.is_open());
    }

    #[test]
    fn select_highlighted_follows_cursor() {
        let bus = PointerBus::new();
        let mut selector = selector(&bus);
        selector.toggle();
        selector.cursor_down();
        let expected = selector.visible().get(1).cloned().unwrap();
        assert_eq!(selector.select_highlighted(), Some(Action::CountryChanged(expected)));
    }

    #[test]
    fn disabling_open_selector_closes_it() {
        let bus = PointerBus::new();
        let mut selector = selector(&bus);
        selector.toggle();
        selector.search("uni");
        assert!(selector.set_disabled(true));
        assert!(!selector.is_open());
        assert_eq!(selector.search_term(), "");

        let (outcome, _) = selector.toggle();
        assert_eq!(outcome, Toggle::Suppressed);
    }

    #[test]
    fn dropping_selector_releases_listener() {
        let bus = PointerBus::new();
        let selector = selector(&bus);
        assert_eq!(bus.listener_count(), 1);
        drop(selector);
        assert_eq!(bus.listener_count(), 0);
    }
}
