//! Host-side state and view model computation.
//!
//! [`AppState`] is what the terminal host keeps between events: the phone widget,
//! the active theme, the flag renderer and the last change reported by the
//! widget. [`AppState::compute_viewmodel`] turns it into a
//! [`UIViewModel`] sized for the pane, windowing the candidate list around
//! the keyboard cursor.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use flagdial::app::{AppState, PhoneWidget};
//! use flagdial::infrastructure::pointer::PointerBus;
//! use flagdial::ui::{flag::FlagRenderer, Theme};
//! use flagdial::{StaticCatalog, WidgetConfig};
//!
//! let bus = PointerBus::new();
//! let widget = PhoneWidget::new(WidgetConfig::default(), Rc::new(StaticCatalog::bundled()), "", &bus);
//! let state = AppState::new(widget, Theme::default(), FlagRenderer::default());
//!
//! let vm = state.compute_viewmodel(24, 80);
//! assert_eq!(vm.trigger.dial_code.as_deref(), Some("+1"));
//! assert!(vm.dropdown.is_none());
//! ```

use super::filter::match_ranges;
use super::modes::WidgetFocus;
use super::widget::PhoneWidget;
use super::Action;
use crate::domain::CountryRecord;
use crate::ui::flag::{FlagElement, FlagRenderer};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CountryRow, DropdownView, EmptyState, FooterInfo, HeaderInfo, Layout, NumberView, SearchBarInfo,
    TriggerView, UIViewModel, INPUT_ROW, NO_RESULTS_MESSAGE, SEARCH_BOX_HEIGHT, SEARCH_PLACEHOLDER,
};

/// Lines below the dropdown kept for the footer border and the footer.
const FOOTER_LINES: usize = 2;

/// The last change the widget reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastChange {
    /// Full number as emitted.
    pub full_number: String,
    /// Country code carried with it.
    pub country: Option<String>,
}

/// Everything the terminal host keeps between events.
#[derive(Debug)]
pub struct AppState {
    /// The phone widget.
    pub widget: PhoneWidget,

    /// Active color theme.
    pub theme: Theme,

    /// Flag element factory.
    pub flags: FlagRenderer,

    /// Last [`Action::PhoneChanged`] seen, shown in the header.
    pub last_change: Option<LastChange>,
}

impl AppState {
    /// Creates host state around `widget`.
    #[must_use]
    pub fn new(widget: PhoneWidget, theme: Theme, flags: FlagRenderer) -> Self {
        Self {
            widget,
            theme,
            flags,
            last_change: None,
        }
    }

    /// Remembers the newest phone change among `actions`.
    pub fn record(&mut self, actions: &[Action]) {
        let newest = actions.iter().rev().find_map(|action| match action {
            Action::PhoneChanged { full_number, country } => Some(LastChange {
                full_number: full_number.clone(),
                country: country.as_ref().map(|c| c.code.clone()),
            }),
            _ => None,
        });

        if let Some(change) = newest {
            tracing::info!(full_number = %change.full_number, country = ?change.country, "phone number changed");
            self.last_change = Some(change);
        }
    }

    /// Builds the view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let dropdown = self.compute_dropdown(rows);

        let layout = dropdown.as_ref().map_or_else(
            || Layout::compute(cols, None),
            |view| {
                let codes: Vec<String> = view.rows.iter().map(|row| row.code.clone()).collect();
                Layout::compute(cols, Some((view.search_bar.is_some(), &codes, view.empty_state.is_some())))
            },
        );

        UIViewModel {
            header: self.compute_header(),
            trigger: self.compute_trigger(),
            number: self.compute_number(),
            dropdown,
            footer: self.compute_footer(),
            layout,
        }
    }

    fn flag_for(&self, country: &CountryRecord) -> FlagElement {
        let config = self.widget.selector().config();
        self.flags
            .render(&country.code, &country.flag, config.use_flag_images, config.flag_size)
    }

    fn compute_trigger(&self) -> TriggerView {
        let selector = self.widget.selector();
        let config = selector.config();
        let selected = selector.selected();

        TriggerView {
            flag: selected.filter(|_| config.show_flag).map(|c| self.flag_for(c)),
            dial_code: selected.filter(|_| config.show_dial_code).map(|c| c.dial_code.clone()),
            is_open: selector.is_open(),
            is_focused: self.widget.focus() == WidgetFocus::Trigger,
            disabled: config.disabled,
        }
    }

    fn compute_number(&self) -> NumberView {
        let config = self.widget.selector().config();
        NumberView {
            text: self.widget.local_part().to_string(),
            placeholder: config.placeholder.clone(),
            is_focused: self.widget.focus() == WidgetFocus::Number && !self.widget.selector().is_open(),
            disabled: config.disabled,
            attributes: config.input_attributes.clone(),
        }
    }

    fn compute_dropdown(&self, rows: usize) -> Option<DropdownView> {
        let selector = self.widget.selector();
        if !selector.is_open() {
            return None;
        }
        let config = selector.config();

        let search_bar = config.searchable.then(|| SearchBarInfo {
            query: selector.search_term().to_string(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
        });

        let visible = selector.visible();
        if visible.is_empty() {
            return Some(DropdownView {
                search_bar,
                rows: vec![],
                empty_state: Some(EmptyState {
                    message: NO_RESULTS_MESSAGE.to_string(),
                }),
                attributes: config.dropdown_attributes.clone(),
            });
        }

        let search_height = if search_bar.is_some() { SEARCH_BOX_HEIGHT } else { 0 };
        let available = rows
            .saturating_sub(INPUT_ROW + 1 + search_height + FOOTER_LINES)
            .max(1);

        let records = visible.records();
        let cursor = selector.cursor();
        let mut start = cursor.saturating_sub(available / 2);
        let end = (start + available).min(records.len());
        if end - start < available && records.len() >= available {
            start = end.saturating_sub(available);
        }

        let selected_code = selector.selected().map(|c| c.code.as_str());
        let term = selector.search_term();

        let rows = records[start..end]
            .iter()
            .enumerate()
            .map(|(offset, country)| CountryRow {
                code: country.code.clone(),
                name: country.name.clone(),
                dial_code: config.show_dial_code.then(|| country.dial_code.clone()),
                flag: config.show_flag.then(|| self.flag_for(country)),
                is_selected: selected_code == Some(country.code.as_str()),
                is_cursor: start + offset == cursor,
                highlight_ranges: match_ranges(&country.name, term),
            })
            .collect();

        Some(DropdownView {
            search_bar,
            rows,
            empty_state: None,
            attributes: config.dropdown_attributes.clone(),
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: "Phone number".to_string(),
            status: self.last_change.as_ref().map(|change| match &change.country {
                Some(code) => format!("{} ({code})", change.full_number),
                None => change.full_number.clone(),
            }),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.widget.selector().is_open() {
            "↑/↓: move | Enter: select | type: search | Esc: close"
        } else {
            "Tab: switch focus | Enter: open list | type: number | Esc: hide"
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::WidgetConfig;
    use crate::app::handler::{handle_event, Event};
    use crate::domain::StaticCatalog;
    use crate::infrastructure::pointer::PointerBus;
    use std::rc::Rc;

    fn state(config: WidgetConfig, bus: &PointerBus) -> AppState {
        let widget = PhoneWidget::new(config, Rc::new(StaticCatalog::bundled()), "+15551234567", bus);
        AppState::new(widget, Theme::default(), FlagRenderer::default())
    }

    #[test]
    fn closed_widget_has_no_dropdown() {
        let bus = PointerBus::new();
        let vm = state(WidgetConfig::default(), &bus).compute_viewmodel(24, 80);
        assert!(vm.dropdown.is_none());
        assert_eq!(vm.number.text, "5551234567");
        assert!(vm.number.is_focused);
    }

    #[test]
    fn open_list_marks_selection_and_cursor() {
        let bus = PointerBus::new();
        let mut state = state(WidgetConfig::default(), &bus);
        handle_event(&mut state.widget, &Event::Toggle);
        handle_event(&mut state.widget, &Event::Search("united".to_string()));

        let vm = state.compute_viewmodel(24, 80);
        let dropdown = vm.dropdown.unwrap();
        assert!(dropdown.rows[0].is_cursor);
        let us = dropdown.rows.iter().find(|row| row.code == "US").unwrap();
        assert!(us.is_selected);
        assert_eq!(us.highlight_ranges, vec![(0, 6)]);
    }

    #[test]
    fn list_is_windowed_to_the_pane() {
        let bus = PointerBus::new();
        let mut state = state(WidgetConfig::default(), &bus);
        handle_event(&mut state.widget, &Event::Toggle);

        let vm = state.compute_viewmodel(15, 80);
        let rows = vm.dropdown.unwrap().rows.len();
        assert_eq!(rows, 15 - (INPUT_ROW + 1 + SEARCH_BOX_HEIGHT + FOOTER_LINES));
        assert_eq!(vm.layout.items.len(), rows);
    }

    #[test]
    fn no_results_state() {
        let bus = PointerBus::new();
        let mut state = state(WidgetConfig::default(), &bus);
        handle_event(&mut state.widget, &Event::Toggle);
        handle_event(&mut state.widget, &Event::Search("zzzz".to_string()));

        let dropdown = state.compute_viewmodel(24, 80).dropdown.unwrap();
        assert!(dropdown.rows.is_empty());
        assert_eq!(dropdown.empty_state.unwrap().message, NO_RESULTS_MESSAGE);
    }

    #[test]
    fn hidden_flag_and_dial_code() {
        let bus = PointerBus::new();
        let config = WidgetConfig {
            show_flag: false,
            show_dial_code: false,
            ..Default::default()
        };
        let vm = state(config, &bus).compute_viewmodel(24, 80);
        assert_eq!(vm.trigger.flag, None);
        assert_eq!(vm.trigger.dial_code, None);
    }

    #[test]
    fn attributes_pass_through() {
        let bus = PointerBus::new();
        let mut config = WidgetConfig::default();
        config.input_attributes.insert("name".to_string(), "phone".to_string());
        config.dropdown_attributes.insert("data-test".to_string(), "dd".to_string());
        let mut state = state(config, &bus);
        handle_event(&mut state.widget, &Event::Toggle);

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.number.attributes.get("name").map(String::as_str), Some("phone"));
        assert_eq!(
            vm.dropdown.unwrap().attributes.get("data-test").map(String::as_str),
            Some("dd")
        );
    }

    #[test]
    fn records_last_phone_change() {
        let bus = PointerBus::new();
        let mut state = state(WidgetConfig::default(), &bus);
        let (_, actions) = handle_event(&mut state.widget, &Event::NumberEdited("2025550123".to_string()));
        state.record(&actions);

        let header = state.compute_viewmodel(24, 80).header;
        assert_eq!(header.status.as_deref(), Some("+12025550123 (US)"));
    }
}
