//! View models for the phone widget, plus the layout used for hit testing.
//!
//! A [`UIViewModel`] is computed from the widget state by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! holds only display-ready data. Its [`Layout`] records where each element
//! lands on screen; the host uses it to map clicks back to widget events and
//! to keep the selector's outside-interaction boundary current.

use std::collections::BTreeMap;

use crate::infrastructure::pointer::{Point, Rect};
use crate::ui::flag::FlagElement;

/// Row of the trigger and number input.
pub const INPUT_ROW: usize = 4;

/// Columns taken by the country trigger.
pub const TRIGGER_WIDTH: usize = 14;

/// Rows taken by the search box.
pub const SEARCH_BOX_HEIGHT: usize = 3;

/// Text of the terminal list state.
pub const NO_RESULTS_MESSAGE: &str = "No countries found";

/// Placeholder of the empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search countries...";

/// Everything the renderer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title line.
    pub header: HeaderInfo,
    /// Country trigger.
    pub trigger: TriggerView,
    /// Number input.
    pub number: NumberView,
    /// Open dropdown, if any.
    pub dropdown: Option<DropdownView>,
    /// Key hints.
    pub footer: FooterInfo,
    /// Screen placement of the elements above.
    pub layout: Layout,
}

/// Title line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text.
    pub title: String,
    /// Last number reported to the host, with its country code.
    pub status: Option<String>,
}

/// Key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Hint text.
    pub keybindings: String,
}

/// The country trigger.
///
/// `flag` and `dial_code` are `None` when the matching option is off or no
/// country has resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    /// Flag of the selection.
    pub flag: Option<FlagElement>,
    /// Dial code of the selection.
    pub dial_code: Option<String>,
    /// Dropdown open indicator.
    pub is_open: bool,
    /// Keyboard focus.
    pub is_focused: bool,
    /// Inert widget.
    pub disabled: bool,
}

/// The number input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberView {
    /// Local part of the stored number.
    pub text: String,
    /// Shown while `text` is empty.
    pub placeholder: String,
    /// Keyboard focus.
    pub is_focused: bool,
    /// Inert widget.
    pub disabled: bool,
    /// Host attributes, carried through untouched.
    pub attributes: BTreeMap<String, String>,
}

/// The open dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    /// Search box, when the selector is searchable.
    pub search_bar: Option<SearchBarInfo>,
    /// Visible window of candidate rows.
    pub rows: Vec<CountryRow>,
    /// Set instead of rows when nothing matched.
    pub empty_state: Option<EmptyState>,
    /// Host attributes, carried through untouched.
    pub attributes: BTreeMap<String, String>,
}

/// Search box content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current term.
    pub query: String,
    /// Shown while the term is empty.
    pub placeholder: String,
}

/// Terminal list state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Message text.
    pub message: String,
}

/// One candidate in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    /// Country code, used to map clicks back to the candidate.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Dial code, when shown.
    pub dial_code: Option<String>,
    /// Flag, when shown.
    pub flag: Option<FlagElement>,
    /// Same country as the current selection.
    pub is_selected: bool,
    /// Under the keyboard cursor.
    pub is_cursor: bool,
    /// Name characters matching the search term.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// The country trigger.
    Trigger,
    /// The number input.
    Number,
    /// The search box.
    Search,
    /// A candidate row.
    Item(String),
    /// Inside the widget but on nothing interactive.
    Inside,
}

/// Screen placement of the widget's elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Country trigger.
    pub trigger: Rect,
    /// Number input.
    pub number: Rect,
    /// Search box, when shown.
    pub search: Option<Rect>,
    /// Candidate rows with their codes.
    pub items: Vec<(Rect, String)>,
    /// Selector boundary: the trigger, plus the dropdown area while open.
    pub selector_regions: Vec<Rect>,
    /// Whole widget boundary.
    pub bounds: Rect,
}

impl Layout {
    /// Lays out the input line and, when `dropdown` is set, the dropdown below it.
    ///
    /// `dropdown` is `(searchable, codes of rendered rows, list is empty)`.
    #[must_use]
    pub fn compute(cols: usize, dropdown: Option<(bool, &[String], bool)>) -> Self {
        let trigger = Rect::new(INPUT_ROW, 1, 1, TRIGGER_WIDTH);
        let number_col = TRIGGER_WIDTH + 2;
        let number = Rect::new(INPUT_ROW, number_col, 1, cols.saturating_sub(number_col - 1).max(1));

        let mut row = INPUT_ROW + 1;
        let mut search = None;
        let mut items = vec![];

        if let Some((searchable, codes, no_results)) = dropdown {
            if searchable {
                search = Some(Rect::new(row, 1, SEARCH_BOX_HEIGHT, cols));
                row += SEARCH_BOX_HEIGHT;
            }
            for code in codes {
                items.push((Rect::new(row, 1, 1, cols), code.clone()));
                row += 1;
            }
            if no_results {
                row += 1;
            }
        }

        let height = row - INPUT_ROW;
        let mut selector_regions = vec![trigger];
        if height > 1 {
            selector_regions.push(Rect::new(INPUT_ROW + 1, 1, height - 1, cols));
        }

        Self {
            trigger,
            number,
            search,
            items,
            selector_regions,
            bounds: Rect::new(INPUT_ROW, 1, height, cols),
        }
    }

    /// Finds what `point` landed on; `None` when it is outside the widget.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<Hit> {
        if self.trigger.contains(point) {
            return Some(Hit::Trigger);
        }
        if self.number.contains(point) {
            return Some(Hit::Number);
        }
        if self.search.is_some_and(|rect| rect.contains(point)) {
            return Some(Hit::Search);
        }
        if let Some((_, code)) = self.items.iter().find(|(rect, _)| rect.contains(point)) {
            return Some(Hit::Item(code.clone()));
        }
        self.bounds.contains(point).then_some(Hit::Inside)
    }
}
