//! Dropdown interaction state machine.
//!
//! [`DropdownMachine`] owns the open flag and the search term, plus a keyboard cursor
//! over the visible list. Filtering itself lives in
//! [`compute_visible_list`](crate::app::filter::compute_visible_list); the owning
//! selector re-runs it whenever a transition reports that the term changed.
//!
//! # Transitions
//!
//! ```text
//! Closed --toggle (enabled)--> Open      search term cleared
//! Open   --toggle-----------> Closed
//! Open   --outside pointer--> Closed
//! Open   --search(text)-----> Open      term replaced
//! Open   --select item------> Closed    term cleared
//! ```
//!
//! A disabled widget suppresses `toggle` entirely. The search term is also
//! cleared on every close, so the next open always starts blank.

use super::modes::{DropdownMode, Toggle};

/// Open/closed state, search term and list cursor of one dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownMachine {
    mode: DropdownMode,
    search_term: String,
    cursor: usize,
}

impl DropdownMachine {
    /// A closed dropdown with an empty search term.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> DropdownMode {
        self.mode
    }

    /// Returns `true` while the list is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.mode == DropdownMode::Open
    }

    /// Current search term (always empty while closed).
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Index of the highlighted row in the visible list.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Opens or closes the dropdown.
    pub fn toggle(&mut self, disabled: bool) -> Toggle {
        if disabled {
            tracing::debug!("toggle suppressed, widget disabled");
            return Toggle::Suppressed;
        }

        match self.mode {
            DropdownMode::Closed => {
                self.mode = DropdownMode::Open;
                self.reset_term();
                Toggle::Opened
            }
            DropdownMode::Open => {
                self.close();
                Toggle::Closed
            }
        }
    }

    /// Replaces the search term. Ignored while closed.
    ///
    /// Returns `true` when the term changed and the list must be recomputed.
    pub fn search(&mut self, text: &str) -> bool {
        if !self.is_open() || self.search_term == text {
            return false;
        }
        self.search_term = text.to_string();
        self.cursor = 0;
        tracing::trace!(term = %self.search_term, "search term updated");
        true
    }

    /// Appends one character to the search term. Ignored while closed.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.is_open() {
            return false;
        }
        let mut term = self.search_term.clone();
        term.push(c);
        self.search(&term)
    }

    /// Removes the last character of the search term. Ignored while closed.
    pub fn pop_char(&mut self) -> bool {
        if !self.is_open() || self.search_term.is_empty() {
            return false;
        }
        let mut term = self.search_term.clone();
        term.pop();
        self.search(&term)
    }

    /// A pointer-down landed outside the widget boundary.
    ///
    /// Returns `true` when this closed the dropdown.
    pub fn outside_interaction(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        tracing::debug!("outside interaction, closing dropdown");
        self.close();
        true
    }

    /// An item was committed: close and clear the term.
    pub fn commit(&mut self) {
        self.close();
    }

    /// Closes regardless of the current mode.
    pub fn close(&mut self) {
        self.mode = DropdownMode::Closed;
        self.reset_term();
    }

    /// Moves the cursor down, wrapping to the first row.
    pub fn cursor_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the cursor up, wrapping to the last row.
    pub fn cursor_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// Places the cursor on `index`, clamped to the list length.
    pub fn place_cursor(&mut self, index: usize, len: usize) {
        self.cursor = index.min(len.saturating_sub(1));
    }

    fn reset_term(&mut self) {
        self.search_term.clear();
        self.cursor = 0;
    }
}
