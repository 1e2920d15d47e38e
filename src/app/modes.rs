//! Mode enums for the dropdown and the composed phone widget.
//!
//! # State Machine
//!
//! The dropdown is either **Closed** (initial) or **Open**. It toggles for the
//! whole lifetime of the widget; there is no terminal state.
//!
//! The phone widget additionally tracks which part has keyboard focus: the
//! country trigger or the number input.
//!
//! # Example
//!
//! ```rust
//! use flagdial::app::modes::{DropdownMode, WidgetFocus};
//!
//! assert_eq!(DropdownMode::default(), DropdownMode::Closed);
//! assert_eq!(WidgetFocus::default().toggled(), WidgetFocus::Number);
//! ```

/// Open/closed state of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownMode {
    /// List hidden; the search term is meaningless.
    #[default]
    Closed,

    /// List visible; search keystrokes re-filter it.
    Open,
}

/// Outcome of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Closed → Open. The search term was cleared.
    Opened,
    /// Open → Closed.
    Closed,
    /// The widget is disabled; nothing changed.
    Suppressed,
}

/// Keyboard focus inside the phone widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetFocus {
    /// Country trigger (and its dropdown, when open).
    Trigger,

    /// Phone number input.
    #[default]
    Number,
}

impl WidgetFocus {
    /// The other focus target.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Trigger => Self::Number,
            Self::Number => Self::Trigger,
        }
    }
}
