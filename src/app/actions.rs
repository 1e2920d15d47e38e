//! Actions emitted by the widgets for the host to carry out.
//!
//! Event handling never calls back into the host. Instead every handler returns a
//! `Vec<Action>`, and the host executes them in order: delivering change
//! notifications to its own code, moving focus, or hiding the pane.
//!
//! # Example
//!
//! ```rust
//! use flagdial::app::Action;
//! use flagdial::CountryRecord;
//!
//! let gb = CountryRecord::new("United Kingdom", "GB", "+44", "🇬🇧");
//! let actions = vec![
//!     Action::CountryChanged(gb.clone()),
//!     Action::PhoneChanged {
//!         full_number: "+447946".to_string(),
//!         country: Some(gb),
//!     },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::CountryRecord;

/// Commands and notifications produced by event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user committed a country from a standalone selector's dropdown.
    ///
    /// Carries the full record. The phone widget reports country commits through
    /// [`Action::PhoneChanged`] instead.
    CountryChanged(CountryRecord),

    /// The composed phone number changed, through a number edit or a country change.
    PhoneChanged {
        /// Dial code immediately followed by the local part.
        full_number: String,
        /// Selected country at the time of the change; `None` while nothing has resolved.
        country: Option<CountryRecord>,
    },

    /// The dropdown opened with a search box; keyboard focus belongs there.
    FocusSearch,

    /// Hide the host pane.
    CloseFocus,
}
