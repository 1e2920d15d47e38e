//! Splitting a full phone number into dial code and local part, and back.
//!
//! The full number (dial code immediately followed by the local digits, no
//! separator) is the only stored value. The local part shown in the input is
//! always derived from it and the selected country.
//!
//! No validation or normalization happens here: whatever the user types is kept
//! verbatim.

use crate::domain::CountryRecord;

/// The part of `full_number` shown in the number input.
///
/// Strips the selected country's dial code when `full_number` starts with it
/// exactly; otherwise returns `full_number` unchanged.
///
/// ```
/// use flagdial::app::phone::derive_local_part;
/// use flagdial::CountryRecord;
///
/// let us = CountryRecord::new("United States", "US", "+1", "🇺🇸");
/// assert_eq!(derive_local_part("+15551234567", Some(&us)), "5551234567");
/// assert_eq!(derive_local_part("5551234567", Some(&us)), "5551234567");
/// assert_eq!(derive_local_part("+15551234567", None), "+15551234567");
/// ```
#[must_use]
pub fn derive_local_part<'a>(full_number: &'a str, selected: Option<&CountryRecord>) -> &'a str {
    selected
        .and_then(|country| full_number.strip_prefix(country.dial_code.as_str()))
        .unwrap_or(full_number)
}

/// Joins the selected country's dial code (or nothing) with `local_part`.
///
/// ```
/// use flagdial::app::phone::recompose;
/// use flagdial::CountryRecord;
///
/// let us = CountryRecord::new("United States", "US", "+1", "🇺🇸");
/// assert_eq!(recompose("5559999999", Some(&us)), "+15559999999");
/// assert_eq!(recompose("555", None), "555");
/// assert_eq!(recompose("(555) 12", Some(&us)), "+1(555) 12");
/// ```
#[must_use]
pub fn recompose(local_part: &str, selected: Option<&CountryRecord>) -> String {
    let dial_code = selected.map_or("", |country| country.dial_code.as_str());
    format!("{dial_code}{local_part}")
}

/// Stored phone number of one widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneComposer {
    full_number: String,
}

impl PhoneComposer {
    /// Creates a composer holding `full_number`.
    pub fn new(full_number: impl Into<String>) -> Self {
        Self {
            full_number: full_number.into(),
        }
    }

    /// The stored full number.
    #[must_use]
    pub fn full_number(&self) -> &str {
        &self.full_number
    }

    /// The local part for display under `selected`.
    #[must_use]
    pub fn local_part<'a>(&'a self, selected: Option<&CountryRecord>) -> &'a str {
        derive_local_part(&self.full_number, selected)
    }

    /// Replaces the stored number with a value supplied by the host.
    ///
    /// Returns `true` when the stored number changed.
    pub fn set_full_number(&mut self, full_number: &str) -> bool {
        if self.full_number == full_number {
            return false;
        }
        self.full_number = full_number.to_string();
        true
    }

    /// Applies an edit of the local part and returns the new full number.
    pub fn edit_local(&mut self, local_part: &str, selected: Option<&CountryRecord>) -> String {
        self.full_number = recompose(local_part, selected);
        tracing::trace!(full_number = %self.full_number, "local part edited");
        self.full_number.clone()
    }

    /// Moves the stored number under a newly selected country.
    ///
    /// The previous country's dial code is removed when the stored number carries
    /// it; otherwise the stored text is kept whole. The result is prefixed with the
    /// new dial code.
    ///
    /// Stripping applies to host-supplied numbers too: a stored `+15551234567`
    /// moved to `+44` becomes `+445551234567`, never `+44+15551234567`. Plain
    /// concatenation of the new dial code with the stored text is not used.
    pub fn change_country(&mut self, previous: Option<&CountryRecord>, next: &CountryRecord) -> String {
        let local = derive_local_part(&self.full_number, previous).to_string();
        self.full_number = recompose(&local, Some(next));
        tracing::debug!(
            previous = ?previous.map(|c| c.code.as_str()),
            next = %next.code,
            full_number = %self.full_number,
            "number moved to new country"
        );
        self.full_number.clone()
    }
}
