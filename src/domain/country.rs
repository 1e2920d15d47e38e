//! Country record value type.
//!
//! A [`CountryRecord`] is owned by a [`Catalog`](crate::domain::Catalog) and
//! handed around by value everywhere else. Nothing in the crate mutates a record
//! once the catalog has loaded it.

use serde::{Deserialize, Serialize};

/// One selectable country: display name, unique code, dialing prefix and flag glyph.
///
/// `code` is the identity key. Two records are the same country when their codes
/// match; the remaining fields are carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Display name, e.g. `"United Kingdom"`.
    pub name: String,

    /// ISO-like unique code, e.g. `"GB"`.
    pub code: String,

    /// Leading `+` followed by digits, e.g. `"+44"`.
    pub dial_code: String,

    /// Emoji flag glyph, e.g. `"🇬🇧"`. May be empty, in which case renderers
    /// substitute a neutral flag.
    #[serde(default)]
    pub flag: String,

    /// Optional national number format hint. Carried, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl CountryRecord {
    /// Creates a record without a format hint.
    ///
    /// ```
    /// use flagdial::CountryRecord;
    ///
    /// let us = CountryRecord::new("United States", "US", "+1", "🇺🇸");
    /// assert_eq!(us.dial_code, "+1");
    /// assert!(us.format.is_none());
    /// ```
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        dial_code: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            dial_code: dial_code.into(),
            flag: flag.into(),
            format: None,
        }
    }

    /// Returns `true` when both records denote the same country.
    #[must_use]
    pub fn same_country(&self, other: &Self) -> bool {
        self.code == other.code
    }
}
