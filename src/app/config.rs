//! Construction-time widget options.
//!
//! [`WidgetConfig`] carries every recognized option of the selector and phone
//! widgets. It is read-only once a widget is built, except for `disabled`, which
//! the host may flip through [`Event::SetDisabled`](crate::app::Event::SetDisabled).

use std::collections::{BTreeMap, BTreeSet};

/// Default flag glyph height in pixels.
pub const DEFAULT_FLAG_SIZE: u32 = 16;

/// Default country code used when no external value is supplied.
pub const DEFAULT_COUNTRY: &str = "US";

/// Default placeholder for an empty number input.
pub const DEFAULT_PLACEHOLDER: &str = "Enter phone number";

/// Options shared by [`CountrySelector`](crate::app::CountrySelector) and
/// [`PhoneWidget`](crate::app::PhoneWidget).
///
/// # Example
///
/// ```
/// use flagdial::WidgetConfig;
///
/// let config = WidgetConfig {
///     preferred_countries: vec!["GB".to_string()],
///     ..Default::default()
/// };
/// assert!(config.searchable);
/// assert_eq!(config.default_country, "US");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Whether the open dropdown shows a search box.
    pub searchable: bool,

    /// Whether flags are rendered in the trigger and list.
    pub show_flag: bool,

    /// Whether dial codes are rendered in the trigger and list.
    pub show_dial_code: bool,

    /// Image flags instead of emoji glyphs.
    pub use_flag_images: bool,

    /// Flag glyph height in pixels; image width is derived from it.
    pub flag_size: u32,

    /// Country code adopted when no external value is supplied.
    pub default_country: String,

    /// Codes pinned to the top of the candidate list.
    pub preferred_countries: Vec<String>,

    /// Codes removed from the candidate list entirely.
    pub exclude_countries: BTreeSet<String>,

    /// Inert widget: toggles and number edits are ignored.
    pub disabled: bool,

    /// Shown in the number input while the local part is empty.
    pub placeholder: String,

    /// Opaque attributes for the generated number input.
    pub input_attributes: BTreeMap<String, String>,

    /// Opaque attributes for the dropdown container.
    pub dropdown_attributes: BTreeMap<String, String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            show_flag: true,
            show_dial_code: true,
            use_flag_images: false,
            flag_size: DEFAULT_FLAG_SIZE,
            default_country: DEFAULT_COUNTRY.to_string(),
            preferred_countries: Vec::new(),
            exclude_countries: BTreeSet::new(),
            disabled: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            input_attributes: BTreeMap::new(),
            dropdown_attributes: BTreeMap::new(),
        }
    }
}

impl WidgetConfig {
    /// Returns `true` when `code` is pinned to the top of the list.
    #[must_use]
    pub fn is_preferred(&self, code: &str) -> bool {
        self.preferred_countries.iter().any(|c| c == code)
    }
}
