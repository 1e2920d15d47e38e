//! Selected-country state and its reconciliation with the host.
//!
//! [`SelectionController`] owns the "currently selected country" of one widget.
//! Its policies:
//!
//! - **Initialization**: adopt the external value when one is supplied, otherwise
//!   look up the configured default country. A miss leaves the selection absent,
//!   which is a valid state. Initialization is re-evaluated whenever the
//!   selection is still absent.
//! - **External authority**: a value reported by the host always overwrites the
//!   local selection, even one the user just made.
//! - **Absent external value**: does not clear an existing selection.
//! - **User commit**: [`SelectionController::set_selection`] updates the state
//!   and yields the change notification for the host.

use crate::app::Action;
use crate::domain::{Catalog, CountryRecord};

/// Per-widget selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<CountryRecord>,
    default_country: String,
}

impl SelectionController {
    /// Creates the controller and runs the initialization policy once.
    ///
    /// ```
    /// use flagdial::app::SelectionController;
    /// use flagdial::StaticCatalog;
    ///
    /// let catalog = StaticCatalog::bundled();
    /// let selection = SelectionController::new(None, "GB", &catalog);
    /// assert_eq!(selection.selected().map(|c| c.code.as_str()), Some("GB"));
    /// ```
    pub fn new(external: Option<CountryRecord>, default_country: &str, catalog: &dyn Catalog) -> Self {
        let mut controller = Self {
            selected: external,
            default_country: default_country.to_string(),
        };
        controller.ensure_initialized(catalog);
        controller
    }

    /// The current selection, if any has resolved.
    #[must_use]
    pub const fn selected(&self) -> Option<&CountryRecord> {
        self.selected.as_ref()
    }

    /// The configured default country code.
    #[must_use]
    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    /// Adopts the default country if nothing is selected yet.
    ///
    /// Returns `true` when the selection changed.
    pub fn ensure_initialized(&mut self, catalog: &dyn Catalog) -> bool {
        if self.selected.is_some() {
            return false;
        }

        match catalog.lookup(&self.default_country) {
            Some(country) => {
                tracing::debug!(code = %country.code, "selection initialized from default country");
                self.selected = Some(country.clone());
                true
            }
            None => {
                tracing::debug!(
                    default_country = %self.default_country,
                    "default country not in catalog, selection stays absent"
                );
                false
            }
        }
    }

    /// Applies a value reported by the host.
    ///
    /// A present value always wins over the local selection. An absent value
    /// leaves the selection untouched and re-runs initialization.
    ///
    /// Returns `true` when the selection changed.
    pub fn reconcile(&mut self, external: Option<&CountryRecord>, catalog: &dyn Catalog) -> bool {
        match external {
            Some(country) => {
                let changed = self.selected.as_ref() != Some(country);
                tracing::debug!(code = %country.code, changed = changed, "external value adopted");
                self.selected = Some(country.clone());
                changed
            }
            None => self.ensure_initialized(catalog),
        }
    }

    /// Replaces the default country code and re-runs initialization.
    ///
    /// Returns `true` when the selection changed.
    pub fn set_default_country(&mut self, code: &str, catalog: &dyn Catalog) -> bool {
        self.default_country = code.to_string();
        self.ensure_initialized(catalog)
    }

    /// Commits a user choice and returns the change notification.
    pub fn set_selection(&mut self, country: CountryRecord) -> Action {
        tracing::debug!(code = %country.code, "selection committed");
        self.selected = Some(country.clone());
        Action::CountryChanged(country)
    }
}
