//! flagdial: a country dial-code selector and phone number input.
//!
//! The crate is a headless widget core with a Zellij plugin on top:
//! - Country search over a catalog by name, dial code or ISO code, with
//!   preferred countries pinned first and excluded countries removed
//! - A dropdown state machine with keyboard cursor and outside-click dismissal
//! - A phone number composer that keeps the full number (`+44...`) as the
//!   source of truth while the user edits only the local part
//! - Terminal rendering with flag emoji (or image badges) and color themes
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, clicks, host
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling → Vec<Action>                     │
//! │  - CountrySelector / PhoneWidget                    │
//! │  - Filter engine, selection, dropdown, composer     │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                   ┌──────────────────┐
//! │ UI Layer      │                   │ Infrastructure   │
//! │ (ui/)         │                   │ (infrastructure/)│
//! │ - View models │                   │ - Pointer bus    │
//! │ - Components  │                   │ - Sandbox paths  │
//! │ - Flags/theme │                   │                  │
//! └───────────────┘                   └──────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): CountryRecord, Catalog, errors   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Widgets, events and actions
//! - [`domain`]: Country records, the catalog and error types
//! - [`infrastructure`]: Pointer bus for outside clicks, sandbox paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/flagdial.wasm" {
//!         default_country "GB"
//!         preferred_countries "GB,IE"
//!         exclude_countries "RU"
//!         number "+447700900123"
//!         flag_size "20"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use flagdial::infrastructure::pointer::PointerBus;
//! use flagdial::{handle_event, initialize, Action, Config, Event};
//!
//! let bus = PointerBus::new();
//! let mut state = initialize(&Config::default(), &bus);
//!
//! let (_, actions) = handle_event(&mut state.widget, &Event::NumberEdited("5550100".to_string()));
//! assert!(matches!(
//!     actions.as_slice(),
//!     [Action::PhoneChanged { full_number, .. }] if full_number == "+15550100"
//! ));
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, handle_selector_event, Action, AppState, CountrySelector, Event, PhoneWidget,
    WidgetConfig,
};
pub use domain::{Catalog, CountryRecord, FlagdialError, Result, StaticCatalog};
pub use ui::Theme;

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use infrastructure::pointer::PointerBus;
use infrastructure::expand_tilde;
use ui::FlagRenderer;

/// Prefix of plugin options copied into the number input attributes.
pub const INPUT_ATTR_PREFIX: &str = "input_attr.";

/// Prefix of plugin options copied into the dropdown attributes.
pub const DROPDOWN_ATTR_PREFIX: &str = "dropdown_attr.";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Widget options.
    pub widget: WidgetConfig,

    /// Country code supplied by the host, overriding `default_country`.
    pub country: Option<String>,

    /// Initial full number.
    pub number: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Path to a custom TOML country dataset.
    pub catalog_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Booleans accept `true` and `false`; anything else keeps the default.
    /// Lists are comma-separated and country codes are trimmed and uppercased.
    /// `flag_size` falls back to 16 when it is not a positive integer. Keys
    /// starting with `input_attr.` or `dropdown_attr.` become pass-through
    /// attributes. `~` in file paths refers to the host home directory.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use flagdial::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("preferred_countries".to_string(), "GB, IE".to_string());
    /// map.insert("searchable".to_string(), "false".to_string());
    /// map.insert("input_attr.name".to_string(), "phone".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.widget.preferred_countries, vec!["GB", "IE"]);
    /// assert!(!config.widget.searchable);
    /// assert_eq!(config.widget.input_attributes["name"], "phone");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = WidgetConfig::default();
        let flag = |key: &str, default: bool| {
            config.get(key).map_or(default, |value| {
                parse_bool(key, value).unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "using default");
                    default
                })
            })
        };

        let flag_size = config
            .get("flag_size")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&size| size > 0)
            .unwrap_or(defaults.flag_size);

        let widget = WidgetConfig {
            searchable: flag("searchable", defaults.searchable),
            show_flag: flag("show_flag", defaults.show_flag),
            show_dial_code: flag("show_dial_code", defaults.show_dial_code),
            use_flag_images: flag("use_flag_images", defaults.use_flag_images),
            flag_size,
            default_country: config
                .get("default_country")
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.default_country),
            preferred_countries: config
                .get("preferred_countries")
                .map(|s| split_codes(s).collect())
                .unwrap_or_default(),
            exclude_countries: config
                .get("exclude_countries")
                .map(|s| split_codes(s).collect::<BTreeSet<_>>())
                .unwrap_or_default(),
            disabled: flag("disabled", defaults.disabled),
            placeholder: config.get("placeholder").cloned().unwrap_or(defaults.placeholder),
            input_attributes: prefixed(config, INPUT_ATTR_PREFIX),
            dropdown_attributes: prefixed(config, DROPDOWN_ATTR_PREFIX),
        };

        Self {
            widget,
            country: config
                .get("country")
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty()),
            number: config.get("number").cloned().unwrap_or_default(),
            theme: config.get("theme").cloned(),
            theme_file: config.get("theme_file").map(|p| expand_tilde(p)),
            catalog_file: config.get("catalog_file").map(|p| expand_tilde(p)),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(FlagdialError::Config(format!("{key}: expected true or false, got {other:?}"))),
    }
}

fn split_codes(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
}

fn prefixed(config: &BTreeMap<String, String>, prefix: &str) -> BTreeMap<String, String> {
    config
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .filter(|name| !name.is_empty())
                .map(|name| (name.to_string(), value.clone()))
        })
        .collect()
}

/// Resolves the theme: `theme_file`, then `theme`, then the default.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

/// Resolves the country dataset: `catalog_file` when it loads, else the bundled one.
#[must_use]
pub fn load_catalog(config: &Config) -> StaticCatalog {
    config
        .catalog_file
        .as_ref()
        .and_then(|path| {
            StaticCatalog::from_file(path)
                .map_err(|e| {
                    tracing::debug!(catalog_file = %path, error = %e, "failed to load catalog, using bundled dataset");
                })
                .ok()
        })
        .unwrap_or_else(StaticCatalog::bundled)
}

/// Builds the plugin state: catalog, theme and a phone widget subscribed to `bus`.
///
/// A `country` the catalog does not know is ignored, leaving the default
/// country in place.
#[must_use]
pub fn initialize(config: &Config, bus: &PointerBus) -> AppState {
    tracing::debug!("initializing flagdial plugin");

    let catalog: Rc<dyn Catalog> = Rc::new(load_catalog(config));
    let external = config.country.as_deref().and_then(|code| {
        let found = catalog.lookup(code).cloned();
        if found.is_none() {
            tracing::debug!(code = code, "configured country not in catalog");
        }
        found
    });

    let mut widget = PhoneWidget::new(config.widget.clone(), catalog, &config.number, bus);
    if external.is_some() {
        widget.set_value(external.as_ref());
    }

    AppState::new(widget, load_theme(config), FlagRenderer::default())
}
