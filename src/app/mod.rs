//! Widget logic: filtering, selection, dropdown, phone composition and events.
//!
//! # Architecture
//!
//! ```text
//! host input → Event → handle_event → widget transitions → Vec<Action> → host
//!                                           │
//!                          filter ← dropdown ┴ selection ← phone composer
//! ```
//!
//! Everything here is synchronous and single-threaded. Each widget owns its
//! state exclusively; the catalog is shared read-only.
//!
//! # Modules
//!
//! - [`filter`]: Candidate filtering and ordering
//! - [`selection`]: Selected country and host reconciliation
//! - [`dropdown`]: Open/closed state machine with search term and cursor
//! - [`phone`]: Local part derivation and full number recomposition
//! - [`selector`]: The country selector widget
//! - [`widget`]: The composed phone widget
//! - [`handler`]: Event types and dispatch
//! - [`actions`]: Notifications and side effects for the host
//! - [`config`]: Construction-time options
//! - [`modes`]: Mode enums
//! - [`state`]: Terminal host state and view model computation

pub mod actions;
pub mod config;
pub mod dropdown;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod phone;
pub mod selection;
pub mod selector;
pub mod state;
pub mod widget;

pub use actions::Action;
pub use config::WidgetConfig;
pub use dropdown::DropdownMachine;
pub use filter::{compute_visible_list, VisibleList};
pub use handler::{handle_event, handle_selector_event, Event};
pub use modes::{DropdownMode, Toggle, WidgetFocus};
pub use phone::{derive_local_part, recompose, PhoneComposer};
pub use selection::SelectionController;
pub use selector::CountrySelector;
pub use state::{AppState, LastChange};
pub use widget::PhoneWidget;
