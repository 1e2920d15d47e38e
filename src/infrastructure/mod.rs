//! Infrastructure: host environment and pointer plumbing.
//!
//! - [`paths`]: Locations inside the Zellij plugin sandbox, where the host
//!   filesystem is mounted under `/host`
//! - [`pointer`]: Scoped outside-interaction listeners

pub mod paths;
pub mod pointer;

pub use paths::{expand_tilde, get_data_dir};
pub use pointer::{ListenerId, Point, PointerBus, PointerSubscription, Rect};
