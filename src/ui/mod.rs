//! Terminal rendering of the phone widget.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//!                                     └──────→ Layout → hit testing
//! ```
//!
//! # Modules
//!
//! - [`flag`]: Flag elements with image-to-emoji fallback
//! - [`viewmodel`]: Display-ready view types and the screen layout
//! - [`renderer`]: Rendering entry point
//! - [`components`]: Per-element renderers
//! - [`helpers`]: Cursor placement, width-aware padding, match highlighting
//! - [`theme`]: Color palettes and ANSI escapes

pub mod components;
pub mod flag;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use flag::{FlagElement, FlagRenderer};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{Hit, Layout, UIViewModel};
