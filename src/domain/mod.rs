//! Domain layer for flagdial.
//!
//! Holds the country record type, the catalog read contract and the crate's
//! error type. Nothing here knows about widgets, terminals or Zellij.
//!
//! # Organization
//!
//! - [`catalog`]: `Catalog` trait and the TOML-backed `StaticCatalog`
//! - [`country`]: `CountryRecord` value type
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use flagdial::domain::{Catalog, StaticCatalog};
//!
//! let catalog = StaticCatalog::bundled();
//! let gb = catalog.lookup("GB").expect("bundled dataset has GB");
//! assert_eq!(gb.dial_code, "+44");
//! ```

pub mod catalog;
pub mod country;
pub mod error;

pub use catalog::{Catalog, StaticCatalog};
pub use country::CountryRecord;
pub use error::{FlagdialError, Result};
