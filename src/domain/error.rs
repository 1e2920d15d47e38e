//! Error types for the flagdial crate.
//!
//! This module defines the centralized error type [`FlagdialError`] and a type alias
//! [`Result`] for the fallible parts of the crate. Widget event handling never fails;
//! errors only arise while loading datasets, themes and configuration, and while
//! resolving flag images (where they are absorbed by the fallback glyph).

use thiserror::Error;

/// The main error type for flagdial operations.
///
/// # Examples
///
/// ```
/// use flagdial::FlagdialError;
///
/// fn load() -> Result<(), FlagdialError> {
///     Err(FlagdialError::Catalog("duplicate country code: US".to_string()))
/// }
///
/// assert!(load().unwrap_err().to_string().contains("duplicate"));
/// ```
#[derive(Debug, Error)]
pub enum FlagdialError {
    /// The country dataset could not be parsed or is inconsistent.
    ///
    /// Raised for malformed TOML, duplicate codes, or records whose dial code
    /// does not start with `+`.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A flag image could not be resolved.
    ///
    /// Never escapes [`crate::ui::flag::FlagRenderer`], which falls back to the
    /// emoji glyph instead.
    #[error("Flag image error: {0}")]
    FlagImage(String),
}

/// A specialized `Result` type for flagdial operations.
pub type Result<T> = std::result::Result<T, FlagdialError>;
