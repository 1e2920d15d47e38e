//! Country catalog: the read-only lookup service behind every selector.
//!
//! The widget core consumes the catalog only through the [`Catalog`] trait:
//! `lookup(code)` and `all()`. [`StaticCatalog`] is the in-memory implementation,
//! loaded from a TOML dataset. A default dataset ships with the crate and is
//! embedded at compile time.
//!
//! # TOML Format
//!
//! ```toml
//! [[country]]
//! name = "United Kingdom"
//! code = "GB"
//! dial_code = "+44"
//! flag = "🇬🇧"
//! ```

use crate::domain::country::CountryRecord;
use crate::domain::error::{FlagdialError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Read contract of the country dataset.
///
/// Implementations must return records from `all()` in a stable order that does
/// not change for the lifetime of the process.
pub trait Catalog {
    /// Finds the record with exactly this code.
    fn lookup(&self, code: &str) -> Option<&CountryRecord>;

    /// Every record, in dataset order.
    fn all(&self) -> &[CountryRecord];
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "country", default)]
    countries: Vec<CountryRecord>,
}

/// In-memory catalog with a code index.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl StaticCatalog {
    /// Builds a catalog from records, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`FlagdialError::Catalog`] when two records share a code or a dial
    /// code does not start with `+`.
    pub fn new(records: Vec<CountryRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if !record.dial_code.starts_with('+') {
                return Err(FlagdialError::Catalog(format!(
                    "dial code for {} must start with '+': {:?}",
                    record.code, record.dial_code
                )));
            }
            if index.insert(record.code.clone(), position).is_some() {
                return Err(FlagdialError::Catalog(format!(
                    "duplicate country code: {}",
                    record.code
                )));
            }
        }

        tracing::debug!(country_count = records.len(), "catalog built");
        Ok(Self { records, index })
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`FlagdialError::Catalog`] on malformed TOML or inconsistent records.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(source)
            .map_err(|e| FlagdialError::Catalog(format!("failed to parse catalog TOML: {e}")))?;
        Self::new(file.countries)
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FlagdialError::Io`] when the file cannot be read, or
    /// [`FlagdialError::Catalog`] when its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The dataset bundled with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the embedded dataset fails to parse (should never occur).
    ///
    /// ```
    /// use flagdial::{Catalog, StaticCatalog};
    ///
    /// let catalog = StaticCatalog::bundled();
    /// assert_eq!(catalog.lookup("US").map(|c| c.dial_code.as_str()), Some("+1"));
    /// ```
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_toml_str(include_str!("../../data/countries.toml"))
            .expect("Bundled country dataset should always parse")
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, code: &str) -> Option<&CountryRecord> {
        self.index.get(code).and_then(|&i| self.records.get(i))
    }

    fn all(&self) -> &[CountryRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_dataset_is_consistent() {
        let catalog = StaticCatalog::bundled();
        assert!(catalog.len() > 40);
        let gb = catalog.lookup("GB").unwrap();
        assert_eq!(gb.name, "United Kingdom");
        assert_eq!(gb.dial_code, "+44");
        assert!(catalog.all().iter().all(|c| c.dial_code.starts_with('+')));
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = StaticCatalog::bundled();
        assert!(catalog.lookup("us").is_none());
        assert!(catalog.lookup("XX").is_none());
    }

    #[test]
    fn rejects_duplicate_codes() {
        let err = StaticCatalog::new(vec![
            CountryRecord::new("United States", "US", "+1", ""),
            CountryRecord::new("Also US", "US", "+1", ""),
        ])
        .unwrap_err();
        assert!(matches!(err, FlagdialError::Catalog(_)));
    }

    #[test]
    fn rejects_dial_code_without_plus() {
        let err = StaticCatalog::new(vec![CountryRecord::new("Germany", "DE", "49", "")]).unwrap_err();
        assert!(err.to_string().contains("must start with '+'"));
    }

    #[test]
    fn loads_from_file_preserving_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[country]]
name = "Germany"
code = "DE"
dial_code = "+49"
flag = "🇩🇪"

[[country]]
name = "Austria"
code = "AT"
dial_code = "+43"
format = "+43 ... ......"
"#
        )
        .unwrap();

        let catalog = StaticCatalog::from_file(file.path()).unwrap();
        let codes: Vec<&str> = catalog.all().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["DE", "AT"]);
        assert_eq!(catalog.lookup("AT").unwrap().flag, "");
        assert_eq!(catalog.lookup("AT").unwrap().format.as_deref(), Some("+43 ... ......"));
    }

    #[test]
    fn malformed_toml_is_a_catalog_error() {
        let err = StaticCatalog::from_toml_str("[[country]]\nname = 3").unwrap_err();
        assert!(matches!(err, FlagdialError::Catalog(_)));
    }
}
