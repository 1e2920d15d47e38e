//! Candidate list filtering and ordering.
//!
//! [`compute_visible_list`] turns the catalog, the current search term and the
//! configured exclusion/preference sets into the ordered list the dropdown shows.
//! It is a pure function: no shared state, safe to call on every keystroke.
//!
//! # Filtering
//!
//! A record is kept when its code is not excluded and the term is empty or is a
//! substring of:
//! - the name, compared case-insensitively
//! - the dial code, compared verbatim (`"44"` matches `"+44"`)
//! - the code, compared case-insensitively
//!
//! # Ordering
//!
//! Preferred records come strictly before the rest. Inside each partition records
//! are ordered by [`compare_names`]. The sort is stable, so records whose names
//! compare equal keep their catalog order.

use crate::domain::CountryRecord;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Result of a filter pass.
///
/// An empty result is its own state so the dropdown can render a terminal
/// "no results" row instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibleList {
    /// At least one record passed the filter, in display order.
    Matches(Vec<CountryRecord>),
    /// Nothing passed the filter.
    NoResults,
}

impl VisibleList {
    /// Records in display order; empty for [`VisibleList::NoResults`].
    #[must_use]
    pub fn records(&self) -> &[CountryRecord] {
        match self {
            Self::Matches(records) => records,
            Self::NoResults => &[],
        }
    }

    /// Number of visible records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Returns `true` for [`VisibleList::NoResults`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoResults)
    }

    /// Record at `index` in display order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CountryRecord> {
        self.records().get(index)
    }

    /// Finds a visible record by code.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&CountryRecord> {
        self.records().iter().find(|c| c.code == code)
    }

    /// Codes in display order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.records().iter().map(|c| c.code.as_str()).collect()
    }
}

/// Filters and orders `records` for display.
///
/// `records` is the catalog content, normally [`Catalog::all`](crate::domain::Catalog::all).
///
/// # Example
///
/// ```
/// use flagdial::app::filter::compute_visible_list;
/// use flagdial::CountryRecord;
/// use std::collections::BTreeSet;
///
/// let catalog = vec![
///     CountryRecord::new("United States", "US", "+1", "🇺🇸"),
///     CountryRecord::new("United Kingdom", "GB", "+44", "🇬🇧"),
///     CountryRecord::new("Germany", "DE", "+49", "🇩🇪"),
/// ];
/// let exclude = BTreeSet::from(["DE".to_string()]);
/// let preferred = vec!["GB".to_string()];
///
/// let visible = compute_visible_list(&catalog, "", &exclude, &preferred);
/// assert_eq!(visible.codes(), ["GB", "US"]);
/// ```
#[must_use]
pub fn compute_visible_list(
    records: &[CountryRecord],
    search_term: &str,
    exclude_countries: &BTreeSet<String>,
    preferred_countries: &[String],
) -> VisibleList {
    let _span = tracing::debug_span!(
        "compute_visible_list",
        catalog_size = records.len(),
        term_len = search_term.len(),
        excluded = exclude_countries.len(),
        preferred = preferred_countries.len()
    )
    .entered();

    let term_lower = search_term.to_lowercase();

    let mut visible: Vec<CountryRecord> = records
        .iter()
        .filter(|record| !exclude_countries.contains(&record.code))
        .filter(|record| matches_lowered(record, search_term, &term_lower))
        .cloned()
        .collect();

    let is_preferred = |code: &str| preferred_countries.iter().any(|p| p == code);

    visible.sort_by(|a, b| {
        match (is_preferred(&a.code), is_preferred(&b.code)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => compare_names(&a.name, &b.name),
        }
    });

    tracing::debug!(result_count = visible.len(), "visible list computed");

    if visible.is_empty() {
        VisibleList::NoResults
    } else {
        VisibleList::Matches(visible)
    }
}

/// Search predicate for a single record, exclusions aside.
///
/// ```
/// use flagdial::app::filter::matches_search;
/// use flagdial::CountryRecord;
///
/// let gb = CountryRecord::new("United Kingdom", "GB", "+44", "🇬🇧");
/// assert!(matches_search(&gb, "kingdom"));
/// assert!(matches_search(&gb, "44"));
/// assert!(matches_search(&gb, "gb"));
/// assert!(!matches_search(&gb, "49"));
/// ```
#[must_use]
pub fn matches_search(record: &CountryRecord, search_term: &str) -> bool {
    matches_lowered(record, search_term, &search_term.to_lowercase())
}

fn matches_lowered(record: &CountryRecord, term: &str, term_lower: &str) -> bool {
    term.is_empty()
        || record.name.to_lowercase().contains(term_lower)
        || record.dial_code.contains(term)
        || record.code.to_lowercase().contains(term_lower)
}

/// Locale-aware ascending comparison of display names.
///
/// Names are first compared on their transliterated, lowercased form, so that
/// `"Åland Islands"` sorts with the A's and `"Côte d'Ivoire"` after `"Colombia"`.
/// Names equal on that key are ordered case-insensitively, then by their raw
/// text, so only identical names compare `Equal`.
///
/// ```
/// use flagdial::app::filter::compare_names;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_names("Åland Islands", "Albania"), Ordering::Less);
/// assert_eq!(compare_names("Côte d'Ivoire", "Colombia"), Ordering::Greater);
/// assert_eq!(compare_names("Chile", "Chile"), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    deunicode::deunicode(name).to_lowercase()
}

/// Character ranges of the first case-insensitive occurrence of `term` in `name`.
///
/// Ranges are `(start, end)` character indices with an exclusive end, ready for
/// [`render_highlighted_text`](crate::ui::helpers::render_highlighted_text).
/// Returns no range when the term is empty, absent, or when lowercasing changes
/// the character count of `name`.
#[must_use]
pub fn match_ranges(name: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return vec![];
    }

    let name_lower = name.to_lowercase();
    if name_lower.chars().count() != name.chars().count() {
        return vec![];
    }

    name_lower
        .find(&term.to_lowercase())
        .map_or_else(Vec::new, |byte_start| {
            let start = name_lower[..byte_start].chars().count();
            let len = term.to_lowercase().chars().count();
            vec![(start, start + len)]
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CountryRecord> {
        vec![
            CountryRecord::new("United States", "US", "+1", "🇺🇸"),
            CountryRecord::new("United Kingdom", "GB", "+44", "🇬🇧"),
            CountryRecord::new("Germany", "DE", "+49", "🇩🇪"),
        ]
    }

    fn none() -> BTreeSet<String> {
        BTreeSet::new()
    }

    #[test]
    fn excluded_and_preferred() {
        let exclude = BTreeSet::from(["DE".to_string()]);
        let visible = compute_visible_list(&sample(), "", &exclude, &["GB".to_string()]);
        assert_eq!(visible.codes(), ["GB", "US"]);
    }

    #[test]
    fn empty_term_sorts_by_name() {
        let visible = compute_visible_list(&sample(), "", &none(), &[]);
        assert_eq!(visible.codes(), ["DE", "GB", "US"]);
    }

    #[test]
    fn dial_code_substring() {
        let visible = compute_visible_list(&sample(), "44", &none(), &[]);
        assert_eq!(visible.codes(), ["GB"]);
    }

    #[test]
    fn name_and_code_are_case_insensitive() {
        assert_eq!(compute_visible_list(&sample(), "GERM", &none(), &[]).codes(), ["DE"]);
        assert_eq!(compute_visible_list(&sample(), "us", &none(), &[]).codes(), ["US"]);
        assert_eq!(
            compute_visible_list(&sample(), "united", &none(), &[]).codes(),
            ["GB", "US"]
        );
    }

    #[test]
    fn dial_code_match_keeps_plus_sign() {
        assert_eq!(compute_visible_list(&sample(), "+4", &none(), &[]).codes(), ["DE", "GB"]);
        assert_eq!(compute_visible_list(&sample(), "+1", &none(), &[]).codes(), ["US"]);
    }

    #[test]
    fn no_results_is_distinct() {
        let visible = compute_visible_list(&sample(), "zzz", &none(), &[]);
        assert_eq!(visible, VisibleList::NoResults);
        assert!(visible.is_empty());
        assert!(visible.records().is_empty());
    }

    #[test]
    fn everything_excluded_is_no_results() {
        let exclude: BTreeSet<String> = ["US", "GB", "DE"].iter().map(ToString::to_string).collect();
        assert!(compute_visible_list(&sample(), "", &exclude, &[]).is_empty());
    }

    #[test]
    fn preferred_partition_is_sorted_by_name() {
        let preferred = vec!["US".to_string(), "DE".to_string()];
        let visible = compute_visible_list(&sample(), "", &none(), &preferred);
        assert_eq!(visible.codes(), ["DE", "US", "GB"]);
    }

    #[test]
    fn equal_names_keep_catalog_order() {
        let records = vec![
            CountryRecord::new("Georgia", "GE", "+995", ""),
            CountryRecord::new("Albania", "AL", "+355", ""),
            CountryRecord::new("Georgia", "US-GA", "+1", ""),
        ];
        let visible = compute_visible_list(&records, "", &none(), &[]);
        assert_eq!(visible.codes(), ["AL", "GE", "US-GA"]);

        let reversed: Vec<CountryRecord> = records.into_iter().rev().collect();
        let visible = compute_visible_list(&reversed, "", &none(), &[]);
        assert_eq!(visible.codes(), ["AL", "US-GA", "GE"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let records = vec![
            CountryRecord::new("Côte d'Ivoire", "CI", "+225", ""),
            CountryRecord::new("Croatia", "HR", "+385", ""),
            CountryRecord::new("Colombia", "CO", "+57", ""),
            CountryRecord::new("Åland Islands", "AX", "+358", ""),
            CountryRecord::new("Austria", "AT", "+43", ""),
        ];
        let visible = compute_visible_list(&records, "", &none(), &[]);
        assert_eq!(visible.codes(), ["AX", "AT", "CO", "CI", "HR"]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = compute_visible_list(&sample(), "un", &none(), &["US".to_string()]);
        let second = compute_visible_list(&sample(), "un", &none(), &["US".to_string()]);
        assert_eq!(first, second);
    }

    #[test]
    fn highlight_ranges_use_char_indices() {
        assert_eq!(match_ranges("United Kingdom", "king"), vec![(7, 11)]);
        assert_eq!(match_ranges("Åland Islands", "land"), vec![(1, 5)]);
        assert!(match_ranges("Germany", "").is_empty());
        assert!(match_ranges("Germany", "44").is_empty());
    }
}
