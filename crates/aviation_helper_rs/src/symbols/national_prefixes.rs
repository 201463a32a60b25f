//! Aircraft registration prefixes that are spoken letter by letter.
//!
//! Only the prefixes matter for expansion, the country is informational.

use std::{collections::HashMap, sync::LazyLock};

pub const NATIONAL_PREFIXES: [(&str, &str); 25] = [
    ("OK", "Czechia"),
    ("SP", "Poland"),
    ("OE", "Austria"),
    ("OM", "Slovakia"),
    ("HB", "Switzerland"),
    ("D", "Germany"),
    ("OO", "Belgium"),
    ("PH", "Netherlands"),
    ("LU", "Luxembourg"),
    ("F", "France"),
    ("I", "Italy"),
    ("M", "Spain"),
    ("CR", "Portugal"),
    ("CS", "Portugal"),
    ("K", "UK"),
    ("GE", "UK"),
    ("EI", "Ireland"),
    ("EJ", "Ireland"),
    ("SA", "Sweden"),
    ("LN", "Norway"),
    ("OH", "Finland"),
    ("RA", "Russia"),
    ("RF", "Russia"),
    ("RR", "Russia"),
    ("N", "USA"),
];

static PREFIX_TO_COUNTRY: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NATIONAL_PREFIXES.into_iter().collect());

pub fn country_for_prefix(prefix: &str) -> Option<&'static str> {
    PREFIX_TO_COUNTRY.get(prefix).copied()
}

pub fn is_national_prefix(prefix: &str) -> bool {
    PREFIX_TO_COUNTRY.contains_key(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lookup() {
        assert_eq!(country_for_prefix("OK"), Some("Czechia"));
        assert_eq!(country_for_prefix("N"), Some("USA"));
        assert!(is_national_prefix("RR"));
        assert!(!is_national_prefix("O"));
        assert!(!is_national_prefix("ok"));
        assert!(!is_national_prefix(""));
    }

    #[test]
    fn test_prefixes_are_unique() {
        assert_eq!(PREFIX_TO_COUNTRY.len(), NATIONAL_PREFIXES.len());
    }
}
