use aviation_helper_rs::{AirlineTable, symbols::national_prefixes::is_national_prefix};

/// Callsigns up to this many characters are spelled even without a known prefix.
pub const GENERIC_SHORT_MAX_LEN: usize = 5;

/// Expansion strategy picked from the first characters of a callsign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallsignClass {
    /// Starts with an ICAO airline designator, e.g. `CSA123AB`.
    AirlineCoded,
    /// Starts with a two-letter registration prefix, e.g. `OKA2730`.
    NationalTwoChar,
    /// Starts with a one-letter registration prefix, e.g. `N1003F`.
    NationalOneChar,
    /// Short callsign without a known prefix.
    GenericShort,
    Unrecognized,
}

impl CallsignClass {
    /// Number of spelled words forming the national prefix.
    pub fn national_prefix_len(self) -> Option<usize> {
        match self {
            CallsignClass::NationalTwoChar => Some(2),
            CallsignClass::NationalOneChar => Some(1),
            _ => None,
        }
    }
}

/// Classifies an upper-case callsign. The first matching rule wins: airline
/// designator, two-char national prefix, one-char national prefix, short
/// callsign.
pub fn classify(callsign: &str, airlines: &AirlineTable) -> CallsignClass {
    if airlines.contains_code(char_prefix(callsign, 3)) {
        CallsignClass::AirlineCoded
    } else if is_national_prefix(char_prefix(callsign, 2)) {
        CallsignClass::NationalTwoChar
    } else if is_national_prefix(char_prefix(callsign, 1)) {
        CallsignClass::NationalOneChar
    } else if callsign.chars().count() <= GENERIC_SHORT_MAX_LEN {
        CallsignClass::GenericShort
    } else {
        CallsignClass::Unrecognized
    }
}

/// The first `n` characters, or the whole string if it is shorter.
pub(crate) fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use aviation_helper_rs::AirlineTable;

    use super::*;

    fn airlines() -> AirlineTable {
        AirlineTable::load_airlines(
            "CSA\tCzech Airlines\tCzech Airlines\nOKA\tOkay Airways\tOkayjet\n".as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_airline_coded() {
        let airlines = airlines();
        assert_eq!(classify("CSA123AB", &airlines), CallsignClass::AirlineCoded);
        // designator wins over the national prefix "OK"
        assert_eq!(classify("OKA2730", &airlines), CallsignClass::AirlineCoded);
    }

    #[test]
    fn test_national_prefixes() {
        let airlines = AirlineTable::default();
        assert_eq!(classify("OKA2730", &airlines), CallsignClass::NationalTwoChar);
        assert_eq!(classify("LUF79", &airlines), CallsignClass::NationalTwoChar);
        assert_eq!(classify("N1003F", &airlines), CallsignClass::NationalOneChar);
        // "DL" is not a prefix, "D" is
        assert_eq!(classify("DLH4TX", &airlines), CallsignClass::NationalOneChar);
    }

    #[test]
    fn test_generic_and_unrecognized() {
        let airlines = airlines();
        assert_eq!(classify("ABC11", &airlines), CallsignClass::GenericShort);
        assert_eq!(classify("ZZZZZZZZ", &airlines), CallsignClass::Unrecognized);
        assert_eq!(classify("ABC123", &airlines), CallsignClass::Unrecognized);
    }

    #[test]
    fn test_prefix_len() {
        assert_eq!(CallsignClass::NationalTwoChar.national_prefix_len(), Some(2));
        assert_eq!(CallsignClass::NationalOneChar.national_prefix_len(), Some(1));
        assert_eq!(CallsignClass::AirlineCoded.national_prefix_len(), None);
    }

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("CSA123", 3), "CSA");
        assert_eq!(char_prefix("CS", 3), "CS");
        assert_eq!(char_prefix("", 2), "");
        assert_eq!(char_prefix("ÄBC", 1), "Ä");
    }
}
