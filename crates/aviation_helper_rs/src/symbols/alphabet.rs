//! ICAO spelling alphabet and spoken digits.

use std::{collections::HashMap, sync::LazyLock};

pub const ICAO_LETTERS: [(char, &str); 26] = [
    ('A', "alfa"),
    ('B', "bravo"),
    ('C', "charlie"),
    ('D', "delta"),
    ('E', "echo"),
    ('F', "foxtrot"),
    ('G', "golf"),
    ('H', "hotel"),
    ('I', "india"),
    ('J', "juliett"),
    ('K', "kilo"),
    ('L', "lima"),
    ('M', "mike"),
    ('N', "november"),
    ('O', "oscar"),
    ('P', "papa"),
    ('Q', "quebec"),
    ('R', "romeo"),
    ('S', "sierra"),
    ('T', "tango"),
    ('U', "uniform"),
    ('V', "victor"),
    ('W', "whiskey"),
    ('X', "x-ray"),
    ('Y', "yankee"),
    ('Z', "zulu"),
];

pub const DIGITS: [(char, &str); 10] = [
    ('0', "zero"),
    ('1', "one"),
    ('2', "two"),
    ('3', "three"),
    ('4', "four"),
    ('5', "five"),
    ('6', "six"),
    ('7', "seven"),
    ('8', "eight"),
    ('9', "nine"),
];

static SPOKEN_SYMBOLS: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| ICAO_LETTERS.iter().chain(DIGITS.iter()).copied().collect());

/// Spoken word for an uppercase letter or a digit.
pub fn spoken_word(symbol: char) -> Option<&'static str> {
    SPOKEN_SYMBOLS.get(&symbol).copied()
}

/// True for words that spell out a single letter or digit.
pub fn is_spelling_word(word: &str) -> bool {
    SPOKEN_SYMBOLS.values().any(|spoken| *spoken == word)
}
