use aviation_helper_rs::symbols::alphabet::spoken_word;

use crate::{errors::Error, word_sequence::WordSequence};

/// Spells a string word by word: one ICAO alphabet or digit word per
/// character, spaces are skipped. Expects upper-case input.
pub fn rewrite_by_words(input: &str) -> Result<WordSequence, Error> {
    input
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| {
            spoken_word(c)
                .map(str::to_owned)
                .ok_or_else(|| Error::UnknownCharacter {
                    character: c,
                    input: input.to_owned(),
                })
        })
        .collect()
}
