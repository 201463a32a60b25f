//! Expansion rules per callsign class.
//!
//! Every rule produces a [`Variant`] tagged with the [`VariantOrigin`] that
//! names it. Output keeps generation order and may contain duplicates, the
//! expander removes those.

use std::slice;

use aviation_helper_rs::AirlineTable;
use log::{trace, warn};
use strum::{AsRefStr, Display};

use crate::{
    classifier::{CallsignClass, char_prefix, classify},
    errors::Error,
    level::ExpansionLevel,
    literal::rewrite_by_words,
    repetition::rewrite_special,
    word_sequence::WordSequence,
};

/// The rule a variant was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum VariantOrigin {
    /// Whole callsign spelled with the ICAO alphabet.
    Spelled,
    CallWordWhole,
    CallWordLastThree,
    CallWordLastTwo,
    CallWordRepetition,
    CallWordFirstTwoLastOne,
    CallWordFirstOneLastTwo,
    /// Flight number without the airline call-word.
    DesignatorDropped,
    /// Last three words only.
    LastThree,
    /// "double"/"triple" phrasing with the designator or national prefix dropped.
    RepetitionDesignatorDropped,
    PrefixLastThree,
    PrefixLastTwo,
    PrefixRepetition,
    FirstLetterLastThree,
    FirstLetterLastTwo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub words: WordSequence,
    pub origin: VariantOrigin,
}

impl Variant {
    pub fn new(origin: VariantOrigin, words: WordSequence) -> Self {
        Self { words, origin }
    }

    pub fn into_words(self) -> WordSequence {
        self.words
    }
}

struct Variants(Vec<Variant>);

impl Variants {
    /// Appends a variant, empty word sequences are dropped.
    fn push(&mut self, origin: VariantOrigin, parts: &[&[String]]) {
        let words = WordSequence::concat(parts.iter().copied());
        if words.is_empty() {
            return;
        }
        trace!("{origin}: {words}");
        self.0.push(Variant::new(origin, words));
    }
}

pub struct Generator<'a> {
    airlines: &'a AirlineTable,
    level: ExpansionLevel,
}

impl<'a> Generator<'a> {
    pub fn new(airlines: &'a AirlineTable, level: ExpansionLevel) -> Self {
        Self { airlines, level }
    }

    /// All variants of an upper-case callsign in generation order. An
    /// unrecognized callsign logs a warning and yields no variants.
    pub fn generate(&self, callsign: &str) -> Result<Vec<Variant>, Error> {
        let mut variants = Variants(Vec::new());
        match classify(callsign, self.airlines) {
            CallsignClass::AirlineCoded => self.expand_airline(callsign, &mut variants)?,
            CallsignClass::NationalTwoChar => self.expand_national(callsign, 2, &mut variants)?,
            CallsignClass::NationalOneChar => self.expand_national(callsign, 1, &mut variants)?,
            CallsignClass::GenericShort => self.expand_generic_short(callsign, &mut variants)?,
            CallsignClass::Unrecognized => {
                warn!("Unrecognized callsign {callsign}");
            }
        }
        Ok(variants.0)
    }

    fn expand_airline(&self, callsign: &str, variants: &mut Variants) -> Result<(), Error> {
        use VariantOrigin::*;

        let code = char_prefix(callsign, 3);
        let leftover = rewrite_by_words(&callsign[code.len()..])?;
        let leftover_special = rewrite_special(&leftover);
        let len = leftover.len();

        for callword in self.airlines.callwords(code).into_iter().flatten() {
            let callword = slice::from_ref(callword);

            if self.level.includes(ExpansionLevel::Standard) {
                variants.push(CallWordWhole, &[callword, leftover.words()]);
                if len > 3 {
                    variants.push(CallWordLastThree, &[callword, leftover.tail(3)]);
                }
                if len > 2 {
                    variants.push(CallWordLastTwo, &[callword, leftover.tail(2)]);
                }
            }

            if self.level.includes(ExpansionLevel::Special) {
                for special in &leftover_special {
                    variants.push(CallWordRepetition, &[callword, special.words()]);
                }
            }

            if self.level.includes(ExpansionLevel::Full) {
                if len > 3 {
                    variants.push(
                        CallWordFirstTwoLastOne,
                        &[callword, leftover.head(2), leftover.tail(1)],
                    );
                    variants.push(
                        CallWordFirstOneLastTwo,
                        &[callword, leftover.head(1), leftover.tail(2)],
                    );
                }
                variants.push(DesignatorDropped, &[leftover.words()]);
                if len > 3 {
                    variants.push(LastThree, &[leftover.tail(3)]);
                }
                for special in &leftover_special {
                    variants.push(RepetitionDesignatorDropped, &[special.words()]);
                }
            }
        }

        // the spelled callsign is always offered
        variants.push(Spelled, &[rewrite_by_words(callsign)?.words()]);
        Ok(())
    }

    fn expand_national(
        &self,
        callsign: &str,
        prefix_len: usize,
        variants: &mut Variants,
    ) -> Result<(), Error> {
        use VariantOrigin::*;

        let arr = rewrite_by_words(callsign)?;
        let prefix = arr.head(prefix_len);
        let len = arr.len();

        variants.push(Spelled, &[arr.words()]);
        if len > prefix_len + 3 {
            variants.push(PrefixLastThree, &[prefix, arr.tail(3)]);
        }
        if len > prefix_len + 2 {
            variants.push(PrefixLastTwo, &[prefix, arr.tail(2)]);
        }

        if !self.level.includes(ExpansionLevel::Special) {
            return Ok(());
        }
        let special = rewrite_special(arr.skip(prefix_len));
        for variant in &special {
            variants.push(PrefixRepetition, &[prefix, variant.words()]);
        }

        if self.level.includes(ExpansionLevel::Full) {
            if prefix_len == 2 {
                if len > prefix_len + 3 {
                    variants.push(FirstLetterLastThree, &[arr.head(1), arr.tail(3)]);
                    variants.push(LastThree, &[arr.tail(3)]);
                }
                if len > prefix_len + 2 {
                    variants.push(FirstLetterLastTwo, &[arr.head(1), arr.tail(2)]);
                }
            } else if len > prefix_len + 3 {
                variants.push(LastThree, &[arr.tail(3)]);
            }
            for variant in &special {
                variants.push(RepetitionDesignatorDropped, &[variant.words()]);
            }
        }
        Ok(())
    }

    fn expand_generic_short(&self, callsign: &str, variants: &mut Variants) -> Result<(), Error> {
        use VariantOrigin::*;

        let arr = rewrite_by_words(callsign)?;
        variants.push(Spelled, &[arr.words()]);

        if self.level.includes(ExpansionLevel::Special) {
            for variant in rewrite_special(arr.skip(1)) {
                variants.push(PrefixRepetition, &[arr.head(1), variant.words()]);
            }
        }

        if self.level.includes(ExpansionLevel::Full) && arr.len() > 3 {
            variants.push(LastThree, &[arr.tail(3)]);
        }
        Ok(())
    }
}
