use std::{collections::HashSet, path::Path, sync::Arc};

use aviation_helper_rs::AirlineTable;
use log::debug;

use crate::{
    classifier::{CallsignClass, classify},
    config::ExpanderConfig,
    errors::Error,
    generator::{Generator, Variant},
    level::ExpansionLevel,
    word_sequence::WordSequence,
};

/// Expands callsigns into their spoken variants.
///
/// The airline table is loaded once and shared read-only, clones of the
/// expander are cheap and can be used from several threads.
#[derive(Debug, Clone)]
pub struct CallsignExpander {
    airlines: Arc<AirlineTable>,
    level: ExpansionLevel,
}

impl CallsignExpander {
    pub fn new(airline_table: impl AsRef<Path>, level: ExpansionLevel) -> Result<Self, Error> {
        let airlines = AirlineTable::load_from_file(airline_table)?;
        Ok(Self::with_table(Arc::new(airlines), level))
    }

    pub fn from_config(config: &ExpanderConfig) -> Result<Self, Error> {
        Self::new(&config.airline_table, config.level)
    }

    pub fn with_table(airlines: Arc<AirlineTable>, level: ExpansionLevel) -> Self {
        Self { airlines, level }
    }

    /// Same table, different expansion level.
    pub fn with_level(&self, level: ExpansionLevel) -> Self {
        Self::with_table(Arc::clone(&self.airlines), level)
    }

    pub fn level(&self) -> ExpansionLevel {
        self.level
    }

    pub fn airlines(&self) -> &AirlineTable {
        &self.airlines
    }

    pub fn classify(&self, callsign: &str) -> CallsignClass {
        classify(&normalize(callsign), &self.airlines)
    }

    /// Unique variants of `callsign` in generation order, `None` when the
    /// callsign cannot be expanded. Fails on characters that cannot be spelled.
    pub fn expand(&self, callsign: &str) -> Result<Option<Vec<WordSequence>>, Error> {
        self.expand_with_level(callsign, self.level)
    }

    pub fn expand_with_level(
        &self,
        callsign: &str,
        level: ExpansionLevel,
    ) -> Result<Option<Vec<WordSequence>>, Error> {
        let variants = self.expand_annotated_with_level(callsign, level)?;
        Ok(variants.map(|variants| variants.into_iter().map(Variant::into_words).collect()))
    }

    /// Like [`CallsignExpander::expand`], keeping the rule behind each variant.
    pub fn expand_annotated(&self, callsign: &str) -> Result<Option<Vec<Variant>>, Error> {
        self.expand_annotated_with_level(callsign, self.level)
    }

    pub fn expand_annotated_with_level(
        &self,
        callsign: &str,
        level: ExpansionLevel,
    ) -> Result<Option<Vec<Variant>>, Error> {
        let callsign = normalize(callsign);
        if callsign.is_empty() {
            debug!("Skipping empty callsign");
            return Ok(None);
        }
        let variants = Generator::new(&self.airlines, level).generate(&callsign)?;
        let variants = dedup_variants(variants);
        debug!("{callsign}: {} variants at level {level}", variants.len());
        Ok((!variants.is_empty()).then_some(variants))
    }
}

/// Drops variants whose words were already produced, keeping the first.
pub fn dedup_variants(variants: Vec<Variant>) -> Vec<Variant> {
    let mut already_have = HashSet::new();
    variants
        .into_iter()
        .filter(|variant| already_have.insert(variant.words.key()))
        .collect()
}

/// Only ASCII letters are upper-cased, anything else is left for the literal
/// rewriter to reject.
fn normalize(callsign: &str) -> String {
    callsign.trim().to_ascii_uppercase()
}
