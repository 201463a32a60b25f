//! Callsign Expansion Library
//!
//! Turns aviation callsigns such as `CSA123AB` into the word sequences a
//! controller or pilot may say for them ("czech_airlines one two three alfa
//! bravo", "czech_airlines alfa bravo", ...). The output feeds pronunciation
//! and language-model training data for ATC speech recognition.

pub mod classifier;
pub mod config;
pub mod errors;
pub mod expander;
pub mod generator;
pub mod level;
pub mod literal;
pub mod repetition;
pub mod word_sequence;

pub use classifier::CallsignClass;
pub use config::ExpanderConfig;
pub use errors::Error;
pub use expander::CallsignExpander;
pub use generator::{Generator, Variant, VariantOrigin};
pub use level::ExpansionLevel;
pub use literal::rewrite_by_words;
pub use repetition::rewrite_special;
pub use word_sequence::WordSequence;
