//! "double"/"triple" phrasing of repeated words.
//!
//! `seven seven seven` is often said as "triple seven", `zero zero` as
//! "double zero" or "double o". Every collapsed variant also comes in a
//! shortened form that drops the words before the run.

use crate::word_sequence::WordSequence;

const ZERO: &str = "zero";
const ZERO_HOMOPHONE: &str = "o";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    Double,
    Triple,
}

impl Repetition {
    pub fn run_len(self) -> usize {
        match self {
            Repetition::Double => 2,
            Repetition::Triple => 3,
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            Repetition::Double => "double",
            Repetition::Triple => "triple",
        }
    }
}

/// Rewrites runs of identical adjacent words into "double X" / "triple X".
///
/// Triple variants are emitted first, at the word where a run reaches three
/// words. Double variants follow, only for runs of exactly two words. A longer
/// run collapses its first three words and keeps the rest, it never yields a
/// double. The result is not deduplicated.
pub fn rewrite_special(words: &[String]) -> Vec<WordSequence> {
    let run_lengths = run_lengths(words);
    let mut variants = Vec::new();

    for (end, _) in run_lengths.iter().enumerate().filter(|(_, len)| **len == 3) {
        push_collapsed(&mut variants, words, end, Repetition::Triple);
    }

    for (end, _) in run_lengths.iter().enumerate().filter(|(_, len)| **len == 2) {
        if words.get(end + 1) != Some(&words[end]) {
            push_collapsed(&mut variants, words, end, Repetition::Double);
        }
    }

    variants
}

/// For every position, the number of identical words ending there.
fn run_lengths(words: &[String]) -> Vec<usize> {
    let mut lengths: Vec<usize> = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let len = match i.checked_sub(1) {
            Some(prev) if words[prev] == *word => lengths[prev] + 1,
            _ => 1,
        };
        lengths.push(len);
    }
    lengths
}

fn push_collapsed(
    variants: &mut Vec<WordSequence>,
    words: &[String],
    end: usize,
    repetition: Repetition,
) {
    let word = words[end].as_str();
    let head = &words[..end + 1 - repetition.run_len()];
    let rest = &words[end + 1..];

    variants.push(collapse(head, repetition, word, rest));
    if word == ZERO {
        variants.push(collapse(head, repetition, ZERO_HOMOPHONE, rest));
    }
    variants.push(collapse(&[], repetition, word, rest));
}

fn collapse(head: &[String], repetition: Repetition, word: &str, rest: &[String]) -> WordSequence {
    head.iter()
        .map(String::as_str)
        .chain([repetition.word(), word])
        .chain(rest.iter().map(String::as_str))
        .collect()
}
