use std::{fmt::Display, ops::Deref};

/// Separator of the identity key, words never contain it.
const KEY_SEPARATOR: &str = ",";

/// One spoken rendering of a callsign, an ordered list of lower-case words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordSequence(Vec<String>);

impl WordSequence {
    pub fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    /// Concatenates word slices into a new sequence.
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a [String]>) -> Self {
        parts.into_iter().flatten().cloned().collect()
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn into_words(self) -> Vec<String> {
        self.0
    }

    /// Identity used for deduplication: the words joined by a comma.
    pub fn key(&self) -> String {
        self.0.join(KEY_SEPARATOR)
    }

    /// The first `n` words, or all of them if there are fewer.
    pub fn head(&self, n: usize) -> &[String] {
        &self.0[..n.min(self.0.len())]
    }

    /// The last `n` words, or all of them if there are fewer.
    pub fn tail(&self, n: usize) -> &[String] {
        &self.0[self.0.len().saturating_sub(n)..]
    }

    /// Everything after the first `n` words.
    pub fn skip(&self, n: usize) -> &[String] {
        &self.0[n.min(self.0.len())..]
    }
}

impl Deref for WordSequence {
    type Target = [String];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for WordSequence {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl<S: Into<String>> FromIterator<S> for WordSequence {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<const N: usize> PartialEq<[&str; N]> for WordSequence {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl Display for WordSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
