use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    fmt,
    io::BufRead,
};

use log::{debug, warn};

use crate::{errors::Error, symbols::alphabet::is_spelling_word};
#[cfg(feature = "fs")]
use std::{fs::File, io::BufReader, path::Path};

#[cfg(feature = "fs")]
pub const DEFAULT_AIRLINE_TABLE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/known-strings/callsign_table.tsv"
);

const HEADER_FIELD: &str = "ICAO";

/// Header row written in front of re-rendered tables.
pub const TABLE_HEADER: &str = "ICAO\tAirline\tCallsign\tCountry";

/// One row of the tab-separated airline table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirlineEntry {
    pub icao: String,
    pub name: String,
    pub callword: String,
    pub country: Option<String>,
}

impl AirlineEntry {
    /// Parses `ICAO\tName\tCallWord[\tCountry]`. Returns `None` for rows with
    /// fewer than three fields.
    pub fn parse_row(line: &str) -> Option<Self> {
        let mut fields = line.trim_end().split('\t');
        let (Some(icao), Some(name), Some(callword)) = (fields.next(), fields.next(), fields.next())
        else {
            return None;
        };
        let country = fields.next().map(str::to_owned).filter(|c| !c.is_empty());
        Some(Self {
            icao: icao.trim().to_ascii_uppercase(),
            name: name.to_owned(),
            callword: callword.to_owned(),
            country,
        })
    }

    pub fn normalized_callword(&self) -> String {
        normalize_callword(&self.callword)
    }
}

/// Renders the entry as a table row, without line terminator.
impl fmt::Display for AirlineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.icao,
            self.name,
            self.callword,
            self.country.as_deref().unwrap_or_default()
        )
    }
}

/// Lower-cases a call-word and joins its parts with `_`, so that
/// "Bee-Line" becomes "bee_line" and "Czech Airlines" becomes "czech_airlines".
pub fn normalize_callword(callword: &str) -> String {
    callword
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Airline designators and the call-words spoken for them.
///
/// Several airlines may share a designator, so every ICAO code maps to a set of
/// call-words. The set is ordered, iteration always yields call-words sorted.
#[derive(Debug, Clone, Default)]
pub struct AirlineTable {
    entries: Vec<AirlineEntry>,
    callwords: HashMap<String, BTreeSet<String>>,
}

impl AirlineTable {
    pub fn load_airlines<R>(reader: R) -> Result<Self, Error>
    where
        R: BufRead,
    {
        let mut table = Self::default();
        for (index, line) in reader.lines().enumerate() {
            let line = line?.replace('\u{a0}', " ");
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.split('\t').next() == Some(HEADER_FIELD) {
                continue;
            }
            let Some(entry) = AirlineEntry::parse_row(&line) else {
                warn!(
                    "Skipping malformed airline table row {}: {:?}",
                    index + 1,
                    line.trim_end()
                );
                continue;
            };
            if entry.icao.is_empty() || entry.callword.trim().is_empty() {
                warn!(
                    "Skipping airline table row {} without code or call-word: {:?}",
                    index + 1,
                    line.trim_end()
                );
                continue;
            }
            table.insert(entry);
        }
        debug!(
            "Loaded {} airline rows for {} ICAO codes",
            table.entries.len(),
            table.callwords.len()
        );
        Ok(table)
    }

    #[cfg(feature = "fs")]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::load_airlines(BufReader::new(file))?;
        if table.is_empty() {
            return Err(Error::EmptyAirlineTable(path.to_path_buf()));
        }
        Ok(table)
    }

    #[cfg(feature = "fs")]
    pub fn load_default() -> Result<Self, Error> {
        Self::load_from_file(DEFAULT_AIRLINE_TABLE_PATH)
    }

    fn insert(&mut self, entry: AirlineEntry) {
        self.callwords
            .entry(entry.icao.clone())
            .or_default()
            .insert(entry.normalized_callword());
        self.entries.push(entry);
    }

    /// Call-words for an ICAO code, in sorted order.
    pub fn callwords(&self, icao: &str) -> Option<&BTreeSet<String>> {
        self.callwords.get(icao)
    }

    pub fn contains_code(&self, icao: &str) -> bool {
        self.callwords.contains_key(icao)
    }

    pub fn entries(&self) -> &[AirlineEntry] {
        &self.entries
    }

    /// Number of distinct ICAO codes.
    pub fn len(&self) -> usize {
        self.callwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callwords.is_empty()
    }

    /// Maps multi-word call-words to their single-token underscore form,
    /// e.g. "czech airlines" -> "czech_airlines".
    ///
    /// Call-words without a space, call-words containing a spelling-alphabet
    /// word or digit word, and blacklisted call-words are left out. The first
    /// row wins when a call-word repeats.
    pub fn underscore_mapping(&self, blacklist: &HashSet<String>) -> BTreeMap<String, String> {
        let mut mapping = BTreeMap::new();
        for entry in &self.entries {
            let callword = entry.callword.trim().to_lowercase();
            if !callword.contains(' ') || mapping.contains_key(&callword) {
                continue;
            }
            if callword.split_whitespace().any(is_spelling_word) {
                continue;
            }
            let underscored = normalize_callword(&callword);
            mapping.insert(callword, underscored);
        }
        mapping.retain(|callword, _| !blacklist.contains(callword));
        mapping
    }

    /// Table rows with call-word spellings made consistent.
    ///
    /// Call-words are compared with `_`, space and `-` removed. A row that
    /// repeats the call-word of an earlier row with the same ICAO code is
    /// dropped. For a different code the row is kept but takes over the
    /// spelling seen first, e.g. "Bee Line" after "Bee-Line".
    pub fn fold_callword_spellings(&self) -> Vec<AirlineEntry> {
        let mut first_seen: HashMap<String, &AirlineEntry> = HashMap::new();
        let mut folded = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let key: String = entry
                .callword
                .chars()
                .filter(|c| !matches!(c, '_' | ' ' | '-'))
                .collect();
            let Some(&first) = first_seen.get(&key) else {
                first_seen.insert(key, entry);
                folded.push(entry.clone());
                continue;
            };
            if first.icao == entry.icao {
                warn!(
                    "Dropping duplicate call-word {:?} of {}, first seen as {:?}",
                    entry.callword, entry.icao, first.callword
                );
                continue;
            }
            if first.callword != entry.callword {
                warn!(
                    "Replacing call-word {:?} of {} with {:?}",
                    entry.callword, entry.icao, first.callword
                );
            }
            folded.push(AirlineEntry {
                callword: first.callword.clone(),
                ..entry.clone()
            });
        }
        folded
    }
}

impl FromIterator<AirlineEntry> for AirlineTable {
    fn from_iter<T: IntoIterator<Item = AirlineEntry>>(iter: T) -> Self {
        let mut table = Self::default();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

/// Parses a call-word blacklist: one entry per line, `#` starts a comment.
pub fn parse_blacklist(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .filter_map(|line| {
            let entry = line.split('#').next()?.trim();
            (!entry.is_empty()).then(|| entry.to_lowercase())
        })
        .collect()
}
