//! CMU pronouncing dictionary

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictError {
    #[error("cannot read dictionary {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: entry `{word}` has no phones")]
    MissingPhones { line: usize, word: String },
}

pub type Result<T> = std::result::Result<T, DictError>;

/// Environment variable overriding the dictionary location
pub const DICT_ENV: &str = "VERSE_CMUDICT";

/// One ARPAbet symbol, e.g. `AE1` or `T`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(symbol: &str) -> Self {
        Self(symbol.to_string())
    }

    /// Vowel phones carry a stress digit (0, 1 or 2)
    pub fn is_vowel(&self) -> bool {
        self.0.bytes().any(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single pronunciation of a word
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pronunciation(Vec<Phone>);

impl Pronunciation {
    pub fn new(phones: Vec<Phone>) -> Self {
        Self(phones)
    }

    pub fn phones(&self) -> &[Phone] {
        &self.0
    }

    /// Number of vowel nuclei
    pub fn syllables(&self) -> usize {
        self.0.iter().filter(|p| p.is_vowel()).count()
    }

    /// Pronunciation without a leading consonant.
    ///
    /// Vowel-initial pronunciations come back whole.
    pub fn rhyme_tail(&self) -> &[Phone] {
        match self.0.first() {
            Some(first) if !first.is_vowel() => &self.0[1..],
            _ => &self.0,
        }
    }
}

impl FromStr for Pronunciation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.split_whitespace().map(Phone::new).collect()))
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<&str> = self.0.iter().map(Phone::as_str).collect();
        f.write_str(&symbols.join(" "))
    }
}

/// Word -> pronunciations, keyed by lowercase word
#[derive(Debug, Clone, Default)]
pub struct PronouncingDictionary {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl PronouncingDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary file from disk, gzipped or not
    pub fn load(path: &Path) -> Result<Self> {
        let reader = crate::stream::open_file(path).map_err(|source| DictError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::parse(reader)?;
        tracing::info!(
            path = %path.display(),
            words = dict.len(),
            "loaded pronouncing dictionary"
        );
        Ok(dict)
    }

    /// Parse any of the common CMU layouts:
    ///
    /// - `WORD  W ER1 D` with `;;;` comments (cmudict-0.7b)
    /// - `word(2) w er1 d # note` (cmudict.dict)
    /// - `word 2 W ER1 D` (NLTK corpus file)
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut dict = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = match line.find(" #") {
                Some(pos) => &line[..pos],
                None => line.as_str(),
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(head) = fields.next() else {
                continue;
            };
            let word = strip_variant(head).to_lowercase();

            let mut phones: Vec<Phone> = Vec::new();
            for (i, field) in fields.enumerate() {
                // NLTK numbers variants in the second column
                if i == 0 && field.bytes().all(|b| b.is_ascii_digit()) {
                    continue;
                }
                phones.push(Phone::new(&field.to_uppercase()));
            }

            if phones.is_empty() {
                return Err(DictError::MissingPhones {
                    line: index + 1,
                    word,
                });
            }

            dict.insert(&word, Pronunciation::new(phones));
        }

        Ok(dict)
    }

    /// Add a pronunciation, keeping earlier ones first
    pub fn insert(&mut self, word: &str, pronunciation: Pronunciation) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(pronunciation);
    }

    pub fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.pronunciations(word).is_some()
    }

    /// Fewest syllables over all pronunciations
    pub fn syllables(&self, word: &str) -> Option<usize> {
        self.pronunciations(word)?
            .iter()
            .map(Pronunciation::syllables)
            .min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dictionary location: `$VERSE_CMUDICT`, else the NLTK data directory
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(DICT_ENV) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nltk_data")
            .join("corpora")
            .join("cmudict")
            .join("cmudict")
    }
}

impl FromStr for PronouncingDictionary {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

/// `word(2)` -> `word`
fn strip_variant(head: &str) -> &str {
    match head.rfind('(') {
        Some(pos) if pos > 0 && head.ends_with(')') => &head[..pos],
        _ => head,
    }
}
