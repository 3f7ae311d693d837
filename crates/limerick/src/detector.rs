//! Limerick detection
//!
//! A limerick is an AABBA poem: the A lines rhyme with each other, the B lines
//! rhyme with each other, and not everything rhymes with everything. On top
//! of that:
//!
//! - no two A lines differ by more than two syllables,
//! - the B lines differ by no more than two syllables,
//! - each B line has fewer syllables than each A line,
//! - neither the A lines nor the B lines total fewer than 4 syllables.

use corpus::tokenize::{last_word, strip_punctuation, words};
use corpus::{DictError, Phone, PronouncingDictionary};
use std::path::Path;
use tracing::debug;

use crate::config::DetectorConfig;
use crate::guess::guess_syllables;
use crate::report::{LimerickAnalysis, LineReport, Rejection, Role};

/// True if one phone sequence ends the other. Empty sequences never match.
pub fn is_suffix(a: &[Phone], b: &[Phone]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a.len() >= b.len() {
        a.ends_with(b)
    } else {
        b.ends_with(a)
    }
}

/// Limerick detector backed by a pronouncing dictionary
pub struct LimerickDetector {
    dict: PronouncingDictionary,
    config: DetectorConfig,
}

impl LimerickDetector {
    pub fn new(dict: PronouncingDictionary) -> Self {
        Self {
            dict,
            config: DetectorConfig::default(),
        }
    }

    /// Load the dictionary from disk
    pub fn open(path: &Path) -> Result<Self, DictError> {
        Ok(Self::new(PronouncingDictionary::load(path)?))
    }

    pub fn with_config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dictionary(&self) -> &PronouncingDictionary {
        &self.dict
    }

    /// Syllables in a word; the shortest pronunciation wins.
    ///
    /// Unknown words count as 1 unless guessing is enabled.
    pub fn num_syllables(&self, word: &str) -> usize {
        match self.dict.syllables(word) {
            Some(n) => n,
            None if self.config.guess_syllables => guess_syllables(word),
            None => 1,
        }
    }

    /// Rhyme tails of every pronunciation of `word`
    fn suffixes(&self, word: &str) -> Vec<&[Phone]> {
        self.dict
            .pronunciations(word)
            .map(|prons| prons.iter().map(|p| p.rhyme_tail()).collect())
            .unwrap_or_default()
    }

    /// Two words rhyme if any pair of their pronunciations share a tail
    pub fn rhymes(&self, a: &str, b: &str) -> bool {
        let a_suffixes = self.suffixes(&a.to_lowercase());
        let b_suffixes = self.suffixes(&b.to_lowercase());

        a_suffixes
            .iter()
            .any(|sa| b_suffixes.iter().any(|sb| is_suffix(sa, sb)))
    }

    pub fn line_syllables(&self, line: &str) -> usize {
        words(line).map(|w| self.num_syllables(w)).sum()
    }

    /// Non-empty lines with roles assigned and punctuation removed
    fn segment(&self, text: &str) -> Vec<LineReport> {
        text.split('\n')
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(index, raw)| {
                let text = strip_punctuation(raw);
                let terminal = last_word(&text);
                LineReport {
                    role: Role::for_index(index),
                    terminal: terminal.map(str::to_string),
                    pronunciations: terminal
                        .and_then(|w| self.dict.pronunciations(w))
                        .map(<[_]>::to_vec)
                        .unwrap_or_default(),
                    syllables: self.line_syllables(&text),
                    text,
                }
            })
            .collect()
    }

    /// Every terminal word rhymes with every other, itself included
    fn all_rhyme<'a>(&self, lines: impl IntoIterator<Item = &'a LineReport>) -> bool {
        let terminals: Vec<Option<&str>> = lines
            .into_iter()
            .map(|l| l.terminal.as_deref())
            .collect();

        terminals.iter().all(|a| {
            terminals.iter().all(|b| match (a, b) {
                (Some(a), Some(b)) => self.rhymes(a, b),
                _ => false,
            })
        })
    }

    fn check_syllables(&self, a: &[usize], b: &[usize]) -> Option<Rejection> {
        let min = self.config.min_syllables;
        let a_total: usize = a.iter().sum();
        if a_total < min {
            return Some(Rejection::TooFewSyllables { role: Role::A, total: a_total });
        }
        let b_total: usize = b.iter().sum();
        if b_total < min {
            return Some(Rejection::TooFewSyllables { role: Role::B, total: b_total });
        }

        let spread = self.config.max_spread;
        for (role, counts) in [(Role::B, b), (Role::A, a)] {
            let longest = counts.iter().copied().max().unwrap_or(0);
            let shortest = counts.iter().copied().min().unwrap_or(0);
            if longest - shortest > spread {
                return Some(Rejection::Spread { role, longest, shortest });
            }
        }

        let shortest_a = a.iter().copied().min().unwrap_or(0);
        let longest_b = b.iter().copied().max().unwrap_or(0);
        if shortest_a <= longest_b {
            return Some(Rejection::BNotShorter { shortest_a, longest_b });
        }

        None
    }

    /// Check every rule and report the first one broken
    pub fn analyze(&self, text: &str) -> LimerickAnalysis {
        let lines = self.segment(text);

        let a_lines: Vec<&LineReport> = lines.iter().filter(|l| l.role == Role::A).collect();
        let b_lines: Vec<&LineReport> = lines.iter().filter(|l| l.role == Role::B).collect();

        let rejection = if a_lines.len() != 3 || b_lines.len() != 2 {
            Some(Rejection::LineCount { lines: lines.len() })
        } else {
            let a_counts: Vec<usize> = a_lines.iter().map(|l| l.syllables).collect();
            let b_counts: Vec<usize> = b_lines.iter().map(|l| l.syllables).collect();

            self.check_syllables(&a_counts, &b_counts).or_else(|| {
                if !self.all_rhyme(a_lines.iter().copied()) {
                    Some(Rejection::NoRhyme { role: Role::A })
                } else if !self.all_rhyme(b_lines.iter().copied()) {
                    Some(Rejection::NoRhyme { role: Role::B })
                } else if self.all_rhyme(&lines) {
                    Some(Rejection::AllRhyme)
                } else {
                    None
                }
            })
        };

        match rejection {
            Some(rejection) => {
                debug!(%rejection, "not a limerick");
                LimerickAnalysis::rejected(lines, rejection)
            }
            None => {
                debug!("limerick");
                LimerickAnalysis::accepted(lines)
            }
        }
    }

    /// Takes newline separated text and decides whether it is a limerick
    pub fn is_limerick(&self, text: &str) -> bool {
        self.analyze(text).is_limerick()
    }
}
