//! Bag-of-words classification

use corpus::tokenize::words;
use serde::Serialize;
use std::io::BufRead;
use tracing::debug;

use crate::lexicon::Lexicon;

/// Category assigned to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Pos,
    Neg,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Pos => "pos",
            Label::Neg => "neg",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexicon hits in one line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub positive: usize,
    pub negative: usize,
}

impl Tally {
    /// `None` on a tie
    pub fn label(&self) -> Option<Label> {
        match self.positive.cmp(&self.negative) {
            std::cmp::Ordering::Greater => Some(Label::Pos),
            std::cmp::Ordering::Less => Some(Label::Neg),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Result for one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub label: String,
    pub positive: usize,
    pub negative: usize,
}

/// Classifies sentences by counting lexicon words
pub struct Classifier {
    lexicon: Lexicon,
    default_label: String,
}

impl Classifier {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            default_label: Label::Pos.to_string(),
        }
    }

    /// Label used when positive and negative counts tie
    pub fn with_default(mut self, label: &str) -> Self {
        self.default_label = label.to_string();
        self
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Lowercased tokens count once, positive list first
    pub fn tally(&self, line: &str) -> Tally {
        let mut tally = Tally::default();
        for word in words(line) {
            let word = word.to_lowercase();
            if self.lexicon.is_positive(&word) {
                tally.positive += 1;
            } else if self.lexicon.is_negative(&word) {
                tally.negative += 1;
            }
        }
        tally
    }

    pub fn classify_line(&self, line: &str) -> Classification {
        let tally = self.tally(line);
        let label = match tally.label() {
            Some(label) => label.to_string(),
            None => self.default_label.clone(),
        };
        debug!(positive = tally.positive, negative = tally.negative, %label, "classified");
        Classification {
            label,
            positive: tally.positive,
            negative: tally.negative,
        }
    }

    /// Lazily classify each input line as it is read
    pub fn classify_lines<'a, R: BufRead + 'a>(
        &'a self,
        reader: R,
    ) -> impl Iterator<Item = std::io::Result<Classification>> + 'a {
        reader
            .lines()
            .map(move |line| line.map(|l| self.classify_line(&l)))
    }

    /// One classification per input line
    pub fn classify_all<R: BufRead>(&self, reader: R) -> std::io::Result<Vec<Classification>> {
        self.classify_lines(reader).collect()
    }
}
