//! Positive/negative lexicon

use corpus::{WordList, WordListError};
use std::path::Path;

/// Positive and negative word lists
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: WordList,
    negative: WordList,
}

impl Lexicon {
    pub fn new(positive: WordList, negative: WordList) -> Self {
        Self { positive, negative }
    }

    pub fn load(positive: &Path, negative: &Path) -> Result<Self, WordListError> {
        let lexicon = Self::new(WordList::load(positive)?, WordList::load(negative)?);
        tracing::info!(
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn positive(&self) -> &WordList {
        &self.positive
    }

    pub fn negative(&self) -> &WordList {
        &self.negative
    }
}
