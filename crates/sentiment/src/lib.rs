//! sentiment - word list sentiment classification
//!
//! Counts positive and negative lexicon words in each sentence

mod classifier;
pub mod cli;
mod lexicon;

pub use classifier::{Classification, Classifier, Label, Tally};
pub use lexicon::Lexicon;
