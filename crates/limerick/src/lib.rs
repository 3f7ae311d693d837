//! limerick - AABBA limerick detection
//!
//! Rhymes via phonetic suffix comparison, plus syllable count constraints

pub mod cli;
mod config;
mod detector;
mod guess;
mod report;

pub use config::DetectorConfig;
pub use detector::{is_suffix, LimerickDetector};
pub use guess::guess_syllables;
pub use report::{format_verdict, LimerickAnalysis, LineReport, Rejection, Role, VERDICT_SEPARATOR};
