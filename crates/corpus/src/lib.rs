//! corpus - shared text resources
//!
//! Pronouncing dictionary, word lists, tokenization, CLI streams and logging

mod cmudict;
mod logging;
mod stream;
pub mod tokenize;
mod wordlist;

pub use cmudict::{DictError, Phone, PronouncingDictionary, Pronunciation, DICT_ENV};
pub use logging::{env_filter, init_tracing};
pub use stream::{create_file, open_file, Input, Output, StreamError};
pub use wordlist::{WordList, WordListError};
