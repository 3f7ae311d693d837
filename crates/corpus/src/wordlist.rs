//! Word lists - one entry per line

use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("cannot read word list {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WordListError>;

/// A set of words read from a lexicon file
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = crate::stream::open_file(path).map_err(|source| WordListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(reader)?;
        tracing::debug!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    /// Entries are trimmed and kept verbatim. Blank lines and `;` header
    /// comments (opinion lexicon style) are skipped.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut list = Self::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with(';') {
                continue;
            }
            list.words.insert(word.to_string());
        }
        Ok(list)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = ";;; opinion lexicon\n;\n\ngood\n  great  \n";
        let list = WordList::parse(text.as_bytes()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("good"));
        assert!(list.contains("great"));
    }

    #[test]
    fn test_entries_keep_case() {
        let list = WordList::parse("Good\n".as_bytes()).unwrap();
        assert!(list.contains("Good"));
        assert!(!list.contains("good"));
    }

    #[test]
    fn test_load_gzipped_list() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("negative-words.txt.gz");
        {
            let mut w = crate::stream::create_file(&path).unwrap();
            w.write_all(b";;; header\nbad\nawful\n").unwrap();
        }

        let list = WordList::load(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("awful"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = WordList::load(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }

    #[test]
    fn test_from_iter() {
        let list: WordList = ["a", "b", "a"].into_iter().collect();
        assert_eq!(list.len(), 2);
    }
}
