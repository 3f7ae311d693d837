//! Input/output streams named on the command line (`-` means stdin/stdout)
//!
//! Paths ending in `.gz` are decompressed on read and compressed on write.

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("can't open '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StreamError>;

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Buffered reader over a file, gunzipping `*.gz`
pub fn open_file(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if is_gzip(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(BufReader::new(file)))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Buffered writer to a file, gzipping `*.gz`.
///
/// The gzip trailer is written when the writer is dropped.
pub fn create_file(path: &Path) -> std::io::Result<Box<dyn Write>> {
    let file = BufWriter::new(File::create(path)?);
    if is_gzip(path) {
        Ok(Box::new(GzEncoder::new(file, Compression::default())))
    } else {
        Ok(Box::new(file))
    }
}

/// Where text comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Input::Stdin => Ok(Box::new(BufReader::new(std::io::stdin()))),
            Input::File(path) => open_file(path).map_err(|source| StreamError::Open {
                path: path.clone(),
                source,
            }),
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        let mut text = String::new();
        self.open()?.read_to_string(&mut text)?;
        Ok(text)
    }
}

impl FromStr for Input {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "-" => Input::Stdin,
            path => Input::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where results go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Output {
    pub fn create(&self) -> Result<Box<dyn Write>> {
        match self {
            Output::Stdout => Ok(Box::new(std::io::stdout().lock())),
            Output::File(path) => create_file(path).map_err(|source| StreamError::Open {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl FromStr for Output {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "-" => Output::Stdout,
            path => Output::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("<stdout>"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}
