//! `limerick` command line

use anyhow::Context;
use clap::Args;
use corpus::{Input, Output, PronouncingDictionary, DICT_ENV};
use std::io::Write;
use std::path::PathBuf;

use crate::config::DetectorConfig;
use crate::detector::LimerickDetector;
use crate::report::format_verdict;

#[derive(Args, Debug, Clone)]
pub struct LimerickArgs {
    /// Input file (`-` for stdin)
    #[arg(short, long, default_value = "-")]
    pub infile: Input,
    /// Output file (`-` for stdout)
    #[arg(short, long, default_value = "-")]
    pub outfile: Output,
    /// CMU pronouncing dictionary (default: $VERSE_CMUDICT or ~/nltk_data/corpora/cmudict/cmudict)
    #[arg(short = 'd', long)]
    pub dict: Option<PathBuf>,
    /// Guess syllables of words missing from the dictionary
    #[arg(long)]
    pub guess: bool,
    /// JSON report instead of the poem and verdict
    #[arg(long)]
    pub json: bool,
    /// Debug mode
    #[arg(long, overrides_with = "no_debug")]
    pub debug: bool,
    /// See --debug
    #[arg(long = "no-debug", overrides_with = "debug")]
    pub no_debug: bool,
}

pub fn run(args: &LimerickArgs) -> anyhow::Result<()> {
    let text = args
        .infile
        .read_to_string()
        .with_context(|| format!("reading {}", args.infile))?;

    let dict_path = args
        .dict
        .clone()
        .unwrap_or_else(PronouncingDictionary::default_path);
    let dict = PronouncingDictionary::load(&dict_path).with_context(|| {
        format!(
            "no pronouncing dictionary at {} (pass --dict or set {})",
            dict_path.display(),
            DICT_ENV
        )
    })?;

    let mut config = DetectorConfig::from_env();
    if args.guess {
        config.guess_syllables = true;
    }
    let detector = LimerickDetector::new(dict).with_config(config);
    let analysis = detector.analyze(&text);

    let mut out = args.outfile.create()?;
    if args.json {
        serde_json::to_writer_pretty(&mut out, &analysis)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", format_verdict(&text, analysis.is_limerick()))?;
    }
    out.flush()?;

    Ok(())
}
