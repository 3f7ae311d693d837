//! `simplesent` command line

use anyhow::Context;
use clap::Args;
use corpus::{Input, Output};
use std::io::Write;
use std::path::PathBuf;

use crate::classifier::Classifier;
use crate::lexicon::Lexicon;

#[derive(Args, Debug, Clone)]
pub struct SentimentArgs {
    /// Input file, one sentence per line (`-` for stdin)
    #[arg(short, long, default_value = "-")]
    pub infile: Input,
    /// Positive word list
    #[arg(short, long)]
    pub posfile: PathBuf,
    /// Negative word list
    #[arg(short, long)]
    pub negfile: PathBuf,
    /// Output file (`-` for stdout)
    #[arg(short, long, default_value = "-")]
    pub outfile: Output,
    /// Default category
    #[arg(long = "default", default_value = "pos")]
    pub default_label: String,
    /// One JSON object per line with label and counts
    #[arg(long)]
    pub json: bool,
    /// Debug mode
    #[arg(long, overrides_with = "no_debug")]
    pub debug: bool,
    /// See --debug
    #[arg(long = "no-debug", overrides_with = "debug")]
    pub no_debug: bool,
}

pub fn run(args: &SentimentArgs) -> anyhow::Result<()> {
    let lexicon = Lexicon::load(&args.posfile, &args.negfile)?;
    let classifier = Classifier::new(lexicon).with_default(&args.default_label);

    let input = args.infile.open()?;
    let mut out = args.outfile.create()?;
    for result in classifier.classify_lines(input) {
        let result = result.with_context(|| format!("reading {}", args.infile))?;
        if args.json {
            serde_json::to_writer(&mut out, &result)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", result.label)?;
        }
    }
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: SentimentArgs,
    }

    fn parse(argv: &[&str]) -> Result<SentimentArgs, clap::Error> {
        TestCli::try_parse_from(std::iter::once("simplesent").chain(argv.iter().copied()))
            .map(|cli| cli.args)
    }

    #[test]
    fn test_default_label() {
        let args = parse(&["-p", "pos.txt", "-n", "neg.txt"]).unwrap();
        assert_eq!(args.default_label, "pos");
        assert_eq!(args.infile, Input::Stdin);

        let args = parse(&["-p", "pos.txt", "-n", "neg.txt", "--default", "neg"]).unwrap();
        assert_eq!(args.default_label, "neg");
    }

    #[test]
    fn test_last_debug_switch_wins() {
        let args = parse(&["-p", "p", "-n", "n", "--debug", "--no-debug"]).unwrap();
        assert!(!args.debug);

        let args = parse(&["-p", "p", "-n", "n", "--no-debug", "--debug"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_lexicons_required() {
        assert!(parse(&["-n", "neg.txt"]).is_err());
        assert!(parse(&["-p", "pos.txt"]).is_err());
    }
}
