//! verse - limerick detection and word list sentiment tools

use clap::{Parser, Subcommand};
use limerick::cli::LimerickArgs;
use sentiment::cli::SentimentArgs;

#[derive(Parser)]
#[command(name = "verse")]
#[command(about = "Limerick detection and word list sentiment tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether a poem is a limerick
    Limerick(LimerickArgs),
    /// Classify sentences as pos/neg by lexicon word counts
    Sentiment(SentimentArgs),
}

impl Commands {
    fn debug(&self) -> bool {
        match self {
            Commands::Limerick(args) => args.debug,
            Commands::Sentiment(args) => args.debug,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    corpus::init_tracing(cli.command.debug());

    match cli.command {
        Commands::Limerick(args) => limerick::cli::run(&args)?,
        Commands::Sentiment(args) => sentiment::cli::run(&args)?,
    }

    Ok(())
}
