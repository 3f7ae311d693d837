//! simplesent CLI - classify sentences by counting positive and negative words

use clap::Parser;
use sentiment::cli::{self, SentimentArgs};

#[derive(Parser)]
#[command(name = "simplesent")]
#[command(
    about = "classify a sentence based on if it has more positive or negative words",
    version
)]
struct Cli {
    #[command(flatten)]
    args: SentimentArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    corpus::init_tracing(cli.args.debug);

    cli::run(&cli.args)
}
