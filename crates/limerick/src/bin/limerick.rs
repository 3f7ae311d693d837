//! limerick CLI - decide whether a poem is a limerick

use clap::Parser;
use limerick::cli::{self, LimerickArgs};

#[derive(Parser)]
#[command(name = "limerick")]
#[command(
    about = "limerick detector. Given a file containing a poem, indicate whether that poem is a limerick or not",
    version
)]
struct Cli {
    #[command(flatten)]
    args: LimerickArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    corpus::init_tracing(cli.args.debug);

    cli::run(&cli.args)
}
