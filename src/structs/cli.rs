use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "checkrun-analyzer")]
#[clap(about = "Aggregates recurring CI check-run annotations and check-run timing", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
