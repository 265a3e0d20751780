use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Decoder config JSON. When given, it replaces the tunable flags.
    #[arg(global = true, long)]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a recorded gesture trace.
    Replay(cmd::replay::ReplayArgs),
    /// Measure decode accuracy over synthetic gestures.
    Bench(cmd::bench::BenchArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Replay(args) => cmd::replay::run(args, cli.config.as_deref()),
        Commands::Bench(args) => cmd::bench::run(args, cli.config.as_deref()),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
