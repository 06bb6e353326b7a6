use clap::{Parser, Subcommand};
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute per-category odds for a roll configuration
    Analyze(cmd::analyze::AnalyzeArgs),
    /// List the hand categories with their ranks
    Categories,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Categories => cmd::categories::run(),
    }
}
