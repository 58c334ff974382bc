use clap::Parser;
use tracing_subscriber::EnvFilter;

use dna_motif_finder::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("dna_motif_finder=debug,info")
    } else {
        EnvFilter::new("dna_motif_finder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Some(cli::Commands::Serve(args)) => {
            web::server::run(args)?;
        }
        None if cli.analyze.has_input() => {
            cli::analyze::run(cli.analyze, cli.format, cli.verbose)?;
        }
        None => {
            cli::interactive::run(cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
