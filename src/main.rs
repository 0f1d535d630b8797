use clap::Parser;
use mutation_hash::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("mutation_hash=debug,info")
    } else {
        EnvFilter::new("mutation_hash=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Collisions(args) => {
            cli::collisions::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Query(args) => {
            cli::query::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Variants(args) => {
            cli::variants::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
