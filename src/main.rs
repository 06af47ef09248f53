use anyhow::Context;
use clap::Parser;
use progress_tracker::utils::{logger, validation::Validate};
use progress_tracker::{CliConfig, Session};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = cli
        .load()
        .with_context(|| format!("failed to load config {:?}", cli.config))?;

    if let Err(e) = config.validate() {
        logger::init_cli_logger(cli.verbose);
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    // -v wins over the level in the config file
    match config.log_level() {
        Some(level) if !cli.verbose => logger::init_with_level(level),
        _ => logger::init_cli_logger(cli.verbose),
    }
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), &config);
    session.run().context("session terminated with an I/O error")?;

    Ok(())
}
