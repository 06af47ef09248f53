use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Log lines go to stderr so they never mix
/// with the report printed on stdout.
pub fn init_cli_logger(verbose: bool) {
    init_with_default(if verbose {
        "progress_tracker=debug,info"
    } else {
        "progress_tracker=warn"
    });
}

/// Same as [`init_cli_logger`] but with a level taken from the config file.
pub fn init_with_level(level: &str) {
    init_with_default(&format!("progress_tracker={}", level.to_ascii_lowercase()));
}

fn init_with_default(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // try_init: tests and embedders may already have installed a subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
