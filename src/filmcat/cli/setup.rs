use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "filmcat", bin_name = "filmcat", version)]
#[command(
    about = "Interactive movie catalog manager",
    long_about = "Interactive movie catalog manager.\n\nKeeps the catalog in movies.json in the \
                  current directory (see filmcat.json to change it) and drives everything \
                  through a numbered menu on stdin."
)]
pub struct Cli {
    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Route `tracing` output to stderr so the menu on stdout stays readable.
///
/// The filter is fixed by flags and config; `RUST_LOG` is not consulted.
pub fn init_logging(verbose: bool, configured_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(configured_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
