use std::process;

use nixme::cli::{Args, Command};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter; `RUST_LOG` is the fallback
const LOG_ENV: &str = "NIXME_LOG";

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    let command = Command::from_args(args);
    process::exit(command.run());
}

/// Compact logs on stderr, `warn` by default and `debug` with `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer().compact().with_writer(std::io::stderr);
    tracing_subscriber::registry().with(layer).with(filter).init();
}
