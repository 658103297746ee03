//! Process setup for the command-line front end.

use tracing_subscriber::EnvFilter;

/// Initialize logging with tracing_subscriber.
///
/// Logs go to stderr so reports printed on stdout stay machine readable.
pub fn init_logging(verbose: bool) {
    let crate_level = if verbose {
        "pageprobe=debug"
    } else {
        "pageprobe=info"
    };

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("html5ever=error".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap())
                .add_directive(crate_level.parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .with_ansi(true)
        .try_init();
}
