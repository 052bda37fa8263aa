use std::io::IsTerminal;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set.
///
/// `debug` is the level of the per-entry events emitted by the store, so
/// verbose mode shows every scanned entry.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Builds the subscriber writing formatted events to `writer`.
///
/// Colors are only emitted when `ansi` is set, so redirected output stays
/// free of escape codes.
pub fn subscriber<W>(filter: EnvFilter, ansi: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish()
}

/// Installs the global subscriber logging to stderr.
///
/// `RUST_LOG` takes precedence over `verbose`. Colors are enabled only when
/// stderr is a terminal.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let ansi = std::io::stderr().is_terminal();
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing::subscriber::set_global_default(subscriber(filter, ansi, std::io::stderr));
}
