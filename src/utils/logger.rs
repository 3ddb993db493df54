use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directives used when `RUST_LOG` is unset. Verbose mode opens up this
/// crate's per-page fetch logging.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "sonik_report=debug,info"
    } else {
        "sonik_report=info,warn"
    }
}

fn report_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Logs go to stderr so stdout carries only the report text.
pub fn init_cli_logger(verbose: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(report_filter(verbose))
        .with(fmt_layer)
        .init();
}
