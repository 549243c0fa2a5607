use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `RUST_LOG` wins over `verbose`.
/// Later calls are ignored.
pub fn init(verbose: bool) {
    let default = if verbose {
        "ringstats=debug,info"
    } else {
        "ringstats=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
