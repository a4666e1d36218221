//! Logging and tracing initialization.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise logs the crate at `info`, or
/// `debug` when `verbose` is requested. Output goes to stderr so rendered
/// tables on stdout stay clean. Safe to call once per process; a second
/// call is a no-op.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "paddock=debug" } else { "paddock=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(false);
        init(true);
    }
}
