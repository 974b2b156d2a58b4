use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global `tracing` subscriber.
///
/// `filter` is an `EnvFilter` directive such as `info` or
/// `gmail_variator=debug,actix_web=info`; an unparsable directive falls back
/// to `info`. Records emitted through the `log` facade (actix-web's access
/// logger) are forwarded to the same subscriber.
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is kept.
pub fn init_tracing(filter: &str) -> bool {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    match tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "tracing subscriber already installed");
            false
        }
    }
}
