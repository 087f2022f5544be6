//! Installs a `tracing_subscriber` formatter as the global
//! subscriber, filtered by the environment.
//!
//! ```bash
//! RUST_LOG=qibla=trace qibla --lat 51.5 --lng -0.12 --heading 120
//! ```

use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// Records emitted through `log` are bridged in by `tracing-log`.
///
/// Returns an error if a global subscriber has already been set.
pub fn initialize_tracer() -> Result<(), tracing_subscriber::util::TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    Registry::default()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("Tracer initialised");
    Ok(())
}
