//! Creates the `tracing_subscriber` registry used when the
//! `tracing` feature is enabled, filtered by the environment.
//!
//! An example environment is shown:
//! ```bash
//! RUST_LOG=saferoute=debug,reqwest=info
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces. `log` records are bridged into the registry.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    // Initialise tracing with subscribers and environment filter
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}
