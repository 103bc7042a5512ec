use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Initialize the tracing subscriber for the provisioner binary.
///
/// Verbosity is controlled through `RUST_LOG`; defaults to `info` so the
/// operator sees each provisioning step without extra flags.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default().with(env_filter).with(fmt::layer().with_target(false)).init();
}
