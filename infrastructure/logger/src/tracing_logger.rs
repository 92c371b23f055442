use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Adapter from the domain `Logger` port onto `tracing`. The host app (or
/// `init_tracing`) decides where the events actually go.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Client -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Client -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Client -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Client -- ", "{}", message);
    }
}

/// Installs a global fmt subscriber filtered by `RUST_LOG` (default `info`).
/// Call once at host startup, before the first query.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
