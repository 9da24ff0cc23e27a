use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "products";

/// Forwards domain log lines to `tracing` under the `products` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_log_through_installed_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("products=debug")
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let logger: &dyn Logger = &TracingLogger;
            logger.info("info line");
            logger.warn("warn line");
            logger.error("error line");
            logger.debug("debug line");
        });
    }
}
