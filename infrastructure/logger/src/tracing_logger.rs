use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter emitting `tracing` events under the `product_api` target,
/// so `RUST_LOG=product_api=debug` isolates use-case logs from HTTP traces.
pub struct TracingLogger;

const TARGET: &str = "product_api";

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
