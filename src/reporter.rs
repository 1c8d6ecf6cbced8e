use tracing::{error, info};

/// Lifecycle notifications for the run. Purely observational: nothing a
/// reporter does feeds back into control flow.
pub trait Reporter: Send + Sync {
    fn start(&self, message: &str);
    fn succeed(&self, message: &str);
    fn fail(&self, message: &str);
}

/// Reporter backed by the tracing stack.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn start(&self, message: &str) {
        info!("... {}", message);
    }

    fn succeed(&self, message: &str) {
        info!("{}", message);
    }

    fn fail(&self, message: &str) {
        error!("{}", message);
    }
}

/// Discards everything. For tests.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn start(&self, _message: &str) {}
    fn succeed(&self, _message: &str) {}
    fn fail(&self, _message: &str) {}
}
