//! User-facing notification seam
//!
//! The store announces add/remove outcomes through this trait instead of
//! printing directly, so the front end decides how toasts look.

/// Sink for transient success/info messages
pub trait Notifier {
    fn success(&self, message: &str);
    fn info(&self, message: &str);
}

/// Default notifier that routes messages into tracing
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
