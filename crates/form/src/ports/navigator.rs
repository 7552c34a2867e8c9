//! Page navigation.

/// Navigates the host to another page.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, url: &str);
}

/// Navigator for headless hosts: records the request in the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_to(&self, url: &str) {
        tracing::info!(url, "navigation requested");
    }
}
