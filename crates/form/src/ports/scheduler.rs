//! One-shot delayed redirect.
//!
//! A scheduled redirect fires exactly once after its delay. Dropping the
//! [`RedirectHandle`] does not cancel it; [`RedirectHandle::cancel`] does.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::SessionError;
use crate::ports::Navigator;

/// Schedules a navigation after a delay.
pub trait RedirectScheduler: Send + Sync {
    fn schedule(
        &self,
        url: String,
        delay: Duration,
        navigator: Arc<dyn Navigator>,
    ) -> RedirectHandle;
}

/// Handle to a scheduled redirect.
#[derive(Debug)]
pub struct RedirectHandle {
    task: JoinHandle<()>,
}

impl RedirectHandle {
    /// Wraps the task that performs the navigation.
    #[must_use]
    pub fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }

    /// Cancels the redirect if it has not fired yet.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// True once the redirect has fired or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Runs redirects as tasks on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Uses the runtime the caller is running on.
    pub fn current() -> Result<Self, SessionError> {
        Ok(Self {
            handle: Handle::try_current()?,
        })
    }

    #[must_use]
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl RedirectScheduler for TokioScheduler {
    fn schedule(
        &self,
        url: String,
        delay: Duration,
        navigator: Arc<dyn Navigator>,
    ) -> RedirectHandle {
        tracing::info!(url = %url, delay_ms = delay.as_millis(), "redirect scheduled");
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(url = %url, "redirect firing");
            navigator.navigate_to(&url);
        });
        RedirectHandle::new(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        urls: Mutex<Vec<String>>,
    }

    impl Navigator for Recorder {
        fn navigate_to(&self, url: &str) {
            self.urls.lock().push(url.to_owned());
        }
    }

    #[test]
    fn test_current_outside_runtime_fails() {
        assert!(matches!(
            TokioScheduler::current(),
            Err(SessionError::NoRuntime(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let recorder = Arc::new(Recorder::default());
        let scheduler = TokioScheduler::current().unwrap();
        let handle = scheduler.schedule(
            "login.html".into(),
            Duration::from_millis(2000),
            recorder.clone(),
        );

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(recorder.urls.lock().is_empty());
        assert!(!handle.is_finished());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(*recorder.urls.lock(), vec!["login.html".to_owned()]);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(recorder.urls.lock().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_navigation() {
        let recorder = Arc::new(Recorder::default());
        let handle = TokioScheduler::current().unwrap().schedule(
            "login.html".into(),
            Duration::from_millis(2000),
            recorder.clone(),
        );

        handle.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(recorder.urls.lock().is_empty());
        assert!(handle.is_finished());
    }
}
