//! Fixed-interval polling and request timeouts

use crate::error::{ClientError, ClientResult};
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Await `future`, failing with `ClientError::Timeout` after `duration`.
pub async fn with_timeout<T, F>(duration: Duration, operation: &str, future: F) -> ClientResult<T>
where
    F: Future<Output = ClientResult<T>>,
{
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => {
            warn!(operation, seconds = duration.as_secs(), "Request timed out");
            Err(ClientError::timeout(operation, duration.as_secs()))
        }
    }
}

/// Background task run on a fixed interval. The timer stops when the poller
/// is stopped or dropped.
#[derive(Debug)]
pub struct Poller {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Run `task` now and then every `period`. Failures are logged and the
    /// next tick runs as usual.
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut task: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ClientResult<()>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if let Err(e) = task().await {
                    warn!(poller = name, error = %e, "Poll failed");
                }
            }
        });
        debug!(poller = name, period_secs = period.as_secs(), "Poller started");
        Self { name, handle }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(poller = self.name, "Poller stopped");
    }
}
