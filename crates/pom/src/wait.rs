// Bounded polling for element resolution
//
// `DriverSession::find` is single-shot; the retry loop lives here so every
// backend gets the same semantics. Resolution polls until the first success
// or until the deadline passes, then surfaces the last driver error.

use crate::error::{Error, Result};
use std::time::Duration;

/// Default element resolution timeout in milliseconds.
///
/// Matches the standard WebDriver/Playwright default used across language
/// bindings.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default interval between resolution attempts in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Wait policy for element resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    timeout: Duration,
    poll_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS)
    }
}

impl WaitConfig {
    /// A policy polling every `poll_interval_ms` until `timeout_ms` has
    /// elapsed.
    pub fn new(timeout_ms: u64, poll_interval_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
            poll_interval: Duration::from_millis(poll_interval_ms.max(1)),
        }
    }

    /// Single-shot resolution: one attempt, no retry.
    pub fn none() -> Self {
        Self {
            timeout: Duration::ZERO,
            poll_interval: Duration::from_millis(1),
        }
    }

    /// Total time budget for resolution.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Pause between attempts.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

/// Whether a failed attempt is worth retrying within the time budget.
///
/// Only "element is not there yet" conditions retry; transport and protocol
/// failures surface immediately.
fn retryable(err: &Error) -> bool {
    match err {
        Error::ElementNotFound(_) => true,
        Error::Driver { error, .. } => error == "no such element" || error == "stale element reference",
        _ => false,
    }
}

/// Runs `attempt` until it succeeds or `wait` is exhausted.
pub(crate) async fn poll<T, F, Fut>(wait: WaitConfig, mut attempt: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let deadline = tokio::time::Instant::now() + wait.timeout();
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) if retryable(&err) && tokio::time::Instant::now() < deadline => {
                tokio::time::sleep(wait.poll_interval()).await;
            }
            Err(err) => return Err(err),
        }
    }
}
