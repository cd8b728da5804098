//! LLM client wrapper that races every request against a timer
//!
//! The backend call runs as its own task. Whichever of the call and the timer
//! settles first decides the result; a call that loses the race is aborted and
//! its eventual value is never observed. Dropping the request future aborts
//! the call too. No retries are attempted.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse};

/// Wrapper that bounds any LLM client with a hard deadline
pub struct TimeoutLlmClient {
    inner: Arc<dyn LlmPort>,
    timeout: Duration,
}

impl TimeoutLlmClient {
    pub fn new(inner: Arc<dyn LlmPort>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

/// Aborts the task when dropped, so a cancelled caller leaves nothing running.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[async_trait]
impl LlmPort for TimeoutLlmClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let inner = Arc::clone(&self.inner);
        let mut call = AbortOnDrop(tokio::spawn(async move { inner.generate(request).await }));

        tokio::select! {
            // Timer is polled first so a call settling on the same tick as the
            // deadline still counts as late.
            biased;

            _ = tokio::time::sleep(self.timeout) => {
                call.0.abort();
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "LLM request exceeded deadline, discarding it"
                );
                Err(LlmError::Timeout(self.timeout))
            }
            joined = &mut call.0 => match joined {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(error = %e, "LLM request task did not complete");
                    Err(LlmError::RequestFailed(format!("request task failed: {e}")))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Backend that answers after a fixed delay
    struct SlowMockLlm {
        delay: Duration,
        finished: Arc<AtomicBool>,
    }

    impl SlowMockLlm {
        fn new(delay: Duration) -> Self {
            Self {
                delay,
                finished: Arc::new(AtomicBool::new(false)),
            }
        }
    }

    #[async_trait]
    impl LlmPort for SlowMockLlm {
        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            tokio::time::sleep(self.delay).await;
            self.finished.store(true, Ordering::SeqCst);
            Ok(LlmResponse::text("1. Late but lovely."))
        }
    }

    /// Backend that always fails immediately
    struct FailingMockLlm {
        error: LlmError,
    }

    #[async_trait]
    impl LlmPort for FailingMockLlm {
        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            Err(self.error.clone())
        }
    }

    #[tokio::test]
    async fn test_fast_backend_wins_race() {
        let mock = Arc::new(SlowMockLlm::new(Duration::from_millis(5)));
        let client = TimeoutLlmClient::new(mock, Duration::from_millis(500));

        let result = client.generate(LlmRequest::new(vec![])).await;

        assert_eq!(result.unwrap().content, "1. Late but lovely.");
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let mock = Arc::new(SlowMockLlm::new(Duration::from_millis(500)));
        let client = TimeoutLlmClient::new(mock, Duration::from_millis(20));

        let result = client.generate(LlmRequest::new(vec![])).await;

        assert!(matches!(result, Err(LlmError::Timeout(d)) if d == Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn test_late_result_is_discarded() {
        let mock = SlowMockLlm::new(Duration::from_millis(100));
        let finished = Arc::clone(&mock.finished);
        let client = TimeoutLlmClient::new(Arc::new(mock), Duration::from_millis(10));

        let result = client.generate(LlmRequest::new(vec![])).await;
        assert!(result.is_err());

        // Give the aborted call time it would have needed to finish
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(
            !finished.load(Ordering::SeqCst),
            "timed out call should be aborted, not left running"
        );
    }

    #[tokio::test]
    async fn test_dropped_request_aborts_call() {
        let mock = SlowMockLlm::new(Duration::from_millis(50));
        let finished = Arc::clone(&mock.finished);
        let client = TimeoutLlmClient::new(Arc::new(mock), Duration::from_secs(10));

        // The caller gives up long before the client deadline
        let abandoned =
            tokio::time::timeout(Duration::from_millis(5), client.generate(LlmRequest::new(vec![])))
                .await;
        assert!(abandoned.is_err());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(
            !finished.load(Ordering::SeqCst),
            "dropped request should abort its backend call"
        );
    }

    #[tokio::test]
    async fn test_backend_error_passes_through() {
        let mock = Arc::new(FailingMockLlm {
            error: LlmError::RequestFailed("429 Too Many Requests".into()),
        });
        let client = TimeoutLlmClient::new(mock, Duration::from_secs(1));

        let result = client.generate(LlmRequest::new(vec![])).await;

        assert!(matches!(result, Err(LlmError::RequestFailed(msg)) if msg.contains("429")));
    }
}
