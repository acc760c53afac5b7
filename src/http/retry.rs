//! Retry policies for HTTP requests.

use std::time::Duration;

/// Retry policy for a single logical request.
///
/// Chosen per call site, so non-idempotent endpoints can opt out instead of
/// inheriting one process-wide policy.
#[derive(Debug, Clone)]
pub enum RetryPolicy {
    /// No retries.
    None,
    /// Retry transport timeouts and 502/503 with jittered exponential
    /// backoff. The default for every shipped endpoint wrapper.
    Transient,
    /// Caller-provided retry logic.
    Custom(RetryConfig),
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::Transient
    }
}

impl RetryPolicy {
    pub(crate) fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Transient => Some(RetryConfig::default()),
            RetryPolicy::Custom(config) => Some(config.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of wire attempts, including the first.
    pub max_attempts: u32,
    /// Base delay; attempt `n` (0-indexed) waits `start_delay * 2^n` plus
    /// jitter before re-issuing.
    pub start_delay: Duration,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            start_delay: Duration::from_secs(1),
            retryable_statuses: vec![502, 503],
        }
    }
}

impl RetryConfig {
    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Delay before the attempt after `attempt`: `start * 2^attempt` plus
    /// uniform jitter in `[0, start)` to spread synchronized retry storms.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let start = self.start_delay.as_secs_f64();
        let base = start * f64::from(2u32.saturating_pow(attempt.min(16)));
        let jitter = rand::random::<f64>() * start;
        Duration::from_secs_f64(base + jitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_transient() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::Transient));
    }

    #[test]
    fn test_none_policy_has_no_config() {
        assert!(RetryPolicy::None.config().is_none());
    }

    #[test]
    fn test_transient_retries_gateway_errors_only() {
        let config = RetryPolicy::Transient.config().unwrap();
        assert!(config.is_retryable_status(502));
        assert!(config.is_retryable_status(503));
        assert!(!config.is_retryable_status(500));
        assert!(!config.is_retryable_status(504));
        assert!(!config.is_retryable_status(404));
        assert!(!config.is_retryable_status(429));
    }

    #[test]
    fn test_delay_doubles_with_bounded_jitter() {
        let config = RetryConfig {
            max_attempts: 3,
            start_delay: Duration::from_secs(1),
            retryable_statuses: vec![502, 503],
        };

        let d0 = config.delay_for_attempt(0).as_secs_f64();
        let d1 = config.delay_for_attempt(1).as_secs_f64();
        let d2 = config.delay_for_attempt(2).as_secs_f64();

        assert!((1.0..2.0).contains(&d0));
        assert!((2.0..3.0).contains(&d1));
        assert!((4.0..5.0).contains(&d2));
    }

    #[test]
    fn test_large_attempt_does_not_overflow() {
        let config = RetryConfig::default();
        let delay = config.delay_for_attempt(u32::MAX);
        assert!(delay.as_secs_f64().is_finite());
    }
}
