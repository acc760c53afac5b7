//! Token-bucket rate limiter for outbound API requests.
//!
//! The platform throttles aggressively past 50 requests per second, so the
//! executor gates every wire attempt through one shared limiter. The
//! contract is "eventually admitted": callers suspend until a token is
//! available, they are never rejected.

use async_lock::Mutex;
use std::time::{Duration, Instant};

/// Default number of requests allowed per second, shared across all APIs.
pub const MAX_REQUESTS_PER_SECOND: f64 = 50.0;

/// How long a throttled caller sleeps before re-checking the bucket.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Continuously refilled token balance.
///
/// Refill-then-check-then-take happens as a single step under the limiter's
/// lock; the balance never leaves `0..=capacity`.
#[derive(Debug)]
struct TokenBudget {
    capacity: f64,
    tokens: f64,
    last_refill: Instant,
}

impl TokenBudget {
    fn new(capacity: f64, now: Instant) -> Self {
        Self {
            capacity,
            tokens: capacity,
            last_refill: now,
        }
    }

    fn try_acquire(&mut self, now: Instant) -> bool {
        self.refill(now);
        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Add `elapsed * capacity` tokens, capped at capacity.
    fn refill(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_refill);
        let refilled = self.tokens + elapsed.as_secs_f64() * self.capacity;
        self.tokens = refilled.min(self.capacity);
        self.last_refill = now;
    }
}

/// Rate limiter gating every request the executor sends.
///
/// Construct one per process and share it (via `Arc`) across clients that
/// target the same account; tests construct isolated limiters instead.
#[derive(Debug)]
pub struct RateLimiter {
    budget: Mutex<TokenBudget>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::with_capacity(MAX_REQUESTS_PER_SECOND)
    }

    /// A limiter admitting `capacity` requests per second.
    pub fn with_capacity(capacity: f64) -> Self {
        Self {
            budget: Mutex::new(TokenBudget::new(capacity, Instant::now())),
        }
    }

    /// Suspend until a token is available, then consume it.
    ///
    /// Other in-flight requests keep making progress while this one waits;
    /// the lock is only held for the refill-check-take step itself.
    pub async fn acquire(&self) {
        let mut throttled = false;
        loop {
            if self.budget.lock().await.try_acquire(Instant::now()) {
                return;
            }
            if !throttled {
                // Only log the first time around
                throttled = true;
                tracing::debug!("request is being throttled");
            }
            futures_timer::Delay::new(POLL_INTERVAL).await;
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_bucket_admits_capacity_without_time_advancing() {
        let start = Instant::now();
        let mut budget = TokenBudget::new(50.0, start);

        for _ in 0..50 {
            assert!(budget.try_acquire(start));
        }
        for _ in 0..10 {
            assert!(!budget.try_acquire(start));
        }
    }

    #[test]
    fn test_depleted_bucket_refills_proportionally_to_elapsed_time() {
        let start = Instant::now();
        let mut budget = TokenBudget::new(50.0, start);
        for _ in 0..50 {
            assert!(budget.try_acquire(start));
        }

        // 10 extra requests need (N - C) / C = 10/50 s of refill.
        let later = start + Duration::from_millis(200);
        for _ in 0..10 {
            assert!(budget.try_acquire(later));
        }
        assert!(!budget.try_acquire(later));
    }

    #[test]
    fn test_refill_caps_at_capacity() {
        let start = Instant::now();
        let mut budget = TokenBudget::new(50.0, start);

        budget.refill(start + Duration::from_secs(3600));
        assert!(budget.tokens <= 50.0);
        assert!(budget.try_acquire(start + Duration::from_secs(3600)));
    }

    #[test]
    fn test_fractional_refill_accumulates_across_polls() {
        let start = Instant::now();
        let mut budget = TokenBudget::new(50.0, start);
        for _ in 0..50 {
            assert!(budget.try_acquire(start));
        }

        // 10 ms per poll refills half a token at 50/s; two polls make one.
        assert!(!budget.try_acquire(start + Duration::from_millis(10)));
        assert!(budget.try_acquire(start + Duration::from_millis(20)));
        assert!(!budget.try_acquire(start + Duration::from_millis(20)));
    }

    #[test]
    fn test_acquire_admits_when_tokens_available() {
        tokio_test::block_on(async {
            let limiter = RateLimiter::with_capacity(2.0);
            limiter.acquire().await;
            limiter.acquire().await;
        });
    }
}
