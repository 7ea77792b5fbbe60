//! Retry schedule.

use std::time::Duration;

/// How many times a failed request is repeated and how long to wait in between.
///
/// Delays grow exponentially from `base_delay`, are capped at `max_delay` and
/// carry a small deterministic jitter so that parallel callers do not retry in
/// lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts made after the first one.
    pub max_retries: u32,
    /// Delay before the first retry, doubled for every further one.
    pub base_delay: Duration,
    /// Upper bound for a single delay, before jitter.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Sets the number of retries.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Total number of attempts, including the first.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay to wait after the `attempt`-th failure (1-based).
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_ms = self.base_delay.as_millis() as u64;
        let max_ms = self.max_delay.as_millis() as u64;

        let exp_ms = base_ms.saturating_mul(1u64 << attempt.min(10));
        let capped_ms = exp_ms.min(max_ms);
        if capped_ms == 0 {
            return Duration::ZERO;
        }

        // ±25%, derived from the attempt number.
        let jitter_range = capped_ms / 4;
        let jitter = if jitter_range > 0 {
            let offset = (u64::from(attempt) * 17) % (jitter_range * 2);
            offset as i64 - jitter_range as i64
        } else {
            0
        };

        let final_ms = (capped_ms as i64 + jitter).max(100) as u64;
        Duration::from_millis(final_ms)
    }
}
