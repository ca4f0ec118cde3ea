use crate::executor::Outcome;
use std::time::Duration;

// ---------------------------------------------------------------------------
// RetryPolicy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, first one included. Clamped to at least 1.
    pub max_attempts: u32,
    /// Fixed pause between a failed attempt and the next; none after the
    /// final attempt.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

// ---------------------------------------------------------------------------
// with_retry
// ---------------------------------------------------------------------------

/// Invoke `op` until it succeeds or the attempt budget is spent. Returns
/// `true` iff some attempt succeeded. `op` owns all side effects; nothing
/// is rolled back between attempts, since retries exist for transient
/// external failures, not state repair.
pub fn with_retry<F>(policy: RetryPolicy, mut op: F) -> bool
where
    F: FnMut() -> Outcome,
{
    let max = policy.max_attempts.max(1);
    for attempt in 1..=max {
        if op().is_success() {
            return true;
        }
        if attempt < max {
            tracing::warn!(
                attempt,
                max_attempts = max,
                "attempt failed; retrying in {}s",
                policy.delay.as_secs()
            );
            std::thread::sleep(policy.delay);
        }
    }
    false
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn no_delay(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn always_failing_op_runs_exactly_max_attempts() {
        let mut calls = 0;
        let ok = with_retry(no_delay(3), || {
            calls += 1;
            Outcome::Failure("nope".to_string())
        });
        assert!(!ok);
        assert_eq!(calls, 3);
    }

    #[test]
    fn first_success_short_circuits() {
        let mut calls = 0;
        let ok = with_retry(no_delay(3), || {
            calls += 1;
            Outcome::Success
        });
        assert!(ok);
        assert_eq!(calls, 1);
    }

    #[test]
    fn recovery_on_final_attempt_is_success() {
        let mut calls = 0;
        let ok = with_retry(no_delay(3), || {
            calls += 1;
            if calls < 3 {
                Outcome::Failure("transient".to_string())
            } else {
                Outcome::Success
            }
        });
        assert!(ok);
        assert_eq!(calls, 3);
    }

    #[test]
    fn delays_happen_between_attempts_not_after_the_last() {
        // Two failing attempts with a measurable delay → exactly one sleep.
        let policy = RetryPolicy {
            max_attempts: 2,
            delay: Duration::from_millis(50),
        };
        let start = std::time::Instant::now();
        let ok = with_retry(policy, || Outcome::Failure("nope".to_string()));
        let elapsed = start.elapsed();
        assert!(!ok);
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_millis(500), "slept after final attempt?");
    }

    #[test]
    fn zero_attempts_still_runs_once() {
        let mut calls = 0;
        let ok = with_retry(no_delay(0), || {
            calls += 1;
            Outcome::Success
        });
        assert!(ok);
        assert_eq!(calls, 1);
    }
}
