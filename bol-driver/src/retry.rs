//! Retry policies and a generic helper that applies them.

use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Delay schedule between failed attempts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backoff {
    /// Same delay after every failure
    Flat(Duration),
    /// `initial * factor^(n-1)` after the n-th failure, capped at `max`
    Exponential {
        initial: Duration,
        factor: f64,
        max: Duration,
    },
}

impl Backoff {
    /// Delay to wait after failed attempt number `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match *self {
            Backoff::Flat(delay) => delay,
            Backoff::Exponential {
                initial,
                factor,
                max,
            } => {
                let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
                let nanos = (initial.as_nanos() as f64 * factor.powi(exponent)).round();
                if nanos.is_finite() && nanos < max.as_nanos() as f64 {
                    Duration::from_nanos(nanos as u64)
                } else {
                    max
                }
            }
        }
    }
}

/// How many times to try and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl RetryPolicy {
    /// Fixed attempt ceiling with a constant delay
    pub fn flat(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff: Backoff::Flat(delay),
        }
    }

    pub fn exponential(max_attempts: u32, initial: Duration, factor: f64, max: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff: Backoff::Exponential {
                initial,
                factor,
                max,
            },
        }
    }
}

/// Every attempt failed
#[derive(Error, Debug)]
#[error("gave up after {attempts} attempt(s): {last_error}")]
pub struct RetryExhausted<E: std::fmt::Display + std::fmt::Debug> {
    pub attempts: u32,
    pub last_error: E,
}

/// Runs `op` until it succeeds or the policy's attempts are spent.
///
/// `op` receives the 1-based attempt number. `sleep` is called between
/// attempts, never after the last one.
pub fn retry_with_policy<T, E, F, S>(
    policy: &RetryPolicy,
    mut sleep: S,
    mut op: F,
) -> Result<T, RetryExhausted<E>>
where
    E: std::fmt::Display + std::fmt::Debug,
    F: FnMut(u32) -> Result<T, E>,
    S: FnMut(Duration),
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt) {
            Ok(value) => return Ok(value),
            Err(last_error) if attempt >= max_attempts => {
                warn!("Attempt {attempt}/{max_attempts} failed: {last_error}");
                return Err(RetryExhausted {
                    attempts: attempt,
                    last_error,
                });
            }
            Err(e) => {
                warn!("Attempt {attempt}/{max_attempts} failed: {e}");
                sleep(policy.backoff.delay_after(attempt));
                attempt += 1;
            }
        }
    }
}
