//! Повтор запросов с экспоненциальной задержкой.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Attempts after the first one
    pub max_retries: u32,
    pub base_delay_ms: u32,
    pub max_delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
            max_delay_ms: 30_000,
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `retry` (0-based): `base * 2^retry`, capped.
    pub fn delay_ms(&self, retry: u32) -> u32 {
        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.base_delay_ms
            .saturating_mul(factor)
            .min(self.max_delay_ms)
    }
}

/// Runs `op` until it succeeds, returns a non-retryable error, or the policy
/// runs out of retries. `sleep` receives the delay in milliseconds.
pub async fn retry_with_backoff<T, E, Op, Fut, Retryable, Sleep, SleepFut>(
    policy: &RetryPolicy,
    mut op: Op,
    retryable: Retryable,
    mut sleep: Sleep,
) -> Result<T, E>
where
    E: Display,
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    Retryable: Fn(&E) -> bool,
    Sleep: FnMut(u32) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let mut retry = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if retry < policy.max_retries && retryable(&e) => {
                let delay = policy.delay_ms(retry);
                log::warn!(
                    "request failed ({}), retry {}/{} in {} ms",
                    e,
                    retry + 1,
                    policy.max_retries,
                    delay
                );
                sleep(delay).await;
                retry += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
