//! In-memory rate limiting for catalog generation.
//!
//! DESIGN
//! ======
//! Every `GET /api/catalog` costs one generative API call, so the endpoint is
//! guarded by a process-wide sliding window backed by `VecDeque<Instant>`.
//! Limits come from `RATE_LIMIT_CATALOG` / `RATE_LIMIT_CATALOG_WINDOW_SECS`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

const DEFAULT_CATALOG_LIMIT: usize = 30;
const DEFAULT_CATALOG_WINDOW_SECS: u64 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub limit: usize,
    pub window: Duration,
}

impl RateLimitConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let window_secs = env_parse("RATE_LIMIT_CATALOG_WINDOW_SECS", DEFAULT_CATALOG_WINDOW_SECS);
        Self {
            limit: env_parse("RATE_LIMIT_CATALOG", DEFAULT_CATALOG_LIMIT),
            window: Duration::from_secs(window_secs),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { limit: DEFAULT_CATALOG_LIMIT, window: Duration::from_secs(DEFAULT_CATALOG_WINDOW_SECS) }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<Mutex<VecDeque<Instant>>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { requests: Arc::new(Mutex::new(VecDeque::new())), config }
    }

    /// Limiter configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(RateLimitConfig::from_env())
    }

    /// Check the window, then record the request.
    pub fn check_and_record(&self) -> Result<(), RateLimitError> {
        self.check_and_record_at(Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, now: Instant) -> Result<(), RateLimitError> {
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let cfg = self.config;

        prune_window(&mut requests, now, cfg.window);
        if requests.len() >= cfg.limit {
            return Err(RateLimitError::GlobalExceeded { limit: cfg.limit, window_secs: cfg.window.as_secs() });
        }

        requests.push_back(now);
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
