//! Rate Limiting Infrastructure
//!
//! Sliding-window admission control keyed by an opaque client key
//! (typically the client IP, prefixed with an endpoint category).

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }
}

/// Outcome of a rate limit check
#[derive(Debug, Clone)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub remaining: u32,
    /// Time until the oldest recorded request leaves the window.
    /// Only set on rejection.
    pub retry_after: Option<Duration>,
}

/// Sliding-window rate limiter.
///
/// Holds one ordered sequence of accepted-request timestamps per key.
/// On each check, timestamps older than the window are evicted lazily,
/// then the request is either rejected (without being recorded) or
/// recorded and admitted.
///
/// The whole structure is owned explicitly and shared via `Arc`;
/// construct it once at process start and hand it to the middleware.
#[derive(Debug, Default)]
pub struct SlidingWindowLimiter {
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl SlidingWindowLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and record a request for `key` under `config`.
    pub fn check(&self, key: &str, config: &RateLimitConfig) -> RateLimitDecision {
        self.check_at(key, config, Instant::now())
    }

    /// Check with an explicit clock. Eviction, threshold check and
    /// recording happen under one lock acquisition.
    pub fn check_at(&self, key: &str, config: &RateLimitConfig, now: Instant) -> RateLimitDecision {
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let hits = windows.entry(key.to_string()).or_default();

        while let Some(&oldest) = hits.front() {
            if now.duration_since(oldest) >= config.window {
                hits.pop_front();
            } else {
                break;
            }
        }

        if hits.len() as u32 >= config.max_requests {
            // Rejected attempts are not recorded.
            let retry_after = hits
                .front()
                .map(|&oldest| config.window.saturating_sub(now.duration_since(oldest)));
            return RateLimitDecision {
                allowed: false,
                remaining: 0,
                retry_after,
            };
        }

        hits.push_back(now);
        RateLimitDecision {
            allowed: true,
            remaining: config.max_requests.saturating_sub(hits.len() as u32),
            retry_after: None,
        }
    }

    /// Drop keys whose most recent timestamp is older than `idle_for`.
    ///
    /// Keys accumulate for every distinct client address; call this
    /// periodically with a duration at least as long as the largest
    /// configured window.
    pub fn purge_idle(&self, idle_for: Duration) -> usize {
        self.purge_idle_at(idle_for, Instant::now())
    }

    fn purge_idle_at(&self, idle_for: Duration, now: Instant) -> usize {
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = windows.len();
        windows.retain(|_, hits| {
            hits.back()
                .is_some_and(|&newest| now.duration_since(newest) < idle_for)
        });
        before - windows.len()
    }

    /// Number of tracked keys (for observability).
    pub fn tracked_keys(&self) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
