pub const RATE_LIMIT_MAX_REQUESTS: usize = 5;
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

/// Per-client sliding-window limiter for the generate route. Keyed by client
/// address; timestamps outside the window are pruned on each check.
pub struct RateLimiter {
    hits: Mutex<HashMap<String, Vec<Instant>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            hits: Mutex::new(HashMap::new()),
            max_requests,
            window,
        }
    }

    /// Records a hit for `key`. `Err` carries the retry-after seconds.
    pub fn check(&self, key: &str) -> Result<(), u64> {
        // Fail open on a poisoned lock; throttling is advisory.
        let Ok(mut hits) = self.hits.lock() else {
            return Ok(());
        };

        let entry = hits.entry(key.to_string()).or_default();
        entry.retain(|t| t.elapsed() < self.window);

        if entry.len() >= self.max_requests {
            return Err(self.window.as_secs());
        }

        entry.push(Instant::now());
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RATE_LIMIT_MAX_REQUESTS, RATE_LIMIT_WINDOW)
    }
}
