//! Retry policy for transient fetch failures

use std::future::Future;
use std::time::Duration;

use crate::error::SourceError;

/// Configuration for automatic retry of page fetches.
///
/// One policy object applies uniformly wherever the data-fetch collaborator
/// is invoked; individual screens never reimplement backoff. The grid
/// itself performs no retries (re-navigation is the retry), so this policy
/// lives entirely at the fetch boundary.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use gridline_lib::source::RetryPolicy;
///
/// // Default configuration
/// let policy = RetryPolicy::default();
///
/// // Custom configuration
/// let custom = RetryPolicy::default()
///     .max_retries(5)
///     .initial_delay(Duration::from_millis(500))
///     .max_delay(Duration::from_secs(60));
///
/// // Disable all retries
/// let no_retry = RetryPolicy::no_retry();
/// ```
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Initial delay between retries (doubles each attempt).
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Whether to retry when rate limited.
    pub retry_on_rate_limit: bool,
    /// Whether to retry on HTTP 5xx server errors.
    pub retry_on_server: bool,
    /// Whether to retry on network errors and timeouts.
    pub retry_on_network: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            retry_on_rate_limit: true,
            retry_on_server: true,
            retry_on_network: true,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with all retries disabled.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            retry_on_rate_limit: false,
            retry_on_server: false,
            retry_on_network: false,
            ..Default::default()
        }
    }

    /// Sets the maximum number of retries.
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Sets the initial delay between retries.
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the maximum delay between retries.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Enables or disables retry on rate limiting.
    pub fn retry_on_rate_limit(mut self, enabled: bool) -> Self {
        self.retry_on_rate_limit = enabled;
        self
    }

    /// Enables or disables retry on HTTP 5xx.
    pub fn retry_on_server(mut self, enabled: bool) -> Self {
        self.retry_on_server = enabled;
        self
    }

    /// Enables or disables retry on network errors.
    pub fn retry_on_network(mut self, enabled: bool) -> Self {
        self.retry_on_network = enabled;
        self
    }

    /// Returns `true` if the error should be retried under this policy.
    pub fn should_retry(&self, error: &SourceError) -> bool {
        if !error.is_transient() {
            return false;
        }
        match error {
            SourceError::RateLimited { .. } => self.retry_on_rate_limit,
            SourceError::Http { .. } => self.retry_on_server,
            SourceError::Network(_) | SourceError::Timeout(_) => self.retry_on_network,
            SourceError::Decode { .. } => false,
        }
    }
}

/// Runs an operation under a retry policy with exponential backoff.
///
/// The delay doubles after each attempt, capped at the policy's `max_delay`;
/// a rate-limit error carrying a `retry_after` hint waits that long instead.
/// Non-retryable errors and exhausted attempts return the last error.
///
/// # Example
///
/// ```ignore
/// let policy = RetryPolicy::default();
/// let page = with_retry(&policy, || source.fetch_page(query)).await?;
/// ```
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, SourceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SourceError>>,
{
    let mut attempts = 0;
    let mut delay = policy.initial_delay;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempts >= policy.max_retries || !policy.should_retry(&error) {
                    return Err(error);
                }

                let wait = match &error {
                    SourceError::RateLimited {
                        retry_after: Some(hint),
                    } => *hint,
                    _ => delay,
                };
                tokio::time::sleep(wait).await;
                delay = (delay * 2).min(policy.max_delay);
                attempts += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_retry_respects_flags() {
        let policy = RetryPolicy::default().retry_on_server(false);
        assert!(!policy.should_retry(&SourceError::http(503, "unavailable")));
        assert!(policy.should_retry(&SourceError::network("reset")));
    }

    #[test]
    fn test_client_errors_never_retry() {
        let policy = RetryPolicy::default();
        assert!(!policy.should_retry(&SourceError::http(404, "not found")));
        assert!(!policy.should_retry(&SourceError::decode("bad json")));
    }
}
