//! Injected connection configuration

use std::time::Duration;

use url::Url;

/// Connection settings for a data-fetch collaborator.
///
/// The backend base URL and bearer credential are injected here at
/// construction and nowhere else; page sources receive the config
/// explicitly instead of reading module-level constants. The grid itself
/// never sees this object.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use gridline_lib::source::SourceConfig;
/// use url::Url;
///
/// let config = SourceConfig::builder()
///     .base_url(Url::parse("https://api.example.edu").unwrap())
///     .credential("token-from-cookie")
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// assert_eq!(config.base_url().host_str(), Some("api.example.edu"));
/// ```
#[derive(Debug, Clone)]
pub struct SourceConfig {
    base_url: Url,
    credential: Option<String>,
    timeout: Option<Duration>,
}

impl SourceConfig {
    /// Creates a new builder for constructing a config.
    pub fn builder() -> SourceConfigBuilder<Missing> {
        SourceConfigBuilder::new()
    }

    /// Returns the backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the bearer credential, if one was provided.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Returns the credential as a bearer authorization header value.
    pub fn bearer_header(&self) -> Option<String> {
        self.credential
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    /// Returns the request timeout, if one was configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`SourceConfig`].
///
/// Uses the typestate pattern so the required base URL is enforced at
/// compile time: `build` only exists once `base_url` has been called.
pub struct SourceConfigBuilder<U> {
    base_url: U,
    credential: Option<String>,
    timeout: Option<Duration>,
}

impl SourceConfigBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: Missing,
            credential: None,
            timeout: None,
        }
    }

    /// Sets the backend base URL.
    pub fn base_url(self, url: Url) -> SourceConfigBuilder<Set<Url>> {
        SourceConfigBuilder {
            base_url: Set(url),
            credential: self.credential,
            timeout: self.timeout,
        }
    }
}

impl Default for SourceConfigBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> SourceConfigBuilder<U> {
    /// Sets the bearer credential supplied by the authentication collaborator.
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl SourceConfigBuilder<Set<Url>> {
    /// Builds the [`SourceConfig`].
    ///
    /// Only available once the base URL has been set.
    pub fn build(self) -> SourceConfig {
        SourceConfig {
            base_url: self.base_url.0,
            credential: self.credential,
            timeout: self.timeout,
        }
    }
}
