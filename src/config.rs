//! Builder for configuring the HTTP [`Fetcher`].

use std::time::Duration;

use crate::error::{Result, Web2TxtError};
use crate::fetch::Fetcher;

/// Default connect and per-read timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default size of the slices the body is reported in.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Builder for configuring a [`Fetcher`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use web2txt::FetcherBuilder;
///
/// let fetcher = FetcherBuilder::new()
///     .timeout(Duration::from_secs(30))
///     .max_time(Duration::from_secs(120))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct FetcherBuilder {
    timeout: Duration,
    max_time: Option<Duration>,
    chunk_size: usize,
    user_agent: String,
}

impl FetcherBuilder {
    /// Create a builder with the defaults: 15 s connect/read timeout, no
    /// total deadline, 8 KiB chunks, `web2txt/<version>` user agent.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_time: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }

    /// Timeout for establishing the connection and for each read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deadline for the whole transfer, headers and body included.
    ///
    /// Unset by default, so a server trickling bytes slower than the read
    /// timeout never trips it.
    pub fn max_time(mut self, max_time: Duration) -> Self {
        self.max_time = Some(max_time);
        self
    }

    /// Size of the slices progress is reported in. Zero is treated as one.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the underlying HTTP client and return the [`Fetcher`].
    pub fn build(self) -> Result<Fetcher> {
        let mut client = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .connect_timeout(self.timeout)
            .read_timeout(self.timeout);
        if let Some(max_time) = self.max_time {
            client = client.timeout(max_time);
        }
        let client = client
            .build()
            .map_err(|e| Web2TxtError::Unexpected(Box::new(e)))?;

        tracing::debug!(
            timeout = ?self.timeout,
            max_time = ?self.max_time,
            chunk_size = self.chunk_size,
            "http client ready"
        );
        Ok(Fetcher::new(client, self.chunk_size))
    }
}

impl Default for FetcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let builder = FetcherBuilder::new();
        assert_eq!(builder.timeout, Duration::from_secs(15));
        assert_eq!(builder.max_time, None);
        assert_eq!(builder.chunk_size, 8192);
        assert!(builder.user_agent.starts_with("web2txt/"));
    }

    #[test]
    fn zero_chunk_size_is_clamped() {
        assert_eq!(FetcherBuilder::new().chunk_size(0).chunk_size, 1);
    }

    #[test]
    fn setters_override_defaults() {
        let builder = FetcherBuilder::default()
            .timeout(Duration::from_secs(3))
            .max_time(Duration::from_secs(60))
            .user_agent("test-agent");
        assert_eq!(builder.timeout, Duration::from_secs(3));
        assert_eq!(builder.max_time, Some(Duration::from_secs(60)));
        assert_eq!(builder.user_agent, "test-agent");
    }

    #[test]
    fn build_produces_fetcher() {
        let fetcher = FetcherBuilder::new().chunk_size(1024).build().unwrap();
        assert_eq!(fetcher.chunk_size(), 1024);
    }
}
