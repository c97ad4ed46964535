//! Page sources: where HTML comes from.
//!
//! The client never talks to the network directly. It goes through a
//! [`PageSource`], which the live [`HttpSource`] implements with `reqwest`
//! and tests implement with fixture HTML.

use crate::config::HttpConfig;
use crate::error::ScraperError;
use crate::session::HeaderBundle;
use async_trait::async_trait;
use reqwest::header::{COOKIE, REFERER, SET_COOKIE};
use std::time::Duration;
use tracing::debug;

/// Trait for anything that can serve YellowBridge pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Performs an unauthenticated GET and returns every `Set-Cookie` value, in order.
    async fn session_cookies(&self, url: &str) -> Result<Vec<String>, ScraperError>;

    /// Performs a GET with the bundle's referer and cookie, returning the body.
    async fn fetch(&self, url: &str, headers: &HeaderBundle) -> Result<String, ScraperError>;
}

/// Common HTTP client configuration for page requests.
pub fn create_http_client(config: &HttpConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_sec))
        .build()
}

/// Live page source backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Creates a new source with the given HTTP configuration.
    pub fn new(config: &HttpConfig) -> Result<Self, ScraperError> {
        Ok(Self {
            client: create_http_client(config)?,
        })
    }

    /// Wraps an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn session_cookies(&self, url: &str) -> Result<Vec<String>, ScraperError> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        // Lossy so a non-ASCII first cookie keeps its position
        let cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect::<Vec<_>>();

        debug!(url, count = cookies.len(), "landing page answered");
        Ok(cookies)
    }

    async fn fetch(&self, url: &str, headers: &HeaderBundle) -> Result<String, ScraperError> {
        debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .header(REFERER, headers.referer())
            .header(COOKIE, headers.cookie())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fixture page source for tests.

    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves canned HTML keyed by a URL fragment and records every call.
    #[derive(Default)]
    pub struct FixtureSource {
        cookie: Option<String>,
        pages: Vec<(String, String)>,
        failing: Vec<String>,
        session_calls: AtomicUsize,
        fetch_calls: AtomicUsize,
        requests: Mutex<Vec<(String, String)>>,
    }

    impl FixtureSource {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the `Set-Cookie` value returned by the landing page.
        pub fn with_cookie(mut self, cookie: &str) -> Self {
            self.cookie = Some(cookie.to_string());
            self
        }

        /// Serves `html` for every URL containing `fragment`.
        pub fn with_page(mut self, fragment: &str, html: &str) -> Self {
            self.pages.push((fragment.to_string(), html.to_string()));
            self
        }

        /// Fails every fetch of a URL containing `fragment`.
        pub fn failing(mut self, fragment: &str) -> Self {
            self.failing.push(fragment.to_string());
            self
        }

        pub fn session_calls(&self) -> usize {
            self.session_calls.load(Ordering::SeqCst)
        }

        pub fn fetch_calls(&self) -> usize {
            self.fetch_calls.load(Ordering::SeqCst)
        }

        /// `(url, cookie)` for every fetch made so far.
        pub fn requests(&self) -> Vec<(String, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for FixtureSource {
        async fn session_cookies(&self, _url: &str) -> Result<Vec<String>, ScraperError> {
            self.session_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.cookie.iter().cloned().collect())
        }

        async fn fetch(&self, url: &str, headers: &HeaderBundle) -> Result<String, ScraperError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), headers.cookie().to_string()));

            if self.failing.iter().any(|fragment| url.contains(fragment)) {
                return Err(ScraperError::Fetch(format!("connection reset: {}", url)));
            }

            Ok(self
                .pages
                .iter()
                .find(|(fragment, _)| url.contains(fragment.as_str()))
                .map(|(_, html)| html.clone())
                .unwrap_or_else(|| "<html><body></body></html>".to_string()))
        }
    }
}
