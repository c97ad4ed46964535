//! Session acquisition.
//!
//! YellowBridge only serves full pages to requests carrying a session cookie
//! and a referer from the dictionary itself. The cookie is fetched once from
//! the landing page and bundled with that referer.

use crate::error::ScraperError;
use crate::source::PageSource;
use tracing::debug;

/// Referer and session cookie sent with every scrape request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBundle {
    referer: String,
    cookie: String,
}

impl HeaderBundle {
    /// Creates a bundle, rejecting an empty cookie.
    pub fn new(referer: impl Into<String>, cookie: impl Into<String>) -> Result<Self, ScraperError> {
        let cookie = cookie.into();
        if cookie.trim().is_empty() {
            return Err(ScraperError::no_cookie());
        }

        Ok(Self {
            referer: referer.into(),
            cookie,
        })
    }

    /// Value of the `Referer` request header.
    pub fn referer(&self) -> &str {
        &self.referer
    }

    /// Value of the `Cookie` request header (`name=value`).
    pub fn cookie(&self) -> &str {
        &self.cookie
    }
}

/// Extracts `name=value` from the first `Set-Cookie` value.
pub fn parse_session_cookie(set_cookie: &[String]) -> Option<String> {
    let first = set_cookie.first()?;
    let pair = first.split(';').next().unwrap_or_default().trim();
    if pair.is_empty() {
        None
    } else {
        Some(pair.to_string())
    }
}

/// Requests the landing page once and builds a header bundle from its cookie.
///
/// The landing page URL doubles as the referer for later requests.
pub async fn acquire_session<S>(source: &S, landing_url: &str) -> Result<HeaderBundle, ScraperError>
where
    S: PageSource + ?Sized,
{
    debug!(url = landing_url, "acquiring session cookie");

    let set_cookie = source.session_cookies(landing_url).await?;
    let cookie = parse_session_cookie(&set_cookie).ok_or_else(ScraperError::no_cookie)?;

    debug!("session cookie acquired");
    HeaderBundle::new(landing_url, cookie)
}
