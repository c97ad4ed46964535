//! YellowBridge dictionary client.
//!
//! Provides the five single-page lookups and the two aggregates that fan
//! several lookups out over one shared session.

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::{LookupError, ScraperError};
use crate::extractors::{details, etymology, examples, meaning, stroke};
use crate::models::{
    CharacterAggregate, CharacterDetails, Etymology, StrokeInfo, WordAggregate, WordExamples,
    WordMeaning,
};
use crate::session::{HeaderBundle, acquire_session};
use crate::source::{HttpSource, PageSource};
use std::borrow::Cow;
use tracing::{debug, info};
use url::Url;

/// Landing page that hands out the session cookie; also used as referer.
const LANDING_PATH: &str = "character-dictionary.php";

/// Client for the YellowBridge Chinese dictionary.
pub struct YellowBridge<S = HttpSource> {
    source: S,
    base_url: Url,
}

impl YellowBridge<HttpSource> {
    /// Creates a live client from the configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;
        let source = HttpSource::new(&config.http)?;
        Ok(Self::with_base_url(source, config.base_url()?))
    }
}

impl<S: PageSource> YellowBridge<S> {
    /// Creates a client for the live site using the given page source.
    pub fn new(source: S) -> Result<Self, ScraperError> {
        Ok(Self::with_base_url(source, Url::parse(DEFAULT_BASE_URL)?))
    }

    /// Creates a client resolving pages against `base_url`.
    pub fn with_base_url(source: S, base_url: Url) -> Self {
        Self { source, base_url }
    }

    /// The underlying page source.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn landing_url(&self) -> Result<Url, ScraperError> {
        Ok(self.base_url.join(LANDING_PATH)?)
    }

    /// Builds `<base><path>?<param>=<term>`, percent-encoding the term.
    fn page_url(&self, path: &str, param: &str, term: &str) -> Result<Url, ScraperError> {
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut().append_pair(param, term);
        Ok(url)
    }

    async fn session(&self) -> Result<HeaderBundle, ScraperError> {
        acquire_session(&self.source, self.landing_url()?.as_str()).await
    }

    /// Uses the caller's bundle or acquires a fresh one.
    async fn session_or<'a>(
        &self,
        headers: Option<&'a HeaderBundle>,
    ) -> Result<Cow<'a, HeaderBundle>, ScraperError> {
        match headers {
            Some(headers) => Ok(Cow::Borrowed(headers)),
            None => Ok(Cow::Owned(self.session().await?)),
        }
    }

    /// Fetches a session cookie and returns the header bundle to reuse
    /// across later lookups.
    pub async fn headers(&self) -> Result<HeaderBundle, LookupError> {
        Ok(self.session().await?)
    }

    /// Fetches a page with the given headers, acquiring a session first
    /// when none are supplied.
    pub async fn fetch_page(
        &self,
        url: &str,
        headers: Option<&HeaderBundle>,
    ) -> Result<String, LookupError> {
        Ok(self.fetch_raw(url, headers).await?)
    }

    async fn fetch_raw(
        &self,
        url: &str,
        headers: Option<&HeaderBundle>,
    ) -> Result<String, ScraperError> {
        let headers = self.session_or(headers).await?;
        self.source.fetch(url, &headers).await
    }

    async fn lookup<T>(
        &self,
        path: &str,
        param: &str,
        term: &str,
        headers: Option<&HeaderBundle>,
        parse: fn(&str) -> Result<T, ScraperError>,
    ) -> Result<T, LookupError> {
        let url = self.page_url(path, param, term)?;
        let html = self.fetch_raw(url.as_str(), headers).await?;
        debug!(url = url.as_str(), bytes = html.len(), "parsing page");
        Ok(parse(&html)?)
    }

    /// Stroke count, radical and structure of a character or word.
    pub async fn stroke_info(
        &self,
        word: &str,
        headers: Option<&HeaderBundle>,
    ) -> Result<StrokeInfo, LookupError> {
        self.lookup(stroke::PATH, stroke::PARAM, word, headers, stroke::parse)
            .await
    }

    /// Etymology of a single character.
    pub async fn etymology(
        &self,
        character: &str,
        headers: Option<&HeaderBundle>,
    ) -> Result<Etymology, LookupError> {
        self.lookup(
            etymology::PATH,
            etymology::PARAM,
            character,
            headers,
            etymology::parse,
        )
        .await
    }

    /// Readings, ranks, related characters and encodings of a single character.
    pub async fn character_details(
        &self,
        character: &str,
        headers: Option<&HeaderBundle>,
    ) -> Result<CharacterDetails, LookupError> {
        self.lookup(
            details::PATH,
            details::PARAM,
            character,
            headers,
            details::parse,
        )
        .await
    }

    /// Example sentences for a character or word.
    pub async fn word_examples(
        &self,
        word: &str,
        headers: Option<&HeaderBundle>,
    ) -> Result<WordExamples, LookupError> {
        self.lookup(
            examples::PATH,
            examples::PARAM,
            word,
            headers,
            examples::parse,
        )
        .await
    }

    /// Meaning, readings and related words of a character or word.
    pub async fn word_meaning(
        &self,
        word: &str,
        headers: Option<&HeaderBundle>,
    ) -> Result<WordMeaning, LookupError> {
        self.lookup(meaning::PATH, meaning::PARAM, word, headers, meaning::parse)
            .await
    }

    /// Runs all five lookups for a single character concurrently.
    ///
    /// A session is acquired once when `headers` is `None` and shared by
    /// every lookup. The first failing lookup fails the whole aggregate.
    pub async fn character_aggregate(
        &self,
        character: &str,
        headers: Option<&HeaderBundle>,
    ) -> Result<CharacterAggregate, LookupError> {
        let headers = self.session_or(headers).await?;
        let shared = Some(headers.as_ref());

        let (stroke_info, etymology, details, examples, meaning) = futures::try_join!(
            self.stroke_info(character, shared),
            self.etymology(character, shared),
            self.character_details(character, shared),
            self.word_examples(character, shared),
            self.word_meaning(character, shared),
        )?;

        info!(word = character, "character aggregate complete");
        Ok(CharacterAggregate {
            word: character.to_string(),
            stroke_info,
            etymology,
            details,
            examples,
            meaning,
        })
    }

    /// Runs the stroke, example and meaning lookups for a word concurrently.
    ///
    /// Etymology and details only exist for single characters and are not
    /// requested.
    pub async fn word_aggregate(
        &self,
        word: &str,
        headers: Option<&HeaderBundle>,
    ) -> Result<WordAggregate, LookupError> {
        let headers = self.session_or(headers).await?;
        let shared = Some(headers.as_ref());

        let (stroke_info, examples, meaning) = futures::try_join!(
            self.stroke_info(word, shared),
            self.word_examples(word, shared),
            self.word_meaning(word, shared),
        )?;

        info!(word, "word aggregate complete");
        Ok(WordAggregate {
            word: word.to_string(),
            stroke_info,
            examples,
            meaning,
        })
    }
}
