//! YellowBridge - Chinese dictionary lookups.
//!
//! This library provides functionality for:
//! - Acquiring a YellowBridge session and reusing it across requests
//! - Scraping stroke info, etymology, character details, example sentences
//!   and word meanings into typed records
//! - Aggregating several lookups for a character or word concurrently

pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod models;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use client::YellowBridge;
pub use config::Config;
pub use console::Console;
pub use error::{ConfigError, LookupError, ScraperError};
pub use models::{
    CharacterAggregate, CharacterDetails, CodeValue, Etymology, SampleSentence, StrokeInfo,
    WordAggregate, WordExamples, WordMeaning,
};
pub use session::HeaderBundle;
pub use source::{HttpSource, PageSource};
