pub mod error;
pub mod wikipedia;

pub use error::FetchError;
pub use wikipedia::WikipediaSource;

use serde::Deserialize;

/// A single page summary retrieved from the encyclopedia service.
///
/// Constructed once per invocation from the response body and never
/// mutated afterwards. Both fields are non-empty when a fetch succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    /// Page title, shown highlighted on the first output line.
    pub title: String,
    /// Plain-language summary of the page.
    pub extract: String,
}

impl Page {
    pub fn new(title: &str, extract: &str) -> Self {
        Self {
            title: title.to_string(),
            extract: extract.to_string(),
        }
    }
}

/// Capability boundary for fetching a random page summary.
///
/// The console logic only sees this trait, so tests can substitute a
/// canned implementation without any network dependency.
pub trait PageSource {
    /// Fetch one random page from the given language edition.
    ///
    /// `language` is a short edition code such as "en" or "de". It must be
    /// non-empty; anything further is left for the remote service to judge.
    fn fetch(&self, language: &str) -> Result<Page, FetchError>;
}
