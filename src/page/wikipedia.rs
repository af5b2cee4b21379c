use super::{FetchError, Page, PageSource};
use reqwest::blocking::Client;
use url::Url;

/// Template for the random-summary REST resource; `{language}` selects
/// the language edition (its subdomain in the real service).
const ENDPOINT: &str = "https://{language}.wikipedia.org/api/rest_v1/page/random/summary";

const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// `PageSource` backed by the Wikipedia REST API.
///
/// One blocking GET per `fetch` call, no retries, default client timeouts.
pub struct WikipediaSource {
    client: Client,
    endpoint: String,
}

impl WikipediaSource {
    pub fn new() -> Result<Self, FetchError> {
        // The service rejects clients without an identifying User-Agent.
        let client = Client::builder()
            .user_agent(concat!("random-wiki/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: ENDPOINT.to_string(),
        })
    }

    /// Replace the endpoint template. The template must contain a
    /// `{language}` placeholder. Used by tests to point at a local server.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }
}

impl PageSource for WikipediaSource {
    fn fetch(&self, language: &str) -> Result<Page, FetchError> {
        let url = Url::parse(&self.endpoint.replace(LANGUAGE_PLACEHOLDER, language))?;

        log::debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("random summary request failed with HTTP {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let page: Page = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedBody(e.to_string()))?;

        if page.title.is_empty() || page.extract.is_empty() {
            return Err(FetchError::MalformedBody(
                "empty title or extract".to_string(),
            ));
        }

        Ok(page)
    }
}
