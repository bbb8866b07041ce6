use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use serde::Deserialize;
use ureq::{Agent, AgentBuilder};
use url::Url;

use super::{ImageSearch, SearchResult};
use crate::error::ProviderError;

const BASE_URL: &str = "https://duckduckgo.com/";
const IMAGES_URL: &str = "https://duckduckgo.com/i.js";
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

lazy_static! {
    static ref VQD: Regex = Regex::new(r#"vqd=["']?([0-9-]+)"#).unwrap();
}

#[derive(Debug, Deserialize)]
struct ImagesPage {
    #[serde(default)]
    results: Vec<SearchResult>,
    next: Option<String>,
}

pub struct DuckDuckGo {
    agent: Agent,
}

impl ImageSearch for DuckDuckGo {
    fn search_images(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        let mut results = Vec::new();

        if max_results == 0 {
            return Ok(results);
        }

        let vqd = self.fetch_token(query)?;
        debug!("Searching images for {:?} (vqd {})", query, vqd);

        let mut offset = 0;

        loop {
            let page = self.fetch_page(query, &vqd, offset)?;
            trace!("Offset {} returned {} results", offset, page.results.len());

            if page.results.is_empty() {
                break;
            }

            results.extend(page.results);

            if results.len() >= max_results {
                break;
            }

            match page.next.as_deref().and_then(next_offset) {
                Some(next) if next > offset => offset = next,
                _ => break,
            }
        }

        results.truncate(max_results);

        Ok(results)
    }
}

impl DuckDuckGo {
    pub fn new() -> Self {
        let agent = AgentBuilder::new().user_agent(USER_AGENT).build();

        DuckDuckGo { agent }
    }

    fn fetch_token(&self, query: &str) -> Result<String, ProviderError> {
        let url = Url::parse_with_params(BASE_URL, &[("q", query)])
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let html = self
            .get(&url)?
            .into_string()
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        extract_vqd(&html)
            .map(str::to_string)
            .ok_or(ProviderError::MissingToken)
    }

    fn fetch_page(
        &self,
        query: &str,
        vqd: &str,
        offset: usize,
    ) -> Result<ImagesPage, ProviderError> {
        let offset = offset.to_string();

        let url = Url::parse_with_params(
            IMAGES_URL,
            &[
                ("l", "wt-wt"),
                ("o", "json"),
                ("q", query),
                ("vqd", vqd),
                ("f", ",,,,,"),
                ("p", "1"),
                ("s", offset.as_str()),
            ],
        )
        .map_err(|e| ProviderError::Http(e.to_string()))?;

        let response = self.get(&url)?;

        serde_json::from_reader(response.into_reader())
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))
    }

    fn get(&self, url: &Url) -> Result<ureq::Response, ProviderError> {
        self.agent
            .request_url("GET", url)
            .set("Referer", BASE_URL)
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => ProviderError::Status(code),
                ureq::Error::Transport(transport) => ProviderError::Http(transport.to_string()),
            })
    }
}

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_vqd(html: &str) -> Option<&str> {
    VQD.captures(html)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str())
}

/// Reads the `s` offset out of a relative `next` link such as
/// `i.js?q=papel&o=json&s=100&vqd=...`.
fn next_offset(next: &str) -> Option<usize> {
    let url = Url::parse(BASE_URL).ok()?.join(next).ok()?;

    url.query_pairs()
        .find(|(key, _)| key == "s")
        .and_then(|(_, value)| value.parse().ok())
}
