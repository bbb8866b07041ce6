mod duckduckgo;

#[cfg(test)]
mod mock_search;

use serde::Deserialize;

use crate::error::{ItemError, ProviderError};

pub use duckduckgo::DuckDuckGo;

#[cfg(test)]
pub use mock_search::MockSearch;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResult {
    pub image: Option<String>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub source: Option<String>,
}

impl SearchResult {
    pub fn with_image(image: &str) -> Self {
        Self {
            image: Some(image.to_string()),
            ..Self::default()
        }
    }

    pub fn image_url(&self) -> Result<&str, ItemError> {
        self.image.as_deref().ok_or(ItemError::MalformedResult)
    }
}

pub trait ImageSearch {
    fn search_images(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, ProviderError>;
}
