use std::cell::RefCell;
use std::collections::VecDeque;

use super::{ImageSearch, SearchResult};
use crate::error::ProviderError;

pub struct MockSearch {
    answers: RefCell<VecDeque<Result<Vec<SearchResult>, ProviderError>>>,
    queries: RefCell<Vec<(String, usize)>>,
}

impl ImageSearch for MockSearch {
    fn search_images(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        self.queries
            .borrow_mut()
            .push((query.to_string(), max_results));

        match self.answers.borrow_mut().pop_front() {
            Some(Ok(results)) => Ok(results.into_iter().take(max_results).collect()),
            Some(Err(err)) => Err(err),
            None => Ok(Vec::new()),
        }
    }
}

impl MockSearch {
    pub fn new(answers: Vec<Result<Vec<SearchResult>, ProviderError>>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.borrow().clone()
    }
}
