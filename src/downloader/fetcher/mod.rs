mod ureq_fetcher;

#[cfg(test)]
mod mock_fetcher;

pub use ureq_fetcher::UReqFetcher;

#[cfg(test)]
pub use mock_fetcher::MockFetcher;

#[derive(Debug)]
pub enum Response {
    Ok(Vec<u8>),
    InvalidBody,
    NotFound,
    Status(u16),
    TimedOut,
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn timed_out() -> Self {
        Self::TimedOut
    }

    pub fn network_error(detail: impl Into<String>) -> Self {
        Self::NetworkError(detail.into())
    }
}

pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}
