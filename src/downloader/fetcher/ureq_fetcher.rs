use std::error::Error;
use std::io::{self, Read};
use std::time::Duration;

use log::trace;
use ureq::{Agent, AgentBuilder, Transport};

use super::{FileDownloader, Response};

const MAX_BODY_BYTES: u64 = 32 * 1024 * 1024;

pub struct UReqFetcher {
    agent: Agent,
    max_body_bytes: u64,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let mut body = Vec::new();

                // One byte past the limit tells an oversized body from one that fits exactly.
                let read = response
                    .into_reader()
                    .take(self.max_body_bytes + 1)
                    .read_to_end(&mut body);

                match read {
                    Ok(size) if size as u64 > self.max_body_bytes => {
                        trace!("Body of {} exceeds {} bytes", url, self.max_body_bytes);
                        Response::invalid_body()
                    }
                    Ok(size) => {
                        trace!("Fetched {} bytes from {}", size, url);
                        Response::ok(body)
                    }
                    Err(err) if is_timeout(&err) => Response::timed_out(),
                    Err(_) => Response::invalid_body(),
                }
            }

            Err(ureq::Error::Status(404, _)) => Response::not_found(),

            Err(ureq::Error::Status(code, _)) => Response::status(code),

            Err(ureq::Error::Transport(transport)) => {
                if transport_timed_out(&transport) {
                    Response::timed_out()
                } else {
                    Response::network_error(transport.to_string())
                }
            }
        }
    }
}

impl UReqFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = AgentBuilder::new().timeout(timeout).build();

        UReqFetcher {
            agent,
            max_body_bytes: MAX_BODY_BYTES,
        }
    }

    pub fn with_body_limit(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

fn is_timeout(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
    )
}

fn transport_timed_out(transport: &Transport) -> bool {
    transport
        .source()
        .and_then(|source| source.downcast_ref::<io::Error>())
        .map_or(false, is_timeout)
}
