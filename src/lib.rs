pub mod categories;
pub mod config;
pub mod downloader;
pub mod driver;
pub mod error;
pub mod naming;
pub mod options;
pub mod run_log;
pub mod search;

pub use config::Config;
pub use downloader::{Downloader, FileDownloader, Response, UReqFetcher};
pub use driver::run;
pub use naming::FolderNaming;
pub use run_log::RunLog;
pub use search::{DuckDuckGo, ImageSearch, SearchResult};
