use std::path::PathBuf;
use std::time::Duration;

use crate::categories::categories;
use crate::naming::FolderNaming;

pub const OUTPUT_ROOT: &str = "imagens_reciclagem";
pub const LOG_FILE: &str = "log_download.txt";
pub const IMAGES_PER_CATEGORY: usize = 30;
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_root: PathBuf,
    pub log_file: PathBuf,
    pub count: usize,
    pub fetch_timeout: Duration,
    pub naming: FolderNaming,
    pub categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(OUTPUT_ROOT),
            log_file: PathBuf::from(LOG_FILE),
            count: IMAGES_PER_CATEGORY,
            fetch_timeout: FETCH_TIMEOUT,
            naming: FolderNaming::default(),
            categories: categories(),
        }
    }
}
