use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::naming::FolderNaming;

#[derive(Debug, Parser)]
#[clap(about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Options {
    /// Directory that receives one folder per category.
    #[clap(long)]
    pub output_root: Option<PathBuf>,

    /// Path of the download log, truncated at the start of every run.
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// Maximum number of images requested per category.
    #[clap(long)]
    pub count: Option<usize>,

    /// Timeout in seconds for each image download.
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// How category names become folder and file names.
    #[clap(long, value_enum)]
    pub folder_naming: Option<FolderNaming>,

    /// Search term to process instead of the built-in recycling categories.
    /// Can be given multiple times.
    #[clap(long = "category")]
    pub categories: Vec<String>,

    /// Sets verbosity level. Can be specified multiple times to increase the verbosity
    /// of this program.
    #[clap(long = "verbose", short, action(clap::ArgAction::Count))]
    pub verbosity: u8,
}

impl Options {
    pub fn into_config(self) -> Config {
        let defaults = Config::default();

        Config {
            output_root: self.output_root.unwrap_or(defaults.output_root),
            log_file: self.log_file.unwrap_or(defaults.log_file),
            count: self.count.unwrap_or(defaults.count),
            fetch_timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
            naming: self.folder_naming.unwrap_or(defaults.naming),
            categories: if self.categories.is_empty() {
                defaults.categories
            } else {
                self.categories
            },
        }
    }
}
