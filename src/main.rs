use std::process;

use clap::Parser;
use itertools::Itertools;
use log::debug;

use recycling_image_downloader::options::Options;
use recycling_image_downloader::{run, Downloader, DuckDuckGo};

fn main() {
    let options = Options::parse();

    let log_filter = match options.verbosity {
        0 => "info",
        1 => "info,recycling_image_downloader=debug",
        2 => "info,recycling_image_downloader=trace",
        _ => "trace",
    };

    let log_env = env_logger::Env::default().default_filter_or(log_filter);

    env_logger::Builder::from_env(log_env)
        .format_module_path(false)
        .format_timestamp(None)
        // Indent following lines equal to the log level label, like `[ERROR] `
        .format_indent(Some(8))
        .init();

    let config = options.into_config();

    debug!(
        "Downloading {} images for: {}",
        config.count,
        config.categories.iter().join(", ")
    );

    let downloader = Downloader::new(
        &config.output_root,
        config.naming,
        config.fetch_timeout,
        DuckDuckGo::new(),
    );

    if let Err(err) = run(&config, &downloader) {
        log::error!("download run failed: {err:?}");
        process::exit(1);
    }
}
