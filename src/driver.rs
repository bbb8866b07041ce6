use log::{debug, info};

use crate::config::Config;
use crate::downloader::{CategorySummary, Downloader, FileDownloader};
use crate::error::RunError;
use crate::run_log::{prepare_output_root, RunLog};
use crate::search::ImageSearch;

/// Runs the whole job: output setup, every category in order, closing line.
///
/// Per-item and per-category failures only show up in the log. The returned
/// error is reserved for setup and log write failures.
pub fn run<T, S>(
    config: &Config,
    downloader: &Downloader<T, S>,
) -> Result<CategorySummary, RunError>
where
    T: FileDownloader,
    S: ImageSearch,
{
    prepare_output_root(&config.output_root)?;

    let log = RunLog::create(&config.log_file)?;
    debug!("Logging to {}", log.path().display());

    let mut total = CategorySummary::default();

    for category in &config.categories {
        let summary = downloader.process(category, config.count, &log)?;

        total.saved += summary.saved;
        total.failed += summary.failed;
    }

    log.finish()?;

    info!("{} images saved, {} failed", total.saved, total.failed);
    println!("Download Concluído!");

    Ok(total)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use itertools::Itertools;

    use super::run;
    use crate::downloader::tests::{png_bytes, results};
    use crate::downloader::{CategorySummary, MockFetcher, Response};
    use crate::error::{RunError, SetupError};
    use crate::error::ProviderError;
    use crate::search::{ImageSearch, MockSearch, SearchResult};
    use crate::{Config, Downloader};

    /// Turns the log file into a directory on its first query, so every
    /// later append fails.
    struct LogBreakingSearch {
        log_file: PathBuf,
        queries: RefCell<Vec<String>>,
    }

    impl ImageSearch for LogBreakingSearch {
        fn search_images(
            &self,
            query: &str,
            max_results: usize,
        ) -> Result<Vec<SearchResult>, ProviderError> {
            self.queries.borrow_mut().push(query.to_string());

            if self.log_file.is_file() {
                std::fs::remove_file(&self.log_file).unwrap();
                std::fs::create_dir(&self.log_file).unwrap();
            }

            Ok(results(max_results.min(2)))
        }
    }

    fn config(dir: &std::path::Path) -> Config {
        Config {
            output_root: dir.join("imagens_reciclagem"),
            log_file: dir.join("log_download.txt"),
            ..Config::default()
        }
    }

    #[test]
    fn test_full_run_over_all_categories() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        let fetcher = MockFetcher::new((0..210).map(|_| Response::ok(png_bytes())).collect());
        let search = MockSearch::new((0..7).map(|_| Ok(results(30))).collect());

        let downloader =
            Downloader::with_fetcher(&config.output_root, config.naming, fetcher, search);

        // Act

        let total = run(&config, &downloader).unwrap();

        // Assert

        assert_eq!(total, CategorySummary { saved: 210, failed: 0 });

        let content = std::fs::read_to_string(&config.log_file).unwrap();
        let lines = content.lines().filter(|line| !line.is_empty()).collect_vec();

        assert_eq!(lines.len(), 212);
        assert!(lines[0].starts_with("Log de Download - Início: "));
        assert!(lines[1..211]
            .iter()
            .all(|line| line.starts_with("Salvo com sucesso: ")));
        assert!(lines[211].starts_with("Log de Download - Fim: "));

        let queried = downloader
            .search()
            .queries()
            .into_iter()
            .map(|(query, _)| query)
            .collect_vec();

        assert_eq!(queried, config.categories);

        for category in &config.categories {
            let files = std::fs::read_dir(config.output_root.join(category))
                .unwrap()
                .count();

            assert_eq!(files, 30);
        }
    }

    #[test]
    fn test_rerun_with_existing_root() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            categories: vec!["reciclagem de vidro".to_string()],
            ..config(dir.path())
        };

        for _ in 0..2 {
            let downloader = Downloader::with_fetcher(
                &config.output_root,
                config.naming,
                MockFetcher::new(vec![Response::timed_out()]),
                MockSearch::new(vec![Ok(results(1))]),
            );

            run(&config, &downloader).unwrap();
        }

        assert!(config.output_root.is_dir());

        let content = std::fs::read_to_string(&config.log_file).unwrap();

        assert_eq!(content.matches("Log de Download - Início").count(), 1);
        assert_eq!(
            content.matches("Erro ao baixar imagem 0 de reciclagem de vidro").count(),
            1
        );
    }

    #[test]
    fn test_unusable_output_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("imagens_reciclagem");
        std::fs::write(&blocker, "not a directory").unwrap();

        let config = config(dir.path());

        let downloader = Downloader::with_fetcher(
            &config.output_root,
            config.naming,
            MockFetcher::new(vec![]),
            MockSearch::new(vec![]),
        );

        let err = run(&config, &downloader).unwrap_err();

        assert!(matches!(err, RunError::Setup(SetupError::CreateRoot { .. })));
        assert!(!config.log_file.exists());
        assert!(downloader.search().queries().is_empty());
    }

    #[test]
    fn test_log_write_failure_ends_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        let search = LogBreakingSearch {
            log_file: config.log_file.clone(),
            queries: RefCell::new(Vec::new()),
        };

        let downloader = Downloader::with_fetcher(
            &config.output_root,
            config.naming,
            MockFetcher::new(vec![Response::ok(png_bytes()), Response::ok(png_bytes())]),
            search,
        );

        // Act

        let err = run(&config, &downloader).unwrap_err();

        // Assert

        assert!(matches!(err, RunError::LogWrite(_)), "{:?}", err);
        assert_eq!(
            *downloader.search().queries.borrow(),
            vec![config.categories[0].clone()]
        );
    }
}
