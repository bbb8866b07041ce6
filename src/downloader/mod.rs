mod fetcher;

use std::path::{Path, PathBuf};
use std::time::Duration;

use fs_err as fs;
use image::ImageFormat;
use log::{debug, info, warn};
use url::Url;

use crate::error::{CategoryError, FetchError, ItemError, LogWriteError};
use crate::naming::FolderNaming;
use crate::run_log::RunLog;
use crate::search::{ImageSearch, SearchResult};

pub use fetcher::{FileDownloader, Response, UReqFetcher};

#[cfg(test)]
pub(crate) use fetcher::MockFetcher;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    pub saved: usize,
    pub failed: usize,
}

pub struct Downloader<T: FileDownloader, S: ImageSearch> {
    fetcher: T,
    search: S,
    root: PathBuf,
    naming: FolderNaming,
}

impl<T, S> Downloader<T, S>
where
    T: FileDownloader,
    S: ImageSearch,
{
    pub fn with_fetcher(root: &Path, naming: FolderNaming, fetcher: T, search: S) -> Self {
        Downloader {
            fetcher,
            search,
            root: root.to_path_buf(),
            naming,
        }
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    pub fn folder_for(&self, category: &str) -> PathBuf {
        self.root.join(self.naming.derive(category))
    }

    /// Downloads up to `count` images for `category`, logging one line per
    /// search result. Only a failing log write is returned as an error.
    pub fn process(
        &self,
        category: &str,
        count: usize,
        log: &RunLog,
    ) -> Result<CategorySummary, LogWriteError> {
        let mut summary = CategorySummary::default();

        let (folder, results) = match self.prepare(category, count) {
            Ok(prepared) => prepared,
            Err(err) => {
                warn!("Skipping {:?}: {}", category, err);
                log.log(&format!("Erro ao buscar imagens de {}: {}", category, err))?;
                return Ok(summary);
            }
        };

        for (idx, result) in results.iter().enumerate() {
            match self.fetch_and_store(&folder, category, idx, result) {
                Ok(path) => {
                    summary.saved += 1;
                    log.log(&format!("Salvo com sucesso: {}", path.display()))?;
                }
                Err(err) => {
                    summary.failed += 1;
                    log.log(&format!(
                        "Erro ao baixar imagem {} de {}: {}",
                        idx, category, err
                    ))?;
                }
            }
        }

        info!(
            "{}: {} saved, {} failed",
            category, summary.saved, summary.failed
        );

        Ok(summary)
    }

    fn prepare(
        &self,
        category: &str,
        count: usize,
    ) -> Result<(PathBuf, Vec<SearchResult>), CategoryError> {
        let folder = self.folder_for(category);

        fs::create_dir_all(&folder).map_err(|source| CategoryError::CreateFolder {
            path: folder.clone(),
            source,
        })?;

        let mut results = self.search.search_images(category, count)?;
        results.truncate(count);

        debug!("{} results for {:?}", results.len(), category);

        Ok((folder, results))
    }

    pub fn fetch_and_store(
        &self,
        folder: &Path,
        category: &str,
        idx: usize,
        result: &SearchResult,
    ) -> Result<PathBuf, ItemError> {
        let url = result.image_url()?;

        let body = self.download(url)?;

        let image = image::load_from_memory(&body).map_err(ItemError::Decode)?;

        let path = folder.join(self.naming.file_name(category, idx));

        image
            .to_rgb8()
            .save_with_format(&path, ImageFormat::Jpeg)
            .map_err(|source| ItemError::Save {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }

    pub fn download(&self, url: &str) -> Result<Vec<u8>, ItemError> {
        let url = Url::parse(url).map_err(|_| ItemError::InvalidUrl(url.to_string()))?;

        let response = self.fetcher.fetch(url.as_str());

        match response {
            Response::Ok(body) => Ok(body),
            Response::InvalidBody => Err(FetchError::InvalidBody.into()),
            Response::NotFound => Err(FetchError::NotFound.into()),
            Response::Status(code) => Err(FetchError::Status(code).into()),
            Response::TimedOut => Err(FetchError::TimedOut.into()),
            Response::NetworkError(detail) => Err(FetchError::Network(detail).into()),
        }
    }
}

impl<S: ImageSearch> Downloader<UReqFetcher, S> {
    pub fn new(root: &Path, naming: FolderNaming, timeout: Duration, search: S) -> Self {
        let fetcher = UReqFetcher::new(timeout);
        Downloader::with_fetcher(root, naming, fetcher, search)
    }
}
