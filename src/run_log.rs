use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use fs_err::{self as fs, OpenOptions};

use crate::error::{LogWriteError, SetupError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn prepare_output_root(root: &Path) -> Result<(), SetupError> {
    fs::create_dir_all(root).map_err(|source| SetupError::CreateRoot {
        path: root.to_path_buf(),
        source,
    })
}

/// Append-only text log of a download run, mirrored to stdout.
///
/// The file is reopened on every [`RunLog::log`] call so each line is on disk
/// before the next item starts.
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn create(path: &Path) -> Result<Self, SetupError> {
        let start = format!("Log de Download - Início: {}\n\n", timestamp());

        fs::write(path, start).map_err(|source| SetupError::CreateLog {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log(&self, message: &str) -> Result<(), LogWriteError> {
        let error = |source| LogWriteError {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(error)?;

        writeln!(file, "{}", message).map_err(error)?;

        println!("{}", message);

        Ok(())
    }

    pub fn finish(&self) -> Result<(), LogWriteError> {
        self.log(&format!("\nLog de Download - Fim: {}", timestamp()))
    }
}
