//!
//! The append-only benchmark history store.
//!

pub mod error;
pub mod script;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::model::dataset::entry::Entry;
use crate::model::dataset::Dataset;

use self::error::Error;

/// The mode of a newly created data file, readable by the web server serving the dashboard.
pub const NEW_FILE_MODE: u32 = 0o644;

///
/// The benchmark store configuration.
///
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the data file, for example `benchmarks/data.js`.
    pub data_file: PathBuf,
    /// URL of the benchmarked repository.
    /// If empty, the URL stored in the data file is kept.
    pub repo_url: String,
}

impl Config {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(data_file: PathBuf, repo_url: String) -> Self {
        Self {
            data_file,
            repo_url,
        }
    }
}

///
/// The append-only benchmark history store, backed by a single data file.
///
/// The whole file is rewritten on every append. There is no locking, so the
/// store expects a single writer.
///
#[derive(Debug)]
pub struct Store {
    /// The store configuration.
    config: Config,
}

impl Store {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    ///
    /// Returns the path to the data file.
    ///
    pub fn path(&self) -> &Path {
        self.config.data_file.as_path()
    }

    ///
    /// Reads the whole dataset.
    ///
    /// A missing data file yields an empty dataset.
    ///
    pub fn read(&self) -> Result<Dataset, Error> {
        let path = self.path();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Data file {path:?} does not exist, starting a new history");
                return Ok(Dataset::new(self.config.repo_url.clone()));
            }
            Err(error) => {
                return Err(Error::Reading {
                    error,
                    path: path.to_path_buf(),
                })
            }
        };
        if text.trim().is_empty() {
            return Err(Error::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        let dataset = script::decode(text.as_str()).map_err(|error| Error::Decoding {
            error,
            path: path.to_path_buf(),
        })?;
        log::debug!(
            "Read {} suite(s) from data file {path:?}",
            dataset.entries.len()
        );
        Ok(dataset)
    }

    ///
    /// Appends the entry to the end of the suite and rewrites the data file.
    ///
    /// Returns the dataset as written.
    ///
    pub fn append(&self, suite: &str, entry: Entry) -> Result<Dataset, Error> {
        self.append_at(suite, entry, chrono::Utc::now().timestamp_millis())
    }

    ///
    /// Appends the entry as of `now`, in epoch milliseconds, and rewrites the data file.
    ///
    pub fn append_at(&self, suite: &str, entry: Entry, now: i64) -> Result<Dataset, Error> {
        let mut dataset = self.read()?;
        if !self.config.repo_url.is_empty() {
            dataset.repo_url.clone_from(&self.config.repo_url);
        }

        let commit = entry.commit.id.clone();
        let benches = entry.benches.len();
        dataset
            .append(suite, entry, now)
            .map_err(|error| Error::Validation {
                error,
                path: self.path().to_path_buf(),
            })?;
        self.write(&dataset)?;

        log::info!(
            "Appended {benches} bench(es) for commit {commit} to suite `{suite}` ({} entries)",
            dataset.suite(suite).len()
        );
        Ok(dataset)
    }

    ///
    /// Replaces the data file contents with the dataset.
    ///
    /// The script is written to a temporary file next to the data file and renamed over it,
    /// so the data file is never left truncated.
    ///
    fn write(&self, dataset: &Dataset) -> Result<(), Error> {
        let path = self.path();
        let script = script::encode(dataset).map_err(|error| Error::Encoding {
            error,
            path: path.to_path_buf(),
        })?;

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let writing_error = |error: std::io::Error| Error::Writing {
            error,
            path: path.to_path_buf(),
        };
        std::fs::create_dir_all(directory).map_err(writing_error)?;

        let permissions = Self::permissions(path).map_err(writing_error)?;
        let mut file = tempfile::NamedTempFile::new_in(directory).map_err(writing_error)?;
        file.write_all(script.as_bytes()).map_err(writing_error)?;
        if let Some(permissions) = permissions {
            file.as_file()
                .set_permissions(permissions)
                .map_err(writing_error)?;
        }
        file.as_file().sync_all().map_err(writing_error)?;
        file.persist(path)
            .map_err(|error| writing_error(error.error))?;

        log::debug!("Wrote {} bytes to data file {path:?}", script.len());
        Ok(())
    }

    ///
    /// Returns the permissions the rewritten data file must carry.
    ///
    /// The temporary file is created owner-only, so an existing data file keeps its own
    /// permissions and a new one gets [`NEW_FILE_MODE`] on Unix.
    ///
    fn permissions(path: &Path) -> std::io::Result<Option<std::fs::Permissions>> {
        match std::fs::metadata(path) {
            Ok(metadata) => Ok(Some(metadata.permissions())),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    Ok(Some(std::fs::Permissions::from_mode(NEW_FILE_MODE)))
                }
                #[cfg(not(unix))]
                {
                    Ok(None)
                }
            }
            Err(error) => Err(error),
        }
    }
}
