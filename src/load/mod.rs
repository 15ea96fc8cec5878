use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::{LoadError, VoieRecord};

mod client;
mod file;
pub use client::DatasetClient;
pub use file::read_records;

/// Dataset location relative to the working directory.
pub const DEFAULT_DATASET: &str = "Data/voie.json";

/// Where the voies document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    Path(PathBuf),
}

impl DatasetSource {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DatasetSource::Url(location.to_string())
        } else {
            DatasetSource::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Url(url) => f.write_str(url),
            DatasetSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the whole dataset once. Failures are returned as-is, never retried.
pub async fn load_records(
    source: &DatasetSource,
    timeout_secs: Option<u64>,
) -> Result<Vec<VoieRecord>, LoadError> {
    let records = match source {
        DatasetSource::Url(url) => DatasetClient::new(timeout_secs)?.fetch(url).await?,
        DatasetSource::Path(path) => {
            let owned = path.clone();
            tokio::task::spawn_blocking(move || read_records(&owned))
                .await
                .map_err(|e| LoadError::Io {
                    path: path.clone(),
                    source: std::io::Error::other(e),
                })??
        }
    };

    info!("Loaded {} voies from {}", records.len(), source);
    Ok(records)
}

/// [`load_records`] with a "Chargement..." spinner on stderr while it runs.
pub async fn load_with_spinner(
    source: &DatasetSource,
    timeout_secs: Option<u64>,
) -> Result<Vec<VoieRecord>, LoadError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Chargement...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = load_records(source, timeout_secs).await;
    spinner.finish_and_clear();
    result
}
