use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the voies dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that end a district page before any list is shown.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Code postal manquant")]
    MissingParameter,

    #[error("Arrondissement inconnu : {0}")]
    UnknownDistrict(String),

    #[error("Erreur lors du chargement des données: {0}")]
    Load(#[from] LoadError),
}
