use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column \"{column}\"")]
    MissingColumn { column: &'static str },

    #[error("complaint text is required")]
    EmptyComplaint,

    #[error("hospital dataset is unavailable or empty")]
    DatasetUnavailable,
}
