use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SizingError {
    #[error("Unsupported fuel type '{0}': only 'fuel' (kerosene) and 'h2' (liquid hydrogen) are supported")]
    UnsupportedFuelType(String),

    #[error("Unknown aircraft parameter '{0}'")]
    UnknownParameter(String),

    #[error("Failed to write table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Plot error: {0}")]
    Plot(String),
}

pub type SizingResult<T> = Result<T, SizingError>;
