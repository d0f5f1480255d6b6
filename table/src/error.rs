use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures while building the record store from the input table.
/// None of these ever reach the interactive session; the process reports
/// and exits before the UI starts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("column {name:?} not found in the header row")]
    ColumnNotFound { name: String },
}

/// Fatal failures while writing the annotated table back out.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush {path}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
