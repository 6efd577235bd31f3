use thiserror::Error;

/// Result type alias for timeline CSV operations
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors that can occur reading or writing a timeline CSV
#[derive(Error, Debug)]
pub enum CsvError {
    /// Header is missing one or more required columns. Reported before
    /// any row is processed.
    #[error("missing required column(s): {}", columns.join(", "))]
    MissingColumns {
        /// The absent column names, in canonical column order
        columns: Vec<String>,
    },

    /// Underlying CSV parse/serialize failure
    #[error("timeline CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure opening or creating the timeline file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the file being opened or created
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CsvError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
