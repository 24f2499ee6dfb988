use thiserror::Error;

#[derive(Error, Debug)]
pub enum SonglabError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed song table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed model artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Song table has no '{0}' column")]
    MissingColumn(String),

    #[error("Song table has no embedding columns with prefix '{0}'")]
    NoEmbeddingColumns(String),

    #[error("Duplicate song identifier in table: {0}")]
    DuplicateSong(String),

    #[error("Invalid number '{value}' in column {column} for song {song}")]
    InvalidNumber {
        song: String,
        column: String,
        value: String,
    },

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Model has {labels} labels but the song table has {rows} rows")]
    LabelCountMismatch { labels: usize, rows: usize },

    #[error("Label {label} out of range (model has {n_clusters} clusters)")]
    LabelOutOfRange { label: usize, n_clusters: usize },

    #[error("Model has no cluster centers")]
    EmptyModel,

    #[error("Unknown cohort: {0}")]
    UnknownCohort(String),
}

pub type Result<T> = std::result::Result<T, SonglabError>;
