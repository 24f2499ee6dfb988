use super::song::{Song, SongTable};
use crate::error::{Result, SonglabError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Name of the identifier column
pub const SONG_COLUMN: &str = "song";

/// Prefix shared by the embedding coordinate columns (`PC1`, `PC2`, ...)
pub const DEFAULT_EMBEDDING_PREFIX: &str = "PC";

impl SongTable {
    /// Load the song table from a CSV file
    pub fn from_csv_path(path: impl AsRef<Path>, prefix: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SonglabError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let table = Self::from_csv_reader(file, prefix)?;
        info!(
            path = %path.display(),
            songs = table.len(),
            dim = table.dim(),
            "loaded song table"
        );
        Ok(table)
    }

    /// Parse a song table from any CSV source
    ///
    /// Every column whose header starts with `prefix` is an embedding coordinate,
    /// taken in header order. Columns other than `song` and the coordinates are
    /// ignored.
    pub fn from_csv_reader<R: Read>(reader: R, prefix: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = rdr.headers()?.clone();

        let song_idx = headers
            .iter()
            .position(|h| h.trim() == SONG_COLUMN)
            .ok_or_else(|| SonglabError::MissingColumn(SONG_COLUMN.to_string()))?;

        let emb_cols: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.trim().starts_with(prefix))
            .map(|(i, h)| (i, h.trim().to_string()))
            .collect();

        if emb_cols.is_empty() {
            return Err(SonglabError::NoEmbeddingColumns(prefix.to_string()));
        }
        debug!(columns = emb_cols.len(), "detected embedding columns");

        let mut songs = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let name = record.get(song_idx).unwrap_or_default().to_string();

            let mut embedding = Vec::with_capacity(emb_cols.len());
            for (col, header) in &emb_cols {
                let raw = record.get(*col).unwrap_or_default();
                let value = raw
                    .trim()
                    .parse::<f32>()
                    .map_err(|_| SonglabError::InvalidNumber {
                        song: name.clone(),
                        column: header.clone(),
                        value: raw.to_string(),
                    })?;
                embedding.push(value);
            }

            songs.push(Song { name, embedding });
        }

        let columns = emb_cols.into_iter().map(|(_, h)| h).collect();
        SongTable::new(songs, columns)
    }
}
