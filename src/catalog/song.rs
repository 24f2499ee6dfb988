use crate::error::{Result, SonglabError};
use std::collections::HashMap;

/// A single row of the song table
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Unique identifier (the `song` column)
    pub name: String,
    /// Embedding coordinates, in header order
    pub embedding: Vec<f32>,
}

impl Song {
    pub fn new(name: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            embedding,
        }
    }
}

/// Immutable, ordered song table
///
/// Row order is the order of the source file and is the order the clustering
/// model's labels refer to.
#[derive(Debug, Clone)]
pub struct SongTable {
    songs: Vec<Song>,
    /// Song name -> row index
    index: HashMap<String, usize>,
    /// Names of the embedding columns, in coordinate order
    embedding_columns: Vec<String>,
}

impl SongTable {
    /// Build a table from rows, rejecting duplicate names and ragged embeddings
    pub fn new(songs: Vec<Song>, embedding_columns: Vec<String>) -> Result<Self> {
        let dim = embedding_columns.len();
        let mut index = HashMap::with_capacity(songs.len());

        for (row, song) in songs.iter().enumerate() {
            if song.embedding.len() != dim {
                return Err(SonglabError::DimensionMismatch {
                    expected: dim,
                    found: song.embedding.len(),
                });
            }
            if index.insert(song.name.clone(), row).is_some() {
                return Err(SonglabError::DuplicateSong(song.name.clone()));
            }
        }

        Ok(Self {
            songs,
            index,
            embedding_columns,
        })
    }

    /// Build a table with generated column names (`PC1`, `PC2`, ...)
    pub fn from_songs(songs: Vec<Song>) -> Result<Self> {
        let dim = songs.first().map(|s| s.embedding.len()).unwrap_or(0);
        let columns = (1..=dim).map(|i| format!("PC{}", i)).collect();
        Self::new(songs, columns)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Embedding dimensionality
    pub fn dim(&self) -> usize {
        self.embedding_columns.len()
    }

    pub fn embedding_columns(&self) -> &[String] {
        &self.embedding_columns
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn get(&self, row: usize) -> Option<&Song> {
        self.songs.get(row)
    }

    /// Row index of a song, if present
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Song names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.songs.iter().map(|s| s.name.as_str())
    }
}
