use serde::{Deserialize, Serialize};

/// Number of closest candidates the final pick is drawn from
pub const DEFAULT_TOP_K: usize = 5;

/// Where the cluster of each history song comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InferenceMode {
    /// Label stored in the model for the song's table row
    #[default]
    Labels,
    /// Nearest centroid to the song's embedding
    Predict,
}

/// An unheard song in the favorite cluster, with its distance to the centroid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Row in the song table
    pub row: usize,
    pub song: String,
    pub distance: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub song: String,
    pub cluster: usize,
    pub distance: f32,
    /// Zero-based position of the pick within the shortlist
    pub rank: usize,
    /// The closest candidates the pick was drawn from, nearest first
    pub shortlist: Vec<Candidate>,
}

/// Result of one recommendation run
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Recommended(Recommendation),
    /// Nothing in the history matched the song table
    EmptyHistory,
    /// Every song in the favorite cluster is already in the history
    NoCandidates { cluster: usize },
}

impl Outcome {
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Outcome::Recommended(rec) => Some(rec),
            _ => None,
        }
    }
}
