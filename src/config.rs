use crate::catalog::DEFAULT_EMBEDDING_PREFIX;
use crate::recommender::{DEFAULT_TOP_K, InferenceMode};
use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "kmeans_model.json";
pub const DEFAULT_TABLE_PATH: &str = "data/music_pca_data.csv";

/// Where the assets live and how recommendations are drawn
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Clustering model artifact (JSON with cluster_centers and labels)
    #[arg(long = "model", env = "SONGLAB_MODEL", default_value = DEFAULT_MODEL_PATH, global = true)]
    pub model_path: PathBuf,

    /// Song table (CSV with a `song` column and embedding columns)
    #[arg(long = "table", env = "SONGLAB_TABLE", default_value = DEFAULT_TABLE_PATH, global = true)]
    pub table_path: PathBuf,

    /// Header prefix of the embedding coordinate columns
    #[arg(long, env = "SONGLAB_EMBEDDING_PREFIX", default_value = DEFAULT_EMBEDDING_PREFIX, global = true)]
    pub embedding_prefix: String,

    /// Number of closest candidates to pick from
    #[arg(
        long,
        env = "SONGLAB_TOP_K",
        default_value_t = DEFAULT_TOP_K,
        value_parser = parse_top_k,
        global = true
    )]
    pub top_k: usize,

    /// How the cluster of each history song is determined
    #[arg(long, value_enum, default_value_t = InferenceMode::Labels, global = true)]
    pub inference: InferenceMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            embedding_prefix: DEFAULT_EMBEDDING_PREFIX.to_string(),
            top_k: DEFAULT_TOP_K,
            inference: InferenceMode::default(),
        }
    }
}

fn parse_top_k(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("top-k must be at least 1".to_string()),
        Ok(k) => Ok(k),
        Err(e) => Err(e.to_string()),
    }
}
