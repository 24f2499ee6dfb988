// Public API exports
pub mod assets;
pub mod catalog;
pub mod clusterer;
pub mod cohort;
pub mod config;
pub mod error;
pub mod history;
pub mod recommender;

// Re-export main types for convenience
pub use assets::Assets;
pub use catalog::{Song, SongTable};
pub use clusterer::{Cluster, ClusterModel};
pub use cohort::{Cohort, CohortPresets};
pub use config::Config;
pub use error::{Result, SonglabError};
pub use history::{History, build_history};
pub use recommender::{Candidate, InferenceMode, Outcome, Recommendation, Recommender};
