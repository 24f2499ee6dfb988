mod engine;
mod inference;
mod selection;
mod types;


pub use engine::Recommender;
pub use inference::{history_labels, infer_favorite_cluster, majority_label};
pub use selection::{pick_top_k, rank_candidates, select_candidates};
pub use types::{Candidate, DEFAULT_TOP_K, InferenceMode, Outcome, Recommendation};
