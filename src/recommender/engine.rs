use super::inference::infer_favorite_cluster;
use super::selection::{pick_top_k, rank_candidates, select_candidates};
use super::types::{DEFAULT_TOP_K, InferenceMode, Outcome, Recommendation};
use crate::catalog::SongTable;
use crate::clusterer::ClusterModel;
use crate::error::{Result, SonglabError};
use crate::history::History;
use rand::Rng;
use tracing::{debug, info};

/// Recommends an unheard song close to the centroid of the user's dominant cluster
///
/// Borrows the loaded table and model; every call is a pure function of the
/// history plus one draw from the supplied generator.
pub struct Recommender<'a> {
    table: &'a SongTable,
    model: &'a ClusterModel,
    top_k: usize,
    mode: InferenceMode,
}

impl<'a> Recommender<'a> {
    pub fn new(table: &'a SongTable, model: &'a ClusterModel) -> Self {
        Self {
            table,
            model,
            top_k: DEFAULT_TOP_K,
            mode: InferenceMode::default(),
        }
    }

    /// Size of the shortlist the pick is drawn from (at least 1)
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    pub fn with_mode(mut self, mode: InferenceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn mode(&self) -> InferenceMode {
        self.mode
    }

    pub fn recommend<R: Rng + ?Sized>(&self, history: &History, rng: &mut R) -> Result<Outcome> {
        if history.is_empty() {
            return Ok(Outcome::EmptyHistory);
        }

        let Some(cluster) = infer_favorite_cluster(history, self.table, self.model, self.mode)?
        else {
            debug!("no history song found in the table");
            return Ok(Outcome::EmptyHistory);
        };

        let rows = select_candidates(cluster, history, self.table, self.model);
        if rows.is_empty() {
            info!(cluster, "no unheard songs left in favorite cluster");
            return Ok(Outcome::NoCandidates { cluster });
        }

        let centroid = self
            .model
            .centroid(cluster)
            .ok_or(SonglabError::LabelOutOfRange {
                label: cluster,
                n_clusters: self.model.n_clusters(),
            })?;

        let mut ranked = rank_candidates(&rows, self.table, centroid);
        ranked.truncate(self.top_k);

        let Some(rank) = pick_top_k(&ranked, self.top_k, rng) else {
            return Ok(Outcome::NoCandidates { cluster });
        };
        let chosen = ranked[rank].clone();

        info!(
            cluster,
            candidates = rows.len(),
            song = %chosen.song,
            rank,
            "recommended song"
        );

        Ok(Outcome::Recommended(Recommendation {
            song: chosen.song,
            cluster,
            distance: chosen.distance,
            rank,
            shortlist: ranked,
        }))
    }
}
