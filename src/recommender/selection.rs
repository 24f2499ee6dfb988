use super::types::Candidate;
use crate::catalog::SongTable;
use crate::clusterer::{ClusterModel, euclidean_distance};
use crate::history::History;
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Ordering;

/// Table rows in `cluster` whose song is not in the history
pub fn select_candidates(
    cluster: usize,
    history: &History,
    table: &SongTable,
    model: &ClusterModel,
) -> Vec<usize> {
    model
        .labels()
        .iter()
        .enumerate()
        .filter(|&(_, &label)| label == cluster)
        .filter_map(|(row, _)| table.get(row).map(|song| (row, song)))
        .filter(|(_, song)| !history.contains(&song.name))
        .map(|(row, _)| row)
        .collect()
}

/// Candidates sorted by distance to `centroid`, nearest first
///
/// The sort is stable so equal distances keep table order. NaN distances sort last.
pub fn rank_candidates(rows: &[usize], table: &SongTable, centroid: &[f32]) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = rows
        .iter()
        .filter_map(|&row| table.get(row).map(|song| (row, song)))
        .map(|(row, song)| Candidate {
            row,
            song: song.name.clone(),
            distance: euclidean_distance(&song.embedding, centroid),
        })
        .collect();

    ranked.sort_by(|a, b| compare_distance(a.distance, b.distance));
    ranked
}

fn compare_distance(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Uniform pick among the first `k` ranked candidates
///
/// Returns the index of the pick within `ranked`.
pub fn pick_top_k<R: Rng + ?Sized>(ranked: &[Candidate], k: usize, rng: &mut R) -> Option<usize> {
    let top = ranked.len().min(k);
    let indices: Vec<usize> = (0..top).collect();
    indices.choose(rng).copied()
}
