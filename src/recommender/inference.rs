use super::types::InferenceMode;
use crate::catalog::SongTable;
use crate::clusterer::ClusterModel;
use crate::error::Result;
use crate::history::History;
use tracing::debug;

/// Cluster label of every history song found in the table, in table order
///
/// Songs missing from the table are skipped.
pub fn history_labels(
    history: &History,
    table: &SongTable,
    model: &ClusterModel,
    mode: InferenceMode,
) -> Result<Vec<usize>> {
    let mut labels = Vec::with_capacity(history.len());

    for (row, song) in table.songs().iter().enumerate() {
        if !history.contains(&song.name) {
            continue;
        }
        let label = match mode {
            InferenceMode::Labels => match model.label(row) {
                Some(label) => label,
                None => continue,
            },
            InferenceMode::Predict => model.predict_one(&song.embedding)?,
        };
        labels.push(label);
    }

    Ok(labels)
}

/// Most frequent label
///
/// Ties go to the label that occurs first in `labels`. Returns `None` for an
/// empty slice.
pub fn majority_label(labels: &[usize]) -> Option<usize> {
    // (label, count) in first-occurrence order
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for &label in labels {
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut best: Option<(usize, usize)> = None;
    for (label, count) in counts {
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}

/// The user's dominant cluster, or `None` when no history song is in the table
pub fn infer_favorite_cluster(
    history: &History,
    table: &SongTable,
    model: &ClusterModel,
    mode: InferenceMode,
) -> Result<Option<usize>> {
    let labels = history_labels(history, table, model, mode)?;
    let favorite = majority_label(&labels);

    debug!(
        history = history.len(),
        matched = labels.len(),
        favorite = ?favorite,
        "inferred favorite cluster"
    );
    Ok(favorite)
}
