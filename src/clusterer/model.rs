use super::distance::squared_euclidean;
use super::types::Cluster;
use crate::catalog::SongTable;
use crate::error::{Result, SonglabError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// On-disk shape of the model artifact
#[derive(Deserialize)]
struct RawModel {
    #[serde(alias = "cluster_centers_")]
    cluster_centers: Vec<Vec<f32>>,
    #[serde(alias = "labels_")]
    labels: Vec<usize>,
}

/// A pre-fitted centroid clustering
///
/// Holds one centroid per cluster (indexed by label) and the label already
/// assigned to every row of the table the model was fitted on.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterModel {
    cluster_centers: Vec<Vec<f32>>,
    labels: Vec<usize>,
}

impl ClusterModel {
    /// Build a model, checking centroid dimensions and label ranges
    pub fn new(cluster_centers: Vec<Vec<f32>>, labels: Vec<usize>) -> Result<Self> {
        let dim = cluster_centers
            .first()
            .map(|c| c.len())
            .ok_or(SonglabError::EmptyModel)?;

        if let Some(bad) = cluster_centers.iter().find(|c| c.len() != dim) {
            return Err(SonglabError::DimensionMismatch {
                expected: dim,
                found: bad.len(),
            });
        }

        let n_clusters = cluster_centers.len();
        if let Some(&label) = labels.iter().find(|&&l| l >= n_clusters) {
            return Err(SonglabError::LabelOutOfRange { label, n_clusters });
        }

        Ok(Self {
            cluster_centers,
            labels,
        })
    }

    /// Load a model from a JSON artifact
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SonglabError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let model = Self::from_json_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            clusters = model.n_clusters(),
            labels = model.labels.len(),
            "loaded clustering model"
        );
        Ok(model)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawModel = serde_json::from_reader(reader)?;
        Self::new(raw.cluster_centers, raw.labels)
    }

    pub fn n_clusters(&self) -> usize {
        self.cluster_centers.len()
    }

    pub fn dim(&self) -> usize {
        self.cluster_centers[0].len()
    }

    pub fn cluster_centers(&self) -> &[Vec<f32>] {
        &self.cluster_centers
    }

    /// Labels in table order
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn centroid(&self, cluster: usize) -> Option<&[f32]> {
        self.cluster_centers.get(cluster).map(|c| &c[..])
    }

    /// Label assigned to a table row
    pub fn label(&self, row: usize) -> Option<usize> {
        self.labels.get(row).copied()
    }

    /// Nearest centroid for a single embedding; lowest label wins ties
    pub fn predict_one(&self, embedding: &[f32]) -> Result<usize> {
        if embedding.len() != self.dim() {
            return Err(SonglabError::DimensionMismatch {
                expected: self.dim(),
                found: embedding.len(),
            });
        }

        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (label, center) in self.cluster_centers.iter().enumerate() {
            let d = squared_euclidean(embedding, center);
            if d < best_dist {
                best_dist = d;
                best = label;
            }
        }
        Ok(best)
    }

    /// Map a batch of embeddings to cluster labels
    pub fn predict(&self, embeddings: &[Vec<f32>]) -> Result<Vec<usize>> {
        embeddings.iter().map(|e| self.predict_one(e)).collect()
    }

    /// Check that this model describes `table`: one label per row, same dimension
    pub fn validate_against(&self, table: &SongTable) -> Result<()> {
        if self.labels.len() != table.len() {
            return Err(SonglabError::LabelCountMismatch {
                labels: self.labels.len(),
                rows: table.len(),
            });
        }
        if self.dim() != table.dim() {
            return Err(SonglabError::DimensionMismatch {
                expected: self.dim(),
                found: table.dim(),
            });
        }
        Ok(())
    }

    /// Group table rows by label
    pub fn clusters(&self) -> Vec<Cluster> {
        let mut clusters: Vec<Cluster> = self
            .cluster_centers
            .iter()
            .enumerate()
            .map(|(id, centroid)| Cluster {
                id,
                song_rows: Vec::new(),
                centroid: centroid.clone(),
            })
            .collect();

        for (row, &label) in self.labels.iter().enumerate() {
            clusters[label].song_rows.push(row);
        }

        clusters
    }
}
