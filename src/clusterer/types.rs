use super::centroid::compute_centroid;
use super::distance::euclidean_distance;
use crate::catalog::SongTable;

/// One cluster of the loaded model, resolved against the song table
#[derive(Debug, Clone)]
pub struct Cluster {
    pub id: usize,
    /// Row indices of the member songs, in table order
    pub song_rows: Vec<usize>,
    pub centroid: Vec<f32>,
}

impl Cluster {
    pub fn size(&self) -> usize {
        self.song_rows.len()
    }

    /// Mean embedding of the member songs
    pub fn member_mean(&self, table: &SongTable) -> Option<Vec<f32>> {
        let members: Vec<&[f32]> = self
            .song_rows
            .iter()
            .filter_map(|&row| table.get(row))
            .map(|s| &s.embedding[..])
            .collect();

        compute_centroid(&members)
    }

    /// Distance between the stored centroid and the mean of the members
    ///
    /// Close to zero for a model fitted on this exact table.
    pub fn drift(&self, table: &SongTable) -> Option<f32> {
        self.member_mean(table)
            .map(|mean| euclidean_distance(&mean, &self.centroid))
    }
}
