//! Loaded song table and clustering model.
//!
//! Assets are read once and kept for the life of the process. Later calls to
//! [`cached`] return the same instance, whatever paths they are given.

#[cfg(test)]
mod tests;

use crate::catalog::SongTable;
use crate::clusterer::ClusterModel;
use crate::config::Config;
use crate::error::Result;
use crate::recommender::Recommender;
use std::sync::OnceLock;
use tracing::{debug, info};

static ASSETS: OnceLock<Assets> = OnceLock::new();

/// The song table together with the model fitted on it
#[derive(Debug, Clone)]
pub struct Assets {
    pub table: SongTable,
    pub model: ClusterModel,
}

impl Assets {
    /// Pair a table with a model, checking that the model describes the table
    pub fn new(table: SongTable, model: ClusterModel) -> Result<Self> {
        model.validate_against(&table)?;
        Ok(Self { table, model })
    }

    /// Read both assets from disk
    pub fn load(config: &Config) -> Result<Self> {
        let model = ClusterModel::from_json_path(&config.model_path)?;
        let table = SongTable::from_csv_path(&config.table_path, &config.embedding_prefix)?;
        let assets = Self::new(table, model)?;

        info!(
            songs = assets.table.len(),
            clusters = assets.model.n_clusters(),
            "assets ready"
        );
        Ok(assets)
    }

    /// Recommender over these assets, configured from `config`
    pub fn recommender(&self, config: &Config) -> Recommender<'_> {
        Recommender::new(&self.table, &self.model)
            .with_top_k(config.top_k)
            .with_mode(config.inference)
    }
}

/// Process-wide assets, loaded on first use
pub fn cached(config: &Config) -> Result<&'static Assets> {
    if let Some(assets) = ASSETS.get() {
        debug!("reusing cached assets");
        return Ok(assets);
    }

    let assets = Assets::load(config)?;
    Ok(ASSETS.get_or_init(|| assets))
}
