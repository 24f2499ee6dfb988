mod centroid;
mod distance;
mod model;
mod types;

#[cfg(test)]
mod tests;

pub use distance::{euclidean_distance, norm, squared_euclidean};
pub use model::ClusterModel;
pub use types::Cluster;
